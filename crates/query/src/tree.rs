use std::collections::BTreeMap;

/// Prefix trie over path segments. Children are ordered by segment name so
/// serialization is deterministic.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryTree {
    children: BTreeMap<String, QueryTree>,
}

impl QueryTree {
    /// Inserts one path, creating segment nodes on demand. Segments shared
    /// with previously inserted paths reuse the existing nodes.
    pub fn insert_path(&mut self, segments: &[String]) {
        let mut node = self;
        for segment in segments {
            node = node.children.entry(segment.clone()).or_default();
        }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    /// Renders the trie depth-first as a nested field selection: a leaf is
    /// its segment name, an inner node is `name { children… }`, and the
    /// root's children are wrapped in one outer brace pair. An empty tree
    /// renders as the empty string.
    #[must_use]
    pub fn serialize(&self) -> String {
        if self.is_empty() {
            return String::new();
        }
        let mut out = String::new();
        self.write(&mut out);
        out
    }

    fn write(&self, out: &mut String) {
        out.push_str("{ ");
        let mut first = true;
        for (name, child) in &self.children {
            if !first {
                out.push(' ');
            }
            first = false;
            out.push_str(name);
            if !child.is_empty() {
                out.push(' ');
                child.write(out);
            }
        }
        out.push_str(" }");
    }
}
