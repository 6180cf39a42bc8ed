use crate::tree::QueryTree;
use serde_json::Value;
use std::collections::BTreeMap;

/// Symbolic name -> dotted navigation path (e.g. `"TITLE" -> "page.seo.title"`).
pub type QueryPathMap = BTreeMap<String, String>;

fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// Splits a dotted path into segments. Returns `None` for an empty path or
/// any segment that is empty or contains non-identifier characters.
fn parse_path(path: &str) -> Option<Vec<String>> {
    if path.is_empty() {
        return None;
    }
    let mut segments = Vec::new();
    for segment in path.split('.') {
        if segment.is_empty() || !segment.chars().all(is_ident_char) {
            return None;
        }
        segments.push(segment.to_string());
    }
    Some(segments)
}

/// A batched query string plus the per-name paths needed to re-flatten its
/// result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CompiledQuery {
    query: String,
    paths: Vec<(String, Vec<String>)>,
}

impl CompiledQuery {
    /// The serialized field selection, e.g. `{ page { seo { title } slug } }`.
    #[must_use]
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Walks each compiled path through the nested result and collects the
    /// string values found, keyed by symbolic name.
    ///
    /// Each path is walked independently: a missing key, a non-object
    /// intermediate, or a non-string leaf drops that one name from the
    /// output and never affects the others.
    #[must_use]
    pub fn extract(&self, data: &Value) -> BTreeMap<String, String> {
        let mut values = BTreeMap::new();
        for (name, segments) in &self.paths {
            if let Some(value) = walk(data, segments) {
                values.insert(name.clone(), value.to_string());
            }
        }
        values
    }
}

fn walk<'a>(data: &'a Value, segments: &[String]) -> Option<&'a str> {
    let mut current = data;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    current.as_str()
}

/// Merges every valid path into a shared prefix trie and serializes it into
/// one batched query. Entries with malformed paths are dropped; `None`
/// means nothing is left to query (the caller must skip the network call
/// entirely).
#[must_use]
pub fn compile(paths: &QueryPathMap) -> Option<CompiledQuery> {
    let mut tree = QueryTree::default();
    let mut retained = Vec::new();

    for (name, path) in paths {
        let Some(segments) = parse_path(path) else {
            continue;
        };
        tree.insert_path(&segments);
        retained.push((name.clone(), segments));
    }

    if retained.is_empty() {
        return None;
    }
    Some(CompiledQuery {
        query: tree.serialize(),
        paths: retained,
    })
}
