use serde::{Deserialize, Serialize};

fn is_ident_char(ch: char) -> bool {
    ch.is_ascii_alphanumeric() || ch == '_'
}

/// A recognized token: the identifier between the delimiters, the literal
/// span it occupies (delimiters included), and its byte offset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Token {
    pub name: String,
    pub raw: String,
    pub start: usize,
}

/// One piece of a partitioned pattern, in source order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Segment {
    Literal(String),
    Token(Token),
}

impl Segment {
    /// The literal text this segment occupies in the pattern.
    #[must_use]
    pub fn raw(&self) -> &str {
        match self {
            Self::Literal(text) => text,
            Self::Token(token) => &token.raw,
        }
    }
}

/// Tries to read a complete token whose `{{` sits at byte offset `open`.
///
/// The content must be one or more identifier characters followed
/// immediately by `}}`. Anything else is not a token at this offset.
fn scan_token(template: &str, open: usize) -> Option<Token> {
    let after = &template[open + 2..];
    let mut name_len = 0;
    for ch in after.chars() {
        if !is_ident_char(ch) {
            break;
        }
        name_len += ch.len_utf8();
    }
    if name_len == 0 || !after[name_len..].starts_with("}}") {
        return None;
    }
    let end = open + 2 + name_len + 2;
    Some(Token {
        name: after[..name_len].to_string(),
        raw: template[open..end].to_string(),
        start: open,
    })
}

/// Partitions a pattern into an ordered sequence of literal and token
/// segments. Concatenating the raw text of every segment reproduces the
/// input exactly, so malformed delimiter usage (an unclosed `{{`, or
/// non-identifier content between a delimiter pair) survives as literal
/// text.
#[must_use]
pub fn split_segments(template: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut literal_start = 0;
    let mut cursor = 0;

    while let Some(found) = template[cursor..].find("{{") {
        let open = cursor + found;
        match scan_token(template, open) {
            Some(token) => {
                if open > literal_start {
                    segments.push(Segment::Literal(template[literal_start..open].to_string()));
                }
                cursor = open + token.raw.len();
                literal_start = cursor;
                segments.push(Segment::Token(token));
            }
            // Not a token at this brace; a later `{{` may still open one.
            None => cursor = open + 1,
        }
    }

    if literal_start < template.len() {
        segments.push(Segment::Literal(template[literal_start..].to_string()));
    }
    segments
}

/// Distinct token names in order of first appearance. Repeated tokens are
/// reported once.
#[must_use]
pub fn template_keys(template: &str) -> Vec<String> {
    let mut keys: Vec<String> = Vec::new();
    for segment in split_segments(template) {
        if let Segment::Token(token) = segment {
            if !keys.iter().any(|key| *key == token.name) {
                keys.push(token.name);
            }
        }
    }
    keys
}

/// Editing-boundary hint: true when the pattern has a different number of
/// `{{` and `}}` occurrences. Unbalanced delimiters are still interpolated
/// as literal text; this only exists so a configuration screen can warn
/// about a likely typo.
#[must_use]
pub fn unbalanced_delimiters(template: &str) -> bool {
    template.matches("{{").count() != template.matches("}}").count()
}
