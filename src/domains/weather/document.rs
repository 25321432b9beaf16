//! Read-only views over weakly-typed weather documents.
//!
//! Upstream weather APIs return JSON whose shape is not guaranteed. Instead of
//! indexing `serde_json::Value` directly, callers go through [`Node`], which
//! forces every step to say what happens when the node is not the expected
//! kind. A missing key, a wrong type and an explicit `null` all collapse to
//! [`Node::Null`], so chained lookups never fail.

use serde_json::{Map, Value};

/// A borrowed view of one node in a weather document.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Node<'a> {
    /// A JSON object.
    Map(&'a Map<String, Value>),
    /// A JSON array.
    Sequence(&'a [Value]),
    /// A string, number or boolean.
    Scalar(&'a Value),
    /// `null`, or a node that does not exist.
    Null,
}

impl<'a> From<&'a Value> for Node<'a> {
    fn from(value: &'a Value) -> Self {
        match value {
            Value::Object(map) => Node::Map(map),
            Value::Array(items) => Node::Sequence(items),
            Value::Null => Node::Null,
            scalar => Node::Scalar(scalar),
        }
    }
}

impl<'a> From<Option<&'a Value>> for Node<'a> {
    fn from(value: Option<&'a Value>) -> Self {
        value.map_or(Node::Null, Node::from)
    }
}

impl<'a> Node<'a> {
    /// Look up `key` if this node is a map.
    pub fn field(self, key: &str) -> Node<'a> {
        match self {
            Node::Map(map) => Node::from(map.get(key)),
            Node::Sequence(_) | Node::Scalar(_) | Node::Null => Node::Null,
        }
    }

    /// Follow a path of map keys.
    pub fn path(self, keys: &[&str]) -> Node<'a> {
        keys.iter().fold(self, |node, key| node.field(key))
    }

    /// Whether this node is a map that has `key`, whatever its value.
    pub fn has_field(self, key: &str) -> bool {
        match self {
            Node::Map(map) => map.contains_key(key),
            Node::Sequence(_) | Node::Scalar(_) | Node::Null => false,
        }
    }

    /// The elements of a sequence; empty for every other kind.
    pub fn items(self) -> &'a [Value] {
        match self {
            Node::Sequence(items) => items,
            Node::Map(_) | Node::Scalar(_) | Node::Null => &[],
        }
    }

    /// Iterate the elements of a sequence as nodes.
    pub fn elements(self) -> impl Iterator<Item = Node<'a>> {
        self.items().iter().map(Node::from)
    }

    /// The first element of a sequence.
    pub fn first(self) -> Node<'a> {
        Node::from(self.items().first())
    }

    pub fn is_map(self) -> bool {
        matches!(self, Node::Map(_))
    }

    pub fn as_str(self) -> Option<&'a str> {
        match self {
            Node::Scalar(Value::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Render a scalar as display text.
    ///
    /// Strings are returned verbatim, numbers and booleans in their JSON form.
    pub fn text(self) -> Option<String> {
        match self {
            Node::Scalar(Value::String(s)) => Some(s.clone()),
            Node::Scalar(other) => Some(other.to_string()),
            Node::Map(_) | Node::Sequence(_) | Node::Null => None,
        }
    }

    /// Render a scalar field, substituting `sentinel` when it is absent.
    pub fn text_or(self, key: &str, sentinel: &str) -> String {
        self.field(key).text().unwrap_or_else(|| sentinel.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_field_on_non_map_is_null() {
        let doc = json!([1, 2, 3]);
        assert_eq!(Node::from(&doc).field("anything"), Node::Null);

        let doc = json!("text");
        assert_eq!(Node::from(&doc).field("anything"), Node::Null);
    }

    #[test]
    fn test_path_through_missing_levels() {
        let doc = json!({"properties": {"forecast": "https://example.test/f"}});
        let node = Node::from(&doc);

        assert_eq!(
            node.path(&["properties", "forecast"]).as_str(),
            Some("https://example.test/f")
        );
        assert_eq!(node.path(&["properties", "periods", "0"]), Node::Null);
        assert_eq!(node.path(&["nope", "forecast"]), Node::Null);
    }

    #[test]
    fn test_items_of_wrong_kind_is_empty() {
        let doc = json!({"areas": {"not": "a list"}});
        assert!(Node::from(&doc).field("areas").items().is_empty());
        assert_eq!(Node::from(&doc).field("areas").first(), Node::Null);
    }

    #[test]
    fn test_text_renders_scalars() {
        let doc = json!({"s": "hi", "n": 72, "f": 1.5, "b": true, "null": null, "m": {}});
        let node = Node::from(&doc);

        assert_eq!(node.field("s").text().as_deref(), Some("hi"));
        assert_eq!(node.field("n").text().as_deref(), Some("72"));
        assert_eq!(node.field("f").text().as_deref(), Some("1.5"));
        assert_eq!(node.field("b").text().as_deref(), Some("true"));
        assert_eq!(node.field("null").text(), None);
        assert_eq!(node.field("m").text(), None);
        assert_eq!(node.text_or("missing", "Unknown"), "Unknown");
        assert_eq!(node.text_or("null", "Unknown"), "Unknown");
    }

    #[test]
    fn test_has_field_ignores_value() {
        let doc = json!({"features": null});
        assert!(Node::from(&doc).has_field("features"));
        assert!(!Node::from(&doc).has_field("other"));
    }
}
