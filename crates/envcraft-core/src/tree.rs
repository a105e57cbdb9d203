//! Tagged document tree consumed by every extractor.
//!
//! The XML boundary ([`crate::xml`]) produces this shape: attributes surface
//! as scalars under their element path, repeated child elements surface as a
//! [`Node::List`]. Absence is always `None` from [`get`], never a sentinel
//! value, so "field not present" stays distinct from "field malformed".

use std::collections::BTreeMap;

/// A scalar leaf: attribute values after type coercion.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Text(String),
    Number(f64),
    Bool(bool),
}

/// One node of a parsed configuration document.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Scalar(Scalar),
    Attrs(BTreeMap<String, Node>),
    List(Vec<Node>),
}

impl Node {
    pub fn text(value: &str) -> Node {
        Node::Scalar(Scalar::Text(value.to_string()))
    }

    pub fn number(value: f64) -> Node {
        Node::Scalar(Scalar::Number(value))
    }

    pub fn boolean(value: bool) -> Node {
        Node::Scalar(Scalar::Bool(value))
    }

    pub fn attrs<'a, I>(entries: I) -> Node
    where
        I: IntoIterator<Item = (&'a str, Node)>,
    {
        Node::Attrs(
            entries
                .into_iter()
                .map(|(k, v)| (k.to_string(), v))
                .collect(),
        )
    }

    pub fn list(items: Vec<Node>) -> Node {
        Node::List(items)
    }

    /// Numeric view of a scalar. Numeric-looking text counts: the source
    /// documents are hand-edited and attribute quoting varies.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Node::Scalar(Scalar::Number(v)) => Some(*v),
            Node::Scalar(Scalar::Text(s)) => s.trim().parse().ok(),
            _ => None,
        }
    }

    /// Boolean view. Only a genuine boolean scalar passes; anything else is
    /// treated as absent by the boolean extractor.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Scalar(Scalar::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Node::Scalar(Scalar::Text(s)) => Some(s),
            _ => None,
        }
    }

    /// List view used by entry-shaped fields (override prototypes, seasons).
    /// A single attribute node is coerced to a one-element list, matching
    /// documents that carry exactly one entry without a wrapper list.
    pub fn entries(&self) -> Vec<&Node> {
        match self {
            Node::List(items) => items.iter().collect(),
            Node::Attrs(_) => vec![self],
            Node::Scalar(_) => Vec::new(),
        }
    }
}

/// Dot-path lookup. Attribute maps descend by key; lists descend by numeric
/// index. Any missing step yields `None`.
pub fn get<'a>(node: &'a Node, path: &str) -> Option<&'a Node> {
    let mut current = node;
    for segment in path.split('.') {
        current = match current {
            Node::Attrs(map) => map.get(segment)?,
            Node::List(items) => items.get(segment.parse::<usize>().ok()?)?,
            Node::Scalar(_) => return None,
        };
    }
    Some(current)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Node {
        Node::attrs([(
            "environment",
            Node::attrs([
                ("resource_factor", Node::attrs([("value", Node::number(1.5))])),
                (
                    "seasons",
                    Node::attrs([(
                        "season",
                        Node::list(vec![
                            Node::attrs([("id", Node::text("Spring"))]),
                            Node::attrs([("id", Node::text("Summer"))]),
                        ]),
                    )]),
                ),
            ]),
        )])
    }

    #[test]
    fn get_descends_nested_attrs() {
        let tree = sample();
        let value = get(&tree, "environment.resource_factor.value").unwrap();
        assert_eq!(value.as_number(), Some(1.5));
    }

    #[test]
    fn get_missing_path_is_none() {
        let tree = sample();
        assert!(get(&tree, "environment.nonexistent.value").is_none());
        assert!(get(&tree, "savegame").is_none());
    }

    #[test]
    fn get_indexes_into_lists() {
        let tree = sample();
        let second = get(&tree, "environment.seasons.season.1.id").unwrap();
        assert_eq!(second.as_text(), Some("Summer"));
    }

    #[test]
    fn get_non_numeric_segment_on_list_is_none() {
        let tree = sample();
        assert!(get(&tree, "environment.seasons.season.id").is_none());
    }

    #[test]
    fn get_does_not_descend_past_scalar() {
        let tree = sample();
        assert!(get(&tree, "environment.resource_factor.value.deeper").is_none());
    }

    #[test]
    fn as_number_parses_numeric_text() {
        assert_eq!(Node::text("2.25").as_number(), Some(2.25));
        assert_eq!(Node::text(" 3 ").as_number(), Some(3.0));
        assert_eq!(Node::text("Oak").as_number(), None);
        assert_eq!(Node::text("1 2 3").as_number(), None);
    }

    #[test]
    fn as_bool_rejects_non_boolean_scalars() {
        assert_eq!(Node::boolean(true).as_bool(), Some(true));
        assert_eq!(Node::text("true").as_bool(), None);
        assert_eq!(Node::number(1.0).as_bool(), None);
    }

    #[test]
    fn entries_coerces_single_object_to_one_element_list() {
        let single = Node::attrs([("id", Node::text("Oak"))]);
        assert_eq!(single.entries().len(), 1);

        let list = Node::list(vec![
            Node::attrs([("id", Node::text("Oak"))]),
            Node::attrs([("id", Node::text("Pine"))]),
        ]);
        assert_eq!(list.entries().len(), 2);

        assert!(Node::text("Oak").entries().is_empty());
    }
}
