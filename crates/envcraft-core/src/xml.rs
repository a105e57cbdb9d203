//! XML boundary adapter.
//!
//! Turns configuration document text into the [`Node`] tree the pipeline
//! consumes. The underlying DOM work is `roxmltree`; this module only decides
//! the tree shape: attributes become typed scalars keyed by attribute name,
//! child elements become nested attribute maps, and repeated child elements
//! collapse into a [`Node::List`].

use std::collections::BTreeMap;

use crate::tree::{Node, Scalar};

/// Errors from the document-text boundary.
#[derive(Debug, thiserror::Error)]
pub enum XmlError {
    #[error("XML syntax error: {0}")]
    Syntax(#[from] roxmltree::Error),
}

/// Parse document text into a tree whose top level maps the root element
/// name to its contents. A fragment such as `<resource_factor value="1" />`
/// therefore parses to a tree a field parser can consume directly.
pub fn parse_document(text: &str) -> Result<Node, XmlError> {
    let doc = roxmltree::Document::parse(text)?;
    let root = doc.root_element();
    let mut top = BTreeMap::new();
    top.insert(root.tag_name().name().to_string(), element_node(root));
    Ok(Node::Attrs(top))
}

fn element_node(el: roxmltree::Node<'_, '_>) -> Node {
    let mut map: BTreeMap<String, Node> = BTreeMap::new();

    for attr in el.attributes() {
        map.insert(attr.name().to_string(), Node::Scalar(coerce(attr.value())));
    }

    let mut children: BTreeMap<String, Vec<Node>> = BTreeMap::new();
    for child in el.children().filter(|c| c.is_element()) {
        children
            .entry(child.tag_name().name().to_string())
            .or_default()
            .push(element_node(child));
    }
    for (name, mut nodes) in children {
        let node = match nodes.pop() {
            None => continue,
            Some(only) if nodes.is_empty() => only,
            Some(last) => {
                nodes.push(last);
                Node::List(nodes)
            }
        };
        map.insert(name, node);
    }

    Node::Attrs(map)
}

/// Attribute values carry no type information in XML; coerce the common
/// cases so extractors can distinguish booleans and numbers from ids.
fn coerce(raw: &str) -> Scalar {
    match raw {
        "true" => Scalar::Bool(true),
        "false" => Scalar::Bool(false),
        _ => raw
            .parse::<f64>()
            .map(Scalar::Number)
            .unwrap_or_else(|_| Scalar::Text(raw.to_string())),
    }
}
