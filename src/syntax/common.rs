//! Tree-sitter node helpers shared by the lowering code

use tree_sitter::Node;

use crate::javadoc::is_doc_comment;

// ============================================================================
// Text Extraction
// ============================================================================

/// Get text content of a node
pub fn get_node_text(node: &Node, source: &str) -> String {
    node.utf8_text(source.as_bytes()).unwrap_or("").to_string()
}

/// Get text content of a node with all whitespace removed
/// (`java . util . List` -> `java.util.List`)
pub fn get_node_text_compact(node: &Node, source: &str) -> String {
    get_node_text(node, source)
        .split_whitespace()
        .collect::<Vec<_>>()
        .concat()
}

/// Text of a field child
pub fn field_text(node: &Node, field: &str, source: &str) -> Option<String> {
    node.child_by_field_name(field)
        .map(|child| get_node_text(&child, source))
}

// ============================================================================
// Children
// ============================================================================

/// First direct child of the given kind
pub fn find_child<'t>(node: &Node<'t>, kind: &str) -> Option<Node<'t>> {
    let mut cursor = node.walk();
    let found = node.children(&mut cursor).find(|child| child.kind() == kind);
    found
}

/// Named direct children, comments excluded
pub fn named_children<'t>(node: &Node<'t>) -> Vec<Node<'t>> {
    let mut cursor = node.walk();
    let children = node
        .named_children(&mut cursor)
        .filter(|child| !is_comment(child))
        .collect();
    children
}

pub fn is_comment(node: &Node) -> bool {
    matches!(node.kind(), "block_comment" | "line_comment" | "comment")
}

pub fn is_annotation(node: &Node) -> bool {
    matches!(node.kind(), "annotation" | "marker_annotation")
}

// ============================================================================
// Declarations
// ============================================================================

/// The documentation comment immediately preceding a declaration.
///
/// Only the closest preceding sibling counts: a line comment or plain block
/// comment between the doc comment and the declaration detaches it.
pub fn doc_comment(node: &Node, source: &str) -> Option<String> {
    let previous = node.prev_sibling()?;
    if previous.kind() != "block_comment" {
        return None;
    }
    let text = get_node_text(&previous, source);
    is_doc_comment(&text).then_some(text)
}

/// Keyword modifiers of a declaration in declared order (annotations skipped)
pub fn modifier_keywords(node: &Node, source: &str) -> Vec<String> {
    let Some(modifiers) = find_child(node, "modifiers") else {
        return Vec::new();
    };
    let mut cursor = modifiers.walk();
    let keywords = modifiers
        .children(&mut cursor)
        .filter(|child| !is_annotation(child) && !is_comment(child))
        .map(|child| get_node_text(&child, source))
        .filter(|text| !text.is_empty())
        .collect();
    keywords
}

/// Names declared in a `type_parameters` child (`<T extends Foo, U>` -> T, U)
pub fn type_parameter_names(node: &Node, source: &str) -> Vec<String> {
    let Some(parameters) = node
        .child_by_field_name("type_parameters")
        .or_else(|| find_child(node, "type_parameters"))
    else {
        return Vec::new();
    };

    named_children(&parameters)
        .iter()
        .filter(|child| child.kind() == "type_parameter")
        .filter_map(|parameter| {
            named_children(parameter)
                .into_iter()
                .find(|child| matches!(child.kind(), "type_identifier" | "identifier"))
                .map(|name| get_node_text(&name, source))
        })
        .collect()
}
