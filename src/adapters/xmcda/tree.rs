//! Tag-name traversal helpers over a parsed XML tree.
//!
//! Elements are matched by local name at any depth below the starting node, so
//! documents with or without the `xmcda:` prefix and wrapper elements are read
//! the same way.

use roxmltree::Node;

/// All element descendants of `node` (excluding `node` itself) with local name `name`.
pub fn descendants<'a, 'input>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> impl Iterator<Item = Node<'a, 'input>> {
    node.descendants()
        .skip(1)
        .filter(move |n| n.is_element() && n.tag_name().name() == name)
}

/// The first element descendant of `node` with local name `name`.
pub fn first_descendant<'a, 'input>(
    node: Node<'a, 'input>,
    name: &'static str,
) -> Option<Node<'a, 'input>> {
    descendants(node, name).next()
}

/// Trimmed, non-empty text of the first descendant named `name`.
pub fn descendant_text<'a>(node: Node<'a, '_>, name: &'static str) -> Option<&'a str> {
    first_descendant(node, name)
        .and_then(|n| n.text())
        .map(str::trim)
        .filter(|t| !t.is_empty())
}
