#![forbid(unsafe_code)]

//! Markup serialization.
//!
//! Serializes a [`Node`] tree to markup text. Output is deterministic:
//! attributes come in a fixed order (`class`, then `data-key`), children
//! in document order, and every element gets an explicit close tag.
//!
//! Escaping: text content escapes `&`, `<`, `>`; attribute values escape
//! `&`, `<`, `"`.

use crate::node::{Element, Node};

/// Serialize a node tree into `out`.
pub fn write_markup(node: &Node, out: &mut String) {
    match node {
        Node::Text(text) => escape_text(text, out),
        Node::Element(el) => write_element(el, out),
    }
}

fn write_element(el: &Element, out: &mut String) {
    out.push('<');
    out.push_str(el.tag());

    let classes = el.class_list();
    if !classes.is_empty() {
        out.push_str(" class=\"");
        escape_attr(&classes.attr(), out);
        out.push('"');
    }
    if let Some(key) = el.key_ref() {
        out.push_str(" data-key=\"");
        escape_attr(key, out);
        out.push('"');
    }
    out.push('>');

    for child in el.child_nodes() {
        write_markup(child, out);
    }

    out.push_str("</");
    out.push_str(el.tag());
    out.push('>');
}

fn escape_text(text: &str, out: &mut String) {
    for ch in text.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(ch),
        }
    }
}

fn escape_attr(value: &str, out: &mut String) {
    for ch in value.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(ch),
        }
    }
}
