#![forbid(unsafe_code)]

//! Element tree nodes.

use cardwall_style::{ClassList, ClassName};

/// One node of the rendered tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with a tag, classes, and children.
    Element(Element),
    /// A run of text.
    Text(String),
}

impl Node {
    /// Convenience text node constructor.
    #[must_use]
    pub fn text(content: impl Into<String>) -> Self {
        Node::Text(content.into())
    }

    /// The element behind this node, if it is one.
    #[must_use]
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Node::Element(el) => Some(el),
            Node::Text(_) => None,
        }
    }

    /// Serialize this node (and its subtree) to markup.
    #[must_use]
    pub fn to_markup(&self) -> String {
        let mut out = String::new();
        crate::markup::write_markup(self, &mut out);
        out
    }
}

impl From<Element> for Node {
    fn from(el: Element) -> Self {
        Node::Element(el)
    }
}

/// An element: tag name, class list, optional identity key, children.
///
/// Built with chained methods the way widgets are configured elsewhere in
/// the workspace; an element is immutable once it lands in a tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: &'static str,
    key: Option<String>,
    classes: ClassList,
    children: Vec<Node>,
}

impl Element {
    /// Create an element with the given tag.
    #[must_use]
    pub fn new(tag: &'static str) -> Self {
        Self {
            tag,
            key: None,
            classes: ClassList::new(),
            children: Vec::new(),
        }
    }

    /// Append one class token.
    #[must_use]
    pub fn class(mut self, class: ClassName) -> Self {
        self.classes.push(class);
        self
    }

    /// Replace the class list wholesale.
    #[must_use]
    pub fn classes(mut self, classes: ClassList) -> Self {
        self.classes = classes;
        self
    }

    /// Attach a stable identity key, serialized as `data-key`.
    ///
    /// The list renderer keys cards by title so re-renders can match
    /// cards up across passes.
    #[must_use]
    pub fn key(mut self, key: impl Into<String>) -> Self {
        self.key = Some(key.into());
        self
    }

    /// Append one child node.
    #[must_use]
    pub fn child(mut self, child: impl Into<Node>) -> Self {
        self.children.push(child.into());
        self
    }

    /// Append many child nodes.
    #[must_use]
    pub fn children(mut self, children: impl IntoIterator<Item = Node>) -> Self {
        self.children.extend(children);
        self
    }

    /// Append a text child.
    #[must_use]
    pub fn text(self, content: impl Into<String>) -> Self {
        self.child(Node::text(content))
    }

    /// The tag name.
    #[inline]
    #[must_use]
    pub fn tag(&self) -> &'static str {
        self.tag
    }

    /// The identity key, if any.
    #[must_use]
    pub fn key_ref(&self) -> Option<&str> {
        self.key.as_deref()
    }

    /// The class list.
    #[must_use]
    pub fn class_list(&self) -> &ClassList {
        &self.classes
    }

    /// The children in document order.
    #[must_use]
    pub fn child_nodes(&self) -> &[Node] {
        &self.children
    }

    /// Depth-first iterator over this element and every descendant
    /// element. Handy for asserting on rendered trees.
    pub fn descendants(&self) -> impl Iterator<Item = &Element> {
        let mut stack = vec![self];
        std::iter::from_fn(move || {
            let el = stack.pop()?;
            for child in el.children.iter().rev() {
                if let Node::Element(inner) = child {
                    stack.push(inner);
                }
            }
            Some(el)
        })
    }

    /// Concatenated text content of this subtree.
    #[must_use]
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        fn collect(node: &Node, out: &mut String) {
            match node {
                Node::Text(t) => out.push_str(t),
                Node::Element(el) => {
                    for child in &el.children {
                        collect(child, out);
                    }
                }
            }
        }
        for child in &self.children {
            collect(child, &mut out);
        }
        out
    }
}
