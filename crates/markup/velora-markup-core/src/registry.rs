//! Tag registry: custom tag name -> expander function.
//!
//! Expansion happens at page-assembly time: the authored tree is walked once
//! and every element whose tag is registered is replaced (not wrapped) by the
//! expander's output. Unknown tags pass through untouched.

use hashbrown::HashMap;

use crate::node::Node;

/// Untyped view of an authored custom tag: its attributes and trimmed inner
/// text. Attribute values are untyped strings.
#[derive(Clone, Debug, Default)]
pub struct TagInvocation {
    pub attrs: HashMap<String, String>,
    pub text: String,
}

impl TagInvocation {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.attrs.insert(name.into(), value.into());
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Bare boolean attribute, e.g. `<site-tag center>`.
    pub fn has_flag(&self, name: &str) -> bool {
        self.attrs.contains_key(name)
    }

    fn from_node(node: &Node) -> Self {
        let mut inv = Self::new();
        if let Node::Element { attrs, .. } = node {
            for (name, value) in attrs {
                inv.attrs.insert(name.clone(), value.clone());
            }
        }
        inv.text = node.text_content().trim().to_string();
        inv
    }
}

/// A pure expansion function for one tag name.
pub type Expander = Box<dyn Fn(&TagInvocation) -> Node + Send + Sync>;

/// Registry of custom tag names.
#[derive(Default)]
pub struct Registry {
    expanders: HashMap<String, Expander>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn register(
        &mut self,
        tag: impl Into<String>,
        expander: impl Fn(&TagInvocation) -> Node + Send + Sync + 'static,
    ) {
        self.expanders.insert(tag.into(), Box::new(expander));
    }

    pub fn is_registered(&self, tag: &str) -> bool {
        self.expanders.contains_key(tag)
    }

    /// Expand one invocation of a registered tag.
    pub fn expand(&self, tag: &str, invocation: &TagInvocation) -> Option<Node> {
        self.expanders.get(tag).map(|f| f(invocation))
    }

    /// Walk a tree, replacing every registered custom tag with its expansion.
    /// Replacement is in place: the expanded node takes the authored node's
    /// position, and the authored node's attributes/text are consumed, not
    /// preserved.
    pub fn expand_tree(&self, node: &Node) -> Node {
        if let Some(tag) = node.tag() {
            if self.is_registered(tag) {
                let invocation = TagInvocation::from_node(node);
                // Registered tags always expand; expand() cannot miss here.
                if let Some(expanded) = self.expand(tag, &invocation) {
                    return expanded;
                }
            }
        }
        match node {
            Node::Element {
                tag,
                attrs,
                children,
            } => Node::Element {
                tag: tag.clone(),
                attrs: attrs.clone(),
                children: children.iter().map(|c| self.expand_tree(c)).collect(),
            },
            other => other.clone(),
        }
    }
}

/// Visibly broken placeholder for a misauthored tag: renders as an inline
/// error instead of taking the page down.
pub(crate) fn broken(tag: &str, reason: &str) -> Node {
    log::warn!("broken component <{tag}>: {reason}");
    Node::element("div")
        .class("component-error")
        .attr("data-component", tag)
        .child(Node::text(format!("<{tag}>: {reason}")))
}
