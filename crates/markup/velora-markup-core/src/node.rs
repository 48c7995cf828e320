//! Minimal HTML tree with escaping rendering.
//!
//! Just enough structure for the expanders and the relay's email body:
//! elements with ordered attributes and children, escaped text, and raw
//! fragments for trusted inline SVG.

use std::fmt;

/// Elements that close without a closing tag.
const VOID_TAGS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

/// One markup node.
#[derive(Clone, Debug, PartialEq)]
pub enum Node {
    Element {
        tag: String,
        attrs: Vec<(String, String)>,
        children: Vec<Node>,
    },
    /// Escaped on render.
    Text(String),
    /// Rendered verbatim; only for trusted fragments (inline SVG).
    Raw(String),
}

impl Node {
    pub fn element(tag: impl Into<String>) -> Self {
        Node::Element {
            tag: tag.into(),
            attrs: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn text(text: impl Into<String>) -> Self {
        Node::Text(text.into())
    }

    pub fn raw(markup: impl Into<String>) -> Self {
        Node::Raw(markup.into())
    }

    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        if let Node::Element { attrs, .. } = &mut self {
            attrs.push((name.into(), value.into()));
        }
        self
    }

    pub fn class(self, value: impl Into<String>) -> Self {
        self.attr("class", value)
    }

    pub fn child(mut self, node: Node) -> Self {
        if let Node::Element { children, .. } = &mut self {
            children.push(node);
        }
        self
    }

    pub fn children(mut self, nodes: impl IntoIterator<Item = Node>) -> Self {
        if let Node::Element { children, .. } = &mut self {
            children.extend(nodes);
        }
        self
    }

    /// Tag name, for elements.
    pub fn tag(&self) -> Option<&str> {
        match self {
            Node::Element { tag, .. } => Some(tag.as_str()),
            _ => None,
        }
    }

    pub fn get_attr(&self, name: &str) -> Option<&str> {
        match self {
            Node::Element { attrs, .. } => attrs
                .iter()
                .find(|(n, _)| n == name)
                .map(|(_, v)| v.as_str()),
            _ => None,
        }
    }

    /// Concatenated descendant text, the way `textContent` reads.
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        self.collect_text(&mut out);
        out
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(t),
            Node::Element { children, .. } => {
                for child in children {
                    child.collect_text(out);
                }
            }
            Node::Raw(_) => {}
        }
    }

    /// Render to a markup string.
    pub fn render(&self) -> String {
        let mut out = String::new();
        self.render_into(&mut out);
        out
    }

    fn render_into(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(&escape_text(t)),
            Node::Raw(r) => out.push_str(r),
            Node::Element {
                tag,
                attrs,
                children,
            } => {
                out.push('<');
                out.push_str(tag);
                for (name, value) in attrs {
                    out.push(' ');
                    out.push_str(name);
                    out.push_str("=\"");
                    out.push_str(&escape_attr(value));
                    out.push('"');
                }
                out.push('>');
                if VOID_TAGS.contains(&tag.as_str()) {
                    return;
                }
                for child in children {
                    child.render_into(out);
                }
                out.push_str("</");
                out.push_str(tag);
                out.push('>');
            }
        }
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

fn escape_text(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            _ => out.push(c),
        }
    }
    out
}

fn escape_attr(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_nested_elements() {
        let node = Node::element("div")
            .class("card")
            .child(Node::element("span").child(Node::text("hi")));
        assert_eq!(node.render(), r#"<div class="card"><span>hi</span></div>"#);
    }

    #[test]
    fn escapes_text_and_attrs() {
        let node = Node::element("a")
            .attr("title", r#"a "b" <c>"#)
            .child(Node::text("x < y & z"));
        assert_eq!(
            node.render(),
            r#"<a title="a &quot;b&quot; &lt;c&gt;">x &lt; y &amp; z</a>"#
        );
    }

    #[test]
    fn raw_passes_through() {
        let node = Node::element("button").child(Node::raw("<svg></svg>"));
        assert_eq!(node.render(), "<button><svg></svg></button>");
    }

    #[test]
    fn void_tags_do_not_close() {
        let node = Node::element("img").attr("src", "logo.svg");
        assert_eq!(node.render(), r#"<img src="logo.svg">"#);
    }

    #[test]
    fn text_content_concatenates() {
        let node = Node::element("p")
            .child(Node::text("a "))
            .child(Node::element("b").child(Node::text("b")));
        assert_eq!(node.text_content(), "a b");
    }
}
