//! The rendered visual surface: a small element tree that serializes to HTML for
//! the live preview and is walked by the exporter.

use std::fmt::Write;

use crate::models::resume::Template;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tag {
    Div,
    Header,
    Footer,
    Section,
    H1,
    H2,
    H3,
    P,
    Span,
    Ul,
    Li,
    Br,
}

impl Tag {
    pub fn name(&self) -> &'static str {
        match self {
            Tag::Div => "div",
            Tag::Header => "header",
            Tag::Footer => "footer",
            Tag::Section => "section",
            Tag::H1 => "h1",
            Tag::H2 => "h2",
            Tag::H3 => "h3",
            Tag::P => "p",
            Tag::Span => "span",
            Tag::Ul => "ul",
            Tag::Li => "li",
            Tag::Br => "br",
        }
    }

    fn is_void(&self) -> bool {
        matches!(self, Tag::Br)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub tag: Tag,
    pub class: &'static str,
    /// Extra attributes in insertion order (`id`, `data-section`, ...).
    pub attrs: Vec<(&'static str, String)>,
    pub children: Vec<Node>,
}

/// Starts a new element.
pub fn el(tag: Tag) -> Element {
    Element {
        tag,
        class: "",
        attrs: Vec::new(),
        children: Vec::new(),
    }
}

impl Element {
    pub fn class(mut self, class: &'static str) -> Self {
        self.class = class;
        self
    }

    pub fn attr(mut self, name: &'static str, value: impl Into<String>) -> Self {
        self.attrs.push((name, value.into()));
        self
    }

    /// Tags a section so it can be found again by name.
    pub fn section(self, name: &'static str) -> Self {
        self.attr("data-section", name)
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.children.push(node.into());
        self
    }

    /// Appends a child only when one is given; `None` occupies no space.
    pub fn child_opt(mut self, node: Option<impl Into<Node>>) -> Self {
        if let Some(node) = node {
            self.children.push(node.into());
        }
        self
    }

    pub fn children<I, N>(mut self, nodes: I) -> Self
    where
        I: IntoIterator<Item = N>,
        N: Into<Node>,
    {
        self.children.extend(nodes.into_iter().map(Into::into));
        self
    }

    pub fn text(self, text: impl Into<String>) -> Self {
        self.child(Node::Text(text.into()))
    }

    fn write_html(&self, out: &mut String) {
        let _ = write!(out, "<{}", self.tag.name());
        if !self.class.is_empty() {
            let _ = write!(out, " class=\"{}\"", escape_html(self.class));
        }
        for (name, value) in &self.attrs {
            let _ = write!(out, " {}=\"{}\"", name, escape_html(value));
        }
        out.push('>');
        if self.tag.is_void() {
            return;
        }
        for child in &self.children {
            child.write_html(out);
        }
        let _ = write!(out, "</{}>", self.tag.name());
    }
}

#[cfg(test)]
impl Element {
    pub fn get_attr(&self, name: &str) -> Option<&str> {
        self.attrs
            .iter()
            .find(|(k, _)| *k == name)
            .map(|(_, v)| v.as_str())
    }

    fn collect_text<'a>(&'a self, out: &mut Vec<&'a str>) {
        for child in &self.children {
            match child {
                Node::Text(t) => out.push(t),
                Node::Element(e) => e.collect_text(out),
            }
        }
    }

    fn collect_sections<'a>(&'a self, out: &mut Vec<&'a Element>) {
        if self.get_attr("data-section").is_some() {
            out.push(self);
        }
        for child in &self.children {
            if let Node::Element(e) = child {
                e.collect_sections(out);
            }
        }
    }

    /// Concatenated text of this subtree.
    pub fn text_content(&self) -> String {
        let mut parts = Vec::new();
        self.collect_text(&mut parts);
        parts.concat()
    }

    /// Text nodes of this subtree, in document order.
    pub fn texts(&self) -> Vec<&str> {
        let mut parts = Vec::new();
        self.collect_text(&mut parts);
        parts
    }
}

impl Node {
    fn write_html(&self, out: &mut String) {
        match self {
            Node::Text(t) => out.push_str(&escape_html(t)),
            Node::Element(e) => e.write_html(out),
        }
    }
}

impl From<Element> for Node {
    fn from(e: Element) -> Self {
        Node::Element(e)
    }
}

impl From<String> for Node {
    fn from(s: String) -> Self {
        Node::Text(s)
    }
}

impl From<&str> for Node {
    fn from(s: &str) -> Self {
        Node::Text(s.to_string())
    }
}

/// A rendered résumé: the template that produced it and its root element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Surface {
    pub template: Template,
    pub root: Element,
}

impl Surface {
    pub fn to_html(&self) -> String {
        let mut out = String::new();
        self.root.write_html(&mut out);
        out
    }
}

#[cfg(test)]
impl Surface {
    /// Names of the rendered sections in document order.
    pub fn section_names(&self) -> Vec<&str> {
        self.sections()
            .into_iter()
            .filter_map(|e| e.get_attr("data-section"))
            .collect()
    }

    pub fn section(&self, name: &str) -> Option<&Element> {
        self.sections()
            .into_iter()
            .find(|e| e.get_attr("data-section") == Some(name))
    }

    fn sections(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        self.root.collect_sections(&mut out);
        out
    }

    pub fn texts(&self) -> Vec<&str> {
        self.root.texts()
    }
}

pub fn escape_html(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html("<script>"), "&lt;script&gt;");
        assert_eq!(escape_html("R&D"), "R&amp;D");
        assert_eq!(escape_html(r#"say "hi""#), "say &quot;hi&quot;");
    }

    #[test]
    fn test_element_serializes_with_class_and_attrs() {
        let node = el(Tag::Section)
            .class("mb-4")
            .section("skills")
            .child(el(Tag::Span).text("Go & Rust"))
            .child(el(Tag::Br));
        let surface = Surface {
            template: Template::Modern,
            root: node,
        };
        assert_eq!(
            surface.to_html(),
            r#"<section class="mb-4" data-section="skills"><span>Go &amp; Rust</span><br></section>"#
        );
    }

    #[test]
    fn test_child_opt_none_adds_nothing() {
        let e = el(Tag::Div).child_opt(None::<Element>);
        assert!(e.children.is_empty());
    }

    #[test]
    fn test_section_lookup_and_texts() {
        let root = el(Tag::Div)
            .child(el(Tag::H1).text("Name"))
            .child(el(Tag::Section).section("a").text("one"))
            .child(el(Tag::Section).section("b").child(el(Tag::P).text("two")));
        let surface = Surface {
            template: Template::Classic,
            root,
        };
        assert_eq!(surface.section_names(), vec!["a", "b"]);
        assert_eq!(surface.section("b").unwrap().text_content(), "two");
        assert_eq!(surface.texts(), vec!["Name", "one", "two"]);
    }
}
