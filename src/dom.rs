//! Structured markup tree.
//!
//! Pages are assembled from `Element` and `Node` values and serialized in one
//! place, so text and attribute values are always escaped on the way out.

/// Elements that never have children or a closing tag
const VOID_ELEMENTS: &[&str] = &["br", "hr", "img", "input", "link", "meta"];

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    Element(Element),
    Text(String),
}

impl From<Element> for Node {
    fn from(element: Element) -> Self {
        Node::Element(element)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    tag: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    pub fn new(tag: impl Into<String>) -> Self {
        Element {
            tag: tag.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    /// Builder-style attribute setter. Setting an attribute twice replaces the value.
    pub fn attr(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set_attribute(name, value);
        self
    }

    pub fn child(mut self, node: impl Into<Node>) -> Self {
        self.append_child(node);
        self
    }

    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.children.push(Node::Text(text.into()));
        self
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.attributes.iter_mut().find(|(n, _)| *n == name) {
            Some(existing) => existing.1 = value,
            None => self.attributes.push((name, value)),
        }
    }

    pub fn append_child(&mut self, node: impl Into<Node>) {
        self.children.push(node.into());
    }

    pub fn tag(&self) -> &str {
        &self.tag
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn children(&self) -> &[Node] {
        &self.children
    }

    /// Child elements only, skipping text nodes
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    pub fn has_class(&self, class: &str) -> bool {
        self.attribute("class")
            .map(|classes| classes.split_whitespace().any(|c| c == class))
            .unwrap_or(false)
    }

    /// Depth-first search for the first element carrying `class`, including self
    pub fn find_by_class_mut(&mut self, class: &str) -> Option<&mut Element> {
        if self.has_class(class) {
            return Some(self);
        }
        self.children.iter_mut().find_map(|node| match node {
            Node::Element(element) => element.find_by_class_mut(class),
            Node::Text(_) => None,
        })
    }

    pub fn find_by_class(&self, class: &str) -> Option<&Element> {
        if self.has_class(class) {
            return Some(self);
        }
        self.child_elements().find_map(|element| element.find_by_class(class))
    }

    /// Concatenated text of all descendant text nodes
    pub fn text_content(&self) -> String {
        let mut out = String::new();
        collect_text(self, &mut out);
        out
    }

    pub fn to_html(&self) -> String {
        let mut out = String::new();
        write_element(self, &mut out);
        out
    }
}

fn collect_text(element: &Element, out: &mut String) {
    for node in &element.children {
        match node {
            Node::Text(text) => out.push_str(text),
            Node::Element(child) => collect_text(child, out),
        }
    }
}

fn write_element(element: &Element, out: &mut String) {
    out.push('<');
    out.push_str(&element.tag);
    for (name, value) in &element.attributes {
        out.push(' ');
        out.push_str(name);
        out.push_str("=\"");
        out.push_str(&escape_attribute(value));
        out.push('"');
    }
    out.push('>');

    if VOID_ELEMENTS.contains(&element.tag.as_str()) {
        return;
    }

    for node in &element.children {
        match node {
            Node::Text(text) => out.push_str(&escape_text(text)),
            Node::Element(child) => write_element(child, out),
        }
    }

    out.push_str("</");
    out.push_str(&element.tag);
    out.push('>');
}

pub fn escape_text(input: &str) -> String {
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

pub fn escape_attribute(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for c in input.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_serializes_nested_elements() {
        let el = Element::new("li")
            .child(Element::new("a").attr("href", "https://example.com").text("x"))
            .child(Element::new("p").text("y"));

        assert_eq!(
            el.to_html(),
            r#"<li><a href="https://example.com">x</a><p>y</p></li>"#
        );
    }

    #[test]
    fn test_escapes_text_and_attributes() {
        let el = Element::new("a")
            .attr("href", "\"><script>alert(1)</script>")
            .text("<b>bold</b> & co");

        let html = el.to_html();
        assert!(!html.contains("<script>"));
        assert!(!html.contains("<b>"));
        assert_eq!(
            html,
            "<a href=\"&quot;&gt;&lt;script&gt;alert(1)&lt;/script&gt;\">&lt;b&gt;bold&lt;/b&gt; &amp; co</a>"
        );
    }

    #[test]
    fn test_set_attribute_replaces() {
        let el = Element::new("ul").attr("class", "a").attr("class", "b");
        assert_eq!(el.attribute("class"), Some("b"));
        assert_eq!(el.to_html(), r#"<ul class="b"></ul>"#);
    }

    #[test]
    fn test_void_elements_have_no_closing_tag() {
        let el = Element::new("meta").attr("charset", "utf-8");
        assert_eq!(el.to_html(), r#"<meta charset="utf-8">"#);
    }

    #[test]
    fn test_find_by_class() {
        let mut root = Element::new("body").child(
            Element::new("main").child(Element::new("ul").attr("class", "list repo-list")),
        );

        assert!(root.find_by_class("repo-list").is_some());
        assert!(root.find_by_class("repo").is_none());

        let list = root.find_by_class_mut("repo-list").unwrap();
        list.append_child(Element::new("li").text("one"));

        assert_eq!(root.find_by_class("repo-list").unwrap().children().len(), 1);
        assert_eq!(root.text_content(), "one");
    }
}
