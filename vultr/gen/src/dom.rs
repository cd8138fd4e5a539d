//! Labeled document tree built from HTML.
//!
//! `scraper` (html5ever) does the parsing. Its DOM is converted into the
//! small [`Node`] tree below so the extractor can work on plain owned data:
//! element nodes with a tag name, attributes and ordered children, and text
//! nodes. Comments, doctypes and processing instructions are dropped.
//!
//! ## Notes
//!
//! html5ever follows the HTML5 tree-construction rules, so a `<tr>` written
//! directly under `<table>` ends up inside an implied `<tbody>`. Lookups that
//! care about rows therefore search descendants rather than direct children.

use std::collections::BTreeMap;

use scraper::{ElementRef, Html};

/// A node of the document tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Node {
    /// An element with its attributes and children.
    Element(Element),
    /// Raw text content.
    Text(String),
}

/// An element node.
///
/// Children keep document order; the extractor relies on it for category
/// and call ordering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    /// Lower-case tag name.
    pub tag: String,
    /// Attribute map; keys are unique.
    pub attrs: BTreeMap<String, String>,
    /// Child nodes in source order.
    pub children: Vec<Node>,
}

impl Node {
    /// Returns the element if this node is one.
    pub fn as_element(&self) -> Option<&Element> {
        match self {
            Self::Element(element) => Some(element),
            Self::Text(_) => None,
        }
    }

    fn collect_text(&self, out: &mut String) {
        match self {
            Self::Text(text) => out.push_str(text),
            Self::Element(element) => {
                for child in &element.children {
                    child.collect_text(out);
                }
            }
        }
    }
}

impl Element {
    /// Returns an attribute value.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attrs.get(name).map(String::as_str)
    }

    /// Returns `true` if the whitespace-separated `class` list contains `class`.
    pub fn has_class(&self, class: &str) -> bool {
        self.attr("class")
            .is_some_and(|list| list.split_whitespace().any(|c| c == class))
    }

    /// Child elements, skipping text nodes.
    pub fn child_elements(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(Node::as_element)
    }

    /// Child elements with the given tag.
    pub fn children_by_tag<'a>(&'a self, tag: &'a str) -> impl Iterator<Item = &'a Element> {
        self.child_elements().filter(move |e| e.tag == tag)
    }

    /// All descendant elements in document (pre-)order.
    pub fn descendants(&self) -> Vec<&Element> {
        let mut out = Vec::new();
        self.collect_descendants(&mut out);
        out
    }

    fn collect_descendants<'a>(&'a self, out: &mut Vec<&'a Element>) {
        for child in self.child_elements() {
            out.push(child);
            child.collect_descendants(out);
        }
    }

    /// First descendant element with the given tag.
    pub fn find_descendant(&self, tag: &str) -> Option<&Element> {
        self.child_elements().find_map(|child| {
            if child.tag == tag {
                Some(child)
            } else {
                child.find_descendant(tag)
            }
        })
    }

    /// All descendant elements with the given tag, in document order.
    pub fn descendants_by_tag(&self, tag: &str) -> Vec<&Element> {
        self.descendants()
            .into_iter()
            .filter(|e| e.tag == tag)
            .collect()
    }

    /// Concatenated text of all descendants.
    pub fn text(&self) -> String {
        let mut out = String::new();
        for child in &self.children {
            child.collect_text(&mut out);
        }
        out
    }
}

/// Parses an HTML fragment into a [`Node`] tree.
///
/// The returned root is the parser's synthetic `html` element; the
/// fragment's own top-level nodes are its children.
///
/// ## Examples
///
/// ```
/// use vultr_gen::dom::parse_fragment;
///
/// let root = parse_fragment(r#"<div id="a"><p>hi</p></div>"#);
/// let div = root.as_element().unwrap().child_elements().next().unwrap();
/// assert_eq!(div.attr("id"), Some("a"));
/// assert_eq!(div.text(), "hi");
/// ```
pub fn parse_fragment(html: &str) -> Node {
    let fragment = Html::parse_fragment(html);
    convert_element(fragment.root_element())
}

fn convert_element(element: ElementRef<'_>) -> Node {
    let value = element.value();
    let attrs = value
        .attrs()
        .map(|(name, val)| (name.to_string(), val.to_string()))
        .collect();

    let children = element
        .children()
        .filter_map(|child| match ElementRef::wrap(child) {
            Some(child_element) => Some(convert_element(child_element)),
            None => child.value().as_text().map(|text| {
                let text: &str = text;
                Node::Text(text.to_owned())
            }),
        })
        .collect();

    Node::Element(Element {
        tag: value.name().to_string(),
        attrs,
        children,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn first_element(root: &Node) -> &Element {
        root.as_element()
            .and_then(|r| r.child_elements().next())
            .expect("fragment should contain an element")
    }

    #[test]
    fn keeps_children_in_source_order() {
        let root = parse_fragment("<div><h2>A</h2>text<p>B</p><p>C</p></div>");
        let div = first_element(&root);
        let tags: Vec<&str> = div.child_elements().map(|e| e.tag.as_str()).collect();
        assert_eq!(tags, vec!["h2", "p", "p"]);
        assert_eq!(div.children.len(), 4);
        assert!(matches!(&div.children[1], Node::Text(t) if t == "text"));
    }

    #[test]
    fn collects_attributes() {
        let root = parse_fragment(r#"<div id="server" class="section code">x</div>"#);
        let div = first_element(&root);
        assert_eq!(div.attr("id"), Some("server"));
        assert!(div.has_class("code"));
        assert!(div.has_class("section"));
        assert!(!div.has_class("cod"));
        assert_eq!(div.attr("missing"), None);
    }

    #[test]
    fn decodes_entities_in_text() {
        let root = parse_fragment("<p>it&#039;s &quot;active&quot;</p>");
        assert_eq!(first_element(&root).text(), "it's \"active\"");
    }

    #[test]
    fn table_rows_are_found_through_implied_tbody() {
        let root = parse_fragment(
            "<table><tr><td>API Key</td><td>Yes</td></tr><tr><td>Method</td><td>GET</td></tr></table>",
        );
        let table = first_element(&root);
        assert_eq!(table.tag, "table");
        let rows = table.descendants_by_tag("tr");
        assert_eq!(rows.len(), 2);
        let cells: Vec<String> = rows[1].children_by_tag("td").map(Element::text).collect();
        assert_eq!(cells, vec!["Method", "GET"]);
    }

    #[test]
    fn find_descendant_is_depth_first() {
        let root = parse_fragment("<div><section><h2>Inner</h2></section><h2>Outer</h2></div>");
        let div = first_element(&root);
        assert_eq!(div.find_descendant("h2").map(Element::text).as_deref(), Some("Inner"));
        assert!(div.find_descendant("table").is_none());
    }

    #[test]
    fn comments_are_dropped() {
        let root = parse_fragment("<div><!-- note --><p>x</p></div>");
        let div = first_element(&root);
        assert_eq!(div.children.len(), 1);
    }
}
