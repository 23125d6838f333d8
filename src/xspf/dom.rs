//! In-memory document model for playlists.
//!
//! Elements remember both their resolved namespace URI and the qualified name
//! they were written with, so a parsed document serializes back with the
//! prefixes its author chose while lookups stay namespace-qualified.

use std::fs;
use std::path::Path;

use crate::domain::errors::{DomainError, DomainResult};
use crate::xspf::namespace::Namespace;
use crate::xspf::{reader, writer};

/// A child of an element
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    Element(Element),
    Text(String),
}

/// An XML element
#[derive(Debug, Clone, PartialEq)]
pub struct Element {
    namespace: Option<String>,
    name: String,
    attributes: Vec<(String, String)>,
    children: Vec<Node>,
}

impl Element {
    /// Create an element in `ns` under that namespace's default prefix
    pub fn new(ns: Namespace, local_name: &str) -> Self {
        let name = match ns.default_prefix() {
            Some(prefix) => format!("{}:{}", prefix, local_name),
            None => local_name.to_string(),
        };
        Self::from_qualified_name(Some(ns.uri()), name)
    }

    /// Create an element with an explicit qualified name, e.g. `v:option`
    pub fn from_qualified_name(namespace: Option<&str>, name: impl Into<String>) -> Self {
        Self {
            namespace: namespace.map(str::to_string),
            name: name.into(),
            attributes: Vec::new(),
            children: Vec::new(),
        }
    }

    pub fn with_attribute(mut self, key: &str, value: impl Into<String>) -> Self {
        self.set_attribute(key, value);
        self
    }

    pub fn with_text(mut self, text: impl Into<String>) -> Self {
        self.push_text(text);
        self
    }

    pub fn with_child(mut self, child: Element) -> Self {
        self.push_child(child);
        self
    }

    pub fn namespace(&self) -> Option<&str> {
        self.namespace.as_deref()
    }

    pub fn qualified_name(&self) -> &str {
        &self.name
    }

    pub fn local_name(&self) -> &str {
        match self.name.split_once(':') {
            Some((_, local)) => local,
            None => &self.name,
        }
    }

    /// Namespace-qualified name check
    pub fn is(&self, ns: Namespace, local_name: &str) -> bool {
        self.namespace.as_deref() == Some(ns.uri()) && self.local_name() == local_name
    }

    pub fn attributes(&self) -> &[(String, String)] {
        &self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Set an attribute, replacing an existing value in place
    pub fn set_attribute(&mut self, key: &str, value: impl Into<String>) {
        let value = value.into();
        match self.attributes.iter_mut().find(|(k, _)| k == key) {
            Some(existing) => existing.1 = value,
            None => self.attributes.push((key.to_string(), value)),
        }
    }

    pub fn nodes(&self) -> &[Node] {
        &self.children
    }

    pub fn push_child(&mut self, child: Element) {
        self.children.push(Node::Element(child));
    }

    pub fn push_text(&mut self, text: impl Into<String>) {
        let text = text.into();
        // merge adjacent runs, e.g. text split around a CDATA section
        if let Some(Node::Text(last)) = self.children.last_mut() {
            last.push_str(&text);
        } else {
            self.children.push(Node::Text(text));
        }
    }

    /// Concatenated direct text content
    pub fn text(&self) -> String {
        self.children
            .iter()
            .filter_map(|node| match node {
                Node::Text(text) => Some(text.as_str()),
                Node::Element(_) => None,
            })
            .collect()
    }

    /// Child elements, in document order
    pub fn children(&self) -> impl Iterator<Item = &Element> {
        self.children.iter().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    pub fn children_mut(&mut self) -> impl Iterator<Item = &mut Element> {
        self.children.iter_mut().filter_map(|node| match node {
            Node::Element(element) => Some(element),
            Node::Text(_) => None,
        })
    }

    /// First child element with the given qualified name
    pub fn find(&self, ns: Namespace, local_name: &str) -> Option<&Element> {
        self.children().find(|child| child.is(ns, local_name))
    }

    pub fn find_mut(&mut self, ns: Namespace, local_name: &str) -> Option<&mut Element> {
        self.children_mut().find(|child| child.is(ns, local_name))
    }

    pub fn find_all<'a>(
        &'a self,
        ns: Namespace,
        local_name: &'a str,
    ) -> impl Iterator<Item = &'a Element> + 'a {
        self.children().filter(move |child| child.is(ns, local_name))
    }

    pub fn find_all_mut<'a>(
        &'a mut self,
        ns: Namespace,
        local_name: &'a str,
    ) -> impl Iterator<Item = &'a mut Element> + 'a {
        self.children_mut().filter(move |child| child.is(ns, local_name))
    }

    /// Text of the first matching child
    pub fn find_text(&self, ns: Namespace, local_name: &str) -> Option<String> {
        self.find(ns, local_name).map(Element::text)
    }

    /// Drop whitespace-only text between child elements. Indentation is
    /// regenerated on write.
    pub(crate) fn drop_layout_whitespace(&mut self) {
        if self.children().next().is_none() {
            return;
        }
        self.children.retain(|node| match node {
            Node::Text(text) => !text.trim().is_empty(),
            Node::Element(_) => true,
        });
    }
}

/// A whole playlist document
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
    root: Element,
}

impl Document {
    pub fn new(root: Element) -> Self {
        Self { root }
    }

    pub fn parse(xml: &str) -> DomainResult<Self> {
        reader::parse_document(xml)
    }

    pub fn read_file(path: &Path) -> DomainResult<Self> {
        let content = fs::read_to_string(path)?;
        Self::parse(&content)
    }

    pub fn root(&self) -> &Element {
        &self.root
    }

    pub fn root_mut(&mut self) -> &mut Element {
        &mut self.root
    }

    /// Serialize with XML declaration and two-space indentation
    pub fn to_xml_string(&self) -> DomainResult<String> {
        writer::write_document(self)
    }

    pub fn write_file(&self, path: &Path) -> DomainResult<()> {
        let xml = self.to_xml_string()?;
        fs::write(path, xml).map_err(DomainError::from)
    }

    /// How the root declares `ns`.
    ///
    /// `None` when undeclared, `Some(None)` for the default namespace,
    /// `Some(Some(prefix))` for a prefixed declaration.
    pub fn declared_prefix(&self, ns: Namespace) -> Option<Option<String>> {
        self.root.attributes().iter().find_map(|(key, value)| {
            if value != ns.uri() {
                return None;
            }
            if key == "xmlns" {
                Some(None)
            } else {
                key.strip_prefix("xmlns:")
                    .map(|prefix| Some(prefix.to_string()))
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::xspf::namespace::{VLC_NS, XSPF_NS};

    #[test]
    fn test_new_element_uses_default_prefix() {
        let title = Element::new(Namespace::Xspf, "title");
        assert_eq!(title.qualified_name(), "title");
        assert_eq!(title.namespace(), Some(XSPF_NS));

        let id = Element::new(Namespace::Vlc, "id");
        assert_eq!(id.qualified_name(), "vlc:id");
        assert_eq!(id.local_name(), "id");
        assert!(id.is(Namespace::Vlc, "id"));
        assert!(!id.is(Namespace::Xspf, "id"));
    }

    #[test]
    fn test_find_is_namespace_qualified() {
        let parent = Element::new(Namespace::Xspf, "extension")
            .with_child(Element::from_qualified_name(None, "option").with_text("bare"))
            .with_child(Element::new(Namespace::Vlc, "option").with_text("qualified"));

        assert_eq!(
            parent.find_text(Namespace::Vlc, "option").as_deref(),
            Some("qualified")
        );
        assert_eq!(parent.find_all(Namespace::Vlc, "option").count(), 1);
        assert!(parent.find(Namespace::Xspf, "option").is_none());
    }

    #[test]
    fn test_set_attribute_replaces() {
        let mut element = Element::new(Namespace::Vlc, "node").with_attribute("title", "a");
        element.set_attribute("title", "b");
        assert_eq!(element.attribute("title"), Some("b"));
        assert_eq!(element.attributes().len(), 1);
    }

    #[test]
    fn test_text_merges_adjacent_runs() {
        let element = Element::new(Namespace::Xspf, "title")
            .with_text("Part ")
            .with_text("One");
        assert_eq!(element.nodes().len(), 1);
        assert_eq!(element.text(), "Part One");
    }

    #[test]
    fn test_drop_layout_whitespace_keeps_text_only_elements() {
        let mut leaf = Element::new(Namespace::Xspf, "title").with_text("  ");
        leaf.drop_layout_whitespace();
        assert_eq!(leaf.text(), "  ");

        let mut parent = Element::new(Namespace::Xspf, "trackList")
            .with_text("\n  ")
            .with_child(Element::new(Namespace::Xspf, "track"));
        parent.drop_layout_whitespace();
        assert_eq!(parent.nodes().len(), 1);
    }

    #[test]
    fn test_declared_prefix() {
        let doc = Document::new(
            Element::new(Namespace::Xspf, "playlist")
                .with_attribute("xmlns", XSPF_NS)
                .with_attribute("xmlns:v", VLC_NS),
        );
        assert_eq!(doc.declared_prefix(Namespace::Xspf), Some(None));
        assert_eq!(
            doc.declared_prefix(Namespace::Vlc),
            Some(Some("v".to_string()))
        );

        let bare = Document::new(Element::from_qualified_name(None, "playlist"));
        assert_eq!(bare.declared_prefix(Namespace::Vlc), None);
    }
}
