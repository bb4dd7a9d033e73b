//! Arena-backed element tree.
//!
//! Elements are stored in a flat arena and addressed by [`NodeId`]. The tree
//! exposes the small query surface the lint rules need: selection by tag
//! name, first-child access, text content, and class-list mutation for
//! diagnostic markers. A `NodeId` is only meaningful for the document that
//! handed it out.

use serde::{Deserialize, Serialize};
use url::Url;

/// Index of an element within a [`Document`] arena.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct NodeId(usize);

/// A single element: tag name, own text, children, and class list.
#[derive(Debug, Clone)]
struct ElementData {
    tag: String,
    text: String,
    children: Vec<NodeId>,
    classes: Vec<String>,
}

impl ElementData {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            text: String::new(),
            children: Vec::new(),
            classes: Vec::new(),
        }
    }
}

/// An in-memory document tree with an optional base location.
#[derive(Debug, Clone)]
pub struct Document {
    nodes: Vec<ElementData>,
    root: NodeId,
    location: Option<Url>,
}

impl Document {
    /// Creates an empty document with a `body` root element.
    pub fn new() -> Self {
        Self {
            nodes: vec![ElementData::new("body")],
            root: NodeId(0),
            location: None,
        }
    }

    /// Creates an empty document with the given base location.
    pub fn with_location(location: Url) -> Self {
        let mut doc = Self::new();
        doc.location = Some(location);
        doc
    }

    /// Returns the root element.
    pub fn root(&self) -> NodeId {
        self.root
    }

    /// Returns the document's base location, if it has one.
    pub fn location(&self) -> Option<&Url> {
        self.location.as_ref()
    }

    /// Sets the document's base location.
    pub fn set_location(&mut self, location: Url) {
        self.location = Some(location);
    }

    /// Creates a detached element with the given tag name.
    ///
    /// Tag names are normalized to lowercase.
    pub fn create_element(&mut self, tag: &str) -> NodeId {
        let id = NodeId(self.nodes.len());
        self.nodes.push(ElementData::new(tag));
        id
    }

    /// Appends `child` to `parent`'s child list.
    pub fn append_child(&mut self, parent: NodeId, child: NodeId) {
        self.nodes[parent.0].children.push(child);
    }

    /// Appends text to the element's own text content.
    pub fn append_text(&mut self, id: NodeId, text: &str) {
        self.nodes[id.0].text.push_str(text);
    }

    /// Returns the element's lowercase tag name.
    pub fn tag_name(&self, id: NodeId) -> &str {
        &self.nodes[id.0].tag
    }

    /// Returns the element's child elements in order.
    pub fn children(&self, id: NodeId) -> &[NodeId] {
        &self.nodes[id.0].children
    }

    /// Returns the element's first child element, if any.
    pub fn first_element_child(&self, id: NodeId) -> Option<NodeId> {
        self.nodes[id.0].children.first().copied()
    }

    /// Returns the concatenated text of the element and its descendants,
    /// in document order.
    pub fn text_content(&self, id: NodeId) -> String {
        let mut out = String::new();
        self.collect_text(id, &mut out);
        out
    }

    fn collect_text(&self, id: NodeId, out: &mut String) {
        out.push_str(&self.nodes[id.0].text);
        for &child in &self.nodes[id.0].children {
            self.collect_text(child, out);
        }
    }

    /// Returns every element whose tag name is in `tags`, in document
    /// (pre-order) order starting from the root.
    pub fn query_all(&self, tags: &[&str]) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.visit(self.root, &mut |id| {
            if tags.contains(&self.tag_name(id)) {
                out.push(id);
            }
        });
        out
    }

    fn visit(&self, id: NodeId, f: &mut impl FnMut(NodeId)) {
        f(id);
        for &child in &self.nodes[id.0].children {
            self.visit(child, f);
        }
    }

    /// Adds a class to the element's class list. Idempotent.
    pub fn add_class(&mut self, id: NodeId, class: &str) {
        let classes = &mut self.nodes[id.0].classes;
        if !classes.iter().any(|c| c == class) {
            classes.push(class.to_string());
        }
    }

    /// Returns true if the element carries the given class.
    pub fn has_class(&self, id: NodeId, class: &str) -> bool {
        self.nodes[id.0].classes.iter().any(|c| c == class)
    }

    /// Returns the element's class list.
    pub fn classes(&self, id: NodeId) -> &[String] {
        &self.nodes[id.0].classes
    }

    /// Returns the number of elements in the document.
    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }
}

impl Default for Document {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn sample_doc() -> (Document, NodeId, NodeId) {
        let mut doc = Document::new();
        let section = doc.create_element("section");
        let heading = doc.create_element("h2");
        doc.append_text(heading, "Terms");
        doc.append_child(section, heading);
        let para = doc.create_element("p");
        doc.append_text(para, "Definitions follow.");
        doc.append_child(section, para);
        doc.append_child(doc.root(), section);
        (doc, section, heading)
    }

    #[test]
    fn test_root_is_body() {
        let doc = Document::new();
        assert_eq!(doc.tag_name(doc.root()), "body");
    }

    #[test]
    fn test_tag_names_are_lowercased() {
        let mut doc = Document::new();
        let el = doc.create_element("SECTION");
        assert_eq!(doc.tag_name(el), "section");
    }

    #[test]
    fn test_query_all_document_order() {
        let (mut doc, _, _) = sample_doc();
        let second = doc.create_element("section");
        doc.append_child(doc.root(), second);

        let sections = doc.query_all(&["section"]);
        assert_eq!(sections.len(), 2);
        // Pre-order: the first appended section comes first.
        assert!(sections[0] < sections[1]);
    }

    #[test]
    fn test_query_all_multiple_tags() {
        let (doc, _, heading) = sample_doc();
        let found = doc.query_all(&["h2", "h3"]);
        assert_eq!(found, vec![heading]);
    }

    #[test]
    fn test_first_element_child() {
        let (doc, section, heading) = sample_doc();
        assert_eq!(doc.first_element_child(section), Some(heading));
        assert_eq!(doc.first_element_child(heading), None);
    }

    #[test]
    fn test_text_content_includes_descendants() {
        let (doc, section, _) = sample_doc();
        assert_eq!(doc.text_content(section), "TermsDefinitions follow.");
    }

    #[test]
    fn test_add_class_idempotent() {
        let (mut doc, section, _) = sample_doc();
        doc.add_class(section, "marked");
        doc.add_class(section, "marked");
        assert_eq!(doc.classes(section), &["marked".to_string()]);
        assert!(doc.has_class(section, "marked"));
        assert!(!doc.has_class(section, "other"));
    }

    #[test]
    fn test_location_round_trip() {
        let url = Url::parse("https://example.org/spec").unwrap();
        let doc = Document::with_location(url.clone());
        assert_eq!(doc.location(), Some(&url));

        let mut plain = Document::new();
        assert_eq!(plain.location(), None);
        plain.set_location(url.clone());
        assert_eq!(plain.location(), Some(&url));
    }
}
