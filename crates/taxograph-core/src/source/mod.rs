//! Source document trees
//!
//! The graph builder consumes any rooted tree of labeled elements through
//! [`SourceElement`]. [`Element`] is the owned tree produced by the XML reader
//! and used for fixtures.

pub mod xml;

pub use xml::XmlReader;

/// A node of a rooted, ordered source tree
pub trait SourceElement: Sized {
    /// Identifier of this occurrence
    fn id(&self) -> &str;

    /// Child occurrences, in document order
    fn children(&self) -> &[Self];

    /// Human-readable label, if the source carries one
    fn words(&self) -> Option<&str> {
        None
    }

    /// Longer description, if the source carries one
    fn gloss(&self) -> Option<&str> {
        None
    }
}

/// Owned source tree element
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    pub id: String,
    pub words: Option<String>,
    pub gloss: Option<String>,
    pub children: Vec<Element>,
}

impl Element {
    /// Create a leaf element
    pub fn new(id: impl Into<String>) -> Self {
        Element {
            id: id.into(),
            words: None,
            gloss: None,
            children: Vec::new(),
        }
    }

    /// Append one child
    pub fn with_child(mut self, child: Element) -> Self {
        self.children.push(child);
        self
    }

    /// Append several children
    pub fn with_children(mut self, children: impl IntoIterator<Item = Element>) -> Self {
        self.children.extend(children);
        self
    }

    /// Set the label
    pub fn with_words(mut self, words: impl Into<String>) -> Self {
        self.words = Some(words.into());
        self
    }

    /// Set the description
    pub fn with_gloss(mut self, gloss: impl Into<String>) -> Self {
        self.gloss = Some(gloss.into());
        self
    }
}

impl SourceElement for Element {
    fn id(&self) -> &str {
        &self.id
    }

    fn children(&self) -> &[Self] {
        &self.children
    }

    fn words(&self) -> Option<&str> {
        self.words.as_deref()
    }

    fn gloss(&self) -> Option<&str> {
        self.gloss.as_deref()
    }
}
