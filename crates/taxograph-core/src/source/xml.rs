//! XML source documents (ImageNet `structure_released.xml` layout)
//!
//! The document element becomes the root occurrence. Nested elements with the
//! configured tag become child occurrences; any other element is skipped
//! together with its subtree.

use std::fs;
use std::path::Path;

use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::config::Config;
use crate::error::{Result, TaxoError};
use crate::source::Element;

/// Reads XML documents into [`Element`] trees
#[derive(Debug, Clone)]
pub struct XmlReader {
    root_id: String,
    element_tag: String,
    id_attribute: String,
}

impl Default for XmlReader {
    fn default() -> Self {
        XmlReader::from_config(&Config::default())
    }
}

enum Frame {
    Node(Element),
    Skip,
}

impl XmlReader {
    /// Create a reader using the graph and source settings of `config`
    pub fn from_config(config: &Config) -> Self {
        XmlReader {
            root_id: config.graph.root_id.clone(),
            element_tag: config.source.element_tag.clone(),
            id_attribute: config.source.id_attribute.clone(),
        }
    }

    /// Override the identifier given to the document element
    pub fn with_root_id(mut self, root_id: impl Into<String>) -> Self {
        self.root_id = root_id.into();
        self
    }

    /// Read and parse a document from disk
    #[tracing::instrument(skip(self), fields(path = %path.display()))]
    pub fn read_file(&self, path: &Path) -> Result<Element> {
        let content = fs::read_to_string(path).map_err(|e| TaxoError::read_file(path, e))?;
        self.read_str(&content)
    }

    /// Parse a document held in memory
    pub fn read_str(&self, xml: &str) -> Result<Element> {
        let mut reader = Reader::from_str(xml);
        let mut stack: Vec<Frame> = Vec::new();
        let mut root: Option<Element> = None;

        loop {
            let position = reader.buffer_position();
            let event = reader.read_event().map_err(|e| {
                TaxoError::source_format(format!("{} at byte {}", e, position))
            })?;

            match event {
                Event::Start(start) => {
                    let frame = self.open(&start, &stack, root.is_some(), position)?;
                    stack.push(frame);
                }
                Event::Empty(start) => {
                    let frame = self.open(&start, &stack, root.is_some(), position)?;
                    close(frame, &mut stack, &mut root);
                }
                Event::End(_) => {
                    let frame = stack.pop().ok_or_else(|| {
                        TaxoError::source_format(format!("unexpected end tag at byte {}", position))
                    })?;
                    close(frame, &mut stack, &mut root);
                }
                Event::Eof => break,
                _ => {}
            }
        }

        if !stack.is_empty() {
            return Err(TaxoError::source_format(format!(
                "{} unclosed element(s) at end of document",
                stack.len()
            )));
        }

        root.ok_or_else(|| TaxoError::source_format("document has no root element"))
    }

    fn open(
        &self,
        start: &BytesStart<'_>,
        stack: &[Frame],
        root_seen: bool,
        position: usize,
    ) -> Result<Frame> {
        match stack.last() {
            None if root_seen => Err(TaxoError::source_format(format!(
                "second document element at byte {}",
                position
            ))),
            None => Ok(Frame::Node(Element::new(self.root_id.as_str()))),
            Some(Frame::Skip) => Ok(Frame::Skip),
            Some(Frame::Node(_)) if start.name().as_ref() == self.element_tag.as_bytes() => {
                self.element(start, position).map(Frame::Node)
            }
            Some(Frame::Node(_)) => Ok(Frame::Skip),
        }
    }

    fn element(&self, start: &BytesStart<'_>, position: usize) -> Result<Element> {
        let id = attribute(start, &self.id_attribute)?.ok_or_else(|| {
            TaxoError::source_format(format!(
                "<{}> without '{}' attribute at byte {}",
                self.element_tag, self.id_attribute, position
            ))
        })?;

        let mut element = Element::new(id);
        element.words = attribute(start, "words")?;
        element.gloss = attribute(start, "gloss")?;
        Ok(element)
    }
}

fn attribute(start: &BytesStart<'_>, name: &str) -> Result<Option<String>> {
    let Some(attr) = start
        .try_get_attribute(name)
        .map_err(TaxoError::source_format)?
    else {
        return Ok(None);
    };

    let value = attr.unescape_value().map_err(TaxoError::source_format)?;
    Ok(Some(value.into_owned()))
}

fn close(frame: Frame, stack: &mut [Frame], root: &mut Option<Element>) {
    let Frame::Node(element) = frame else {
        return;
    };

    match stack.last_mut() {
        Some(Frame::Node(parent)) => parent.children.push(element),
        // A node frame is never opened under a skipped one
        Some(Frame::Skip) => {}
        None => *root = Some(element),
    }
}
