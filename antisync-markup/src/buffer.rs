//! Line buffer
//!
//!     Section writers never produce HTML directly. They append to a [`LineBuffer`], an ordered
//!     list mixing literal text with two symbolic markers. Markers are only resolved to text
//!     when the buffer is formatted, which lets leading and trailing markers be dropped first.

/// Literal emitted for [`Element::BlankLine`]
pub const BLANK_LINE: &str = "\n";

/// Literal emitted for [`Element::Separator`]
pub const SEPARATOR: &str = "</div><div class=\"stuff\">\n";

/// Whitespace as far as the markup is concerned: ASCII only, vertical tab included.
/// A non-breaking space is text.
pub fn is_space(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\n' | '\x0B' | '\x0C' | '\r')
}

/// One entry of a [`LineBuffer`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Element {
    Literal(String),
    BlankLine,
    Separator,
}

impl Element {
    pub fn literal(text: impl Into<String>) -> Self {
        Element::Literal(text.into())
    }

    pub fn is_marker(&self) -> bool {
        !matches!(self, Element::Literal(_))
    }

    fn as_str(&self) -> &str {
        match self {
            Element::Literal(text) => text,
            Element::BlankLine => BLANK_LINE,
            Element::Separator => SEPARATOR,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LineBuffer {
    elements: Vec<Element>,
}

impl LineBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, element: Element) {
        self.elements.push(element);
    }

    pub fn push_literal(&mut self, text: impl Into<String>) {
        self.elements.push(Element::Literal(text.into()));
    }

    pub fn extend_from(&mut self, other: &LineBuffer) {
        self.elements.extend(other.elements.iter().cloned());
    }

    pub fn last(&self) -> Option<&Element> {
        self.elements.last()
    }

    pub fn last_mut(&mut self) -> Option<&mut Element> {
        self.elements.last_mut()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Drop markers from both ends.
    pub fn strip(&mut self) {
        let start = self
            .elements
            .iter()
            .position(|e| !e.is_marker())
            .unwrap_or(self.elements.len());
        self.elements.drain(..start);
        while self.elements.last().is_some_and(Element::is_marker) {
            self.elements.pop();
        }
    }

    /// Concatenate all elements with `separator` between them, markers rendered as text.
    pub fn join(&self, separator: &str) -> String {
        self.elements
            .iter()
            .map(Element::as_str)
            .collect::<Vec<_>>()
            .join(separator)
    }

    /// Strip, then render. Returns `None` when nothing but markers was collected.
    pub fn format(&mut self) -> Option<String> {
        self.strip();
        if self.elements.is_empty() {
            return None;
        }
        Some(self.join(""))
    }
}
