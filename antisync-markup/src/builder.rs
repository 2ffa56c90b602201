//! Content builder
//!
//! Owns the primary and summary buffers plus one writer per section, and routes source lines
//! to whichever section is active.

use crate::buffer::LineBuffer;
use crate::writers::{CodeWriter, ContentWriter, FootnoteWriter, PoemWriter, SectionWriter};

/// Sections that a `~ <name>` directive can switch to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Content,
    Summary,
    Poem,
    Code,
    Footnote,
}

impl Section {
    pub const ALL: [Section; 5] = [
        Section::Content,
        Section::Summary,
        Section::Poem,
        Section::Code,
        Section::Footnote,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "content" => Some(Section::Content),
            "summary" => Some(Section::Summary),
            "poem" => Some(Section::Poem),
            "code" => Some(Section::Code),
            "footnote" => Some(Section::Footnote),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Section::Content => "content",
            Section::Summary => "summary",
            Section::Poem => "poem",
            Section::Code => "code",
            Section::Footnote => "footnote",
        }
    }
}

/// Rendered output of a [`ContentBuilder`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    /// `None` when the primary buffer held nothing but markers
    pub content: Option<String>,
    pub summary: Option<String>,
}

#[derive(Debug)]
pub struct ContentBuilder {
    primary: LineBuffer,
    summary: LineBuffer,
    content_writer: ContentWriter,
    summary_writer: ContentWriter,
    poem_writer: PoemWriter,
    code_writer: CodeWriter,
    footnote_writer: FootnoteWriter,
    active: Section,
}

impl Default for ContentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ContentBuilder {
    pub fn new() -> Self {
        Self {
            primary: LineBuffer::new(),
            summary: LineBuffer::new(),
            content_writer: ContentWriter,
            summary_writer: ContentWriter,
            poem_writer: PoemWriter,
            code_writer: CodeWriter,
            footnote_writer: FootnoteWriter::new(),
            active: Section::Content,
        }
    }

    pub fn active(&self) -> Section {
        self.active
    }

    pub fn primary(&self) -> &LineBuffer {
        &self.primary
    }

    pub fn summary(&self) -> &LineBuffer {
        &self.summary
    }

    /// Writer for `section` together with the buffer it writes into.
    fn writer(&mut self, section: Section) -> (&mut dyn SectionWriter, &mut LineBuffer) {
        match section {
            Section::Content => (&mut self.content_writer, &mut self.primary),
            Section::Summary => (&mut self.summary_writer, &mut self.summary),
            Section::Poem => (&mut self.poem_writer, &mut self.primary),
            Section::Code => (&mut self.code_writer, &mut self.primary),
            Section::Footnote => (&mut self.footnote_writer, &mut self.primary),
        }
    }

    /// Switch to the section called `name`. Returns `false` if `name` is not a section.
    pub fn switch_to(&mut self, name: &str) -> bool {
        match Section::from_name(name) {
            Some(section) => {
                self.activate(section);
                true
            }
            None => false,
        }
    }

    pub fn activate(&mut self, section: Section) {
        let (writer, buffer) = self.writer(self.active);
        writer.finish(buffer);
        self.active = section;
        let (writer, buffer) = self.writer(section);
        writer.start(buffer);
    }

    pub fn push(&mut self, line: &str) {
        let (writer, buffer) = self.writer(self.active);
        writer.push(buffer, line);
    }

    /// Copy the summary collected so far into the body.
    pub fn insert_summary(&mut self) {
        self.primary.extend_from(&self.summary);
    }

    /// Append footnotes and render both buffers. The active section is left open, so a
    /// trailing code block gets no closing tag.
    pub fn export(mut self) -> Rendered {
        self.footnote_writer.dump(&mut self.primary);
        Rendered {
            content: self.primary.format(),
            summary: self.summary.format(),
        }
    }
}
