//! Section writers
//!
//!     Every `~ <section>` directive hands the following lines to one of the writers below.
//!     A writer decides how a raw source line lands in the target buffer, and may emit
//!     opening/closing material when it becomes active or is replaced.
//!
//!     Writers do not own the primary buffer; the content builder passes it in on each call so
//!     that several writers can share it.

use crate::buffer::{is_space, Element, LineBuffer};

/// Literal inserted between consecutive poem lines
pub const LINE_BREAK: &str = "<br />\n";

fn is_blank(line: &str) -> bool {
    line.chars().all(is_space)
}

/// Common capability set of all section writers
pub trait SectionWriter {
    /// Called when the writer becomes active.
    fn start(&mut self, _buffer: &mut LineBuffer) {}

    /// Append one raw source line.
    fn push(&mut self, buffer: &mut LineBuffer, line: &str);

    /// Called when the writer is replaced by another one.
    fn finish(&mut self, _buffer: &mut LineBuffer) {}
}

/// Plain prose. Used for both the body and the summary.
#[derive(Debug, Default)]
pub struct ContentWriter;

impl SectionWriter for ContentWriter {
    fn push(&mut self, buffer: &mut LineBuffer, line: &str) {
        if is_blank(line) {
            buffer.push(Element::Separator);
        } else {
            buffer.push_literal(line);
        }
    }
}

/// Verse: lines are kept together with explicit breaks, stanzas become blocks.
#[derive(Debug, Default)]
pub struct PoemWriter;

impl SectionWriter for PoemWriter {
    fn start(&mut self, buffer: &mut LineBuffer) {
        buffer.push(Element::Separator);
    }

    fn push(&mut self, buffer: &mut LineBuffer, line: &str) {
        if is_blank(line) {
            buffer.push(Element::BlankLine);
            buffer.push(Element::Separator);
            return;
        }
        if buffer.last() != Some(&Element::Separator) {
            buffer.push_literal(LINE_BREAK);
        }
        buffer.push_literal(line.trim_end_matches(is_space));
    }

    fn finish(&mut self, buffer: &mut LineBuffer) {
        buffer.push(Element::BlankLine);
        buffer.push(Element::Separator);
    }
}

/// Preformatted block, lines copied as-is.
#[derive(Debug, Default)]
pub struct CodeWriter;

impl SectionWriter for CodeWriter {
    fn start(&mut self, buffer: &mut LineBuffer) {
        buffer.push_literal("<pre>\n");
    }

    fn push(&mut self, buffer: &mut LineBuffer, line: &str) {
        if is_blank(line) {
            buffer.push(Element::BlankLine);
        } else {
            buffer.push_literal(line);
        }
    }

    fn finish(&mut self, buffer: &mut LineBuffer) {
        buffer.push_literal("</pre>\n");
    }
}

/// Footnotes: a numbered anchor goes into the primary buffer, the note text is collected
/// separately and appended below a rule when the entry is exported.
#[derive(Debug, Default)]
pub struct FootnoteWriter {
    notes: LineBuffer,
    count: usize,
}

impl FootnoteWriter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of footnotes started so far.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn notes(&self) -> &LineBuffer {
        &self.notes
    }

    fn anchor(&self, name_prefix: &str, href_prefix: &str) -> String {
        let n = self.count;
        format!("<a name='{name_prefix}{n}' href='#{href_prefix}{n}'><sup>{n}</sup></a>")
    }

    /// Append collected notes to `buffer`. Does nothing if there are none.
    pub fn dump(&self, buffer: &mut LineBuffer) {
        if self.notes.is_empty() {
            return;
        }
        buffer.push_literal("\n<hr />\n");
        buffer.push_literal(self.notes.join("\n"));
    }
}

impl SectionWriter for FootnoteWriter {
    fn start(&mut self, buffer: &mut LineBuffer) {
        if let Some(Element::Literal(text)) = buffer.last_mut() {
            let trimmed = text.trim_end_matches(is_space).len();
            text.truncate(trimmed);
        }
        if self.count != 0 {
            self.notes.push_literal("<br />");
        }
        self.count += 1;
        buffer.push_literal(self.anchor("tx", "nm"));
        let back = self.anchor("nm", "tx");
        self.notes.push_literal(back);
    }

    fn push(&mut self, _buffer: &mut LineBuffer, line: &str) {
        self.notes.push_literal(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lit(text: &str) -> Element {
        Element::literal(text)
    }

    #[test]
    fn non_breaking_space_line_is_text() {
        let mut buf = LineBuffer::new();
        ContentWriter.push(&mut buf, "\u{a0}\n");
        ContentWriter.push(&mut buf, " \t\x0B\r\n");
        assert_eq!(buf.elements(), &[lit("\u{a0}\n"), Element::Separator]);

        let mut poem = LineBuffer::new();
        PoemWriter.start(&mut poem);
        PoemWriter.push(&mut poem, "verse\u{a0} \n");
        assert_eq!(poem.elements(), &[Element::Separator, lit("verse\u{a0}")]);
    }

    #[test]
    fn content_writer_turns_blank_lines_into_separators() {
        let mut buf = LineBuffer::new();
        let mut writer = ContentWriter;
        writer.push(&mut buf, "Hello\n");
        writer.push(&mut buf, "   \n");
        writer.push(&mut buf, "World\n");
        assert_eq!(
            buf.elements(),
            &[lit("Hello\n"), Element::Separator, lit("World\n")]
        );
    }

    #[test]
    fn single_line_poem_is_wrapped_in_separators() {
        let mut buf = LineBuffer::new();
        let mut writer = PoemWriter;
        writer.start(&mut buf);
        writer.push(&mut buf, "only line  \n");
        writer.finish(&mut buf);
        assert_eq!(
            buf.elements(),
            &[
                Element::Separator,
                lit("only line"),
                Element::BlankLine,
                Element::Separator
            ]
        );
    }

    #[test]
    fn poem_breaks_lines_within_a_stanza() {
        let mut buf = LineBuffer::new();
        let mut writer = PoemWriter;
        writer.start(&mut buf);
        writer.push(&mut buf, "one\n");
        writer.push(&mut buf, "two\n");
        writer.push(&mut buf, "\n");
        writer.push(&mut buf, "three\n");
        assert_eq!(
            buf.elements(),
            &[
                Element::Separator,
                lit("one"),
                lit(LINE_BREAK),
                lit("two"),
                Element::BlankLine,
                Element::Separator,
                lit("three"),
            ]
        );
    }

    #[test]
    fn code_writer_keeps_lines_verbatim() {
        let mut buf = LineBuffer::new();
        let mut writer = CodeWriter;
        writer.start(&mut buf);
        writer.push(&mut buf, "  indented  \n");
        writer.push(&mut buf, "\n");
        writer.finish(&mut buf);
        assert_eq!(
            buf.elements(),
            &[
                lit("<pre>\n"),
                lit("  indented  \n"),
                Element::BlankLine,
                lit("</pre>\n")
            ]
        );
    }

    #[test]
    fn footnotes_are_numbered_from_one() {
        let mut buf = LineBuffer::new();
        buf.push_literal("Text  \n");
        let mut writer = FootnoteWriter::new();

        writer.start(&mut buf);
        writer.push(&mut buf, "first\n");
        writer.start(&mut buf);
        writer.push(&mut buf, "second\n");

        assert_eq!(writer.count(), 2);
        assert_eq!(
            buf.elements(),
            &[
                lit("Text"),
                lit("<a name='tx1' href='#nm1'><sup>1</sup></a>"),
                lit("<a name='tx2' href='#nm2'><sup>2</sup></a>"),
            ]
        );
        assert_eq!(
            writer.notes().elements(),
            &[
                lit("<a name='nm1' href='#tx1'><sup>1</sup></a>"),
                lit("first\n"),
                lit("<br />"),
                lit("<a name='nm2' href='#tx2'><sup>2</sup></a>"),
                lit("second\n"),
            ]
        );
    }

    #[test]
    fn footnote_start_leaves_trailing_marker_alone() {
        let mut buf = LineBuffer::new();
        buf.push(Element::Separator);
        let mut writer = FootnoteWriter::new();
        writer.start(&mut buf);
        assert_eq!(buf.elements()[0], Element::Separator);
    }

    #[test]
    fn dump_without_notes_is_a_no_op() {
        let mut buf = LineBuffer::new();
        FootnoteWriter::new().dump(&mut buf);
        assert!(buf.is_empty());
    }

    #[test]
    fn dump_appends_rule_and_notes() {
        let mut buf = LineBuffer::new();
        let mut writer = FootnoteWriter::new();
        writer.start(&mut buf);
        writer.push(&mut buf, "note");
        writer.dump(&mut buf);
        assert_eq!(
            buf.elements(),
            &[
                lit("<a name='tx1' href='#nm1'><sup>1</sup></a>"),
                lit("\n<hr />\n"),
                lit("<a name='nm1' href='#tx1'><sup>1</sup></a>\nnote"),
            ]
        );
    }
}
