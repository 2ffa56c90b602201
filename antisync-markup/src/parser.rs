//! Directive interpreter
//!
//!     The parser consumes one source file line by line. Lines starting with `~` are directives:
//!     either a section switch handled by the [`ContentBuilder`], or a metadata directive from
//!     the [`Directive`] table. Everything else is handed to the active section writer verbatim,
//!     line terminator included.
//!
//!     A parser is bound to a single deployment target. `public` and `redirect` directives that
//!     name a different target are ignored, so one source file can carry ids for several blogs.
//!
//! Usage
//!
//!     let mut parser = Parser::new("dev");
//!     for line in source.split_inclusive('\n') {
//!         parser.push_line(line)?;
//!     }
//!     let entry = parser.export()?;

use crate::builder::ContentBuilder;
use crate::directive::{Directive, DirectiveLine, MARKER};
use crate::entry::{Entry, EntryDraft, SeriesRef};
use crate::error::{LoadError, ParseError};
use std::fs;
use std::path::Path;

pub struct Parser {
    target: String,
    builder: ContentBuilder,
    draft: EntryDraft,
    line: usize,
}

impl Parser {
    pub fn new(target: impl Into<String>) -> Self {
        Self {
            target: target.into(),
            builder: ContentBuilder::new(),
            draft: EntryDraft::default(),
            line: 0,
        }
    }

    pub fn target(&self) -> &str {
        &self.target
    }

    /// Number of lines consumed so far.
    pub fn line(&self) -> usize {
        self.line
    }

    fn error(&self, message: impl Into<String>) -> ParseError {
        ParseError::new(self.line, message)
    }

    fn duplicate(&self, item: &str) -> ParseError {
        self.error(format!("Multiple '{MARKER} {item}'"))
    }

    pub fn push_line(&mut self, line: &str) -> Result<(), ParseError> {
        self.line += 1;
        match DirectiveLine::parse(line) {
            Some(directive) => self.handle_directive(&directive),
            None => {
                self.builder.push(line);
                Ok(())
            }
        }
    }

    fn handle_directive(&mut self, line: &DirectiveLine<'_>) -> Result<(), ParseError> {
        if self.builder.switch_to(line.name) {
            log::trace!("line {}: section '{}'", self.line, line.name);
            return Ok(());
        }
        let directive = Directive::from_name(line.name)
            .ok_or_else(|| self.error(format!("Unsupported directive '{}'", line.name)))?;
        if !directive.arity().contains(&line.args.len()) {
            return Err(self.error(format!("Bad number of arguments for '{}'", line.name)));
        }
        log::trace!("line {}: directive '{}'", self.line, line.name);
        self.apply(directive, &line.args)
    }

    fn apply(&mut self, directive: Directive, args: &[&str]) -> Result<(), ParseError> {
        match directive {
            Directive::InsertSummary => self.builder.insert_summary(),
            Directive::Meta => {
                if self.draft.metalink.is_some() {
                    return Err(self.duplicate("metalink"));
                }
                self.draft.metalink = Some(args[0].to_string());
            }
            Directive::Public => {
                if args[0] != self.target {
                    return Ok(());
                }
                if self.draft.publish {
                    return Err(self.duplicate(&format!("public {}", self.target)));
                }
                self.draft.public_id = match args.get(1) {
                    Some(raw) => Some(self.integer(directive, raw)?),
                    None => None,
                };
                self.draft.publish = true;
            }
            Directive::Redirect => {
                if args[0] != self.target {
                    return Ok(());
                }
                if self.draft.redirect_url.is_some() {
                    return Err(self.duplicate(&format!("redirect {}", self.target)));
                }
                self.draft.redirect_url = Some(args[1].to_string());
            }
            Directive::Tags => {
                self.draft.tags.extend(args.iter().map(|t| t.to_string()));
            }
            Directive::Series => {
                let index = self.integer(directive, args[1])?;
                self.draft.series.push(SeriesRef {
                    name: args[0].to_string(),
                    index,
                });
            }
            Directive::Symlink => {
                if self.draft.symlink.is_some() {
                    return Err(self.duplicate("symlink"));
                }
                self.draft.symlink = Some(args[0].to_string());
            }
            Directive::Title => {
                self.draft.title = Some(args.join(" "));
            }
        }
        Ok(())
    }

    fn integer(&self, directive: Directive, raw: &str) -> Result<i64, ParseError> {
        raw.parse().map_err(|_| {
            self.error(format!(
                "Bad integer '{raw}' for '{}'",
                directive.name()
            ))
        })
    }

    /// Render the collected content and freeze the entry.
    pub fn export(self) -> Result<Entry, ParseError> {
        let line = self.line;
        let rendered = self.builder.export();
        let content = rendered
            .content
            .ok_or_else(|| ParseError::new(line, "No content"))?;
        Ok(self.draft.freeze(content, rendered.summary))
    }
}

/// Parse a whole source text for `target`.
pub fn parse_str(target: &str, source: &str) -> Result<Entry, ParseError> {
    let mut parser = Parser::new(target);
    for line in source.split_inclusive('\n') {
        parser.push_line(line)?;
    }
    parser.export()
}

/// Read and parse the file at `path` for `target`.
pub fn load(target: &str, path: impl AsRef<Path>) -> Result<Entry, LoadError> {
    let path = path.as_ref();
    log::debug!("parsing {} for target '{target}'", path.display());
    let source = fs::read_to_string(path).map_err(|source| LoadError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    parse_str(target, &source).map_err(|error| LoadError::Parse {
        path: path.to_path_buf(),
        error,
    })
}
