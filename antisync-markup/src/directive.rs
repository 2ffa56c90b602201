//! Metadata directives
//!
//! Names that are not sections resolve through this table. Each directive knows how many
//! arguments it accepts, so argument-count errors are reported before any handler runs.

use crate::buffer::is_space;
use std::ops::RangeInclusive;

/// Prefix that marks a directive line
pub const MARKER: char = '~';

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Directive {
    InsertSummary,
    Meta,
    Public,
    Redirect,
    Tags,
    Series,
    Symlink,
    Title,
}

impl Directive {
    pub const ALL: [Directive; 8] = [
        Directive::InsertSummary,
        Directive::Meta,
        Directive::Public,
        Directive::Redirect,
        Directive::Tags,
        Directive::Series,
        Directive::Symlink,
        Directive::Title,
    ];

    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "insert-summary" => Some(Directive::InsertSummary),
            "meta" => Some(Directive::Meta),
            "public" => Some(Directive::Public),
            "redirect" => Some(Directive::Redirect),
            "tags" => Some(Directive::Tags),
            "series" => Some(Directive::Series),
            "symlink" => Some(Directive::Symlink),
            "title" => Some(Directive::Title),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Directive::InsertSummary => "insert-summary",
            Directive::Meta => "meta",
            Directive::Public => "public",
            Directive::Redirect => "redirect",
            Directive::Tags => "tags",
            Directive::Series => "series",
            Directive::Symlink => "symlink",
            Directive::Title => "title",
        }
    }

    /// Accepted number of arguments.
    pub fn arity(self) -> RangeInclusive<usize> {
        match self {
            Directive::InsertSummary => 0..=0,
            Directive::Meta | Directive::Symlink => 1..=1,
            Directive::Public => 1..=2,
            Directive::Redirect | Directive::Series => 2..=2,
            Directive::Tags | Directive::Title => 0..=usize::MAX,
        }
    }
}

/// A directive line split into its name and arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DirectiveLine<'a> {
    pub name: &'a str,
    pub args: Vec<&'a str>,
}

impl<'a> DirectiveLine<'a> {
    /// Split `line` if it starts with [`MARKER`]. The first whitespace-separated token is the
    /// marker itself and is discarded; a bare marker yields an empty name.
    pub fn parse(line: &'a str) -> Option<Self> {
        if !line.starts_with(MARKER) {
            return None;
        }
        let mut tokens = line.split(is_space).filter(|t| !t.is_empty()).skip(1);
        let name = tokens.next().unwrap_or("");
        Some(Self {
            name,
            args: tokens.collect(),
        })
    }
}
