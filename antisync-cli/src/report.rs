//! Console reporting for batch commands.
//!
//! Every file produces at most one tagged line (`[NEW] path`, `[ERROR] path`, ...). Lines
//! for files that need no attention are only shown in verbose mode.

use antisync_markup::{EntryStatus, FileOutcome};
use std::fmt::Display;
use std::io::{self, Write};
use std::path::Path;

pub struct Reporter<W: Write> {
    out: W,
    verbose: bool,
}

impl<W: Write> Reporter<W> {
    pub fn new(out: W, verbose: bool) -> Self {
        Self { out, verbose }
    }

    pub fn say(&mut self, message: impl Display) -> io::Result<()> {
        writeln!(self.out, "{message}")
    }

    /// Like [`Reporter::say`], but only in verbose mode.
    pub fn babble(&mut self, message: impl Display) -> io::Result<()> {
        if self.verbose {
            self.say(message)
        } else {
            Ok(())
        }
    }

    pub fn tagged(&mut self, tag: &str, path: &Path) -> io::Result<()> {
        self.say(format_args!("[{tag}] {}", path.display()))
    }

    pub fn error(&mut self, path: &Path, error: impl Display) -> io::Result<()> {
        self.say(format_args!("[ERROR] {}\n    {error}", path.display()))
    }

    /// Report one classified file the way `status` does.
    pub fn outcome(&mut self, outcome: &FileOutcome) -> io::Result<()> {
        match outcome {
            FileOutcome::Classified { path, status, .. } => match status {
                EntryStatus::Same => {
                    if self.verbose {
                        self.tagged(status.label(), path)?;
                    }
                    Ok(())
                }
                _ => self.tagged(status.label(), path),
            },
            FileOutcome::Unpublished { path } => {
                if self.verbose {
                    self.tagged("SKIP", path)?;
                }
                Ok(())
            }
            FileOutcome::Failed { path, error } => self.error(path, error),
        }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
