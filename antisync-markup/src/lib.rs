//! Parser and entry model for the antiblog markup format
//!
//!     A source file is plain text. Lines starting with `~` are directives, everything else is
//!     content. Directives either switch the active section (content, summary, poem, code,
//!     footnote) or set entry metadata (title, tags, series, public id, ...). The parser turns
//!     one file into an [`Entry`]: rendered HTML content, an optional summary and metadata, plus
//!     a canonical map and signature used to sync with the blog API.
//!
//!     This is a pure lib: it never talks to the network and never prints. The antisync-cli
//!     crate drives it.
//!
//! Architecture
//!
//!     raw lines → Parser (directive interpreter) → ContentBuilder → section writers → line
//!     buffers → rendered content/summary → Entry → canonical map + signature
//!
//!     The file structure :
//!     .
//!     ├── buffer.rs               # LineBuffer: literals mixed with blank-line/separator markers
//!     ├── writers.rs              # SectionWriter trait and the four writers
//!     ├── builder.rs              # ContentBuilder: owns buffers, tracks the active section
//!     ├── directive.rs            # Directive table and directive line splitting
//!     ├── parser.rs               # Parser, parse_str, load
//!     ├── entry.rs                # Entry, canonical map
//!     ├── signature.rs            # MD5 signature over sorted maps
//!     ├── inject.rs               # writing assigned ids back into source files
//!     ├── discovery.rs            # recursive file discovery
//!     ├── status.rs               # classification against the remote index
//!     └── error.rs
//!
//! Markup
//!
//!     ~ public dev 1234
//!     ~ title All about stuff
//!     ~ tags some tags
//!     ~ summary
//!     Short version.
//!     ~ content
//!     Long version.
//!
//!     Blank lines separate paragraphs; `~ poem` keeps line breaks, `~ code` wraps lines in
//!     `<pre>`, `~ footnote` moves the following lines to a numbered note below the text.
//!
//! Testing
//!
//!     tests
//!     ├── lib.rs                  # pulls in the submodules below
//!     ├── common                  # fixture loading and canonical map checks
//!     ├── parser                  # end-to-end parsing of fixture files (metadata, sections)
//!     ├── signature               # property tests for the signature
//!     └── fixtures
//!         └── <name>.txt

pub mod buffer;
pub mod builder;
pub mod directive;
pub mod discovery;
pub mod entry;
pub mod error;
pub mod inject;
pub mod parser;
pub mod signature;
pub mod status;
pub mod writers;

pub use discovery::FileSet;
pub use entry::{Entry, SeriesRef};
pub use error::{LoadError, ParseError};
pub use inject::{inject_id, inject_id_into_file};
pub use parser::{load, parse_str, Parser};
pub use signature::signature;
pub use status::{EntryStatus, FileOutcome, RemoteIndex, StatusReport};
