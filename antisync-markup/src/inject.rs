//! Id back-injection
//!
//! Once the remote side has created an entry, the assigned id is written back into the source
//! file so that the next parse sees an existing entry. Only lines reading exactly
//! `~ public <target>` (surrounding whitespace ignored) are rewritten.

use crate::buffer::is_space;
use crate::directive::MARKER;
use std::fs;
use std::io;
use std::path::Path;

/// Rewrite `source`, appending `id` to every bare `public` directive for `target`.
pub fn inject_id(target: &str, source: &str, id: i64) -> String {
    let search = format!("{MARKER} public {target}");
    let replace = format!("{MARKER} public {target} {id}\n");
    source
        .split_inclusive('\n')
        .map(|line| {
            if line.trim_matches(is_space) == search {
                replace.as_str()
            } else {
                line
            }
        })
        .collect()
}

/// Apply [`inject_id`] to the file at `path` in place.
pub fn inject_id_into_file(target: &str, path: impl AsRef<Path>, id: i64) -> io::Result<()> {
    let path = path.as_ref();
    let source = fs::read_to_string(path)?;
    let rewritten = inject_id(target, &source, id);
    if rewritten != source {
        log::info!("{}: assigned id {id} for '{target}'", path.display());
    }
    fs::write(path, rewritten)
}
