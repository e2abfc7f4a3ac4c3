//! Loading program text for the command line.

use std::{fs, io, path::Path};

use log::debug;

/// Reads every file and joins the contents in the order given.
///
/// Nothing is inserted between files, so a name at the end of one file and
/// a name at the start of the next lex as a single token.
pub fn read_sources<P: AsRef<Path>>(paths: &[P]) -> io::Result<String> {
    let mut source = String::new();

    for path in paths {
        let path = path.as_ref();
        let contents = fs::read_to_string(path)?;
        debug!("read {} bytes from {}", contents.len(), path.display());
        source.push_str(&contents);
    }

    Ok(source)
}
