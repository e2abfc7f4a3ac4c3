#![allow(clippy::module_inception)]

use std::{io, panic, thread};

use crate::errors::errors::{Error, ErrorTip};

pub mod ast;
pub mod errors;
pub mod lexer;
pub mod macros;
pub mod parser;
pub mod source;

extern crate regex;

/// Byte offset into the source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Position(pub usize);

#[derive(Debug, Clone, PartialEq, Default)]
pub struct Span {
    pub start: Position,
    pub end: Position,
}

/// Stack reserved for the thread that parses and renders.
///
/// Parsing and rendering recurse once per nesting level, so deeply nested
/// but valid input needs far more than the default main-thread stack.
pub const WORKER_STACK_SIZE: usize = 1 << 30;

/// Runs `work` on a thread with a `WORKER_STACK_SIZE` stack and waits for it.
///
/// A panic in `work` is resumed on the calling thread.
pub fn with_worker_stack<F, R>(work: F) -> io::Result<R>
where
    F: FnOnce() -> R + Send + 'static,
    R: Send + 'static,
{
    let handle = thread::Builder::new()
        .name(String::from("syntax-worker"))
        .stack_size(WORKER_STACK_SIZE)
        .spawn(work)?;

    match handle.join() {
        Ok(result) => Ok(result),
        Err(payload) => panic::resume_unwind(payload),
    }
}

/// Finds the line containing a byte offset.
///
/// Returns the 1-based line number, the line's text and the offset of the
/// position within that line. An offset at the very end of the input maps
/// to the end of the last line.
pub fn get_line_at_position(content: &str, position: usize) -> Option<(usize, String, usize)> {
    if position > content.len() {
        return None;
    }

    let mut start = 0;
    let mut line_number = 1;

    for line in content.split_inclusive('\n') {
        let end = start + line.len();

        if (start..end).contains(&position) {
            return Some((line_number, line.to_string(), position - start));
        }

        start = end;
        line_number += 1;
    }

    // End of input: point just past the last line
    let last = content.lines().last().unwrap_or_default();
    Some((line_number.saturating_sub(1).max(1), last.to_string(), last.len()))
}

#[cfg(test)]
mod tests {
    #[test]
    fn test_get_line_at_position() {
        let content = "Hello, world!\nfoo;\n\nTesting { }\n";

        let (line_number, line, line_pos) = super::get_line_at_position(content, 10).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "Hello, world!\n");
        assert_eq!(line_pos, 10);

        let (line_number, line, line_pos) = super::get_line_at_position(content, 28).unwrap();
        assert_eq!(line_number, 4);
        assert_eq!(line, "Testing { }\n");
        assert_eq!(line_pos, 8);
    }

    #[test]
    fn test_get_line_at_end_of_input() {
        let (line_number, line, line_pos) = super::get_line_at_position("x +", 3).unwrap();
        assert_eq!(line_number, 1);
        assert_eq!(line, "x +");
        assert_eq!(line_pos, 3);

        assert!(super::get_line_at_position("x", 5).is_none());
    }
}

pub fn display_error(error: &Error, source: &str, name: &str) {
    /*
        error: message
        -> main.src
           |
        20 | let a = #;
           | --------^
    */

    if let ErrorTip::None = error.get_tip() {
        eprintln!("Error: {} ({})", error.get_error_name(), error);
    } else {
        eprintln!("Error: {} ({})", error.get_error_name(), error.get_tip());
    }
    eprintln!("-> {}", name);

    let Some((line, line_text, line_pos)) = get_line_at_position(source, error.get_position().0)
    else {
        return;
    };

    let line_string = line.to_string();
    let padding = line_string.len() + 2;

    eprintln!("{:>padding$}", "|");

    let (line_text_removed, removed_whitespace) = remove_starting_whitespace(&line_text);
    eprintln!("{} | {}", line_string, line_text_removed.trim_end());

    let arrows = line_pos.saturating_sub(removed_whitespace) + 1;

    eprintln!("{:>padding$} {:->arrows$}", "|", "^");
}

fn remove_starting_whitespace(string: &str) -> (String, usize) {
    let trimmed = string.trim_start_matches([' ', '\t']);
    (String::from(trimmed), string.len() - trimmed.len())
}
