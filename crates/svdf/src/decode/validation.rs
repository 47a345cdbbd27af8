//! Layout checks for the tab-indented convention Steam writes.
//!
//! ```text
//! "AppState"
//! {
//! 	"appid"		"228980"
//! 	"UserConfig"
//! 	{
//! 		"language"		"english"
//! 	}
//! }
//! ```
//!
//! A name is followed by tabs and its value on the same line, or by a newline.
//! Everything else is followed by a newline and one tab per open brace (one
//! fewer before a `}`). Deviations are reported as [`Warning`]s and never stop
//! the parse.

use core::fmt;

use crate::decode::scanner::{Scanner, is_blank};
use crate::error::Position;

/// A non-fatal formatting problem.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Warning {
    pub position: Position,
    pub message: String,
    /// The character at `position`, if any.
    pub found: Option<char>,
}

impl fmt::Display for Warning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "line {}, column {}: {}", self.position.line, self.position.column, self.message)?;
        if let Some(c) = self.found {
            write!(f, ", got {c:?}")?;
        }
        Ok(())
    }
}

/// Receives warnings while a document is parsed.
pub trait WarningSink {
    fn warn(&mut self, warning: Warning);
}

impl WarningSink for Vec<Warning> {
    fn warn(&mut self, warning: Warning) {
        self.push(warning);
    }
}

impl<F: FnMut(Warning)> WarningSink for F {
    fn warn(&mut self, warning: Warning) {
        self(warning)
    }
}

/// Discards warnings.
#[derive(Debug, Clone, Copy, Default)]
pub struct Ignore;

impl WarningSink for Ignore {
    fn warn(&mut self, _warning: Warning) {}
}

/// Emits each warning as a `tracing` event at WARN level.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogWarnings;

impl WarningSink for LogWarnings {
    fn warn(&mut self, warning: Warning) {
        tracing::warn!(
            offset = warning.position.offset,
            line = warning.position.line,
            column = warning.position.column,
            found = ?warning.found,
            "odd whitespace: {}",
            warning.message
        );
    }
}

/// What the token just scanned was.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Follow {
    /// A name; its value may follow on the same line after tabs.
    Name,
    /// A leaf value or a brace; a new line must follow.
    Value,
}

pub struct Validator<'s> {
    sink: &'s mut dyn WarningSink,
    count: usize,
}

impl<'s> Validator<'s> {
    pub fn new(sink: &'s mut dyn WarningSink) -> Self {
        Self { sink, count: 0 }
    }

    /// Number of warnings reported so far.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn report(&mut self, sc: &Scanner<'_>, offset: usize, message: impl Into<String>) {
        self.count += 1;
        self.sink.warn(Warning {
            position: sc.position_at(offset),
            message: message.into(),
            found: sc.char_at(offset),
        });
    }

    /// Check the whitespace after a token that ended at the cursor, then skip
    /// all whitespace. `depth` is the number of braces open after the token.
    pub fn after_token(&mut self, sc: &mut Scanner<'_>, follow: Follow, depth: usize) {
        let buf = sc.buf();
        let mut pos = sc.pos();
        let Some(&ch) = buf.get(pos) else {
            return;
        };

        let mut at_line_start = false;
        match ch {
            b'\t' if follow == Follow::Name => {
                pos += count_tabs(&buf[pos..]);
                match buf.get(pos) {
                    None => self.report(sc, pos, "end of input after tab"),
                    Some(b'"') | Some(b'{') => {}
                    Some(_) => self.report(sc, pos, "expected '\"' or '{' after name and tabs"),
                }
            }
            b'\t' => self.report(sc, pos, "expected newline after value"),
            b'\r' if buf.get(pos + 1) == Some(&b'\n') => {
                pos += 2;
                at_line_start = true;
            }
            b'\n' => {
                pos += 1;
                at_line_start = true;
            }
            _ => match follow {
                Follow::Name => self.report(sc, pos, "expected tabs or newline after name"),
                Follow::Value => self.report(sc, pos, "expected newline after value"),
            },
        }

        if at_line_start {
            let tabs = count_tabs(&buf[pos..]);
            pos += tabs;
            match buf.get(pos) {
                None => {
                    if tabs > 0 {
                        self.report(sc, pos, "end of input after tab");
                    }
                }
                Some(&next) => {
                    let expected = if next == b'}' { depth.saturating_sub(1) } else { depth };
                    if tabs != expected {
                        self.report(
                            sc,
                            pos,
                            format!("expected {}, found {}", plural(expected, "tab"), plural(tabs, "tab")),
                        );
                    }
                }
            }
        }

        while pos < buf.len() && is_blank(buf[pos]) {
            pos += 1;
        }
        sc.set_pos(pos);
    }
}

fn count_tabs(s: &[u8]) -> usize {
    s.iter().take_while(|&&b| b == b'\t').count()
}

fn plural(count: usize, noun: &str) -> String {
    if count == 1 {
        format!("one {noun}")
    } else {
        format!("{count} {noun}s")
    }
}
