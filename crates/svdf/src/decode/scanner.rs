//! Byte cursor and quoted-string decoding

use crate::error::{ParseError, ParseErrorKind, Position};

/// A decoded string token.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Decoded {
    pub text: String,
    /// Invalid UTF-8 was replaced with U+FFFD
    pub lossy: bool,
}

impl Decoded {
    fn from_bytes(bytes: Vec<u8>) -> Self {
        match String::from_utf8(bytes) {
            Ok(text) => Self { text, lossy: false },
            Err(e) => Self {
                text: String::from_utf8_lossy(e.as_bytes()).into_owned(),
                lossy: true,
            },
        }
    }
}

pub struct Scanner<'a> {
    buf: &'a [u8],
    pos: usize,
}

impl<'a> Scanner<'a> {
    pub fn new(buf: &'a [u8]) -> Self {
        Self { buf, pos: 0 }
    }

    pub fn buf(&self) -> &'a [u8] {
        self.buf
    }

    pub fn pos(&self) -> usize {
        self.pos
    }

    pub fn set_pos(&mut self, pos: usize) {
        self.pos = pos.min(self.buf.len());
    }

    pub fn is_eof(&self) -> bool {
        self.pos >= self.buf.len()
    }

    pub fn peek(&self) -> Option<u8> {
        self.buf.get(self.pos).copied()
    }

    pub fn bump(&mut self) {
        if self.pos < self.buf.len() {
            self.pos += 1;
        }
    }

    /// Skip spaces, tabs, CRs and LFs. Returns how many bytes were skipped.
    pub fn skip_blank(&mut self) -> usize {
        let start = self.pos;
        while let Some(b) = self.peek() {
            if !is_blank(b) {
                break;
            }
            self.pos += 1;
        }
        self.pos - start
    }

    pub fn position_at(&self, offset: usize) -> Position {
        let before = &self.buf[..offset.min(self.buf.len())];
        let line = before.iter().filter(|&&b| b == b'\n').count() + 1;
        let bol = before.iter().rposition(|&b| b == b'\n').map_or(0, |i| i + 1);
        Position {
            offset,
            line,
            column: count_chars(&before[bol..]) + 1,
        }
    }

    /// The character starting at `offset`; U+FFFD for a byte that does not start valid UTF-8.
    pub fn char_at(&self, offset: usize) -> Option<char> {
        let rest = self.buf.get(offset..)?;
        let first = *rest.first()?;
        let end = utf8_width(first).min(rest.len());
        match core::str::from_utf8(&rest[..end]) {
            Ok(s) => s.chars().next(),
            Err(_) => Some(char::REPLACEMENT_CHARACTER),
        }
    }

    pub fn error_at(&self, offset: usize, kind: ParseErrorKind, diagnostic: String) -> ParseError {
        ParseError {
            kind,
            position: self.position_at(offset),
            found: self.char_at(offset),
            diagnostic,
            path: None,
        }
    }

    /// Describe what sits at `offset`, for "expected X, got Y" messages.
    pub fn describe_at(&self, offset: usize) -> String {
        match self.char_at(offset) {
            Some(c) => format!("{c:?}"),
            None => "end of input".to_string(),
        }
    }

    /// Consume a double-quoted string starting at the cursor, decoding escapes.
    ///
    /// On success the cursor sits just past the closing quote.
    pub fn scan_string(&mut self) -> Result<Decoded, ParseError> {
        let open = self.pos;
        match self.peek() {
            Some(b'"') => {}
            Some(_) => {
                return Err(self.error_at(
                    open,
                    ParseErrorKind::ExpectedToken,
                    format!("expected '\"', got {}", self.describe_at(open)),
                ));
            }
            None => {
                return Err(self.error_at(
                    open,
                    ParseErrorKind::UnexpectedEof,
                    "expected '\"', got end of input".to_string(),
                ));
            }
        }

        let mut out = Vec::new();
        let mut i = open + 1;
        loop {
            let Some(rel) = find_quote_or_backslash(&self.buf[i..]) else {
                return Err(self.unterminated(open));
            };
            let at = i + rel;
            out.extend_from_slice(&self.buf[i..at]);
            if self.buf[at] == b'"' {
                self.pos = at + 1;
                break;
            }
            let Some(&esc) = self.buf.get(at + 1) else {
                return Err(self.unterminated(open));
            };
            match unescape(esc) {
                Some(b) => out.push(b),
                None => {
                    let seq = self.char_at(at + 1).unwrap_or(char::REPLACEMENT_CHARACTER);
                    return Err(self.error_at(
                        at,
                        ParseErrorKind::BadEscape,
                        format!("bad escape sequence '\\{seq}'"),
                    ));
                }
            }
            i = at + 2;
        }
        Ok(Decoded::from_bytes(out))
    }

    fn unterminated(&self, open: usize) -> ParseError {
        let opened = self.position_at(open);
        self.error_at(
            self.buf.len(),
            ParseErrorKind::UnterminatedString,
            format!("unterminated string opened at line {}, column {}", opened.line, opened.column),
        )
    }
}

#[inline]
pub fn is_blank(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\r' | b'\n')
}

/// The escape set of the Source engine's text buffers.
#[inline]
fn unescape(b: u8) -> Option<u8> {
    Some(match b {
        b'a' => 0x07,
        b'b' => 0x08,
        b'f' => 0x0C,
        b'n' => b'\n',
        b'r' => b'\r',
        b't' => b'\t',
        b'v' => 0x0B,
        b'"' => b'"',
        b'?' => b'?',
        b'\\' => b'\\',
        b'\'' => b'\'',
        _ => return None,
    })
}

#[inline]
#[cfg(feature = "perf_memchr")]
fn find_quote_or_backslash(s: &[u8]) -> Option<usize> {
    memchr::memchr2(b'"', b'\\', s)
}

#[inline]
#[cfg(not(feature = "perf_memchr"))]
fn find_quote_or_backslash(s: &[u8]) -> Option<usize> {
    s.iter().position(|&b| b == b'"' || b == b'\\')
}

fn utf8_width(first: u8) -> usize {
    match first {
        0xC0..=0xDF => 2,
        0xE0..=0xEF => 3,
        0xF0..=0xF7 => 4,
        _ => 1,
    }
}

// Continuation bytes don't start a character; stray ones count as one each.
fn count_chars(bytes: &[u8]) -> usize {
    match core::str::from_utf8(bytes) {
        Ok(s) => s.chars().count(),
        Err(_) => bytes.iter().filter(|&&b| b & 0xC0 != 0x80).count(),
    }
}
