use crate::decode::scanner::{Scanner, is_blank};
use crate::decode::validation::{Follow, Validator, WarningSink};
use crate::document::{Document, SourceInfo};
use crate::error::{ParseError, ParseErrorKind};
use crate::options::ParseOptions;
use crate::value::{Node, Value};

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

pub struct Parser<'a, 's> {
    scanner: Scanner<'a>,
    validator: Validator<'s>,
    depth: usize,
    max_depth: Option<usize>,
}

impl<'a, 's> Parser<'a, 's> {
    pub fn new(input: &'a [u8], options: &ParseOptions, sink: &'s mut dyn WarningSink) -> Self {
        Self {
            scanner: Scanner::new(input),
            validator: Validator::new(sink),
            depth: 0,
            max_depth: options.max_depth,
        }
    }

    /// Number of warnings reported so far.
    pub fn warning_count(&self) -> usize {
        self.validator.count()
    }

    /// Parse `document := string value`. Returns the root name, its offset, and the root value.
    pub fn parse_root(&mut self) -> Result<(String, usize, Value), ParseError> {
        self.skip_preamble();
        let name_offset = self.scanner.pos();
        let name = self.parse_string(Follow::Name)?;
        let value = self.parse_value()?;
        if !self.scanner.is_eof() {
            let pos = self.scanner.pos();
            self.validator.report(&self.scanner, pos, "ignoring content after root value");
        }
        Ok((name, name_offset, value))
    }

    fn skip_preamble(&mut self) {
        if self.scanner.buf().starts_with(UTF8_BOM) {
            self.validator.report(&self.scanner, 0, "ignoring byte-order mark");
            self.scanner.set_pos(UTF8_BOM.len());
        }
        let start = self.scanner.pos();
        if self.scanner.peek().is_some_and(is_blank) {
            self.validator.report(&self.scanner, start, "unexpected whitespace before root name");
            self.scanner.skip_blank();
        }
    }

    #[inline(never)]
    fn parse_string(&mut self, follow: Follow) -> Result<String, ParseError> {
        let open = self.scanner.pos();
        let decoded = self.scanner.scan_string()?;
        if decoded.lossy {
            self.validator
                .report(&self.scanner, open, "string is not valid UTF-8; invalid bytes replaced");
        }
        self.validator.after_token(&mut self.scanner, follow, self.depth);
        Ok(decoded.text)
    }

    fn parse_value(&mut self) -> Result<Value, ParseError> {
        match self.scanner.peek() {
            Some(b'"') => Ok(Value::Leaf(self.parse_string(Follow::Value)?)),
            Some(b'{') => Ok(Value::Node(self.parse_node()?)),
            Some(_) => Err(self.unexpected(self.scanner.pos(), "'\"' or '{'")),
            None => Err(self.eof_before_value()),
        }
    }

    /// Parse `'{' member* '}'` with the cursor on the `{`.
    fn parse_node(&mut self) -> Result<Node, ParseError> {
        let open = self.scanner.pos();
        if let Some(limit) = self.max_depth {
            if self.depth >= limit {
                return Err(self.too_deep(open, limit));
            }
        }
        self.depth += 1;
        self.scanner.bump();
        self.validator.after_token(&mut self.scanner, Follow::Value, self.depth);

        let mut node = Node::new();
        loop {
            match self.scanner.peek() {
                Some(b'"') => {
                    let name = self.parse_string(Follow::Name)?;
                    let value = self.parse_value()?;
                    node.insert(name, value);
                }
                Some(b'}') => {
                    self.scanner.bump();
                    self.depth -= 1;
                    self.validator.after_token(&mut self.scanner, Follow::Value, self.depth);
                    return Ok(node);
                }
                Some(_) => return Err(self.unexpected(self.scanner.pos(), "'\"' or '}'")),
                None => return Err(self.eof_in_node(open)),
            }
        }
    }

    // Error constructors stay out of the recursive frames.

    #[cold]
    #[inline(never)]
    fn unexpected(&self, pos: usize, wanted: &str) -> ParseError {
        self.scanner.error_at(
            pos,
            ParseErrorKind::UnexpectedToken,
            format!("expected {wanted}, got {}", self.scanner.describe_at(pos)),
        )
    }

    #[cold]
    #[inline(never)]
    fn eof_before_value(&self) -> ParseError {
        self.scanner.error_at(
            self.scanner.pos(),
            ParseErrorKind::UnexpectedEof,
            "expected a value, got end of input".to_string(),
        )
    }

    #[cold]
    #[inline(never)]
    fn eof_in_node(&self, open: usize) -> ParseError {
        let opened = self.scanner.position_at(open);
        self.scanner.error_at(
            self.scanner.pos(),
            ParseErrorKind::UnexpectedEof,
            format!(
                "end of input inside node opened at line {}, column {}",
                opened.line, opened.column
            ),
        )
    }

    #[cold]
    #[inline(never)]
    fn too_deep(&self, open: usize, limit: usize) -> ParseError {
        tracing::trace!(limit, offset = open, "nesting limit reached");
        self.scanner.error_at(
            open,
            ParseErrorKind::DepthLimitExceeded { limit },
            format!("nesting deeper than {limit} levels"),
        )
    }

    fn wrong_root_name(&self, actual: &str, offset: usize, options: &ParseOptions) -> ParseError {
        let expected = &options.expected_root_names;
        let wanted = expected.iter().map(|n| format!("{n:?}")).collect::<Vec<_>>().join(" or ");
        self.scanner.error_at(
            offset,
            ParseErrorKind::WrongRootName {
                actual: actual.to_string(),
                expected: expected.clone(),
            },
            format!("root name is {actual:?} instead of {wanted}"),
        )
    }
}

/// Parse a complete simple VDF buffer into a [`Document`].
///
/// Formatting warnings go to `sink`; they never make the parse fail.
pub fn parse_document(
    input: &[u8],
    source: SourceInfo,
    options: &ParseOptions,
    sink: &mut dyn WarningSink,
) -> Result<Document, ParseError> {
    let _span = tracing::debug_span!("parse", path = ?source.path, bytes = input.len()).entered();

    let mut p = Parser::new(input, options, sink);
    let (root_name, name_offset, root_value) = p
        .parse_root()
        .map_err(|e| e.with_path(source.path.as_deref()))?;
    if !options.accepts_root(&root_name) {
        return Err(p
            .wrong_root_name(&root_name, name_offset, options)
            .with_path(source.path.as_deref()));
    }
    tracing::debug!(root = %root_name, warnings = p.warning_count(), "parsed document");
    Ok(Document::new(source, input.len(), root_name, root_value))
}

/// Parse with default options, collecting warnings into a vector.
pub fn parse_collecting(input: &[u8]) -> (Result<Document, ParseError>, Vec<crate::Warning>) {
    let mut warnings = Vec::new();
    let doc = parse_document(input, SourceInfo::default(), &ParseOptions::default(), &mut warnings);
    (doc, warnings)
}
