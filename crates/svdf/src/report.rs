//! Human-readable rendering of errors and warnings.
//!
//! The error types always carry full structured data; how much of it shows up
//! in text is decided here by [`RenderOptions`].

use std::path::Path;

use crate::decode::validation::Warning;
use crate::error::{Error, KeyPath, LookupError, ParseError, ParseErrorKind};
use crate::options::RenderOptions;

/// Keys listed for a node before eliding the rest
const KEY_PREVIEW: usize = 8;

fn origin(path: Option<&Path>, opts: &RenderOptions) -> String {
    match path {
        Some(p) if opts.full_paths => p.display().to_string(),
        Some(p) => p
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| p.display().to_string()),
        None => "<input>".to_string(),
    }
}

/// `"A" or "B" or "C"`
pub fn quote_names(names: &[String]) -> String {
    names.iter().map(|n| format!("{n:?}")).collect::<Vec<_>>().join(" or ")
}

/// `path:line:column: diagnostic`, plus offset and next character when detailed.
pub fn render_parse_error(err: &ParseError, opts: &RenderOptions) -> String {
    let mut out = format!(
        "{}:{}:{}: {}",
        origin(err.path.as_deref(), opts),
        err.position.line,
        err.position.column,
        err.diagnostic
    );
    if opts.is_detailed() {
        out.push_str(&format!(" (offset {}", err.position.offset));
        match err.found {
            Some(c) => out.push_str(&format!(", next {c:?})")),
            None => out.push_str(", at end of input)"),
        }
        if let ParseErrorKind::WrongRootName { actual, expected } = &err.kind {
            out.push_str(&format!(
                "\n  line {} contains {actual:?} instead of {}",
                err.position.line,
                quote_names(expected)
            ));
        }
    }
    out
}

pub fn render_lookup_error(err: &LookupError, source: Option<&Path>, opts: &RenderOptions) -> String {
    if !opts.is_detailed() {
        return err.to_string();
    }
    let mut out = format!("file {:?}: ", origin(source, opts));
    match err {
        LookupError::UnknownKey { path } => {
            let (last, parent) = match path.split_last() {
                Some((last, parent)) => (last.as_str(), parent),
                None => ("", &path[..]),
            };
            out.push_str(&format!("unknown name {last:?} at {}", KeyPath(parent)));
        }
        LookupError::NotALeaf { path, keys } => {
            out.push_str(&err.to_string());
            let shown: Vec<String> = keys.iter().take(KEY_PREVIEW).map(|k| format!("{k:?}")).collect();
            let more = if keys.len() > KEY_PREVIEW { ", ..." } else { "" };
            out.push_str(&format!("\n  {} keys: {}{more}", KeyPath(path), shown.join(", ")));
        }
        LookupError::NotANode { .. } => out.push_str(&err.to_string()),
    }
    out
}

/// Renders in the style `odd whitespace in <file> at offset N (line L): message, got 'c'`.
pub fn render_warning(warning: &Warning, source: Option<&Path>, opts: &RenderOptions) -> String {
    let mut out = format!("odd whitespace in {}", origin(source, opts));
    if opts.is_detailed() {
        out.push_str(&format!(" at offset {}", warning.position.offset));
    }
    out.push_str(&format!(
        " (line {}, column {}): {}",
        warning.position.line, warning.position.column, warning.message
    ));
    if let Some(c) = warning.found {
        out.push_str(&format!(", got {c:?}"));
    }
    out
}

pub fn render_error(err: &Error, source: Option<&Path>, opts: &RenderOptions) -> String {
    match err {
        Error::Parse(e) => render_parse_error(e, opts),
        Error::Lookup(e) => render_lookup_error(e, source, opts),
        Error::Io { action, path, source } => {
            format!("cannot {action} {:?}: {source}", origin(Some(path), opts))
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::error::Position;
    use crate::options::Verbosity;

    fn wrong_root() -> ParseError {
        ParseError {
            kind: ParseErrorKind::WrongRootName {
                actual: "X".into(),
                expected: vec!["Y".into(), "Z".into()],
            },
            position: Position { offset: 0, line: 1, column: 1 },
            found: Some('"'),
            diagnostic: "root name is \"X\" instead of \"Y\" or \"Z\"".into(),
            path: Some(PathBuf::from("/steam/steamapps/appmanifest_10.acf")),
        }
    }

    #[test]
    fn brief_parse_error() {
        let opts = RenderOptions { verbosity: Verbosity::Brief, full_paths: false };
        assert_eq!(
            render_parse_error(&wrong_root(), &opts),
            "appmanifest_10.acf:1:1: root name is \"X\" instead of \"Y\" or \"Z\""
        );
    }

    #[test]
    fn detailed_parse_error_adds_offset_and_expected() {
        let out = render_parse_error(&wrong_root(), &RenderOptions::detailed());
        assert!(out.starts_with("/steam/steamapps/appmanifest_10.acf:1:1:"));
        assert!(out.contains("(offset 0, next '\"')"));
        assert!(out.contains("line 1 contains \"X\" instead of \"Y\" or \"Z\""));
    }

    #[test]
    fn wrong_root_after_blank_lines_names_its_line() {
        let opts = crate::ParseOptions::new().expect_root("AppState");
        let err = crate::parse_with(b"\n\n\"SKU\"\t\"v\"\n", &opts, &mut crate::Ignore).unwrap_err();
        let out = render_parse_error(&err, &RenderOptions::detailed());
        assert!(out.starts_with("<input>:3:1:"), "{out}");
        assert!(out.contains("line 3 contains \"SKU\" instead of \"AppState\""), "{out}");
    }

    #[test]
    fn detailed_not_a_leaf_previews_keys() {
        let keys: Vec<String> = (0..10).map(|i| i.to_string()).collect();
        let err = LookupError::NotALeaf { path: vec!["apps".into()], keys };
        let out = render_lookup_error(&err, Some(Path::new("a.vdf")), &RenderOptions::detailed());
        assert!(out.starts_with("file \"a.vdf\": \"apps\" is a node with 10 key(s)"));
        assert!(out.ends_with("\"7\", ..."));
        let brief = render_lookup_error(&err, None, &RenderOptions::default());
        assert_eq!(brief, "\"apps\" is a node with 10 key(s), not a string");
    }

    #[test]
    fn detailed_unknown_key_names_parent() {
        let err = LookupError::UnknownKey { path: vec!["a".into(), "b".into()] };
        let out = render_lookup_error(&err, None, &RenderOptions::detailed());
        assert_eq!(out, "file \"<input>\": unknown name \"b\" at \"a\"");
    }

    #[test]
    fn warning_rendering() {
        let w = Warning {
            position: Position { offset: 12, line: 3, column: 2 },
            message: "expected newline after value".into(),
            found: Some(' '),
        };
        assert_eq!(
            render_warning(&w, Some(Path::new("x.vdf")), &RenderOptions::default()),
            "odd whitespace in x.vdf (line 3, column 2): expected newline after value, got ' '"
        );
        assert!(render_warning(&w, None, &RenderOptions::detailed()).contains("at offset 12"));
    }
}
