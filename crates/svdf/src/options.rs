/// Nesting cap applied by [`ParseOptions::default`].
pub const DEFAULT_MAX_DEPTH: usize = 128;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseOptions {
    /// Accept the document only if its root name is one of these. Empty accepts any name.
    pub expected_root_names: Vec<String>,
    /// Maximum brace nesting (None = unlimited)
    pub max_depth: Option<usize>,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            expected_root_names: Vec::new(),
            max_depth: Some(DEFAULT_MAX_DEPTH),
        }
    }
}

impl ParseOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an acceptable root name, e.g. `"AppState"` for app manifests.
    pub fn expect_root(mut self, name: impl Into<String>) -> Self {
        self.expected_root_names.push(name.into());
        self
    }

    pub fn with_max_depth(mut self, max_depth: Option<usize>) -> Self {
        self.max_depth = max_depth;
        self
    }

    pub(crate) fn accepts_root(&self, name: &str) -> bool {
        self.expected_root_names.is_empty() || self.expected_root_names.iter().any(|n| n == name)
    }
}

/// How much detail rendered diagnostics carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Verbosity {
    /// One line: location and message
    #[default]
    Brief,
    /// Adds byte offsets, the character found, and node key previews
    Detailed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub verbosity: Verbosity,
    /// Show whole file paths rather than just file names
    pub full_paths: bool,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            verbosity: Verbosity::Brief,
            full_paths: true,
        }
    }
}

impl RenderOptions {
    pub fn detailed() -> Self {
        Self {
            verbosity: Verbosity::Detailed,
            ..Self::default()
        }
    }

    pub fn is_detailed(&self) -> bool {
        self.verbosity == Verbosity::Detailed
    }
}
