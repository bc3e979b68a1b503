#![forbid(unsafe_code)]

//! Error model.
//!
//! Two families of failure exist and both are synchronous:
//!
//! - [`ConfigError`]: the carousel cannot be constructed. Nothing is retained.
//! - [`RangeError`]: a mutating call was given an index or item it cannot
//!   accept. The call is validated before anything is mutated, so state is
//!   exactly as it was before the call.
//!
//! Navigation requests that cannot move (fewer items than fit on a page) are
//! not errors; they are silently ignored.

use std::fmt;

// ── Domain-Specific Error Types ─────────────────────────────────────────

/// Construction and configuration errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    /// The selector did not resolve to a container.
    SelectorNotFound(String),
    /// The container has no children to slide.
    EmptyContainer,
    /// `per_page` was a fixed zero.
    ZeroPerPage,
    /// A responsive breakpoint maps to zero items.
    ZeroBreakpointValue { breakpoint: u32 },
    /// A breakpoint key could not be parsed as a width.
    InvalidBreakpoint(String),
    /// Other validation failures, one message per problem.
    Invalid(Vec<String>),
}

/// Index and membership errors raised by insert/remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RangeError {
    /// Insert index outside `[0, len + 1]`.
    InsertOutOfBounds { index: usize, len: usize },
    /// The item is already part of the carousel.
    DuplicateItem { index: usize },
    /// Remove index outside `[0, len)`.
    RemoveOutOfBounds { index: usize, len: usize },
}

// ── Unified Error ───────────────────────────────────────────────────────

/// Top-level error type for carousel APIs.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// Construction failed.
    Config(ConfigError),
    /// A mutating call was rejected.
    Range(RangeError),
}

/// Standard result type for carousel APIs.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Error type label for logging.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "config",
            Self::Range(_) => "range",
        }
    }

    /// Whether the carousel that raised this error is still usable.
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Range(_))
    }
}

// ── Display ─────────────────────────────────────────────────────────────

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::SelectorNotFound(selector) => {
                write!(f, "selector '{selector}' did not resolve to a container")
            }
            Self::EmptyContainer => write!(f, "container has no items"),
            Self::ZeroPerPage => write!(f, "per_page must be greater than zero"),
            Self::ZeroBreakpointValue { breakpoint } => {
                write!(f, "breakpoint {breakpoint} maps to zero items")
            }
            Self::InvalidBreakpoint(key) => write!(f, "invalid breakpoint key '{key}'"),
            Self::Invalid(errors) => write!(f, "invalid configuration: {}", errors.join("; ")),
        }
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InsertOutOfBounds { index, len } => {
                write!(f, "cannot insert at index {index} (len {len})")
            }
            Self::DuplicateItem { index } => {
                write!(f, "item is already in the carousel at index {index}")
            }
            Self::RemoveOutOfBounds { index, len } => {
                write!(f, "no item to remove at index {index} (len {len})")
            }
        }
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Config(e) => write!(f, "configuration error: {e}"),
            Self::Range(e) => write!(f, "range error: {e}"),
        }
    }
}

// ── std::error::Error ───────────────────────────────────────────────────

impl std::error::Error for ConfigError {}
impl std::error::Error for RangeError {}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Config(e) => Some(e),
            Self::Range(e) => Some(e),
        }
    }
}

// ── From conversions ────────────────────────────────────────────────────

impl From<ConfigError> for Error {
    fn from(e: ConfigError) -> Self {
        Self::Config(e)
    }
}

impl From<RangeError> for Error {
    fn from(e: RangeError) -> Self {
        Self::Range(e)
    }
}
