#![forbid(unsafe_code)]

//! Carousel configuration.
//!
//! [`CarouselConfig`] is the immutable options record a carousel is built
//! from. Every field has a default, and callers override only what they need:
//!
//! ```
//! use glide_core::config::{Breakpoints, CarouselConfig, PerPage};
//!
//! let config = CarouselConfig::default()
//!     .per_page(PerPage::Responsive(Breakpoints::from_pairs([(0, 1), (768, 2)])))
//!     .looping(true)
//!     .duration_ms(300);
//! assert_eq!(config.threshold, 20);
//! ```
//!
//! # Loading
//!
//! With the `config` feature the same record loads from TOML or JSON. Any
//! field left out of the file keeps its default, so a file is a shallow
//! override of [`CarouselConfig::default`].
//!
//! ```toml
//! perPage = { "0" = 1, "768" = 2, "1024" = 4 }
//! loop = true
//! durationMs = 250
//! ```

use std::collections::BTreeMap;
#[cfg(feature = "config")]
use std::path::Path;

#[cfg(feature = "config")]
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

// ---------------------------------------------------------------------------
// PerPage
// ---------------------------------------------------------------------------

/// Breakpoint table: minimum viewport width → items per page.
///
/// Keys are kept sorted so resolution can walk them in ascending order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(
    feature = "config",
    derive(Serialize, Deserialize),
    serde(
        try_from = "BTreeMap<String, usize>",
        into = "BTreeMap<String, usize>"
    )
)]
pub struct Breakpoints(BTreeMap<u32, usize>);

impl Breakpoints {
    /// Create an empty table.
    #[must_use]
    pub fn new() -> Self {
        Self(BTreeMap::new())
    }

    /// Build a table from `(min_width, per_page)` pairs.
    #[must_use]
    pub fn from_pairs(pairs: impl IntoIterator<Item = (u32, usize)>) -> Self {
        Self(pairs.into_iter().collect())
    }

    /// Add or replace a breakpoint.
    #[must_use]
    pub fn with(mut self, min_width: u32, per_page: usize) -> Self {
        self.0.insert(min_width, per_page);
        self
    }

    /// Iterate breakpoints in ascending width order.
    pub fn iter(&self) -> impl Iterator<Item = (u32, usize)> + '_ {
        self.0.iter().map(|(&k, &v)| (k, v))
    }

    /// Number of breakpoints.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the table is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl TryFrom<BTreeMap<String, usize>> for Breakpoints {
    type Error = ConfigError;

    fn try_from(raw: BTreeMap<String, usize>) -> Result<Self, Self::Error> {
        let mut table = BTreeMap::new();
        for (key, value) in raw {
            let width = key
                .trim()
                .parse::<u32>()
                .map_err(|_| ConfigError::InvalidBreakpoint(key.clone()))?;
            table.insert(width, value);
        }
        Ok(Self(table))
    }
}

impl From<Breakpoints> for BTreeMap<String, usize> {
    fn from(bp: Breakpoints) -> Self {
        bp.0.into_iter().map(|(k, v)| (k.to_string(), v)).collect()
    }
}

/// How many items a page shows.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize), serde(untagged))]
pub enum PerPage {
    /// Always the same count.
    Fixed(usize),
    /// Count chosen by viewport width.
    Responsive(Breakpoints),
}

impl Default for PerPage {
    fn default() -> Self {
        Self::Fixed(1)
    }
}

impl From<usize> for PerPage {
    fn from(n: usize) -> Self {
        Self::Fixed(n)
    }
}

impl From<Breakpoints> for PerPage {
    fn from(bp: Breakpoints) -> Self {
        Self::Responsive(bp)
    }
}

// ---------------------------------------------------------------------------
// Transition
// ---------------------------------------------------------------------------

/// A transition applied to the sliding frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    /// Duration in milliseconds; `0` snaps.
    pub duration_ms: u32,
    /// Easing function name, passed through to the surface.
    pub easing: String,
}

impl Transition {
    /// Whether this transition snaps without animating.
    #[must_use]
    pub const fn is_instant(&self) -> bool {
        self.duration_ms == 0
    }
}

impl std::fmt::Display for Transition {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "all {}ms {}", self.duration_ms, self.easing)
    }
}

// ---------------------------------------------------------------------------
// CarouselConfig
// ---------------------------------------------------------------------------

/// Options a carousel is constructed from.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "config", serde(default, rename_all = "camelCase"))]
pub struct CarouselConfig {
    /// Selector used by `Carousel::mount` to find the container.
    pub selector: String,
    /// Slide transition duration in milliseconds (default: 200).
    #[cfg_attr(feature = "config", serde(alias = "duration"))]
    pub duration_ms: u32,
    /// Easing function name (default: `ease-out`).
    pub easing: String,
    /// Items per page (default: 1).
    pub per_page: PerPage,
    /// Initial slide (default: 0).
    pub start_index: isize,
    /// Enable mouse drag and touch swipe (default: true).
    pub draggable: bool,
    /// Allow one gesture to move more than one slide (default: true).
    pub multiple_drag: bool,
    /// Minimum drag distance in pixels before a gesture commits (default: 20).
    pub threshold: u32,
    /// Wrap around using cloned boundary items (default: false).
    #[cfg_attr(feature = "config", serde(rename = "loop"))]
    pub looping: bool,
    /// Right-to-left layout (default: false).
    pub rtl: bool,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            selector: ".glide".to_string(),
            duration_ms: 200,
            easing: "ease-out".to_string(),
            per_page: PerPage::default(),
            start_index: 0,
            draggable: true,
            multiple_drag: true,
            threshold: 20,
            looping: false,
            rtl: false,
        }
    }
}

impl CarouselConfig {
    /// Set the mount selector.
    #[must_use]
    pub fn selector(mut self, selector: impl Into<String>) -> Self {
        self.selector = selector.into();
        self
    }

    /// Set the transition duration.
    #[must_use]
    pub fn duration_ms(mut self, duration_ms: u32) -> Self {
        self.duration_ms = duration_ms;
        self
    }

    /// Set the easing function name.
    #[must_use]
    pub fn easing(mut self, easing: impl Into<String>) -> Self {
        self.easing = easing.into();
        self
    }

    /// Set items per page.
    #[must_use]
    pub fn per_page(mut self, per_page: impl Into<PerPage>) -> Self {
        self.per_page = per_page.into();
        self
    }

    /// Set the initial slide.
    #[must_use]
    pub fn start_index(mut self, start_index: isize) -> Self {
        self.start_index = start_index;
        self
    }

    /// Enable or disable drag/swipe.
    #[must_use]
    pub fn draggable(mut self, draggable: bool) -> Self {
        self.draggable = draggable;
        self
    }

    /// Allow gestures to move several slides.
    #[must_use]
    pub fn multiple_drag(mut self, multiple_drag: bool) -> Self {
        self.multiple_drag = multiple_drag;
        self
    }

    /// Set the drag commit threshold in pixels.
    #[must_use]
    pub fn threshold(mut self, threshold: u32) -> Self {
        self.threshold = threshold;
        self
    }

    /// Enable or disable infinite looping.
    #[must_use]
    pub fn looping(mut self, looping: bool) -> Self {
        self.looping = looping;
        self
    }

    /// Enable or disable right-to-left layout.
    #[must_use]
    pub fn rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    /// Transition used for animated moves.
    #[must_use]
    pub fn transition(&self) -> Transition {
        Transition {
            duration_ms: self.duration_ms,
            easing: self.easing.clone(),
        }
    }

    /// Transition used while tracking a drag or snapping across the loop seam.
    #[must_use]
    pub fn instant_transition(&self) -> Transition {
        Transition {
            duration_ms: 0,
            easing: self.easing.clone(),
        }
    }

    /// Check the structural constraints a carousel relies on.
    pub fn validate(&self) -> Result<(), ConfigError> {
        match &self.per_page {
            PerPage::Fixed(0) => return Err(ConfigError::ZeroPerPage),
            PerPage::Fixed(_) => {}
            PerPage::Responsive(bp) => {
                if let Some((breakpoint, _)) = bp.iter().find(|&(_, n)| n == 0) {
                    return Err(ConfigError::ZeroBreakpointValue { breakpoint });
                }
            }
        }

        let mut errors = Vec::new();
        if self.easing.trim().is_empty() {
            errors.push("easing must not be empty".to_string());
        }
        if errors.is_empty() {
            Ok(())
        } else {
            Err(ConfigError::Invalid(errors))
        }
    }

    /// Load from a TOML string.
    #[cfg(feature = "config")]
    pub fn from_toml_str(s: &str) -> Result<Self, ConfigLoadError> {
        let config: Self = toml::from_str(s).map_err(ConfigLoadError::Toml)?;
        config.validate().map_err(ConfigLoadError::Validation)?;
        Ok(config)
    }

    /// Load from a TOML file on disk.
    #[cfg(feature = "config")]
    pub fn from_toml_file(path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigLoadError::Io)?;
        Self::from_toml_str(&content)
    }

    /// Load from a JSON string.
    #[cfg(feature = "config")]
    pub fn from_json_str(s: &str) -> Result<Self, ConfigLoadError> {
        let config: Self = serde_json::from_str(s).map_err(ConfigLoadError::Json)?;
        config.validate().map_err(ConfigLoadError::Validation)?;
        Ok(config)
    }

    /// Load from a JSON file on disk.
    #[cfg(feature = "config")]
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, ConfigLoadError> {
        let content = std::fs::read_to_string(path.as_ref()).map_err(ConfigLoadError::Io)?;
        Self::from_json_str(&content)
    }
}

// ---------------------------------------------------------------------------
// Load errors
// ---------------------------------------------------------------------------

/// Errors from loading a configuration file.
#[cfg(feature = "config")]
#[derive(Debug)]
pub enum ConfigLoadError {
    /// I/O error reading a file.
    Io(std::io::Error),
    /// TOML parse error.
    Toml(toml::de::Error),
    /// JSON parse error.
    Json(serde_json::Error),
    /// The file parsed but failed validation.
    Validation(ConfigError),
}

#[cfg(feature = "config")]
impl std::fmt::Display for ConfigLoadError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::Toml(e) => write!(f, "TOML parse error: {e}"),
            Self::Json(e) => write!(f, "JSON parse error: {e}"),
            Self::Validation(e) => write!(f, "validation error: {e}"),
        }
    }
}

#[cfg(feature = "config")]
impl std::error::Error for ConfigLoadError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            Self::Toml(e) => Some(e),
            Self::Json(e) => Some(e),
            Self::Validation(e) => Some(e),
        }
    }
}
