//! Game configuration.
//!
//! Embedders configure the engine at construction by providing a
//! `GridConfig`: grid dimensions, the countdown limit, the two resolution
//! delays, and an optional presentation theme.
//!
//! Validation happens once, at construction. A grid with an odd cell count
//! cannot be paired, so it is rejected with `ConfigError` rather than dealt
//! with one card left over. All play-time operations are total.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Delay before a won round resets, in milliseconds.
pub const DEFAULT_WIN_DELAY_MS: u64 = 500;

/// Delay before a mismatched pair flips back down, in milliseconds.
pub const DEFAULT_MISMATCH_DELAY_MS: u64 = 1000;

/// Configuration error raised at engine construction.
///
/// There is no partial or degraded mode: an invalid configuration prevents
/// the game from starting at all.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ConfigError {
    /// `rows * cols` is odd, so the cards cannot be paired.
    OddCellCount { rows: u16, cols: u16 },
    /// `rows` or `cols` is zero.
    EmptyGrid,
    /// The countdown limit is zero seconds.
    ZeroTimeLimit,
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::OddCellCount { rows, cols } => {
                write!(f, "{}x{} grid has an odd cell count and cannot be paired", rows, cols)
            }
            ConfigError::EmptyGrid => write!(f, "grid dimensions must be positive"),
            ConfigError::ZeroTimeLimit => write!(f, "time limit must be positive"),
        }
    }
}

impl std::error::Error for ConfigError {}

/// Opaque presentation theme.
///
/// A string-to-string map (the original keys colors by CSS custom property
/// name). The engine never interprets it; it is carried so the embedder can
/// read it back alongside the rest of the configuration.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    values: FxHashMap<String, String>,
}

impl Theme {
    /// Create an empty theme.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a theme entry (builder pattern).
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.values.insert(key.into(), value.into());
        self
    }

    /// Look up a theme entry.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    /// Iterate over all entries.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    /// Number of entries.
    #[must_use]
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether the theme has no entries.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }
}

/// Complete engine configuration.
///
/// ## Example
///
/// ```
/// use match_grid::GridConfig;
///
/// let config = GridConfig::new(2, 2)
///     .with_time_limit_secs(60)
///     .with_mismatch_delay_ms(750);
///
/// assert!(config.validate().is_ok());
/// assert_eq!(config.total_cards(), 4);
/// assert_eq!(config.total_pairs(), 2);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridConfig {
    /// Grid rows.
    pub rows: u16,

    /// Grid columns.
    pub cols: u16,

    /// Countdown limit in seconds.
    pub time_limit_secs: u32,

    /// Delay before a won round resets.
    pub win_delay_ms: u64,

    /// Delay before a mismatched pair flips back down.
    ///
    /// Independent of `win_delay_ms`; the two are separate tunables.
    pub mismatch_delay_ms: u64,

    /// Opaque presentation theme, if any.
    pub theme: Option<Theme>,
}

impl GridConfig {
    /// Create a configuration with default timing (60 s limit, 500 ms win
    /// delay, 1000 ms mismatch delay) and no theme.
    #[must_use]
    pub fn new(rows: u16, cols: u16) -> Self {
        Self {
            rows,
            cols,
            time_limit_secs: 60,
            win_delay_ms: DEFAULT_WIN_DELAY_MS,
            mismatch_delay_ms: DEFAULT_MISMATCH_DELAY_MS,
            theme: None,
        }
    }

    /// Set the countdown limit in seconds.
    #[must_use]
    pub fn with_time_limit_secs(mut self, secs: u32) -> Self {
        self.time_limit_secs = secs;
        self
    }

    /// Set the win-completion delay.
    #[must_use]
    pub fn with_win_delay_ms(mut self, ms: u64) -> Self {
        self.win_delay_ms = ms;
        self
    }

    /// Set the mismatch flip-back delay.
    #[must_use]
    pub fn with_mismatch_delay_ms(mut self, ms: u64) -> Self {
        self.mismatch_delay_ms = ms;
        self
    }

    /// Attach a presentation theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.theme = Some(theme);
        self
    }

    /// Total number of cards on the grid.
    #[must_use]
    pub fn total_cards(&self) -> u32 {
        u32::from(self.rows) * u32::from(self.cols)
    }

    /// Total number of pairs on the grid.
    #[must_use]
    pub fn total_pairs(&self) -> u32 {
        self.total_cards() / 2
    }

    /// Validate the configuration.
    ///
    /// Checked once at engine construction; an error prevents game start.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.rows == 0 || self.cols == 0 {
            return Err(ConfigError::EmptyGrid);
        }
        if self.total_cards() % 2 != 0 {
            return Err(ConfigError::OddCellCount {
                rows: self.rows,
                cols: self.cols,
            });
        }
        if self.time_limit_secs == 0 {
            return Err(ConfigError::ZeroTimeLimit);
        }
        Ok(())
    }
}
