//! Display colors for selected sections.

use std::collections::HashSet;

use crate::constants::{DEFAULT_OVERFLOW_COLOR, DEFAULT_PALETTE};
use crate::error::{PlannerError, PlannerResult};

/// An ordered set of color tokens plus the overflow color handed out once
/// every palette color is taken.
///
/// Tokens are opaque strings (usually `#rrggbb`). The overflow color is the
/// only one that may be assigned to several sections at once.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    colors: Vec<String>,
    overflow: String,
}

impl Palette {
    /// Build a palette, rejecting empty or duplicate tokens and an overflow
    /// color that is also a palette color.
    pub fn new(colors: Vec<String>, overflow: impl Into<String>) -> PlannerResult<Self> {
        let overflow = overflow.into();

        if colors.is_empty() {
            return Err(PlannerError::InvalidPalette(
                "palette must contain at least one color".into(),
            ));
        }

        if overflow.is_empty() || colors.iter().any(|c| c.is_empty()) {
            return Err(PlannerError::InvalidPalette(
                "color tokens must not be empty".into(),
            ));
        }

        let mut seen = HashSet::new();
        if let Some(dup) = colors.iter().find(|c| !seen.insert(c.as_str())) {
            return Err(PlannerError::InvalidPalette(format!(
                "color '{}' appears more than once",
                dup
            )));
        }

        if seen.contains(overflow.as_str()) {
            return Err(PlannerError::InvalidPalette(format!(
                "default color '{}' is also a palette color",
                overflow
            )));
        }

        Ok(Palette { colors, overflow })
    }

    pub fn colors(&self) -> &[String] {
        &self.colors
    }

    pub fn overflow(&self) -> &str {
        &self.overflow
    }

    pub fn len(&self) -> usize {
        self.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.colors.is_empty()
    }

    /// First palette color not in `in_use`, or the overflow color.
    pub fn next_free<S: AsRef<str>>(&self, in_use: &[S]) -> &str {
        self.colors
            .iter()
            .map(String::as_str)
            .find(|color| !in_use.iter().any(|used| used.as_ref() == *color))
            .unwrap_or(self.overflow.as_str())
    }
}

impl Default for Palette {
    fn default() -> Self {
        Palette {
            colors: DEFAULT_PALETTE.iter().map(|c| c.to_string()).collect(),
            overflow: DEFAULT_OVERFLOW_COLOR.to_string(),
        }
    }
}

/// Parse a `#rrggbb` token into its RGB components.
pub fn hex_rgb(token: &str) -> Option<(u8, u8, u8)> {
    let hex = token.strip_prefix('#')?;
    if hex.len() != 6 || !hex.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let channel = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    Some((channel(0)?, channel(2)?, channel(4)?))
}
