//! Grid configuration.
//!
//! Layout constants for the grid surface: cell size, inter-cell gap, and the
//! fixed column count. The derived `step` (cell + gap) is the quantum of
//! snapped position; every conversion between grid cells and pixels goes
//! through it.

use serde::{Deserialize, Serialize};

use crate::error::{GridError, Result};

/// Default cell size in pixels.
pub const DEFAULT_CELL: f64 = 80.0;
/// Default gap between cells in pixels.
pub const DEFAULT_GAP: f64 = 6.0;
/// Default number of columns.
pub const DEFAULT_COLS: u32 = 10;

/// Minimum number of rows the grid always exposes, regardless of content.
pub const MIN_ROWS: u32 = 4;

/// Immutable layout parameters for a grid surface.
///
/// `cell` must be positive and finite, `gap` non-negative and finite, and
/// `total_cols` at least 1. Values deserialized from configuration go through
/// [`GridParams::validate`] before use.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridParams {
    /// Cell size in pixels.
    pub cell: f64,
    /// Gap between adjacent cells in pixels.
    pub gap: f64,
    /// Fixed number of columns.
    pub total_cols: u32,
}

impl GridParams {
    /// Creates validated grid parameters.
    pub fn new(cell: f64, gap: f64, total_cols: u32) -> Result<Self> {
        let params = Self {
            cell,
            gap,
            total_cols,
        };
        params.validate()?;
        Ok(params)
    }

    /// Parses grid parameters from a JSON string and validates them.
    pub fn from_json(json: &str) -> Result<Self> {
        let params: Self = serde_json::from_str(json)?;
        params.validate()?;
        Ok(params)
    }

    /// Checks that all parameters are in range.
    pub fn validate(&self) -> Result<()> {
        if !self.cell.is_finite() || self.cell <= 0.0 {
            return Err(GridError::InvalidParameter {
                name: "cell",
                reason: format!("must be a positive finite number, got {}", self.cell),
            });
        }
        if !self.gap.is_finite() || self.gap < 0.0 {
            return Err(GridError::InvalidParameter {
                name: "gap",
                reason: format!("must be a non-negative finite number, got {}", self.gap),
            });
        }
        if self.total_cols == 0 {
            return Err(GridError::InvalidParameter {
                name: "total_cols",
                reason: "must be at least 1".to_string(),
            });
        }
        Ok(())
    }

    /// One grid step in pixels: cell size plus gap.
    pub fn step(&self) -> f64 {
        self.cell + self.gap
    }

    /// Pixel width of the whole grid surface.
    pub fn surface_width(&self) -> f64 {
        self.step() * f64::from(self.total_cols) - self.gap
    }
}

impl Default for GridParams {
    fn default() -> Self {
        Self {
            cell: DEFAULT_CELL,
            gap: DEFAULT_GAP,
            total_cols: DEFAULT_COLS,
        }
    }
}

impl std::fmt::Display for GridParams {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} cols, {}px cells, {}px gap",
            self.total_cols, self.cell, self.gap
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_params_are_valid() {
        let params = GridParams::default();
        assert!(params.validate().is_ok());
        assert_eq!(params.step(), 86.0);
        assert_eq!(params.surface_width(), 854.0);
    }

    #[test]
    fn rejects_non_positive_cell() {
        assert!(GridParams::new(0.0, 6.0, 10).is_err());
        assert!(GridParams::new(-80.0, 6.0, 10).is_err());
        assert!(GridParams::new(f64::NAN, 6.0, 10).is_err());
    }

    #[test]
    fn rejects_negative_gap_and_zero_cols() {
        assert!(GridParams::new(80.0, -1.0, 10).is_err());
        assert!(GridParams::new(80.0, 6.0, 0).is_err());
    }

    #[test]
    fn parses_from_json() {
        let params = GridParams::from_json(r#"{"cell": 40.0, "gap": 2.0, "total_cols": 24}"#)
            .expect("valid config");
        assert_eq!(params.cell, 40.0);
        assert_eq!(params.step(), 42.0);
        assert_eq!(params.total_cols, 24);
    }

    #[test]
    fn rejects_invalid_json_values() {
        assert!(GridParams::from_json(r#"{"cell": 0.0, "gap": 2.0, "total_cols": 24}"#).is_err());
        assert!(GridParams::from_json("not json").is_err());
    }
}
