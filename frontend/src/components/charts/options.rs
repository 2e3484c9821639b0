//! Declarative chart configuration.

use std::fmt;

use plotters::style::RGBColor;

/// Slice color for the bill share of the distribution chart.
pub const BILL_COLOR: RGBColor = RGBColor(74, 144, 226);
/// Slice color for the tip share of the distribution chart.
pub const TIP_COLOR: RGBColor = RGBColor(80, 200, 120);
/// Bar color for the per-person chart.
pub const PERSON_COLOR: RGBColor = RGBColor(155, 89, 182);

/// Canvas geometry for a chart, validated at construction so the renderers
/// never see degenerate dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartOptions {
    pub width: u32,
    pub height: u32,
    pub margin: u32,
}

/// Rejected chart geometry (zero-sized canvas or margin swallowing it).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvalidChartOptions;

impl fmt::Display for InvalidChartOptions {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chart dimensions must be non-zero and larger than twice the margin")
    }
}

impl ChartOptions {
    pub fn new(width: u32, height: u32, margin: u32) -> Result<Self, InvalidChartOptions> {
        if width == 0 || height == 0 || margin.saturating_mul(2) >= width.min(height) {
            return Err(InvalidChartOptions);
        }
        Ok(Self {
            width,
            height,
            margin,
        })
    }

    /// Drawable radius for a centered circular chart.
    pub fn radius(&self) -> f64 {
        (self.width.min(self.height) / 2 - self.margin) as f64
    }

    /// Canvas center point in pixel coordinates.
    pub fn center(&self) -> (i32, i32) {
        ((self.width / 2) as i32, (self.height / 2) as i32)
    }
}

impl Default for ChartOptions {
    fn default() -> Self {
        Self {
            width: 400,
            height: 300,
            margin: 20,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_options() {
        let options = ChartOptions::new(400, 300, 20).unwrap();
        assert_eq!(options.center(), (200, 150));
        assert_eq!(options.radius(), 130.0);
    }

    #[test]
    fn test_zero_dimensions_rejected() {
        assert!(ChartOptions::new(0, 300, 10).is_err());
        assert!(ChartOptions::new(400, 0, 10).is_err());
    }

    #[test]
    fn test_oversized_margin_rejected() {
        assert!(ChartOptions::new(400, 300, 150).is_err());
    }

    #[test]
    fn test_default_passes_validation() {
        let defaults = ChartOptions::default();
        assert!(ChartOptions::new(defaults.width, defaults.height, defaults.margin).is_ok());
    }
}
