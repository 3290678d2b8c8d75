use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::layout::geometry::Rect;
use crate::render::colors::{self, Color};
use crate::render::labels::ElisionMode;

/// Space reserved around a canvas region (px).
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

/// Everything one rendering pass needs. Passed explicitly; there is no global configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MosaicConfig {
    /// Full canvas width (px)
    pub viewport_width: f64,
    /// Full canvas height (px)
    pub viewport_height: f64,
    /// Inset applied to each tile after placement (px, 0 = edge-to-edge)
    pub padding: f64,
    /// Number of legend columns (>= 1)
    pub legend_columns: i64,
    /// Tiles narrower or shorter than this get an elided label
    pub min_label_size: f64,
    pub elision_mode: ElisionMode,
    /// Category colors, assigned in first-seen order and reused cyclically
    pub palette: Vec<Color>,
    pub chart_margin: Margins,
    pub legend_height: f64,
    pub legend_margin: Margins,
}

impl Default for MosaicConfig {
    fn default() -> Self {
        Self {
            viewport_width: 1000.0,
            viewport_height: 800.0,
            padding: 2.0,
            legend_columns: 6,
            min_label_size: 55.0,
            elision_mode: ElisionMode::Ellipsis,
            palette: colors::set3(),
            chart_margin: Margins::new(100.0, 50.0, 50.0, 50.0),
            legend_height: 100.0,
            legend_margin: Margins::new(0.0, 50.0, 50.0, 50.0),
        }
    }
}

impl MosaicConfig {
    pub fn from_json(text: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(text)?)
    }

    pub fn load(path: &Path) -> anyhow::Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Ok(Self::from_json(&text)?)
    }

    /// Check option ranges. Viewport sizes are not checked: a tiny or empty
    /// canvas degrades to zero-area output instead of failing.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.legend_columns < 1 {
            return Err(ConfigError::LegendColumns(self.legend_columns));
        }
        for (name, value) in [
            ("padding", self.padding),
            ("minLabelSize", self.min_label_size),
            ("legendHeight", self.legend_height),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(ConfigError::NegativeOrNonFinite { name, value });
            }
        }
        if self.palette.is_empty() {
            return Err(ConfigError::EmptyPalette);
        }
        if self.viewport_width < 0.0 || self.viewport_height < 0.0 {
            tracing::warn!(
                "Viewport {}x{} has a negative side, output will be empty",
                self.viewport_width,
                self.viewport_height
            );
        }
        Ok(())
    }

    /// Legend column count, clamped to at least one.
    pub fn columns(&self) -> usize {
        self.legend_columns.max(1) as usize
    }
}

/// The chart and legend areas of the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Regions {
    pub chart: Rect,
    pub legend: Rect,
}

impl Regions {
    pub fn split(config: &MosaicConfig) -> Self {
        let w = config.viewport_width.max(0.0);
        let h = config.viewport_height.max(0.0);
        let cm = config.chart_margin;
        let lm = config.legend_margin;

        let chart_w = (w - cm.left - cm.right).max(0.0);
        let chart_h = (h - cm.top - cm.bottom - config.legend_height - lm.top - lm.bottom).max(0.0);
        let legend_w = (w - lm.left - lm.right).max(0.0);
        let legend_y = h - config.legend_height - lm.bottom;

        Self {
            chart: Rect::from_size(cm.left, cm.top, chart_w, chart_h),
            legend: Rect::from_size(lm.left, legend_y, legend_w, config.legend_height),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_regions_match_reference_canvas() {
        let regions = Regions::split(&MosaicConfig::default());
        assert_eq!(regions.chart, Rect::new(50.0, 100.0, 950.0, 600.0));
        assert_eq!(regions.legend, Rect::new(50.0, 650.0, 950.0, 750.0));
    }

    #[test]
    fn tiny_canvas_collapses_instead_of_going_negative() {
        let config = MosaicConfig {
            viewport_width: 40.0,
            viewport_height: 40.0,
            ..MosaicConfig::default()
        };
        let regions = Regions::split(&config);
        assert_eq!(regions.chart.width(), 0.0);
        assert_eq!(regions.chart.height(), 0.0);
        assert_eq!(regions.legend.width(), 0.0);
    }

    #[test]
    fn rejects_out_of_range_options() {
        let bad_columns = MosaicConfig {
            legend_columns: 0,
            ..MosaicConfig::default()
        };
        assert!(matches!(bad_columns.validate(), Err(ConfigError::LegendColumns(0))));

        let bad_padding = MosaicConfig {
            padding: -1.0,
            ..MosaicConfig::default()
        };
        assert!(matches!(
            bad_padding.validate(),
            Err(ConfigError::NegativeOrNonFinite { name: "padding", .. })
        ));

        let no_palette = MosaicConfig {
            palette: Vec::new(),
            ..MosaicConfig::default()
        };
        assert!(matches!(no_palette.validate(), Err(ConfigError::EmptyPalette)));

        assert!(MosaicConfig::default().validate().is_ok());
    }

    #[test]
    fn parses_camel_case_json_with_defaults() {
        let config = MosaicConfig::from_json(
            r##"{
                "viewportWidth": 960,
                "legendColumns": 3,
                "elisionMode": "hide",
                "palette": ["#ff0000", "#00ff00"]
            }"##,
        )
        .unwrap();
        assert_eq!(config.viewport_width, 960.0);
        assert_eq!(config.viewport_height, 800.0);
        assert_eq!(config.columns(), 3);
        assert_eq!(config.elision_mode, ElisionMode::Hide);
        assert_eq!(config.palette.len(), 2);
    }

    #[test]
    fn bad_palette_entry_is_a_parse_error() {
        assert!(MosaicConfig::from_json(r#"{"palette": ["nope"]}"#).is_err());
    }
}
