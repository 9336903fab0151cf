//! Video game sales treemap
//!
//! Fetches a hierarchical sales dataset (platforms → games) and renders it as
//! a squarified treemap: one SVG cell per game, colored by platform, with
//! word-wrapped labels and hover tooltips.
//!
//! # Features
//!
//! - **HTTP source** (default, feature `http`): blocking reqwest fetch
//! - **File source**: local paths and `file://` URLs, no network needed
//! - **Deterministic output**: identical input yields a byte-identical SVG
//!
//! # Example
//!
//! ```no_run
//! use vgsales_treemap::{Chart, RenderConfig, SourceConfig, DATASET_URL};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut chart = Chart::new(RenderConfig::default());
//! chart.resolve(vgsales_treemap::load(DATASET_URL, &SourceConfig::default()));
//! std::fs::write("treemap.html", chart.to_html())?;
//! # Ok(())
//! # }
//! ```

use std::collections::HashMap;

pub mod error;
pub use error::{Error, Result};

pub mod data;
pub use data::{parse_tree, TreeNode, DATASET_URL};

pub mod source;
pub use source::{open_source, DataSource, FileSource};
#[cfg(feature = "http")]
pub use source::HttpSource;

pub mod rendering;
pub use rendering::{render, Scene};

pub mod page;
pub use page::{render_page, Chart, ChartState};

// Async-friendly loading (worker thread + oneshot)
pub mod async_api;

/// Configuration for the data source
///
/// No timeout is imposed unless `timeout_ms` is set; the transport's own
/// defaults apply otherwise.
///
/// # Examples
///
/// ```
/// let cfg = vgsales_treemap::SourceConfig::default();
/// assert!(cfg.timeout_ms.is_none());
/// ```
#[derive(Debug, Clone)]
pub struct SourceConfig {
    /// User agent string to send with requests
    pub user_agent: String,
    /// Request timeout in milliseconds
    pub timeout_ms: Option<u64>,
    /// Custom HTTP headers
    pub headers: HashMap<String, String>,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            user_agent: concat!("vgsales-treemap/", env!("CARGO_PKG_VERSION")).to_string(),
            timeout_ms: None,
            headers: HashMap::new(),
        }
    }
}

/// Logical drawing surface dimensions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Canvas {
    pub width: u32,
    pub height: u32,
}

impl Default for Canvas {
    fn default() -> Self {
        Self {
            width: 1154,
            height: 654,
        }
    }
}

/// Rendering parameters
///
/// The defaults reproduce the published chart: 1-unit padding, integer
/// coordinates, Tableau10 fills at 60% opacity, 10px labels.
#[derive(Debug, Clone)]
pub struct RenderConfig {
    /// Canvas size; the SVG viewBox uses the same dimensions
    pub canvas: Canvas,
    /// Padding between siblings and inside each parent
    pub padding: f64,
    /// Round every coordinate to an integer
    pub round: bool,
    /// Fill opacity of leaf rectangles
    pub fill_opacity: f64,
    /// Horizontal label inset from the cell's left edge
    pub label_inset: f64,
    /// Offset of the first label line, in em
    pub first_line_em: f64,
    /// Distance between label lines, in em
    pub line_height_em: f64,
    /// Opacity of the last label line
    pub last_line_opacity: f64,
    /// Start tooltip breadcrumbs with the root's name
    pub breadcrumb_root: bool,
    /// Separator between breadcrumb entries
    pub breadcrumb_separator: String,
    /// Suffix appended to the formatted value in tooltips
    pub unit_suffix: String,
    /// CSS font shorthand applied to the whole SVG
    pub font: String,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            canvas: Canvas::default(),
            padding: 1.0,
            round: true,
            fill_opacity: 0.6,
            label_inset: 3.0,
            first_line_em: 1.2,
            line_height_em: 1.1,
            last_line_opacity: 0.7,
            breadcrumb_root: false,
            breadcrumb_separator: " → ".to_string(),
            unit_suffix: "M Sales".to_string(),
            font: "10px sans-serif".to_string(),
        }
    }
}

impl RenderConfig {
    /// Reject configurations that cannot produce a drawable canvas.
    pub fn validate(&self) -> Result<()> {
        if self.canvas.width == 0 || self.canvas.height == 0 {
            return Err(Error::ConfigError(format!(
                "canvas must be non-empty, got {}x{}",
                self.canvas.width, self.canvas.height
            )));
        }
        if !self.padding.is_finite() || self.padding < 0.0 {
            return Err(Error::ConfigError(format!(
                "padding must be a non-negative number, got {}",
                self.padding
            )));
        }
        Ok(())
    }
}

/// Load the dataset once from `url` using the backend its scheme selects.
pub fn load(url: &str, config: &SourceConfig) -> Result<TreeNode> {
    open_source(url, config)?.load(url)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = RenderConfig::default();
        assert_eq!(config.canvas.width, 1154);
        assert_eq!(config.canvas.height, 654);
        assert_eq!(config.padding, 1.0);
        assert!(config.round);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_canvas() {
        let config = RenderConfig {
            canvas: Canvas { width: 0, height: 10 },
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::ConfigError(_))));

        let config = RenderConfig {
            padding: f64::NAN,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_source_config_user_agent() {
        let cfg = SourceConfig::default();
        assert!(cfg.user_agent.starts_with("vgsales-treemap/"));
        assert!(cfg.headers.is_empty());
    }
}
