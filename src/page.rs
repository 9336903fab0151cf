//! Chart lifecycle and the HTML page around it.
//!
//! A chart starts out `Loading` and settles exactly once per load: into
//! `Ready` with a freshly rendered scene, or into `Failed`. The page shows a
//! placeholder for every state except `Ready`.

use crate::rendering::{render, Scene};
use crate::{Error, RenderConfig, Result, TreeNode};
use log::{debug, warn};

pub const PAGE_TITLE: &str = "Video Game Sales";
pub const PAGE_SUBTITLE: &str = "Top 100 Most Sold Video Games Grouped by Platform";
pub const LOADING_PLACEHOLDER: &str = "Loading data...";

#[derive(Debug)]
pub enum ChartState {
    Loading,
    Ready(Scene),
    Failed(Error),
}

impl ChartState {
    pub fn scene(&self) -> Option<&Scene> {
        match self {
            ChartState::Ready(scene) => Some(scene),
            _ => None,
        }
    }
}

/// A treemap bound to its render configuration.
#[derive(Debug)]
pub struct Chart {
    config: RenderConfig,
    state: ChartState,
}

impl Chart {
    pub fn new(config: RenderConfig) -> Self {
        Self {
            config,
            state: ChartState::Loading,
        }
    }

    pub fn state(&self) -> &ChartState {
        &self.state
    }

    pub fn config(&self) -> &RenderConfig {
        &self.config
    }

    pub fn is_ready(&self) -> bool {
        matches!(self.state, ChartState::Ready(_))
    }

    /// Settle the chart with the outcome of a load.
    ///
    /// Rendering happens here and only for `Ok`. Resolving again discards the
    /// previous state entirely.
    pub fn resolve(&mut self, loaded: Result<TreeNode>) -> &ChartState {
        self.state = match loaded {
            Ok(tree) => {
                debug!("dataset loaded; rendering {} leaves", tree.leaf_count());
                ChartState::Ready(render(&tree, &self.config))
            }
            Err(err) => {
                warn!("dataset unavailable: {}", err);
                ChartState::Failed(err)
            }
        };
        &self.state
    }

    pub fn to_html(&self) -> String {
        render_page(&self.state)
    }

    /// The chart element alone: the `<svg>` once ready, the placeholder
    /// paragraph otherwise.
    pub fn to_fragment(&self) -> String {
        chart_body(&self.state)
    }
}

fn chart_body(state: &ChartState) -> String {
    match state {
        ChartState::Ready(scene) => scene.to_svg(),
        ChartState::Loading | ChartState::Failed(_) => format!("<p>{}</p>", LOADING_PLACEHOLDER),
    }
}

const PAGE_STYLE: &str = "body { margin: 0; font-family: sans-serif; }\n\
.page { display: flex; flex-direction: column; align-items: center; }\n\
h1 { font-size: 1.875rem; line-height: 2.25rem; margin: 0.67em 0 0; }\n\
h2 { font-size: 1rem; font-weight: normal; margin: 0 0 1.25rem; }";

/// Full HTML document for `state`.
pub fn render_page(state: &ChartState) -> String {
    let body = chart_body(state);
    format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"utf-8\">\n<title>{title}</title>\n<style>\n{style}\n</style>\n</head>\n<body>\n<div class=\"page\">\n<h1>{title}</h1>\n<h2>{subtitle}</h2>\n{body}\n</div>\n</body>\n</html>\n",
        title = PAGE_TITLE,
        subtitle = PAGE_SUBTITLE,
        style = PAGE_STYLE,
        body = body
    )
}
