//! Async-friendly loading backed by a dedicated worker thread.
//!
//! The worker owns the (blocking) data source for the duration of one load
//! and hands the outcome back through a oneshot channel, so async callers can
//! await the retrieval without the source having to be `Send` across tasks.

use crate::page::Chart;
use crate::{open_source, Error, RenderConfig, Result, SourceConfig, TreeNode};
use log::debug;
use std::thread;
use tokio::sync::oneshot;

/// Load the tree at `url` on a worker thread and await the single outcome.
///
/// The source is created on the worker, so blocking clients are built and
/// dropped outside the async runtime.
pub async fn load_async(url: impl Into<String>, config: SourceConfig) -> Result<TreeNode> {
    let url = url.into();
    let (tx, rx) = oneshot::channel::<Result<TreeNode>>();

    thread::Builder::new()
        .name("vgsales-loader".into())
        .spawn(move || {
            debug!("loader thread started for {}", url);
            let res = open_source(&url, &config).and_then(|source| source.load(&url));
            // Receiver may be gone; the result is then simply discarded.
            let _ = tx.send(res);
        })?;

    rx.await
        .map_err(|e| Error::NetworkError(format!("Load canceled: {}", e)))?
}

/// Load `url` and settle a new chart with the outcome.
pub async fn load_chart(url: impl Into<String>, source: SourceConfig, render: RenderConfig) -> Chart {
    let mut chart = Chart::new(render);
    chart.resolve(load_async(url, source).await);
    chart
}
