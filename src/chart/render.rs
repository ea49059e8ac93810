//! Renderer seam and chart replacement

use super::{ChartData, ChartOptions};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum RenderError {
    #[error("failed to write chart: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to encode chart: {0}")]
    Json(#[from] serde_json::Error),

    #[error("failed to write table: {0}")]
    Csv(#[from] csv::Error),
}

/// Identifies one drawn chart within a renderer
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartHandle(pub u64);

/// Something that can draw a chart and later tear it down
pub trait ChartRenderer {
    type Handle;

    fn draw(&mut self, data: &ChartData, options: &ChartOptions) -> Result<Self::Handle, RenderError>;

    fn dispose(&mut self, handle: Self::Handle);
}

/// Draw `data`, first disposing the chart previously drawn by this renderer.
///
/// The caller owns the returned handle and passes it back in on the next
/// submission.
pub fn render_chart<R: ChartRenderer>(
    renderer: &mut R,
    prior: Option<R::Handle>,
    data: &ChartData,
    options: &ChartOptions,
) -> Result<R::Handle, RenderError> {
    if let Some(handle) = prior {
        renderer.dispose(handle);
    }
    renderer.draw(data, options)
}

/// Hands out handles and tracks which one is currently live
#[derive(Debug, Default)]
pub(crate) struct HandleTracker {
    next_id: u64,
    active: Option<ChartHandle>,
}

impl HandleTracker {
    pub(crate) fn issue(&mut self) -> ChartHandle {
        self.next_id += 1;
        let handle = ChartHandle(self.next_id);
        if let Some(stale) = self.active.replace(handle) {
            log::warn!("chart {:?} replaced without being disposed", stale);
        }
        handle
    }

    pub(crate) fn release(&mut self, handle: ChartHandle) {
        if self.active == Some(handle) {
            self.active = None;
            log::debug!("disposed chart {:?}", handle);
        } else {
            log::warn!("dispose of unknown chart {:?}", handle);
        }
    }

    #[cfg(test)]
    pub(crate) fn active(&self) -> Option<ChartHandle> {
        self.active
    }
}
