//! External media engine seam
//!
//! The extraction/download engine is consumed as an opaque capability: it
//! accepts a source URL and a resolved plan, produces a file matching the
//! plan's output template, and may fail. Putting it behind a trait lets
//! tests script the engine instead of shelling out.

mod ytdlp;

pub use ytdlp::YtDlpEngine;

use crate::Result;
use crate::types::FetchPlan;
use async_trait::async_trait;

/// Abstraction over the external extraction/download engine.
#[async_trait]
pub trait MediaEngine: Send + Sync {
    /// Run the engine to completion for one job.
    ///
    /// Resolves the available streams for `source_url`, downloads them, and
    /// applies any merging/transcoding the plan calls for, writing the result
    /// under the plan's output template. The future completes only when the
    /// engine has finished or failed; there is no cancellation.
    async fn fetch(&self, source_url: &str, plan: &FetchPlan) -> Result<()>;

    /// Engine name for logging
    fn name(&self) -> &'static str;
}
