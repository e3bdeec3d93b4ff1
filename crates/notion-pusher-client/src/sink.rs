use serde_json::Value;

use crate::{ClientError, PageId};

/// A page created under a parent page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreatedPage {
    pub id: PageId,
    pub url: String,
}

/// Where converted blocks go.
pub trait PageSink {
    fn create_child_page(&self, parent: &PageId, title: &str) -> Result<CreatedPage, ClientError>;

    /// Appends one batch of top-level blocks to the end of a page.
    fn append_children(&self, page: &PageId, children: &[Value]) -> Result<(), ClientError>;
}

/// Totals of a completed push.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PushReport {
    pub batches: usize,
    pub blocks: usize,
}

/// Appends `blocks` to `page` in order, `batch_size` at a time.
///
/// Stops at the first failing batch; later batches are never sent, so the
/// page always holds a prefix of the document.
pub fn push_blocks<S: PageSink + ?Sized>(
    sink: &S,
    page: &PageId,
    blocks: &[Value],
    batch_size: usize,
) -> Result<PushReport, ClientError> {
    let mut report = PushReport::default();
    if blocks.is_empty() {
        log::warn!("No blocks to push to page {page}");
        return Ok(report);
    }

    let batch_size = batch_size.max(1);
    log::info!(
        "Pushing {} blocks to page {page} in batches of {batch_size}",
        blocks.len()
    );

    for (idx, batch) in blocks.chunks(batch_size).enumerate() {
        let number = idx + 1;
        if let Err(source) = sink.append_children(page, batch) {
            log::error!("Batch {number} failed: {source}");
            return Err(ClientError::BatchFailed {
                batch: number,
                applied: report.blocks,
                source: Box::new(source),
            });
        }
        report.batches += 1;
        report.blocks += batch.len();
        log::info!("Batch {number} pushed ({} blocks)", batch.len());
    }

    log::info!(
        "Push completed: {} blocks in {} batches",
        report.blocks,
        report.batches
    );
    Ok(report)
}
