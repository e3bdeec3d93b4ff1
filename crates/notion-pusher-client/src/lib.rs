//! Talking to the Notion API: page ids, page creation and batched block
//! upload.
//!
//! [`push_blocks`] works against any [`PageSink`]; [`NotionClient`] is the
//! HTTP implementation.

pub mod error;
pub mod notion;
pub mod page_id;
pub mod sink;

pub use error::ClientError;
pub use notion::NotionClient;
pub use page_id::PageId;
pub use sink::{CreatedPage, PageSink, PushReport, push_blocks};
