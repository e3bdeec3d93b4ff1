pub mod block_equation;
pub mod block_quote;
pub mod code_fence;
pub mod divider;
pub mod heading;
pub mod image;
pub mod list_item;
pub mod table;

pub use block_equation::BlockEquation;
pub use block_quote::BlockQuote;
pub use code_fence::CodeFence;
pub use divider::Divider;
pub use heading::Heading;
pub use image::ImageLine;
pub use list_item::ListItem;
pub use table::TableBuilder;
