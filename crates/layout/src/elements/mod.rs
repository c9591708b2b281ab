mod block;
mod floating;
mod frame;
mod paragraph;

pub use block::Block;
pub use floating::FloatingFrame;
pub use frame::TextFrame;
pub use paragraph::{PAGE_FIELD, Paragraph};
