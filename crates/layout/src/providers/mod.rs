mod floating_area;
mod page_flow;
mod text_frame_area;

pub use floating_area::FloatingArea;
pub use page_flow::{AreaContent, PageContent, PageFlow};
pub use text_frame_area::TextFrameArea;
