//! Report domain - species profile layout and the renderer seam

mod layout;
mod renderer;

pub use layout::{
    wrap_text_measured, LayoutLine, LineStyle, PageLayout, ReportDocument, ReportSection,
    CONTINUATION_INDENT, REPORT_TITLE_PREFIX,
};
pub use renderer::ReportRenderer;
