//! Report rendering backends

mod pdf;

pub use pdf::PdfReportRenderer;
