// PDF extraction module
pub mod basic;
pub mod extraction_router;
pub mod ocr_engine;
pub mod renderer;

pub use basic::get_page_count;
pub use extraction_router::{calculate_quality_score, ExtractionRouter};
pub use ocr_engine::{tools_available, OcrEngine};
pub use renderer::{PageRenderer, RenderedPages};
