pub mod drawing;
pub mod engine;
pub mod line_filter;
pub mod patterns;
pub mod taxonomy;

pub use engine::{classify, ClassifiedRegistry};
pub use patterns::{CategoryRule, PatternTable};
pub use taxonomy::{Category, ABSENT};
