pub mod annotated;
pub mod diagram;
pub mod error;
pub mod geometry;
pub mod math;
pub mod operations;
pub mod topology;

pub use annotated::AnnotatedDiagram;
pub use error::{OffsetError, Result};
