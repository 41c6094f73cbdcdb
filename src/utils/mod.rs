//! Small shared helpers

pub mod line_index;

pub use line_index::LineIndex;
