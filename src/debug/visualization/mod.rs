pub mod segments;
pub mod svg;
pub mod viewport;
