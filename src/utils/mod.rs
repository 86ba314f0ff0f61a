pub mod color;
pub mod content_type;
