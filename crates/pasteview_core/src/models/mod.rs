/// Content-type tags and normalized type hints.
pub mod content_type;


pub use content_type::{ContentType, TypeHint};
