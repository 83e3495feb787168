
//! Text-level processing that happens before parsing: rewriting
//! display and spoken forms into the expression language, and a cheap
//! validity filter for machine-extracted candidates.

pub mod notation;
pub mod validate;
pub mod voice;

pub use notation::{format_expression, normalize};
pub use validate::is_syntactically_valid;
pub use voice::{voice_lines_to_expressions, voice_to_expression};
