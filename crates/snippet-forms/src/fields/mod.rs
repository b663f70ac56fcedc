//! Form field definitions.

mod hidden;
mod select;
mod text;

pub use hidden::hidden_field;
pub use select::choice_field;
pub use text::{char_field, text_field};
