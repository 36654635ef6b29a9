//! Shorthand constructors for common field types.

mod checkbox;
mod choice;
mod text;

pub use checkbox::{checkbox_field, radio_field};
pub use choice::select_field;
pub use text::{
    email_field, file_field, hidden_field, password_field, text_field, textarea_field,
};
