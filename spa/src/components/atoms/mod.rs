pub mod input_text;
pub mod select;
