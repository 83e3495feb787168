
//! Generic parsing machinery shared by the expression language.

pub mod operator;
pub mod shunting_yard;
pub mod source;
pub mod tokenizer;
