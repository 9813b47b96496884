pub mod convert;
pub mod parse;
pub mod store;
pub mod tokenize;
