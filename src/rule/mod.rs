//! Rule parsing and evaluation module
//!
//! This module handles parsing rule strings like "@100-200?15:89"
//! and evaluating them against a numeric value.

mod ast;
pub mod cache;
mod evaluator;
pub mod parser;
mod text;


pub use ast::*;
pub use evaluator::*;
pub use parser::parse;
pub use text::Rule;
