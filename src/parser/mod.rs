//! Parser for the layered template text format

pub mod ast;
mod grammar;
pub mod lexer;

pub use ast::*;
pub use grammar::parse;
