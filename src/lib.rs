pub mod api;
pub mod assembler;
pub mod ast;
pub mod comment;
pub mod config;
pub mod document;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod resolver;
pub mod spec;
pub mod utils;

pub use api::{compile, compile_source, generate, is_significant};
