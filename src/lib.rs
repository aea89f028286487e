//! # Monkey
//!
//! This crate is the core of an interpreter for Monkey, a small dynamically
//! typed expression language with first-class functions, closures, integers,
//! booleans, strings, arrays and hash maps.
//!
//! Source text flows through the crate in one direction: [`lexer::Lexer`]
//! turns it into a stream of [`token::Token`]s, [`parser::Parser`] turns
//! that stream into a [`parser::ast::Program`], and [`evaluator::eval`]
//! reduces the program to an [`object::Object`] against an
//! [`object::environment::Environment`].

pub mod evaluator;
pub mod lexer;
pub mod object;
pub mod parser;
pub mod token;

pub use evaluator::eval;
pub use lexer::Lexer;
pub use object::{environment::Environment, Object};
pub use parser::{ast::Program, ParseError, Parser};

/// Lexes `source` into a token stream. This is a convenience wrapper around
/// [`Lexer::new`] + [`Lexer::lex`] for callers that just want the tokens.
pub fn lex(source: &str) -> Vec<token::Token> {
    Lexer::new(source).lex()
}

/// Parses `source` into a [`Program`] plus any accumulated parse errors.
/// Always returns a best-effort program, even if `errors` is non-empty.
pub fn parse(source: &str) -> (Program, Vec<ParseError>) {
    let tokens = lex(source);
    let mut parser = Parser::new(tokens);
    let program = parser.parse_program();
    (program, parser.errors)
}
