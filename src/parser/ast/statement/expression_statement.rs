use std::fmt::{self, Display};

use crate::parser::ast::Expression;
use crate::token::Token;

/// A single expression, optionally followed by a `;` (the semicolon is
/// consumed if present but not required).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExpressionStatement {
    pub token: Token,
    pub expression: Expression,
}

impl Display for ExpressionStatement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.expression)
    }
}
