use std::fmt::{self, Display};

use crate::parser::ast::Expression;
use crate::token::Token;

/// `(<target>[<index>])`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexExpression {
    pub token: Token,
    pub left: Box<Expression>,
    pub index: Box<Expression>,
}

impl Display for IndexExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}[{}])", self.left, self.index)
    }
}
