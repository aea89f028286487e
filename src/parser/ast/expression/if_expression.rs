use std::fmt::{self, Display};

use crate::parser::ast::{BlockStatement, Expression};
use crate::token::Token;

/// `if<cond> <consequence>` plus `else <alternative>` when present.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IfExpression {
    pub token: Token,
    pub condition: Box<Expression>,
    pub consequence: BlockStatement,
    pub alternative: Option<BlockStatement>,
}

impl Display for IfExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "if{} {}", self.condition, self.consequence)?;
        if let Some(alternative) = &self.alternative {
            write!(f, "else {alternative}")?;
        }
        Ok(())
    }
}
