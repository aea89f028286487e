use std::fmt::{self, Display};

use crate::parser::ast::{BlockStatement, Identifier};
use crate::token::Token;

/// `fn(p1, p2, …) <body>`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionLiteral {
    pub token: Token,
    pub parameters: Vec<Identifier>,
    pub body: BlockStatement,
}

impl Display for FunctionLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let params = self
            .parameters
            .iter()
            .map(|p| p.to_string())
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{}({params}) {}", self.token.literal, self.body)
    }
}
