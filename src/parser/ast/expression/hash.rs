use std::fmt::{self, Display};

use crate::parser::ast::Expression;
use crate::token::Token;

/// `{k: v, …}`, comma-separated `expr : expr` pairs in textual order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HashLiteral {
    pub token: Token,
    pub pairs: Vec<(Expression, Expression)>,
}

impl Display for HashLiteral {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let pairs = self
            .pairs
            .iter()
            .map(|(k, v)| format!("{k}: {v}"))
            .collect::<Vec<_>>()
            .join(", ");
        write!(f, "{{{pairs}}}")
    }
}
