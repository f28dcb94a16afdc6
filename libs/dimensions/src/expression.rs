//! Expression tokenizer
//!
//! Splits input such as `force / area` into quantity-name terms and the
//! `*` / `/` operators between them. There is no precedence and no grouping.

use crate::error::{Error, Result};
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Operator {
    Multiply, // *
    Divide,   // /
}

impl Operator {
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '*' => Some(Operator::Multiply),
            '/' => Some(Operator::Divide),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Multiply => '*',
            Operator::Divide => '/',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A tokenized expression: `terms` interleaved with `operators`.
///
/// Terms are trimmed and uppercased. Values built by [`Expression::parse`]
/// always hold exactly one more term than operators.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Expression {
    pub terms: Vec<String>,
    pub operators: Vec<Operator>,
}

impl Expression {
    /// Split `input` into terms and operators without validating their counts.
    ///
    /// A term is emitted for every non-empty run of characters between
    /// operators, even if the run is only whitespace, so `" * MASS"` yields
    /// the terms `["", "MASS"]`.
    pub fn tokenize(input: &str) -> Self {
        let mut terms = Vec::new();
        let mut operators = Vec::new();
        let mut current = String::new();

        for c in input.chars() {
            match Operator::from_char(c) {
                Some(op) => {
                    if !current.is_empty() {
                        terms.push(normalize_term(&current));
                        current.clear();
                    }
                    operators.push(op);
                }
                None => current.push(c),
            }
        }

        if !current.is_empty() {
            terms.push(normalize_term(&current));
        }

        Self { terms, operators }
    }

    /// Tokenize and check that terms and operators alternate.
    pub fn parse(input: &str) -> Result<Self> {
        let expr = Self::tokenize(input);
        if expr.terms.len() != expr.operators.len() + 1 {
            return Err(Error::MalformedExpression);
        }
        Ok(expr)
    }

    /// Pairs of each operator with the term on its right.
    pub fn steps(&self) -> impl Iterator<Item = (Operator, &str)> {
        self.operators
            .iter()
            .copied()
            .zip(self.terms.iter().skip(1).map(String::as_str))
    }
}

impl fmt::Display for Expression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(first) = self.terms.first() {
            f.write_str(first)?;
        }
        for (op, term) in self.steps() {
            write!(f, "{op}{term}")?;
        }
        Ok(())
    }
}

fn normalize_term(raw: &str) -> String {
    raw.trim().to_uppercase()
}
