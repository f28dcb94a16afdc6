//! Expression evaluation
//!
//! Resolves every term of an [`Expression`] against a [`QuantityTable`] and
//! folds the resulting dimension vectors strictly left to right: `*` adds
//! exponents, `/` subtracts them.

use crate::dimension::DimensionVector;
use crate::error::{Error, Result};
use crate::expression::{Expression, Operator};
use crate::table::QuantityTable;

/// Outcome of a successful evaluation.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct Evaluation {
    pub dimensions: DimensionVector,
    /// Canonical formula of `dimensions`; empty when dimensionless.
    pub formula: String,
    /// Table quantities with exactly these dimensions.
    pub matches: Vec<&'static str>,
}

pub struct Evaluator<'t> {
    table: &'t QuantityTable,
}

impl<'t> Evaluator<'t> {
    pub fn new(table: &'t QuantityTable) -> Self {
        Self { table }
    }

    pub fn evaluate(&self, input: &str) -> Result<Evaluation> {
        let expr = Expression::parse(input)?;
        tracing::debug!(
            terms = expr.terms.len(),
            operators = expr.operators.len(),
            "Tokenized expression"
        );

        let dimensions = self.fold(&expr)?;
        let formula = dimensions.format();
        tracing::debug!(expression = %expr, result = %formula, "Evaluated expression");

        Ok(Evaluation {
            dimensions,
            formula,
            matches: self.table.names_for(dimensions),
        })
    }

    /// Resolve every term first, stopping at the first unknown one, then fold.
    fn fold(&self, expr: &Expression) -> Result<DimensionVector> {
        let resolved = expr
            .terms
            .iter()
            .map(|term| self.resolve(term))
            .collect::<Result<Vec<_>>>()?;

        let Some((first, rest)) = resolved.split_first() else {
            return Err(Error::MalformedExpression);
        };

        let result = expr
            .operators
            .iter()
            .zip(rest)
            .fold(*first, |acc, (op, dims)| match op {
                Operator::Multiply => acc + *dims,
                Operator::Divide => acc - *dims,
            });
        Ok(result)
    }

    fn resolve(&self, term: &str) -> Result<DimensionVector> {
        match self.table.dimensions(term) {
            Some(dims) => Ok(dims),
            None => {
                tracing::debug!(term, "Unknown quantity");
                Err(Error::UnknownQuantity(term.to_string()))
            }
        }
    }
}
