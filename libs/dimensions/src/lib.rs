//! Dimensional formula engine.
//!
//! Multiplies and divides named physical quantities symbolically by tracking
//! the exponents of the seven SI base dimensions:
//!
//! ```text
//! "FORCE/AREA"
//!      |
//!   Expression::parse -> terms + operators
//!      |
//!   QuantityTable -> formulas ("M¹L¹T⁻²", "L²")
//!      |
//!   DimensionVector::parse -> exponent vectors, folded left to right
//!      |
//!   DimensionVector::format -> "M¹L⁻¹T⁻²"
//! ```

#![forbid(unsafe_code)]

pub mod dimension;
mod error;
pub mod evaluator;
pub mod expression;
pub mod superscript;
pub mod table;

pub use dimension::{BaseDimension, DimensionVector};
pub use error::{Error, Result};
pub use evaluator::{Evaluation, Evaluator};
pub use expression::{Expression, Operator};
pub use table::QuantityTable;

/// Evaluate `input` against the built-in quantity table and return the
/// resulting dimensional formula.
pub fn evaluate_expression(input: &str) -> Result<String> {
    let table = QuantityTable::builtin();
    Evaluator::new(&table).evaluate(input).map(|e| e.formula)
}
