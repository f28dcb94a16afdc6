//! Dimension vectors and the dimensional formula notation
//!
//! A dimensional formula such as `M¹L⁻¹T⁻²` is a sequence of basis letters,
//! each optionally followed by a superscript exponent. Internally it is held
//! as a [`DimensionVector`] of seven integer exponents.

use crate::superscript;
use std::convert::Infallible;
use std::fmt;
use std::ops::{Add, Neg, Sub};
use std::str::FromStr;

/// The seven SI base dimensions, in canonical formula order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum BaseDimension {
    Mass,
    Length,
    Time,
    Current,
    Temperature,
    AmountOfSubstance,
    LuminousIntensity,
}

impl BaseDimension {
    pub const ALL: [BaseDimension; 7] = [
        BaseDimension::Mass,
        BaseDimension::Length,
        BaseDimension::Time,
        BaseDimension::Current,
        BaseDimension::Temperature,
        BaseDimension::AmountOfSubstance,
        BaseDimension::LuminousIntensity,
    ];

    pub fn symbol(self) -> char {
        match self {
            BaseDimension::Mass => 'M',
            BaseDimension::Length => 'L',
            BaseDimension::Time => 'T',
            BaseDimension::Current => 'I',
            BaseDimension::Temperature => 'θ',
            BaseDimension::AmountOfSubstance => 'N',
            BaseDimension::LuminousIntensity => 'J',
        }
    }

    pub fn from_symbol(c: char) -> Option<Self> {
        match c {
            'M' => Some(BaseDimension::Mass),
            'L' => Some(BaseDimension::Length),
            'T' => Some(BaseDimension::Time),
            'I' => Some(BaseDimension::Current),
            'θ' => Some(BaseDimension::Temperature),
            'N' => Some(BaseDimension::AmountOfSubstance),
            'J' => Some(BaseDimension::LuminousIntensity),
            _ => None,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            BaseDimension::Mass => "mass",
            BaseDimension::Length => "length",
            BaseDimension::Time => "time",
            BaseDimension::Current => "electric current",
            BaseDimension::Temperature => "temperature",
            BaseDimension::AmountOfSubstance => "amount of substance",
            BaseDimension::LuminousIntensity => "luminous intensity",
        }
    }

    /// Slot of this dimension within a [`DimensionVector`].
    pub fn index(self) -> usize {
        self as usize
    }
}

/// Exponents of the seven base dimensions, indexed by [`BaseDimension`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct DimensionVector([i32; 7]);

impl DimensionVector {
    pub const ZERO: DimensionVector = DimensionVector([0; 7]);

    pub const fn from_exponents(exponents: [i32; 7]) -> Self {
        Self(exponents)
    }

    pub fn exponents(&self) -> [i32; 7] {
        self.0
    }

    pub fn get(&self, dim: BaseDimension) -> i32 {
        self.0[dim.index()]
    }

    pub fn is_dimensionless(&self) -> bool {
        *self == Self::ZERO
    }

    /// Parse a dimensional formula.
    ///
    /// Each basis letter takes the superscript run that immediately follows
    /// it as its exponent, or 1 when there is none. A letter that appears
    /// twice keeps its last exponent. Anything else is ignored and missing
    /// letters stay at 0.
    pub fn parse(formula: &str) -> Self {
        let chars: Vec<char> = formula.chars().collect();
        let mut exponents = [0i32; 7];
        let mut i = 0;

        while i < chars.len() {
            let Some(dim) = BaseDimension::from_symbol(chars[i]) else {
                i += 1;
                continue;
            };

            let start = i + 1;
            let mut end = start;
            while end < chars.len() && superscript::is_superscript(chars[end]) {
                end += 1;
            }

            exponents[dim.index()] = if end > start {
                superscript::decode(chars[start..end].iter().copied())
            } else {
                1
            };
            i = end;
        }

        Self(exponents)
    }

    /// Render the canonical formula: non-zero exponents only, in basis order.
    pub fn format(&self) -> String {
        let mut out = String::new();
        for dim in BaseDimension::ALL {
            let exp = self.get(dim);
            if exp == 0 {
                continue;
            }
            out.push(dim.symbol());
            out.push_str(&superscript::encode(exp));
        }
        out
    }
}

impl fmt::Display for DimensionVector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.format())
    }
}

impl FromStr for DimensionVector {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(Self::parse(s))
    }
}

impl Add for DimensionVector {
    type Output = DimensionVector;

    fn add(self, rhs: Self) -> Self::Output {
        let mut out = self.0;
        for (a, b) in out.iter_mut().zip(rhs.0) {
            *a += b;
        }
        Self(out)
    }
}

impl Sub for DimensionVector {
    type Output = DimensionVector;

    fn sub(self, rhs: Self) -> Self::Output {
        let mut out = self.0;
        for (a, b) in out.iter_mut().zip(rhs.0) {
            *a -= b;
        }
        Self(out)
    }
}

impl Neg for DimensionVector {
    type Output = DimensionVector;

    fn neg(self) -> Self::Output {
        Self(self.0.map(|e| -e))
    }
}
