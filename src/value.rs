use std::{fmt, ops};

use crate::{
    error::ArithmeticError,
    token::{Token, TokenType},
};

/// A numeric value: a 64-bit signed integer or a 64-bit real.
///
/// Arithmetic stays integral as long as both operands are `Integer` and
/// the result is exactly representable; any operation touching a `Real`
/// yields `Real`, and division always yields `Real` regardless of the
/// operands.
///
/// ## Example
/// ```
/// use calcvm::value::Value;
///
/// assert_eq!(Value::Integer(2) * Value::Integer(3), Value::Integer(6));
/// assert_eq!(Value::Integer(1) + Value::Real(0.5), Value::Real(1.5));
/// assert_eq!(Value::Integer(4).div(Value::Integer(2)).unwrap(), Value::Real(2.0));
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A 64-bit floating-point real.
    Real(f64),
}

impl Value {
    /// Converts a literal token into a value.
    ///
    /// `Integer` tokens parse as `Integer`; literals wider than `i64`
    /// fall back to the closest representable `Real`. `Real` tokens
    /// parse as `Real`.
    ///
    /// # Panics
    /// Panics when the token is not a numeric literal. Value nodes built
    /// by the parser always hold one.
    #[must_use]
    pub fn from_literal(token: &Token) -> Self {
        match token.kind {
            TokenType::Integer => {
                token.code
                     .parse::<i64>()
                     .map_or_else(|_| Self::Real(token.code.parse().unwrap_or(f64::INFINITY)),
                                  Self::Integer)
            },
            TokenType::Real => Self::Real(token.code.parse().unwrap_or(f64::NAN)),
            _ => panic!("literal token expected, found {:?}", token.kind),
        }
    }

    /// Widens to `f64`.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn as_real(self) -> f64 {
        match self {
            Self::Integer(value) => value as f64,
            Self::Real(value) => value,
        }
    }

    /// True division. The result is always `Real`, never a truncated
    /// integer quotient.
    ///
    /// # Errors
    /// Returns `ArithmeticError::DivisionByZero` when the right operand
    /// is exactly zero.
    pub fn div(self, rhs: Self) -> Result<Self, ArithmeticError> {
        let divisor = rhs.as_real();
        if divisor == 0.0 {
            return Err(ArithmeticError::DivisionByZero);
        }
        Ok(Self::Real(self.as_real() / divisor))
    }

    /// Exponentiation with `self` as the base.
    ///
    /// Integer base and exponent stay `Integer` when the exponent fits
    /// `u32` and the result does not overflow `i64`; everything else
    /// promotes to `Real` and uses the host `powf`, inheriting its
    /// behavior for exotic cases such as a negative base with a
    /// fractional exponent.
    #[must_use]
    pub fn pow(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Integer(base), Self::Integer(exp)) => {
                match u32::try_from(exp).ok().and_then(|exp| base.checked_pow(exp)) {
                    Some(result) => Self::Integer(result),
                    None => Self::Real(self.as_real().powf(rhs.as_real())),
                }
            },
            (lhs, rhs) => Self::Real(lhs.as_real().powf(rhs.as_real())),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Self::Real(value)
    }
}

impl ops::Neg for Value {
    type Output = Self;

    fn neg(self) -> Self {
        match self {
            Self::Integer(value) => {
                value.checked_neg()
                     .map_or_else(|| Self::Real(-self.as_real()), Self::Integer)
            },
            Self::Real(value) => Self::Real(-value),
        }
    }
}

impl ops::Add for Value {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => {
                a.checked_add(b)
                 .map_or_else(|| Self::Real(self.as_real() + rhs.as_real()), Self::Integer)
            },
            (lhs, rhs) => Self::Real(lhs.as_real() + rhs.as_real()),
        }
    }
}

impl ops::Sub for Value {
    type Output = Self;

    fn sub(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => {
                a.checked_sub(b)
                 .map_or_else(|| Self::Real(self.as_real() - rhs.as_real()), Self::Integer)
            },
            (lhs, rhs) => Self::Real(lhs.as_real() - rhs.as_real()),
        }
    }
}

impl ops::Mul for Value {
    type Output = Self;

    fn mul(self, rhs: Self) -> Self {
        match (self, rhs) {
            (Self::Integer(a), Self::Integer(b)) => {
                a.checked_mul(b)
                 .map_or_else(|| Self::Real(self.as_real() * rhs.as_real()), Self::Integer)
            },
            (lhs, rhs) => Self::Real(lhs.as_real() * rhs.as_real()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Integer(value) => write!(f, "{value}"),
            Self::Real(value) => write!(f, "{value}"),
        }
    }
}
