//! Arithmetic operators: the binary reducer and the unary function table.
//!
//! Every computation goes through [`check_result`], so NaN and infinite
//! values never escape into the state layer, and every finite result is
//! rounded to 8 decimal places before anyone stores or displays it.

use serde::{Deserialize, Serialize};

use crate::core::{format_value, ArithmeticError, CalcResult};

/// Type-safe binary operator enum - compile-time guarantee of valid operators
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
    /// Power (^)
    Power,
    /// Percentage-of (%): `a * (b / 100)`, deliberately not modulo
    Percent,
}

impl BinaryOp {
    /// Returns the operator symbol used in history lines
    #[must_use]
    pub const fn symbol(self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
            Self::Power => "^",
            Self::Percent => "%",
        }
    }

    /// Maps a typed character to its operator
    #[must_use]
    pub const fn from_symbol(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '^' => Some(Self::Power),
            '%' => Some(Self::Percent),
            _ => None,
        }
    }

    /// Reduces two operands with this operator.
    ///
    /// Division by zero is an error condition, never a computed value;
    /// `%` computes the percentage of `a` given by `b`.
    pub fn apply(self, a: f64, b: f64) -> CalcResult<f64> {
        let raw = match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => {
                if b == 0.0 {
                    return Err(ArithmeticError::DivisionByZero);
                }
                a / b
            }
            Self::Power => a.powf(b),
            Self::Percent => a * (b / 100.0),
        };
        check_result(raw)
    }

    /// Renders the left-hand side of a history line, e.g. `"7 + 3"`
    #[must_use]
    pub fn expression(self, a: f64, b: f64) -> String {
        format!("{} {} {}", format_value(a), self.symbol(), format_value(b))
    }
}

/// Unary (scientific) functions applied to the displayed operand
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum UnaryOp {
    /// `x * x`
    Square,
    /// Square root; negative operands are a domain error
    Sqrt,
    /// Sine of an angle in degrees
    Sin,
    /// Cosine of an angle in degrees
    Cos,
    /// Tangent of an angle in degrees
    Tan,
    /// Base-10 logarithm; requires a strictly positive operand
    Log10,
    /// Natural logarithm; requires a strictly positive operand
    Ln,
    /// Factorial; requires a non-negative integer operand
    Factorial,
}

impl UnaryOp {
    /// Returns the function name used in history lines
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Square => "square",
            Self::Sqrt => "sqrt",
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log10 => "log10",
            Self::Ln => "ln",
            Self::Factorial => "factorial",
        }
    }

    /// Applies this function to the operand.
    ///
    /// Trigonometric functions interpret the operand in degrees.
    pub fn apply(self, x: f64) -> CalcResult<f64> {
        let raw = match self {
            Self::Square => x * x,
            Self::Sqrt => {
                if x < 0.0 {
                    return Err(ArithmeticError::NegativeSquareRoot);
                }
                x.sqrt()
            }
            Self::Sin => x.to_radians().sin(),
            Self::Cos => x.to_radians().cos(),
            Self::Tan => x.to_radians().tan(),
            Self::Log10 => {
                if x <= 0.0 {
                    return Err(ArithmeticError::NonPositiveLogarithm);
                }
                x.log10()
            }
            Self::Ln => {
                if x <= 0.0 {
                    return Err(ArithmeticError::NonPositiveLogarithm);
                }
                x.ln()
            }
            Self::Factorial => factorial(x)?,
        };
        check_result(raw)
    }

    /// Renders the left-hand side of a history line: `"sqrt(9)"`, or the
    /// postfix `"5!"` for factorial
    #[must_use]
    pub fn expression(self, x: f64) -> String {
        match self {
            Self::Factorial => format!("{}!", format_value(x)),
            _ => format!("{}({})", self.name(), format_value(x)),
        }
    }
}

/// Iterative factorial over f64 operands.
fn factorial(x: f64) -> CalcResult<f64> {
    if x < 0.0 {
        return Err(ArithmeticError::NegativeFactorial);
    }
    if x.fract() != 0.0 {
        return Err(ArithmeticError::NonIntegerFactorial);
    }
    // 171! overflows f64
    if x > 170.0 {
        return Err(ArithmeticError::Overflow);
    }
    let n = x as u32;
    let mut acc = 1.0;
    for k in 2..=n {
        acc *= f64::from(k);
    }
    Ok(acc)
}

/// Rejects NaN/infinite results, then rounds to 8 decimal places
pub(crate) fn check_result(raw: f64) -> CalcResult<f64> {
    if raw.is_nan() {
        return Err(ArithmeticError::NotANumber);
    }
    if raw.is_infinite() {
        return Err(ArithmeticError::Overflow);
    }
    Ok(round_result(raw))
}

/// Rounds to 8 decimal places to suppress floating-point noise.
///
/// Skipped when scaling would overflow; at that magnitude the value has no
/// fractional part anyway.
fn round_result(value: f64) -> f64 {
    let scaled = value * 1e8;
    if scaled.is_finite() {
        scaled.round() / 1e8
    } else {
        value
    }
}
