use core::fmt;

use thiserror::Error;

/// Arithmetic operation that produced an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operation {
    Add,
    Sub,
    Mul,
    Div,
    Neg,
    Abs,
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Operation::Add => "addition",
            Operation::Sub => "subtraction",
            Operation::Mul => "multiplication",
            Operation::Div => "division",
            Operation::Neg => "negation",
            Operation::Abs => "absolute value",
        };
        f.write_str(name)
    }
}

/// Errors for fixed-point arithmetic.
///
/// Every variant carries the raw operands so the failing expression can be
/// reconstructed from a log line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ArithmeticError {
    #[error("overflow in {op} (raw operands {lhs} and {rhs})")]
    Overflow { op: Operation, lhs: i32, rhs: i32 },

    /// Overflow in a single-operand operation (negation, absolute value).
    #[error("overflow in {op} (raw operand {operand})")]
    UnaryOverflow { op: Operation, operand: i32 },

    #[error("division by zero (raw dividend {lhs})")]
    DivisionByZero { lhs: i32 },
}

impl ArithmeticError {
    /// Returns the status code matching this error.
    pub fn status(&self) -> ArithmeticStatus {
        match self {
            ArithmeticError::Overflow { .. } | ArithmeticError::UnaryOverflow { .. } => {
                ArithmeticStatus::Overflow
            }
            ArithmeticError::DivisionByZero { .. } => ArithmeticStatus::DivisionByZero,
        }
    }
}

/// Machine-checkable status of an arithmetic operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ArithmeticStatus {
    #[default]
    Ok,
    Overflow,
    DivisionByZero,
}

impl ArithmeticStatus {
    pub fn is_ok(self) -> bool {
        self == ArithmeticStatus::Ok
    }
}
