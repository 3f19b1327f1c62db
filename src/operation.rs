use std::fmt;
use std::str::FromStr;

use crate::EvalError;

/// Closed set of arithmetic operators a node can carry.
///
/// Subtract and Divide are order-sensitive: the first operand is the base and
/// every later operand applies left-to-right. Add and Multiply are not.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operator {
    Add,
    Subtract,
    Multiply,
    Divide,
}

impl Operator {
    /// The serialized token for this operator, as deserializers produce it.
    pub fn token(self) -> &'static str {
        match self {
            Self::Add => "Addition",
            Self::Subtract => "Subtraction",
            Self::Multiply => "Multiplication",
            Self::Divide => "Division",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Operator {
    type Err = EvalError;

    /// Maps the case-sensitive token set used by external deserializers onto
    /// the closed enum.
    fn from_str(token: &str) -> Result<Self, Self::Err> {
        match token {
            "Addition" => Ok(Self::Add),
            "Subtraction" => Ok(Self::Subtract),
            "Multiplication" => Ok(Self::Multiply),
            "Division" => Ok(Self::Divide),
            other => Err(EvalError::UnsupportedOperator(other.to_string())),
        }
    }
}

/// One node of an operation tree.
///
/// A node owns its optional nested child outright, so trees are acyclic by
/// construction and finite in depth. Nodes are built once (by an external
/// deserializer or by test code) and never mutated by evaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct Operation<Real> {
    pub operator: Operator,
    pub operands: Vec<Real>,
    pub nested: Option<Box<Operation<Real>>>,
}

impl<Real> Operation<Real> {
    pub fn new(operator: Operator, operands: impl Into<Vec<Real>>) -> Self {
        Self {
            operator,
            operands: operands.into(),
            nested: None,
        }
    }

    /// Attaches the single nested child, replacing any previous one.
    pub fn with_nested(mut self, nested: Operation<Real>) -> Self {
        self.nested = Some(Box::new(nested));
        self
    }
}
