use thiserror::Error;

use crate::{FloatExt, Operation, Operator};

/// Errors raised while evaluating an operation tree.
///
/// Evaluation aborts on the first error; no partial result is produced.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum EvalError {
    /// A divisor was exactly zero, either among a Divide node's operands or
    /// as the evaluated result of a Divide node's nested child.
    #[error("division by zero")]
    DivisionByZero,
    /// An operator token outside the closed set. Unreachable once an
    /// [`Operator`] exists; surfaces from [`Operator::from_str`].
    #[error("unsupported operator `{0}`")]
    UnsupportedOperator(String),
    /// Subtract and Divide need a base operand to fold from.
    #[error("{0} requires at least one operand")]
    EmptyOperands(Operator),
}

impl<Real: FloatExt> Operation<Real> {
    /// Evaluates the tree depth-first, post-order.
    ///
    /// The node's operands are folded with its own operator, the nested child
    /// (if any) is evaluated by the same rules, and the two results are
    /// combined once using the parent's operator. Arithmetic follows plain
    /// IEEE semantics; the only checked condition is an exactly-zero divisor.
    pub fn evaluate(&self) -> Result<Real, EvalError> {
        let local = self.fold_operands()?;
        match &self.nested {
            None => Ok(local),
            Some(child) => combine(self.operator, local, child.evaluate()?),
        }
    }

    fn fold_operands(&self) -> Result<Real, EvalError> {
        match self.operator {
            Operator::Add => Ok(self.operands.iter().fold(Real::zero(), |acc, &v| acc + v)),
            Operator::Multiply => Ok(self.operands.iter().fold(Real::one(), |acc, &v| acc * v)),
            Operator::Subtract => {
                let (base, rest) = self.base_operand()?;
                Ok(rest.iter().fold(base, |acc, &v| acc - v))
            }
            Operator::Divide => {
                let (base, rest) = self.base_operand()?;
                // Each divisor is checked before dividing so the error fires
                // at the first zero in a left-to-right running division.
                rest.iter().try_fold(base, |acc, &v| {
                    if v == Real::zero() {
                        Err(EvalError::DivisionByZero)
                    } else {
                        Ok(acc / v)
                    }
                })
            }
        }
    }

    fn base_operand(&self) -> Result<(Real, &[Real]), EvalError> {
        match self.operands.split_first() {
            Some((&base, rest)) => Ok((base, rest)),
            None => Err(EvalError::EmptyOperands(self.operator)),
        }
    }
}

/// Combines a node's local fold with its nested child's result, applying the
/// parent's operator exactly once.
fn combine<Real: FloatExt>(op: Operator, local: Real, nested: Real) -> Result<Real, EvalError> {
    Ok(match op {
        Operator::Add => local + nested,
        Operator::Subtract => local - nested,
        Operator::Multiply => local * nested,
        Operator::Divide => {
            // The nested result gets its own zero check, distinct from the
            // operand-level one.
            if nested == Real::zero() {
                return Err(EvalError::DivisionByZero);
            }
            local / nested
        }
    })
}
