//! Recursive evaluator for nested arithmetic operation trees.
//!
//! # Why?
//!
//! Structured inputs (deserialized XML, JSON, ...) often describe a
//! calculation as a tree: each node names an operator, carries a list of
//! operands, and may nest exactly one child operation whose result folds into
//! the parent. This crate evaluates such pre-built trees; it deliberately does
//! no parsing or deserialization of its own, so any host that can produce an
//! [`Operation`] gets the same combination and error semantics.
//!
//! # Example
//!
//! ```rust
//! use tree_calc::*;
//!
//! // 4 * (2 + 3)
//! let tree = Operation::new(Operator::Multiply, vec![4.0])
//!     .with_nested(Operation::new(Operator::Add, vec![2.0, 3.0]));
//! assert_eq!(tree.evaluate(), Ok(20.0));
//!
//! // 10 / 0 is reported, not unwound.
//! let tree = Operation::new(Operator::Divide, vec![10.0, 0.0]);
//! assert_eq!(tree.evaluate(), Err(EvalError::DivisionByZero));
//! ```

mod evaluate;
mod operation;

pub use evaluate::EvalError;
pub use operation::{Operation, Operator};

pub trait FloatExt: num_traits::Float + Send + Sync {}
impl FloatExt for f32 {}
impl FloatExt for f64 {}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64) {
        assert!(
            (actual - expected).abs() < 1e-9,
            "expected {expected}, got {actual}"
        );
    }

    #[test]
    fn flat_addition() {
        let tree = Operation::new(Operator::Add, vec![2.0, 3.0]);
        assert_eq!(tree.evaluate(), Ok(5.0));
    }

    #[test]
    fn multiplication_with_nested_addition() {
        let tree = Operation::new(Operator::Multiply, vec![4.0])
            .with_nested(Operation::new(Operator::Add, vec![2.0, 3.0]));
        assert_eq!(tree.evaluate(), Ok(20.0));
    }

    #[test]
    fn division_by_zero_operand() {
        let tree = Operation::new(Operator::Divide, vec![10.0, 0.0]);
        assert_eq!(tree.evaluate(), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn addition_with_nested_multiplication() {
        // local = 2 + 3, nested = 4 * 5, combined = 5 + 20.
        let tree = Operation::new(Operator::Add, vec![2.0, 3.0])
            .with_nested(Operation::new(Operator::Multiply, vec![4.0, 5.0]));
        assert_eq!(tree.evaluate(), Ok(25.0));
    }

    #[test]
    fn fractional_operands() {
        // local = 19.1, nested = 6.93, combined = 26.03.
        let tree = Operation::new(Operator::Add, vec![7.5, 8.0, 3.6])
            .with_nested(Operation::new(Operator::Multiply, vec![3.3, 2.1]));
        assert_close(tree.evaluate().unwrap(), 26.03);
    }

    #[test]
    fn multiplication_with_nested_division() {
        // local = 10, nested = 6 / 4.2, combined = 100 / 7.
        let tree = Operation::new(Operator::Multiply, vec![5.0, 2.0])
            .with_nested(Operation::new(Operator::Divide, vec![6.0, 4.2]));
        assert_close(tree.evaluate().unwrap(), 100.0 / 7.0);
    }

    #[test]
    fn three_levels_of_nesting() {
        // 7.5 + 8, then 3.3 * 2.1 combined with (4 - 1):
        // 15.5 + 6.93 * 3 = 36.29.
        let tree = Operation::new(Operator::Add, vec![7.5, 8.0]).with_nested(
            Operation::new(Operator::Multiply, vec![3.3, 2.1])
                .with_nested(Operation::new(Operator::Subtract, vec![4.0, 1.0])),
        );
        assert_close(tree.evaluate().unwrap(), 36.29);
    }
}
