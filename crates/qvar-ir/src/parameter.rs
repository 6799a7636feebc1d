//! Parameter expressions for variational circuits.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{IrError, IrResult};

/// A rotation angle: either fixed at build time or read from a parameter vector.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum ParameterExpression {
    /// A constant numeric value.
    Constant(f64),
    /// The value at this index of the parameter vector supplied at evaluation time.
    Slot(usize),
}

impl ParameterExpression {
    /// Create a constant parameter.
    pub fn constant(value: f64) -> Self {
        ParameterExpression::Constant(value)
    }

    /// Create a parameter bound to slot `index` of the parameter vector.
    pub fn slot(index: usize) -> Self {
        ParameterExpression::Slot(index)
    }

    /// Check if this expression needs a parameter vector to evaluate.
    pub fn is_symbolic(&self) -> bool {
        matches!(self, ParameterExpression::Slot(_))
    }

    /// The parameter-vector slot this expression reads, if any.
    pub fn slot_index(&self) -> Option<usize> {
        match self {
            ParameterExpression::Slot(i) => Some(*i),
            ParameterExpression::Constant(_) => None,
        }
    }

    /// Try to evaluate without a parameter vector.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            ParameterExpression::Constant(v) => Some(*v),
            ParameterExpression::Slot(_) => None,
        }
    }

    /// Resolve the expression against a parameter vector.
    pub fn bind(&self, params: &[f64]) -> IrResult<f64> {
        match self {
            ParameterExpression::Constant(v) => Ok(*v),
            ParameterExpression::Slot(i) => {
                params
                    .get(*i)
                    .copied()
                    .ok_or(IrError::UnboundParameter {
                        slot: *i,
                        len: params.len(),
                    })
            }
        }
    }
}

impl fmt::Display for ParameterExpression {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParameterExpression::Constant(v) => write!(f, "{v}"),
            ParameterExpression::Slot(i) => write!(f, "θ{i}"),
        }
    }
}

impl From<f64> for ParameterExpression {
    fn from(value: f64) -> Self {
        ParameterExpression::Constant(value)
    }
}

impl From<i32> for ParameterExpression {
    fn from(value: i32) -> Self {
        ParameterExpression::Constant(f64::from(value))
    }
}
