//! Structured parameter-type signatures.
//!
//! A signature is the ordered list of parameter-type names of a function
//! literal or function-shape alias. Return types are not modeled.

use std::fmt;

use smallvec::SmallVec;
use uty_ir::{Param, TypeExpr};

/// Parameter-type name that accepts any actual type. Unannotated
/// parameters also get this name.
pub const WILDCARD: &str = "any";

/// Ordered parameter-type names.
#[derive(Clone, Eq, PartialEq, Hash, Debug, Default)]
pub struct Signature {
    params: SmallVec<[String; 4]>,
}

impl Signature {
    pub fn new<I, S>(params: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Signature {
            params: params.into_iter().map(Into::into).collect(),
        }
    }

    /// Signature of a parameter list as written on a function literal.
    pub fn from_params(params: &[Param]) -> Self {
        Signature {
            params: params
                .iter()
                .map(|p| {
                    p.ty
                        .as_ref()
                        .map_or_else(|| WILDCARD.to_string(), TypeExpr::display_name)
                })
                .collect(),
        }
    }

    /// Signature of the parameter types of a function type.
    pub fn from_types(types: &[TypeExpr]) -> Self {
        Signature {
            params: types.iter().map(TypeExpr::display_name).collect(),
        }
    }

    pub fn params(&self) -> &[String] {
        &self.params
    }

    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// The sole parameter type of a one-parameter signature.
    pub fn single_param(&self) -> Option<&str> {
        match self.params.as_slice() {
            [only] => Some(only.as_str()),
            _ => None,
        }
    }
}

/// Renders as `void Function(A, B)`; the return type is always `void`.
impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "void Function({})", self.params.join(", "))
    }
}

#[cfg(test)]
mod tests;
