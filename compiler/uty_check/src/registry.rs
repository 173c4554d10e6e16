//! Union type registry.
//!
//! Two independent maps, both filled while the traversal visits type alias
//! declarations:
//!
//! - union alias name -> ordered allowed-alternative names
//! - function-shape alias name -> parameter [`Signature`]
//!
//! A name may appear in either map or in both. Entries live for one checker
//! run.

use rustc_hash::FxHashMap;

use crate::Signature;

/// Registry of union types and function shapes for one run.
#[derive(Clone, Debug, Default)]
pub struct UnionRegistry {
    /// Union name -> allowed alternatives, in declared order.
    unions: FxHashMap<String, Vec<String>>,
    /// Union names in first-registration order (for deterministic iteration).
    order: Vec<String>,
    /// Function-shape alias name -> parameter signature.
    shapes: FxHashMap<String, Signature>,
}

impl UnionRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Store or overwrite the alternatives of union `name`.
    ///
    /// An empty list is accepted; checks against it are skipped.
    pub fn register(&mut self, name: impl Into<String>, alternatives: Vec<String>) {
        let name = name.into();
        if !self.unions.contains_key(&name) {
            self.order.push(name.clone());
        }
        self.unions.insert(name, alternatives);
    }

    pub fn is_union_type(&self, name: &str) -> bool {
        self.unions.contains_key(name)
    }

    /// Allowed alternatives of `name` in declared order; empty if unknown.
    pub fn allowed_alternatives(&self, name: &str) -> &[String] {
        self.unions.get(name).map_or(&[], Vec::as_slice)
    }

    /// Store or overwrite the signature of function-shape alias `name`.
    pub fn register_function_shape(&mut self, name: impl Into<String>, signature: Signature) {
        self.shapes.insert(name.into(), signature);
    }

    pub fn resolve_function_shape(&self, name: &str) -> Option<&Signature> {
        self.shapes.get(name)
    }

    /// Registered union names in registration order.
    pub fn union_names(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// Number of registered unions.
    pub fn len(&self) -> usize {
        self.unions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.unions.is_empty()
    }

    /// Number of registered function shapes.
    pub fn shape_count(&self) -> usize {
        self.shapes.len()
    }
}
