//! Uty IR - Syntax Model
//!
//! This crate holds the node vocabulary the union type checker consumes.
//! The front-end that produces it lives elsewhere; hosts build these trees
//! from their own parser output.
//!
//! - Spans for source locations
//! - A flat expression arena (`ExprId` indices instead of `Box<Expr>`)
//! - Declarations: type aliases, classes, functions, variables
//! - A `Visitor` with `walk_*` helpers for tree-order traversal
//! - A `TreeBuilder` that lays nodes out into synthetic source text
//!
//! # Design Philosophy
//!
//! - **Flatten expressions**: parents refer to children by `ExprId`
//! - **Immutable input**: nothing in the checker mutates the tree
//! - **Plain names**: type references are compared by their rendered name

pub mod ast;
pub mod builder;
mod expr_id;
mod span;
pub mod visitor;

pub use ast::{
    Annotation, AnnotationArg, Arg, CallExpr, ClassDecl, ConstructorDecl, Expr, ExprKind,
    FieldDecl, FunctionDecl, FunctionLiteral, Item, ListElem, Module, NewExpr, Param, ParamKind,
    Stmt, StmtKind, TypeAliasDecl, TypeExpr, VarDecl,
};
pub use builder::{CompilationUnit, TreeBuilder, UNION_ANNOTATION};
pub use expr_id::{ExprArena, ExprId};
pub use span::{Span, SpanError};
