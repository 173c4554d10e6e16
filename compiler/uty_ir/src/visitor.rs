//! Syntax Tree Visitor
//!
//! Generic depth-first traversal over a [`Module`]. Expressions are reached
//! through the [`ExprArena`].
//!
//! # Design
//!
//! Default implementations call `walk_*` functions that traverse children.
//! Override `visit_*` methods to add behavior at specific nodes. A visitor
//! that wants to inspect a node before its children does its work first and
//! then calls the matching `walk_*` function.
//!
//! Traversal order is tree order: items in source order, and within a class
//! its fields, then constructors, then methods.
//!
//! # Example
//!
//! ```text
//! struct CountLiterals {
//!     count: usize,
//! }
//!
//! impl<'ast> Visitor<'ast> for CountLiterals {
//!     fn visit_expr(&mut self, expr: &'ast Expr, arena: &'ast ExprArena) {
//!         if let ExprKind::FunctionLiteral(_) = &expr.kind {
//!             self.count += 1;
//!         }
//!         walk_expr(self, expr, arena);
//!     }
//! }
//! ```

use crate::ast::{
    ClassDecl, ConstructorDecl, Expr, ExprKind, FieldDecl, FunctionDecl, Item, Module, Stmt,
    StmtKind, TypeAliasDecl, VarDecl,
};
use crate::{ExprArena, ExprId};

/// Syntax tree visitor.
///
/// The visitor can mutate its own state during traversal; the tree itself
/// remains immutable.
pub trait Visitor<'ast> {
    /// Visit a module.
    fn visit_module(&mut self, module: &'ast Module, arena: &'ast ExprArena) {
        walk_module(self, module, arena);
    }

    /// Visit a top-level item.
    fn visit_item(&mut self, item: &'ast Item, arena: &'ast ExprArena) {
        walk_item(self, item, arena);
    }

    /// Visit a type alias declaration.
    fn visit_type_alias(&mut self, alias: &'ast TypeAliasDecl, _arena: &'ast ExprArena) {
        // Type aliases have no child expressions
        let _ = alias;
    }

    /// Visit a class declaration.
    fn visit_class(&mut self, class: &'ast ClassDecl, arena: &'ast ExprArena) {
        walk_class(self, class, arena);
    }

    /// Visit a field declaration.
    fn visit_field(&mut self, field: &'ast FieldDecl, arena: &'ast ExprArena) {
        if let Some(init) = field.init {
            self.visit_expr_id(init, arena);
        }
    }

    /// Visit a constructor declaration.
    fn visit_constructor(&mut self, ctor: &'ast ConstructorDecl, arena: &'ast ExprArena) {
        walk_body(self, &ctor.body, arena);
    }

    /// Visit a function or method declaration.
    fn visit_function(&mut self, function: &'ast FunctionDecl, arena: &'ast ExprArena) {
        walk_body(self, &function.body, arena);
    }

    /// Visit a variable declaration.
    fn visit_var_decl(&mut self, var: &'ast VarDecl, arena: &'ast ExprArena) {
        if let Some(init) = var.init {
            self.visit_expr_id(init, arena);
        }
    }

    /// Visit a statement.
    fn visit_stmt(&mut self, stmt: &'ast Stmt, arena: &'ast ExprArena) {
        walk_stmt(self, stmt, arena);
    }

    /// Visit an expression.
    fn visit_expr(&mut self, expr: &'ast Expr, arena: &'ast ExprArena) {
        walk_expr(self, expr, arena);
    }

    /// Visit an expression by ID.
    fn visit_expr_id(&mut self, id: ExprId, arena: &'ast ExprArena) {
        self.visit_expr(arena.get_expr(id), arena);
    }
}

/// Walk a module's items in source order.
pub fn walk_module<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    module: &'ast Module,
    arena: &'ast ExprArena,
) {
    for item in &module.items {
        visitor.visit_item(item, arena);
    }
}

/// Dispatch an item to its specific visit method.
pub fn walk_item<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    item: &'ast Item,
    arena: &'ast ExprArena,
) {
    match item {
        Item::TypeAlias(alias) => visitor.visit_type_alias(alias, arena),
        Item::Class(class) => visitor.visit_class(class, arena),
        Item::Function(function) => visitor.visit_function(function, arena),
        Item::Var(var) => visitor.visit_var_decl(var, arena),
    }
}

/// Walk a class: fields, then constructors, then methods.
pub fn walk_class<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    class: &'ast ClassDecl,
    arena: &'ast ExprArena,
) {
    for field in &class.fields {
        visitor.visit_field(field, arena);
    }
    for ctor in &class.constructors {
        visitor.visit_constructor(ctor, arena);
    }
    for method in &class.methods {
        visitor.visit_function(method, arena);
    }
}

/// Walk a statement list.
pub fn walk_body<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    body: &'ast [Stmt],
    arena: &'ast ExprArena,
) {
    for stmt in body {
        visitor.visit_stmt(stmt, arena);
    }
}

/// Walk a statement's children.
pub fn walk_stmt<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    stmt: &'ast Stmt,
    arena: &'ast ExprArena,
) {
    match &stmt.kind {
        StmtKind::Var(var) => visitor.visit_var_decl(var, arena),
        StmtKind::Expr(id) => visitor.visit_expr_id(*id, arena),
        StmtKind::Return(value) => {
            if let Some(id) = value {
                visitor.visit_expr_id(*id, arena);
            }
        }
    }
}

/// Walk an expression's children.
pub fn walk_expr<'ast, V: Visitor<'ast> + ?Sized>(
    visitor: &mut V,
    expr: &'ast Expr,
    arena: &'ast ExprArena,
) {
    match &expr.kind {
        // Leaves
        ExprKind::Ident(_) | ExprKind::Int(_) | ExprKind::Str(_) => {}

        ExprKind::FunctionLiteral(literal) => walk_body(visitor, &literal.body, arena),
        ExprKind::New(new) => {
            for arg in &new.args {
                visitor.visit_expr_id(arg.value, arena);
            }
        }
        ExprKind::Call(call) => {
            if let Some(receiver) = call.receiver {
                visitor.visit_expr_id(receiver, arena);
            }
            for arg in &call.args {
                visitor.visit_expr_id(arg.value, arena);
            }
        }
        ExprKind::List(elems) => {
            for elem in elems {
                visitor.visit_expr_id(*elem, arena);
            }
        }
    }
}

#[cfg(test)]
mod tests;
