//! Single-pass union checker.
//!
//! [`UnionChecker`] walks one module in tree order. Type alias declarations
//! feed the registry as they are reached; binding sites reached afterwards
//! are checked against whatever is registered at that point.
//!
//! # Binding sites
//!
//! ```text
//! var / field     `OnTap x = <literal | construction>;`
//! construction    `new C(a, b: c)` or `C(...)` resolving to a class
//! call            `f(...)`, `recv.m(...)` resolving in this unit
//! ```
//!
//! A construction binds arguments through the class's first constructor.
//! Calls that resolve to a class run the construction path first and then
//! the generic call path; the checked-offset set makes the second pass a
//! no-op for arguments the first already handled.

mod api;

pub use api::{check_module, check_module_with_sink, check_unit};

use uty_ir::visitor::{walk_expr, Visitor};
use uty_ir::{
    AnnotationArg, Arg, Expr, ExprArena, ExprId, ExprKind, FieldDecl, ListElem, Module,
    TypeAliasDecl, TypeExpr, VarDecl, UNION_ANNOTATION,
};

use crate::matcher::{conformance, signature};
use crate::{CallTarget, CheckContext, CheckResult, DeclIndex, Reporter, Signature};

/// Traversal engine for one compilation unit.
pub struct UnionChecker<'a, 's> {
    module: &'a Module,
    arena: &'a ExprArena,
    decls: DeclIndex<'a>,
    ctx: CheckContext<'s>,
}

impl<'a, 's> UnionChecker<'a, 's> {
    pub fn new(module: &'a Module, arena: &'a ExprArena, reporter: Reporter<'s>) -> Self {
        UnionChecker {
            module,
            arena,
            decls: DeclIndex::build(module),
            ctx: CheckContext::new(reporter),
        }
    }

    /// Walk the whole module once.
    pub fn run(&mut self) {
        let (module, arena) = (self.module, self.arena);
        self.visit_module(module, arena);
    }

    pub fn context(&self) -> &CheckContext<'s> {
        &self.ctx
    }

    pub fn finish(self) -> CheckResult {
        self.ctx.reporter.finish()
    }

    // Registration

    fn register_alias(&mut self, alias: &TypeAliasDecl) {
        if let Some(annotation) = alias.annotation(UNION_ANNOTATION) {
            let alternatives: Vec<String> = annotation
                .args
                .iter()
                .find_map(|arg| match arg {
                    AnnotationArg::List(elems) => Some(elems),
                    AnnotationArg::Other => None,
                })
                .map(|elems| elems.iter().filter_map(ListElem::type_name).collect())
                .unwrap_or_default();
            tracing::debug!(
                union = %alias.name,
                alternatives = alternatives.len(),
                "registered union type"
            );
            self.ctx.registry.register(alias.name.as_str(), alternatives);
        }

        if let TypeExpr::Function { params, .. } = &alias.aliased {
            let signature = Signature::from_types(params);
            tracing::debug!(shape = %alias.name, %signature, "registered function shape");
            self.ctx
                .registry
                .register_function_shape(alias.name.as_str(), signature);
        }
    }

    // Binding sites

    /// The union governing a slot of declared type `ty`, if it is one.
    fn union_slot(&self, ty: &TypeExpr) -> Option<String> {
        let name = ty.base_name();
        self.ctx.registry.is_union_type(&name).then_some(name)
    }

    fn check_initializer(&mut self, ty: Option<&TypeExpr>, init: Option<ExprId>) {
        let (Some(ty), Some(init)) = (ty, init) else {
            return;
        };
        if let Some(union_name) = self.union_slot(ty) {
            self.check_binding(&union_name, init);
        }
    }

    /// Check every argument of a call or construction bound to `target`.
    fn check_arguments(&mut self, target: CallTarget<'a>, args: &[Arg]) {
        let mut position = 0;
        for arg in args {
            let param = target.param_for(arg.name.as_deref(), position);
            if arg.name.is_none() {
                position += 1;
            }
            let Some(slot) = param.and_then(|p| target.slot_type(p)) else {
                continue;
            };
            if let Some(union_name) = self.union_slot(slot) {
                self.check_binding(&union_name, arg.value);
            }
        }
    }

    /// Match one supplied value against `union_name` and report a miss.
    ///
    /// Only function literals and object constructions are checked; each is
    /// checked at most once per run.
    fn check_binding(&mut self, union_name: &str, value: ExprId) {
        let arena = self.arena;
        let expr = arena.get_expr(value);
        if self.ctx.is_checked(expr.span) {
            return;
        }

        let alternatives = self.ctx.registry.allowed_alternatives(union_name);
        let (target, outcome) = match &expr.kind {
            ExprKind::FunctionLiteral(literal) => {
                let actual = Signature::from_params(&literal.params);
                let outcome = signature::first_match(&actual, alternatives, &self.ctx.registry);
                (actual.to_string(), outcome)
            }
            ExprKind::New(new) => {
                let name = new.type_name();
                let class = self.decls.class(&name);
                let outcome = conformance::first_match(class, alternatives, &self.ctx.registry);
                (name, outcome)
            }
            ExprKind::Call(call) => {
                let Some(class) = self.decls.constructed_class(call, arena) else {
                    return;
                };
                let outcome =
                    conformance::first_match(Some(class), alternatives, &self.ctx.registry);
                (class.name.clone(), outcome)
            }
            ExprKind::Ident(_) | ExprKind::Int(_) | ExprKind::Str(_) | ExprKind::List(_) => {
                return;
            }
        };

        self.ctx.mark_checked(expr.span);
        tracing::trace!(
            union = union_name,
            %target,
            ?outcome,
            offset = expr.span.start,
            "checked binding"
        );

        if outcome.is_violation() {
            let alternatives = self.ctx.registry.allowed_alternatives(union_name);
            self.ctx
                .reporter
                .report(target, union_name, alternatives, expr.span);
        }
    }
}

impl<'a> Visitor<'a> for UnionChecker<'a, '_> {
    fn visit_type_alias(&mut self, alias: &'a TypeAliasDecl, _arena: &'a ExprArena) {
        self.register_alias(alias);
    }

    fn visit_field(&mut self, field: &'a FieldDecl, arena: &'a ExprArena) {
        self.check_initializer(field.ty.as_ref(), field.init);
        if let Some(init) = field.init {
            self.visit_expr_id(init, arena);
        }
    }

    fn visit_var_decl(&mut self, var: &'a VarDecl, arena: &'a ExprArena) {
        self.check_initializer(var.ty.as_ref(), var.init);
        if let Some(init) = var.init {
            self.visit_expr_id(init, arena);
        }
    }

    fn visit_expr(&mut self, expr: &'a Expr, arena: &'a ExprArena) {
        match &expr.kind {
            ExprKind::New(new) => {
                if let Some(target) = self.decls.constructor(&new.type_name()) {
                    self.check_arguments(target, &new.args);
                }
            }
            ExprKind::Call(call) => {
                if let Some(class) = self.decls.constructed_class(call, arena) {
                    if let Some(target) = self.decls.constructor(&class.name) {
                        self.check_arguments(target, &call.args);
                    }
                }
                if let Some(target) = self.decls.resolve_call(call, arena) {
                    self.check_arguments(target, &call.args);
                }
            }
            _ => {}
        }
        walk_expr(self, expr, arena);
    }
}

#[cfg(test)]
mod tests;
