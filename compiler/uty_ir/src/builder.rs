//! Tree builder for hosts and tests.
//!
//! Lays nodes out into a synthetic source text while building them, so
//! every span points at real text and line numbers are meaningful. Items
//! and statements each end with a newline.
//!
//! ```text
//! let mut b = TreeBuilder::new();
//! b.function_alias("OnTapCtx", &["Ctx"]);
//! b.union_alias("OnTap", &["VoidCallback", "OnTapCtx"]);
//! b.var("OnTap", "handler", |b| b.fn_literal(&["int"]));
//! let unit = b.finish();
//! ```

use crate::ast::{
    Annotation, AnnotationArg, Arg, CallExpr, ClassDecl, ConstructorDecl, Expr, ExprKind,
    FieldDecl, FunctionDecl, FunctionLiteral, Item, ListElem, Module, NewExpr, Param, ParamKind,
    Stmt, StmtKind, TypeAliasDecl, TypeExpr, VarDecl,
};
use crate::{ExprArena, ExprId, Span};

/// Name of the annotation that marks a union type alias.
pub const UNION_ANNOTATION: &str = "UnionType";

/// A complete compilation unit: original text plus its syntax tree.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct CompilationUnit {
    /// Display path of the unit.
    pub path: String,
    pub source: String,
    pub module: Module,
    pub arena: ExprArena,
}

/// Positional typed parameter `Ty name`.
pub fn param(name: &str, ty: &str) -> Param {
    make_param(name, Some(ty), ParamKind::Positional, false)
}

/// Positional parameter without a type annotation.
pub fn untyped_param(name: &str) -> Param {
    make_param(name, None, ParamKind::Positional, false)
}

/// Named typed parameter `{Ty name}`.
pub fn named_param(name: &str, ty: &str) -> Param {
    make_param(name, Some(ty), ParamKind::Named, false)
}

/// Positional `this.name` parameter.
pub fn field_param(name: &str) -> Param {
    make_param(name, None, ParamKind::Positional, true)
}

/// Named `{this.name}` parameter.
pub fn named_field_param(name: &str) -> Param {
    make_param(name, None, ParamKind::Named, true)
}

fn make_param(name: &str, ty: Option<&str>, kind: ParamKind, field_forwarding: bool) -> Param {
    Param {
        name: name.to_string(),
        ty: ty.map(type_ref),
        kind,
        field_forwarding,
        span: Span::DUMMY,
    }
}

/// Incremental builder for a [`CompilationUnit`].
#[derive(Default)]
pub struct TreeBuilder {
    path: String,
    source: String,
    arena: ExprArena,
    items: Vec<Item>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::with_path("<builder>")
    }

    pub fn with_path(path: impl Into<String>) -> Self {
        TreeBuilder {
            path: path.into(),
            source: String::new(),
            arena: ExprArena::new(),
            items: Vec::new(),
        }
    }

    /// Finish building and return the unit.
    pub fn finish(self) -> CompilationUnit {
        CompilationUnit {
            path: self.path,
            source: self.source,
            module: Module { items: self.items },
            arena: self.arena,
        }
    }

    /// Current byte offset into the synthetic source.
    pub fn offset(&self) -> u32 {
        u32::try_from(self.source.len()).unwrap_or(u32::MAX)
    }

    fn write(&mut self, text: &str) -> Span {
        let start = self.offset();
        self.source.push_str(text);
        Span::new(start, self.offset())
    }

    fn span_from(&self, start: u32) -> Span {
        Span::new(start, self.offset())
    }

    // Items

    /// `@UnionType([alternatives]) typedef name = Function;`
    pub fn union_alias(&mut self, name: &str, alternatives: &[&str]) {
        self.alias(
            name,
            vec![union_annotation(alternatives)],
            TypeExpr::named("Function"),
        );
    }

    /// A union alias whose right-hand side is itself a function type.
    pub fn union_function_alias(&mut self, name: &str, alternatives: &[&str], params: &[&str]) {
        self.alias(
            name,
            vec![union_annotation(alternatives)],
            void_function(params),
        );
    }

    /// `typedef name = void Function(params);`
    pub fn function_alias(&mut self, name: &str, params: &[&str]) {
        self.alias(name, Vec::new(), void_function(params));
    }

    /// A type alias with arbitrary annotations and right-hand side.
    pub fn alias(&mut self, name: &str, annotations: Vec<Annotation>, aliased: TypeExpr) {
        let start = self.offset();
        let mut laid_out = Vec::with_capacity(annotations.len());
        for mut annotation in annotations {
            let text = render_annotation(&annotation);
            annotation.span = self.write(&text);
            self.write("\n");
            laid_out.push(annotation);
        }
        self.write(&format!("typedef {name} = {aliased};"));
        let span = self.span_from(start);
        self.write("\n");
        self.items.push(Item::TypeAlias(TypeAliasDecl {
            name: name.to_string(),
            annotations: laid_out,
            aliased,
            span,
        }));
    }

    /// An abstract class with no members, used as a capability.
    pub fn interface(&mut self, name: &str) {
        let span = self.write(&format!("abstract class {name} {{}}"));
        self.write("\n");
        self.items.push(Item::Class(ClassDecl {
            name: name.to_string(),
            extends: None,
            implements: Vec::new(),
            fields: Vec::new(),
            constructors: Vec::new(),
            methods: Vec::new(),
            span,
        }));
    }

    /// A class declaration populated by `f`.
    pub fn class(&mut self, name: &str, f: impl FnOnce(&mut ClassBuilder<'_>)) {
        let start = self.offset();
        self.write(&format!("class {name} {{\n"));
        let mut class = ClassBuilder {
            b: self,
            decl: ClassDecl {
                name: name.to_string(),
                extends: None,
                implements: Vec::new(),
                fields: Vec::new(),
                constructors: Vec::new(),
                methods: Vec::new(),
                span: Span::DUMMY,
            },
        };
        f(&mut class);
        let mut decl = class.decl;
        self.write("}");
        decl.span = self.span_from(start);
        self.write("\n");
        self.items.push(Item::Class(decl));
    }

    /// A top-level function declaration.
    pub fn function(
        &mut self,
        name: &str,
        params: Vec<Param>,
        body: impl FnOnce(&mut Self) -> Vec<Stmt>,
    ) {
        let decl = self.function_decl(name, params, body);
        self.items.push(Item::Function(decl));
    }

    fn function_decl(
        &mut self,
        name: &str,
        params: Vec<Param>,
        body: impl FnOnce(&mut Self) -> Vec<Stmt>,
    ) -> FunctionDecl {
        let start = self.offset();
        self.write(&format!("void {name}"));
        let params = self.lay_out_params(params);
        self.write(" {\n");
        let body = body(self);
        self.write("}");
        let span = self.span_from(start);
        self.write("\n");
        FunctionDecl {
            name: name.to_string(),
            params,
            return_ty: Some(TypeExpr::named("void")),
            body,
            span,
        }
    }

    /// A top-level variable `ty name = init;`.
    pub fn var(&mut self, ty: &str, name: &str, init: impl FnOnce(&mut Self) -> ExprId) {
        let decl = self.var_decl(Some(ty), name, init);
        self.write("\n");
        self.items.push(Item::Var(decl));
    }

    /// A top-level variable without a type annotation.
    pub fn untyped_var(&mut self, name: &str, init: impl FnOnce(&mut Self) -> ExprId) {
        let decl = self.var_decl(None, name, init);
        self.write("\n");
        self.items.push(Item::Var(decl));
    }

    fn var_decl(
        &mut self,
        ty: Option<&str>,
        name: &str,
        init: impl FnOnce(&mut Self) -> ExprId,
    ) -> VarDecl {
        let start = self.offset();
        match ty {
            Some(ty) => self.write(&format!("{ty} {name} = ")),
            None => self.write(&format!("var {name} = ")),
        };
        let init = init(self);
        self.write(";");
        VarDecl {
            name: name.to_string(),
            ty: ty.map(type_ref),
            init: Some(init),
            span: self.span_from(start),
        }
    }

    // Statements

    /// A local variable statement.
    pub fn local_var(
        &mut self,
        ty: &str,
        name: &str,
        init: impl FnOnce(&mut Self) -> ExprId,
    ) -> Stmt {
        let decl = self.var_decl(Some(ty), name, init);
        let span = decl.span;
        self.write("\n");
        Stmt {
            kind: StmtKind::Var(decl),
            span,
        }
    }

    /// An expression statement.
    pub fn expr_stmt(&mut self, expr: impl FnOnce(&mut Self) -> ExprId) -> Stmt {
        let start = self.offset();
        let id = expr(self);
        self.write(";");
        let span = self.span_from(start);
        self.write("\n");
        Stmt {
            kind: StmtKind::Expr(id),
            span,
        }
    }

    // Expressions

    fn alloc(&mut self, kind: ExprKind, span: Span) -> ExprId {
        self.arena.alloc_expr(Expr::new(kind, span))
    }

    /// A function literal whose parameters are all typed.
    pub fn fn_literal(&mut self, types: &[&str]) -> ExprId {
        let params: Vec<Option<&str>> = types.iter().map(|t| Some(*t)).collect();
        self.fn_literal_params(&params)
    }

    /// A function literal; `None` marks an untyped parameter.
    pub fn fn_literal_params(&mut self, types: &[Option<&str>]) -> ExprId {
        let params = literal_params(types);
        self.literal(params, |_| Vec::new())
    }

    /// A function literal with typed parameters and a body.
    pub fn fn_literal_with_body(
        &mut self,
        types: &[&str],
        body: impl FnOnce(&mut Self) -> Vec<Stmt>,
    ) -> ExprId {
        let types: Vec<Option<&str>> = types.iter().map(|t| Some(*t)).collect();
        let params = literal_params(&types);
        self.literal(params, body)
    }

    fn literal(&mut self, params: Vec<Param>, body: impl FnOnce(&mut Self) -> Vec<Stmt>) -> ExprId {
        let start = self.offset();
        let params = self.lay_out_params(params);
        self.write(" {");
        let body = body(self);
        self.write("}");
        let span = self.span_from(start);
        self.alloc(
            ExprKind::FunctionLiteral(FunctionLiteral { params, body }),
            span,
        )
    }

    /// `new Ty(args)`.
    pub fn new_expr(&mut self, ty: &str, args: impl FnOnce(&mut Self) -> Vec<Arg>) -> ExprId {
        self.new_expr_full(ty, None, None, args)
    }

    /// `new Ty.constructor(args)` with an optional front-end resolved type.
    pub fn new_expr_full(
        &mut self,
        ty: &str,
        static_type: Option<&str>,
        constructor: Option<&str>,
        args: impl FnOnce(&mut Self) -> Vec<Arg>,
    ) -> ExprId {
        let start = self.offset();
        match constructor {
            Some(ctor) => self.write(&format!("new {ty}.{ctor}(")),
            None => self.write(&format!("new {ty}(")),
        };
        let args = args(self);
        self.write(")");
        let span = self.span_from(start);
        self.alloc(
            ExprKind::New(NewExpr {
                ty: TypeExpr::named(ty),
                static_type: static_type.map(str::to_string),
                constructor: constructor.map(str::to_string),
                args,
            }),
            span,
        )
    }

    /// `name(args)`.
    pub fn call(&mut self, name: &str, args: impl FnOnce(&mut Self) -> Vec<Arg>) -> ExprId {
        let start = self.offset();
        self.write(&format!("{name}("));
        let args = args(self);
        self.write(")");
        let span = self.span_from(start);
        self.alloc(
            ExprKind::Call(CallExpr {
                receiver: None,
                name: name.to_string(),
                args,
            }),
            span,
        )
    }

    /// `receiver.name(args)`.
    pub fn method_call(
        &mut self,
        receiver: &str,
        name: &str,
        args: impl FnOnce(&mut Self) -> Vec<Arg>,
    ) -> ExprId {
        let start = self.offset();
        let receiver = self.ident(receiver);
        self.write(&format!(".{name}("));
        let args = args(self);
        self.write(")");
        let span = self.span_from(start);
        self.alloc(
            ExprKind::Call(CallExpr {
                receiver: Some(receiver),
                name: name.to_string(),
                args,
            }),
            span,
        )
    }

    pub fn ident(&mut self, name: &str) -> ExprId {
        let span = self.write(name);
        self.alloc(ExprKind::Ident(name.to_string()), span)
    }

    pub fn int(&mut self, value: i64) -> ExprId {
        let span = self.write(&value.to_string());
        self.alloc(ExprKind::Int(value), span)
    }

    pub fn string(&mut self, value: &str) -> ExprId {
        let span = self.write(&format!("'{value}'"));
        self.alloc(ExprKind::Str(value.to_string()), span)
    }

    /// Positional argument.
    pub fn arg(&mut self, value: impl FnOnce(&mut Self) -> ExprId) -> Arg {
        let start = self.offset();
        let value = value(self);
        let span = self.span_from(start);
        self.write(", ");
        Arg {
            name: None,
            value,
            span,
        }
    }

    /// Named argument `name: value`.
    pub fn named_arg(&mut self, name: &str, value: impl FnOnce(&mut Self) -> ExprId) -> Arg {
        let start = self.offset();
        self.write(&format!("{name}: "));
        let value = value(self);
        let span = self.span_from(start);
        self.write(", ");
        Arg {
            name: Some(name.to_string()),
            value,
            span,
        }
    }

    fn lay_out_params(&mut self, params: Vec<Param>) -> Vec<Param> {
        self.write("(");
        let mut laid_out = Vec::with_capacity(params.len());
        let mut in_named = false;
        for (i, mut param) in params.into_iter().enumerate() {
            if i > 0 {
                self.write(", ");
            }
            if param.is_named() && !in_named {
                self.write("{");
                in_named = true;
            }
            let text = match (&param.ty, param.field_forwarding) {
                (_, true) => format!("this.{}", param.name),
                (Some(ty), false) => format!("{ty} {}", param.name),
                (None, false) => param.name.clone(),
            };
            param.span = self.write(&text);
            laid_out.push(param);
        }
        if in_named {
            self.write("}");
        }
        self.write(")");
        laid_out
    }
}

/// Builds the members of one class declaration.
pub struct ClassBuilder<'b> {
    b: &'b mut TreeBuilder,
    decl: ClassDecl,
}

impl ClassBuilder<'_> {
    pub fn extends(&mut self, name: &str) -> &mut Self {
        self.decl.extends = Some(name.to_string());
        self
    }

    pub fn implements(&mut self, name: &str) -> &mut Self {
        self.decl.implements.push(name.to_string());
        self
    }

    /// `ty name;` field without initializer.
    pub fn field(&mut self, ty: &str, name: &str) -> &mut Self {
        let span = self.b.write(&format!("  {ty} {name};"));
        self.b.write("\n");
        self.decl.fields.push(FieldDecl {
            name: name.to_string(),
            ty: Some(type_ref(ty)),
            init: None,
            span,
        });
        self
    }

    /// `ty name = init;` field.
    pub fn field_with_init(
        &mut self,
        ty: &str,
        name: &str,
        init: impl FnOnce(&mut TreeBuilder) -> ExprId,
    ) -> &mut Self {
        let start = self.b.offset();
        self.b.write(&format!("  {ty} {name} = "));
        let init = init(&mut *self.b);
        self.b.write(";");
        let span = self.b.span_from(start);
        self.b.write("\n");
        self.decl.fields.push(FieldDecl {
            name: name.to_string(),
            ty: Some(type_ref(ty)),
            init: Some(init),
            span,
        });
        self
    }

    /// Unnamed constructor.
    pub fn constructor(&mut self, params: Vec<Param>) -> &mut Self {
        self.push_constructor(None, params)
    }

    /// Named constructor `Class.name(...)`.
    pub fn named_constructor(&mut self, name: &str, params: Vec<Param>) -> &mut Self {
        self.push_constructor(Some(name), params)
    }

    fn push_constructor(&mut self, name: Option<&str>, params: Vec<Param>) -> &mut Self {
        let start = self.b.offset();
        match name {
            Some(name) => self.b.write(&format!("  {}.{name}", self.decl.name)),
            None => self.b.write(&format!("  {}", self.decl.name)),
        };
        let params = self.b.lay_out_params(params);
        self.b.write(";");
        let span = self.b.span_from(start);
        self.b.write("\n");
        self.decl.constructors.push(ConstructorDecl {
            name: name.map(str::to_string),
            params,
            body: Vec::new(),
            span,
        });
        self
    }

    /// Method declaration.
    pub fn method(
        &mut self,
        name: &str,
        params: Vec<Param>,
        body: impl FnOnce(&mut TreeBuilder) -> Vec<Stmt>,
    ) -> &mut Self {
        let decl = self.b.function_decl(name, params, body);
        self.decl.methods.push(decl);
        self
    }
}

/// `@UnionType([alternatives])` with every alternative as a type reference.
pub fn union_annotation(alternatives: &[&str]) -> Annotation {
    Annotation {
        name: UNION_ANNOTATION.to_string(),
        args: vec![AnnotationArg::List(
            alternatives
                .iter()
                .map(|a| ListElem::TypeRef((*a).to_string()))
                .collect(),
        )],
        span: Span::DUMMY,
    }
}

/// A written type reference; a trailing `?` marks it nullable.
pub fn type_ref(text: &str) -> TypeExpr {
    match text.strip_suffix('?') {
        Some(name) => TypeExpr::Named {
            name: name.to_string(),
            args: Vec::new(),
            nullable: true,
        },
        None => TypeExpr::named(text),
    }
}

fn void_function(params: &[&str]) -> TypeExpr {
    TypeExpr::function(
        TypeExpr::named("void"),
        params.iter().map(|p| TypeExpr::named(*p)).collect(),
    )
}

fn literal_params(types: &[Option<&str>]) -> Vec<Param> {
    types
        .iter()
        .enumerate()
        .map(|(i, ty)| {
            let name = format!("p{i}");
            match ty {
                Some(ty) => param(&name, ty),
                None => untyped_param(&name),
            }
        })
        .collect()
}

fn render_annotation(annotation: &Annotation) -> String {
    let mut text = format!("@{}", annotation.name);
    if annotation.args.is_empty() {
        return text;
    }
    text.push('(');
    for (i, arg) in annotation.args.iter().enumerate() {
        if i > 0 {
            text.push_str(", ");
        }
        match arg {
            AnnotationArg::List(elems) => {
                let names: Vec<String> = elems
                    .iter()
                    .map(|e| e.type_name().unwrap_or_else(|| "_".to_string()))
                    .collect();
                text.push('[');
                text.push_str(&names.join(", "));
                text.push(']');
            }
            AnnotationArg::Other => text.push('_'),
        }
    }
    text.push(')');
    text
}

#[cfg(test)]
mod tests;
