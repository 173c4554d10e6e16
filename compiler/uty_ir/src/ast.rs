//! Syntax tree node vocabulary.
//!
//! Declarations own their children directly; expressions live in the
//! [`ExprArena`](crate::ExprArena) and are referenced by [`ExprId`].

use std::fmt;

use crate::{ExprId, Span};

/// A parsed compilation unit: its top-level items in source order.
#[derive(Clone, Eq, PartialEq, Debug, Default)]
pub struct Module {
    pub items: Vec<Item>,
}

impl Module {
    /// Iterate over every class declaration in the unit.
    pub fn classes(&self) -> impl Iterator<Item = &ClassDecl> {
        self.items.iter().filter_map(|item| match item {
            Item::Class(class) => Some(class),
            _ => None,
        })
    }

    /// Iterate over every top-level function declaration in the unit.
    pub fn functions(&self) -> impl Iterator<Item = &FunctionDecl> {
        self.items.iter().filter_map(|item| match item {
            Item::Function(func) => Some(func),
            _ => None,
        })
    }
}

/// Top-level declaration.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Item {
    TypeAlias(TypeAliasDecl),
    Class(ClassDecl),
    Function(FunctionDecl),
    Var(VarDecl),
}

impl Item {
    pub fn span(&self) -> Span {
        match self {
            Item::TypeAlias(alias) => alias.span,
            Item::Class(class) => class.span,
            Item::Function(func) => func.span,
            Item::Var(var) => var.span,
        }
    }
}

/// A written type.
#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum TypeExpr {
    /// `Name`, `Name<Args>`, `Name?`
    Named {
        name: String,
        args: Vec<TypeExpr>,
        nullable: bool,
    },
    /// `Ret Function(P1, P2)`
    Function {
        ret: Box<TypeExpr>,
        params: Vec<TypeExpr>,
    },
}

impl TypeExpr {
    /// A plain named type without arguments.
    pub fn named(name: impl Into<String>) -> Self {
        TypeExpr::Named {
            name: name.into(),
            args: Vec::new(),
            nullable: false,
        }
    }

    /// A function type.
    pub fn function(ret: TypeExpr, params: Vec<TypeExpr>) -> Self {
        TypeExpr::Function {
            ret: Box::new(ret),
            params,
        }
    }

    /// The name used for every type comparison: the type as it is written.
    pub fn display_name(&self) -> String {
        self.to_string()
    }

    /// The declared name without type arguments or nullability.
    ///
    /// `OnTap?` and `OnTap` both name the alias `OnTap`.
    pub fn base_name(&self) -> String {
        match self {
            TypeExpr::Named { name, .. } => name.clone(),
            TypeExpr::Function { .. } => self.display_name(),
        }
    }

    /// Whether this is a function type.
    pub fn is_function(&self) -> bool {
        matches!(self, TypeExpr::Function { .. })
    }
}

impl fmt::Display for TypeExpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeExpr::Named {
                name,
                args,
                nullable,
            } => {
                write!(f, "{name}")?;
                if !args.is_empty() {
                    write!(f, "<")?;
                    write_comma_separated(f, args)?;
                    write!(f, ">")?;
                }
                if *nullable {
                    write!(f, "?")?;
                }
                Ok(())
            }
            TypeExpr::Function { ret, params } => {
                write!(f, "{ret} Function(")?;
                write_comma_separated(f, params)?;
                write!(f, ")")
            }
        }
    }
}

fn write_comma_separated(f: &mut fmt::Formatter<'_>, types: &[TypeExpr]) -> fmt::Result {
    for (i, ty) in types.iter().enumerate() {
        if i > 0 {
            write!(f, ", ")?;
        }
        write!(f, "{ty}")?;
    }
    Ok(())
}

/// Metadata annotation, e.g. `@UnionType([A, B])`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Annotation {
    pub name: String,
    pub args: Vec<AnnotationArg>,
    pub span: Span,
}

/// Argument of an annotation.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum AnnotationArg {
    /// A list literal `[A, B, C]`.
    List(Vec<ListElem>),
    /// Anything the checker does not interpret.
    Other,
}

/// Element of an annotation list literal.
#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ListElem {
    /// A bare identifier referring to a type.
    TypeRef(String),
    /// A type literal expression.
    TypeLiteral(TypeExpr),
    /// Any other expression.
    Other,
}

impl ListElem {
    /// The plain type name this element denotes, if any.
    pub fn type_name(&self) -> Option<String> {
        match self {
            ListElem::TypeRef(name) => Some(name.clone()),
            ListElem::TypeLiteral(ty) => Some(ty.display_name()),
            ListElem::Other => None,
        }
    }
}

/// `typedef Name = Aliased;` with optional annotations.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct TypeAliasDecl {
    pub name: String,
    pub annotations: Vec<Annotation>,
    pub aliased: TypeExpr,
    pub span: Span,
}

impl TypeAliasDecl {
    /// Find an annotation by name.
    pub fn annotation(&self, name: &str) -> Option<&Annotation> {
        self.annotations.iter().find(|a| a.name == name)
    }
}

/// Class declaration.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ClassDecl {
    pub name: String,
    pub extends: Option<String>,
    pub implements: Vec<String>,
    pub fields: Vec<FieldDecl>,
    pub constructors: Vec<ConstructorDecl>,
    pub methods: Vec<FunctionDecl>,
    pub span: Span,
}

impl ClassDecl {
    /// Find a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDecl> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// The first declared constructor.
    pub fn first_constructor(&self) -> Option<&ConstructorDecl> {
        self.constructors.first()
    }

    /// Whether the class explicitly lists `capability` in its `implements` clause.
    pub fn declares_implements(&self, capability: &str) -> bool {
        self.implements.iter().any(|i| i == capability)
    }
}

/// Field declaration.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FieldDecl {
    pub name: String,
    pub ty: Option<TypeExpr>,
    pub init: Option<ExprId>,
    pub span: Span,
}

/// Constructor declaration. `name` is set for named constructors (`Foo.bar`).
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct ConstructorDecl {
    pub name: Option<String>,
    pub params: Vec<Param>,
    pub body: Vec<Stmt>,
    pub span: Span,
}

/// Function or method declaration.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FunctionDecl {
    pub name: String,
    pub params: Vec<Param>,
    pub return_ty: Option<TypeExpr>,
    pub body: Vec<Stmt>,
    pub span: Span,
}

/// How an argument binds to a parameter.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum ParamKind {
    Positional,
    Named,
}

/// Formal parameter.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Param {
    pub name: String,
    pub ty: Option<TypeExpr>,
    pub kind: ParamKind,
    /// `this.name` parameter that initializes the same-named field.
    pub field_forwarding: bool,
    pub span: Span,
}

impl Param {
    pub fn is_named(&self) -> bool {
        self.kind == ParamKind::Named
    }
}

/// Variable declaration, local or top-level.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct VarDecl {
    pub name: String,
    pub ty: Option<TypeExpr>,
    pub init: Option<ExprId>,
    pub span: Span,
}

/// Statement.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Stmt {
    pub kind: StmtKind,
    pub span: Span,
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum StmtKind {
    Var(VarDecl),
    Expr(ExprId),
    Return(Option<ExprId>),
}

/// Expression node stored in the arena.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Expr {
    pub kind: ExprKind,
    pub span: Span,
}

impl Expr {
    pub fn new(kind: ExprKind, span: Span) -> Self {
        Expr { kind, span }
    }
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum ExprKind {
    FunctionLiteral(FunctionLiteral),
    New(NewExpr),
    Call(CallExpr),
    Ident(String),
    Int(i64),
    Str(String),
    List(Vec<ExprId>),
}

/// `(A a, b) { ... }` or `(a) => expr`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct FunctionLiteral {
    pub params: Vec<Param>,
    pub body: Vec<Stmt>,
}

/// Explicit object construction: `new Foo(...)` / `new Foo.named(...)`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct NewExpr {
    /// The type as written at the construction site.
    pub ty: TypeExpr,
    /// The constructed type as resolved by the front-end, when it knows it.
    pub static_type: Option<String>,
    pub constructor: Option<String>,
    pub args: Vec<Arg>,
}

impl NewExpr {
    /// The name of the constructed type, preferring the resolved one.
    pub fn type_name(&self) -> String {
        match &self.static_type {
            Some(name) => name.clone(),
            None => match &self.ty {
                TypeExpr::Named { name, .. } => name.clone(),
                ty @ TypeExpr::Function { .. } => ty.display_name(),
            },
        }
    }
}

/// Call or method invocation: `name(...)` or `receiver.name(...)`.
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct CallExpr {
    pub receiver: Option<ExprId>,
    pub name: String,
    pub args: Vec<Arg>,
}

/// Call argument, positional or named (`name: value`).
#[derive(Clone, Eq, PartialEq, Debug)]
pub struct Arg {
    pub name: Option<String>,
    pub value: ExprId,
    pub span: Span,
}
