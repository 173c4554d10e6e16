//! Unit-wide declaration lookup.
//!
//! Classes, top-level functions and methods of one compilation unit,
//! indexed once before the walk. Only this unit is searched; anything
//! declared elsewhere is simply not found.

use rustc_hash::FxHashMap;
use uty_ir::{
    CallExpr, ClassDecl, ConstructorDecl, ExprArena, ExprKind, FunctionDecl, Module, Param,
    TypeExpr,
};

/// Declarations of one unit by name. On duplicate names the first
/// declaration wins.
#[derive(Debug, Default)]
pub struct DeclIndex<'a> {
    classes: FxHashMap<&'a str, &'a ClassDecl>,
    functions: FxHashMap<&'a str, &'a FunctionDecl>,
    /// Methods of every class, in declaration order.
    methods: Vec<(&'a ClassDecl, &'a FunctionDecl)>,
}

/// The declaration a call or construction binds its arguments to.
#[derive(Copy, Clone, Debug)]
pub enum CallTarget<'a> {
    /// The first constructor of `class`.
    Constructor {
        class: &'a ClassDecl,
        ctor: &'a ConstructorDecl,
    },
    Function(&'a FunctionDecl),
    Method {
        class: &'a ClassDecl,
        method: &'a FunctionDecl,
    },
}

impl<'a> CallTarget<'a> {
    pub fn params(&self) -> &'a [Param] {
        match *self {
            CallTarget::Constructor { ctor, .. } => &ctor.params,
            CallTarget::Function(func) => &func.params,
            CallTarget::Method { method, .. } => &method.params,
        }
    }

    /// The enclosing class, if any.
    pub fn class(&self) -> Option<&'a ClassDecl> {
        match *self {
            CallTarget::Constructor { class, .. } | CallTarget::Method { class, .. } => {
                Some(class)
            }
            CallTarget::Function(_) => None,
        }
    }

    /// Declared type of the slot `param` fills.
    ///
    /// A `this.name` parameter without its own annotation takes the type of
    /// the same-named field of the enclosing class.
    pub fn slot_type(&self, param: &'a Param) -> Option<&'a TypeExpr> {
        if let Some(ty) = &param.ty {
            return Some(ty);
        }
        if !param.field_forwarding {
            return None;
        }
        self.class()?.field(&param.name)?.ty.as_ref()
    }

    /// The parameter an argument binds to: named arguments by name,
    /// positional arguments by position among the positional parameters.
    pub fn param_for(&self, name: Option<&str>, position: usize) -> Option<&'a Param> {
        let params = self.params();
        match name {
            Some(name) => params.iter().find(|p| p.is_named() && p.name == name),
            None => params.iter().filter(|p| !p.is_named()).nth(position),
        }
    }
}

impl<'a> DeclIndex<'a> {
    pub fn build(module: &'a Module) -> Self {
        let mut index = DeclIndex::default();
        for class in module.classes() {
            index.classes.entry(class.name.as_str()).or_insert(class);
            for method in &class.methods {
                index.methods.push((class, method));
            }
        }
        for func in module.functions() {
            index.functions.entry(func.name.as_str()).or_insert(func);
        }
        index
    }

    pub fn class(&self, name: &str) -> Option<&'a ClassDecl> {
        self.classes.get(name).copied()
    }

    pub fn function(&self, name: &str) -> Option<&'a FunctionDecl> {
        self.functions.get(name).copied()
    }

    /// The first method named `name` in any class.
    pub fn method(&self, name: &str) -> Option<CallTarget<'a>> {
        self.methods
            .iter()
            .find(|(_, m)| m.name == name)
            .map(|&(class, method)| CallTarget::Method { class, method })
    }

    /// Construction target for a class: its first constructor.
    pub fn constructor(&self, class_name: &str) -> Option<CallTarget<'a>> {
        let class = self.class(class_name)?;
        let ctor = class.first_constructor()?;
        Some(CallTarget::Constructor { class, ctor })
    }

    /// The class a call instantiates without `new`: `Foo(...)` or the named
    /// constructor form `Foo.bar(...)`.
    pub fn constructed_class(&self, call: &CallExpr, arena: &ExprArena) -> Option<&'a ClassDecl> {
        match call.receiver {
            None => self.class(&call.name),
            Some(receiver) => match &arena.get_expr(receiver).kind {
                ExprKind::Ident(name) => self.class(name).filter(|class| {
                    class
                        .constructors
                        .iter()
                        .any(|c| c.name.as_deref() == Some(call.name.as_str()))
                }),
                _ => None,
            },
        }
    }

    /// Resolve the declaration a call binds to.
    ///
    /// Bare calls try constructors, then top-level functions, then methods.
    /// Calls on a class name try that class's named constructors and
    /// methods. Other receivers try methods, then top-level functions.
    pub fn resolve_call(&self, call: &CallExpr, arena: &ExprArena) -> Option<CallTarget<'a>> {
        if let Some(class) = self.constructed_class(call, arena) {
            return self.constructor(&class.name);
        }
        let Some(receiver) = call.receiver else {
            return self
                .function(&call.name)
                .map(CallTarget::Function)
                .or_else(|| self.method(&call.name));
        };
        if let ExprKind::Ident(name) = &arena.get_expr(receiver).kind {
            if let Some(class) = self.class(name) {
                return class
                    .methods
                    .iter()
                    .find(|m| m.name == call.name)
                    .map(|method| CallTarget::Method { class, method });
            }
        }
        self.method(&call.name)
            .or_else(|| self.function(&call.name).map(CallTarget::Function))
    }
}
