use pretty_assertions::assert_eq;

use super::*;
use crate::TreeBuilder;

#[derive(Default)]
struct LiteralOrder {
    offsets: Vec<u32>,
}

impl<'ast> Visitor<'ast> for LiteralOrder {
    fn visit_expr(&mut self, expr: &'ast Expr, arena: &'ast ExprArena) {
        if let ExprKind::FunctionLiteral(_) = &expr.kind {
            self.offsets.push(expr.span.start);
        }
        walk_expr(self, expr, arena);
    }
}

#[test]
fn test_walk_visits_literals_in_source_order() {
    let mut b = TreeBuilder::new();
    b.var("Cb", "first", |b| b.fn_literal(&[]));
    b.class("Holder", |c| {
        c.field_with_init("Cb", "field", |b| b.fn_literal(&["int"]));
    });
    b.function("main", Vec::new(), |b| {
        vec![b.local_var("Cb", "local", |b| {
            b.call("register", |b| vec![b.arg(|b| b.fn_literal(&["String"]))])
        })]
    });
    let unit = b.finish();

    let mut visitor = LiteralOrder::default();
    visitor.visit_module(&unit.module, &unit.arena);

    assert_eq!(visitor.offsets.len(), 3);
    let mut sorted = visitor.offsets.clone();
    sorted.sort_unstable();
    assert_eq!(visitor.offsets, sorted);
}

#[test]
fn test_walk_reaches_literal_inside_literal_body() {
    let mut b = TreeBuilder::new();
    b.var("Cb", "outer", |b| {
        b.fn_literal_with_body(&[], |b| vec![b.local_var("Cb", "inner", |b| b.fn_literal(&[]))])
    });
    let unit = b.finish();

    let mut visitor = LiteralOrder::default();
    visitor.visit_module(&unit.module, &unit.arena);
    assert_eq!(visitor.offsets.len(), 2);
}
