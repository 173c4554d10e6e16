use super::*;
use crate::ast::ExprKind;
use crate::Span;

#[test]
fn test_alloc_returns_sequential_ids() {
    let mut arena = ExprArena::new();
    let a = arena.alloc_expr(Expr::new(ExprKind::Int(1), Span::new(0, 1)));
    let b = arena.alloc_expr(Expr::new(ExprKind::Int(2), Span::new(2, 3)));

    assert_eq!(a.raw(), 0);
    assert_eq!(b.raw(), 1);
    assert_eq!(arena.len(), 2);
    assert!(!arena.is_empty());
}

#[test]
fn test_get_expr_round_trips_span() {
    let mut arena = ExprArena::new();
    let id = arena.alloc_expr(Expr::new(ExprKind::Ident("x".into()), Span::new(5, 6)));

    let expr = arena.get_expr(id);
    assert_eq!(expr.span, Span::new(5, 6));
    assert!(matches!(&expr.kind, ExprKind::Ident(name) if name == "x"));
}

#[test]
fn test_expr_id_debug() {
    assert_eq!(format!("{:?}", ExprId::new(3)), "ExprId(3)");
}
