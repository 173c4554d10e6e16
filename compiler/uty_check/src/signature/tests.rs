use pretty_assertions::assert_eq;
use uty_ir::builder::{param, untyped_param};

use super::*;

#[test]
fn test_display_renders_void_return() {
    assert_eq!(Signature::new(["int"]).to_string(), "void Function(int)");
    assert_eq!(
        Signature::new(["Ctx", "any"]).to_string(),
        "void Function(Ctx, any)"
    );
    assert_eq!(Signature::default().to_string(), "void Function()");
}

#[test]
fn test_unannotated_params_become_wildcard() {
    let sig = Signature::from_params(&[param("ctx", "Ctx"), untyped_param("data")]);
    assert_eq!(sig.params(), &["Ctx".to_string(), WILDCARD.to_string()]);
    assert_eq!(sig.arity(), 2);
}

#[test]
fn test_from_types_uses_display_names() {
    let list = TypeExpr::Named {
        name: "List".into(),
        args: vec![TypeExpr::named("int")],
        nullable: false,
    };
    let sig = Signature::from_types(&[list, TypeExpr::named("String")]);
    assert_eq!(sig, Signature::new(["List<int>", "String"]));
}

#[test]
fn test_single_param() {
    assert_eq!(Signature::new(["Ctx"]).single_param(), Some("Ctx"));
    assert_eq!(Signature::new(["Ctx", "int"]).single_param(), None);
    assert_eq!(Signature::default().single_param(), None);
}
