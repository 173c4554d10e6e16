use pretty_assertions::assert_eq;
use uty_ir::builder::{named_param, param, union_annotation};
use uty_ir::{Annotation, AnnotationArg, ListElem, Span, TreeBuilder};

use super::*;
use crate::Violation;

fn run(unit: &uty_ir::CompilationUnit) -> (CheckResult, usize, usize) {
    let mut checker = UnionChecker::new(&unit.module, &unit.arena, Reporter::new(&unit.source));
    checker.run();
    let unions = checker.context().registry.len();
    let shapes = checker.context().registry.shape_count();
    (checker.finish(), unions, shapes)
}

#[test]
fn test_registration_of_unions_and_shapes() {
    let mut b = TreeBuilder::new();
    b.function_alias("OnTapCtx", &["Ctx"]);
    b.union_alias("OnTap", &["VoidCallback", "OnTapCtx"]);
    b.union_function_alias("Both", &["OnTapCtx"], &["int"]);
    let unit = b.finish();

    let (result, unions, shapes) = run(&unit);
    assert!(!result.has_violations());
    assert_eq!(unions, 2);
    // `OnTapCtx` and `Both`; `OnTap` aliases plain `Function`.
    assert_eq!(shapes, 2);
}

#[test]
fn test_type_literal_and_other_list_elements() {
    let mut b = TreeBuilder::new();
    b.function_alias("Shape", &["int"]);
    b.alias(
        "Mixed",
        vec![Annotation {
            name: "UnionType".to_string(),
            args: vec![AnnotationArg::List(vec![
                ListElem::TypeLiteral(TypeExpr::named("Shape")),
                ListElem::Other,
                ListElem::TypeRef("ICap".to_string()),
            ])],
            span: Span::DUMMY,
        }],
        TypeExpr::named("Function"),
    );
    b.var("Mixed", "handler", |b| b.fn_literal(&["String"]));
    let unit = b.finish();

    let (result, _, _) = run(&unit);
    assert_eq!(result.count(), 1);
    assert_eq!(result.violations[0].alternatives, vec!["Shape", "ICap"]);
}

#[test]
fn test_annotation_without_list_registers_empty_union() {
    let mut b = TreeBuilder::new();
    b.alias(
        "Bare",
        vec![Annotation {
            name: "UnionType".to_string(),
            args: vec![AnnotationArg::Other],
            span: Span::DUMMY,
        }],
        TypeExpr::named("Function"),
    );
    b.var("Bare", "handler", |b| b.fn_literal(&["String"]));
    let unit = b.finish();

    let (result, unions, _) = run(&unit);
    assert_eq!(unions, 1);
    assert!(!result.has_violations());
}

#[test]
fn test_other_annotations_do_not_register() {
    let mut b = TreeBuilder::new();
    let mut annotation = union_annotation(&["A"]);
    annotation.name = "Deprecated".to_string();
    b.alias("NotUnion", vec![annotation], TypeExpr::named("Function"));
    b.var("NotUnion", "x", |b| b.fn_literal(&["int"]));
    let unit = b.finish();

    let (result, unions, _) = run(&unit);
    assert_eq!(unions, 0);
    assert!(!result.has_violations());
}

#[test]
fn test_nullable_slot_names_the_union() {
    let mut b = TreeBuilder::new();
    b.function_alias("VoidCallback", &[]);
    b.union_alias("OnTap", &["VoidCallback"]);
    b.class("Button", |c| {
        c.constructor(vec![named_param("onTap", "OnTap?")]);
    });
    b.var("Button", "button", |b| {
        b.new_expr("Button", |b| {
            vec![b.named_arg("onTap", |b| b.fn_literal(&["int"]))]
        })
    });
    let unit = b.finish();

    let (result, _, _) = run(&unit);
    assert_eq!(result.count(), 1);
    assert_eq!(result.violations[0].union_name, "OnTap");
}

#[test]
fn test_positional_arguments_skip_named_params() {
    let mut b = TreeBuilder::new();
    b.function_alias("VoidCallback", &[]);
    b.union_alias("OnTap", &["VoidCallback"]);
    b.function(
        "listen",
        vec![named_param("label", "String"), param("handler", "OnTap")],
        |_| Vec::new(),
    );
    b.function("main", Vec::new(), |b| {
        vec![b.expr_stmt(|b| {
            b.call("listen", |b| vec![b.arg(|b| b.fn_literal(&["int"]))])
        })]
    });
    let unit = b.finish();

    let (result, _, _) = run(&unit);
    assert_eq!(result.count(), 1);
    assert_eq!(result.violations[0].target, "void Function(int)");
}

#[test]
fn test_implicit_construction_reports_once() {
    let mut b = TreeBuilder::new();
    b.function_alias("VoidCallback", &[]);
    b.union_alias("OnTap", &["VoidCallback"]);
    b.class("Button", |c| {
        c.field("OnTap", "onTap")
            .constructor(vec![uty_ir::builder::named_field_param("onTap")]);
    });
    b.function("main", Vec::new(), |b| {
        vec![b.expr_stmt(|b| {
            b.call("Button", |b| {
                vec![b.named_arg("onTap", |b| b.fn_literal(&["int"]))]
            })
        })]
    });
    let unit = b.finish();

    let mut checker = UnionChecker::new(&unit.module, &unit.arena, Reporter::new(&unit.source));
    checker.run();
    assert_eq!(checker.context().checked_count(), 1);
    let result = checker.finish();
    assert_eq!(result.count(), 1);
}

#[test]
fn test_literal_in_method_body_is_reached() {
    let mut b = TreeBuilder::new();
    b.function_alias("VoidCallback", &[]);
    b.union_alias("OnTap", &["VoidCallback"]);
    b.class("Screen", |c| {
        c.method("build", Vec::new(), |b| {
            vec![b.local_var("OnTap", "handler", |b| b.fn_literal(&["int", "int"]))]
        });
    });
    let unit = b.finish();

    let (result, _, _) = run(&unit);
    assert_eq!(
        result.violations,
        vec![Violation {
            target: "void Function(int, int)".to_string(),
            union_name: "OnTap".to_string(),
            alternatives: vec!["VoidCallback".to_string()],
            line: result.violations[0].line,
            span: result.violations[0].span,
        }]
    );
    assert!(result.violations[0].line > 1);
}

#[test]
fn test_non_literal_values_are_not_checked() {
    let mut b = TreeBuilder::new();
    b.function_alias("VoidCallback", &[]);
    b.union_alias("OnTap", &["VoidCallback"]);
    b.var("OnTap", "a", |b| b.ident("someCallback"));
    b.var("OnTap", "c", |b| b.int(3));
    b.var("OnTap", "d", |b| b.call("makeHandler", |_| Vec::new()));
    let unit = b.finish();

    let (result, _, _) = run(&unit);
    assert!(!result.has_violations());
}
