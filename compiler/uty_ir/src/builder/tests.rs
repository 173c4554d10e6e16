use pretty_assertions::assert_eq;

use super::*;

#[test]
fn test_spans_point_at_written_text() {
    let mut b = TreeBuilder::new();
    b.function_alias("OnTapCtx", &["Ctx"]);
    b.var("OnTap", "handler", |b| b.fn_literal(&["int"]));
    let unit = b.finish();

    let Item::Var(var) = &unit.module.items[1] else {
        panic!("expected a variable item");
    };
    let init = unit.arena.get_expr(var.init.unwrap_or_else(|| panic!("missing init")));
    assert_eq!(&unit.source[init.span.to_range()], "(int p0) {}");
    assert_eq!(&unit.source[var.span.to_range()], "OnTap handler = (int p0) {};");
}

#[test]
fn test_items_are_on_separate_lines() {
    let mut b = TreeBuilder::new();
    b.function_alias("A", &[]);
    b.function_alias("B", &["int", "String"]);
    let unit = b.finish();

    assert_eq!(
        unit.source,
        "typedef A = void Function();\ntypedef B = void Function(int, String);\n"
    );
}

#[test]
fn test_union_alias_carries_annotation_list() {
    let mut b = TreeBuilder::new();
    b.union_alias("OnTap", &["VoidCallback", "IOnTap"]);
    let unit = b.finish();

    let Item::TypeAlias(alias) = &unit.module.items[0] else {
        panic!("expected a type alias");
    };
    let annotation = alias.annotation(UNION_ANNOTATION);
    assert!(annotation.is_some());
    assert!(unit.source.starts_with("@UnionType([VoidCallback, IOnTap])\n"));
}

#[test]
fn test_class_members_and_params() {
    let mut b = TreeBuilder::new();
    b.class("Button", |c| {
        c.implements("IOnTap")
            .field("OnTap", "onTap")
            .constructor(vec![field_param("onTap"), named_param("label", "String")]);
    });
    let unit = b.finish();

    let class = unit.module.classes().next();
    let Some(class) = class else {
        panic!("expected a class");
    };
    assert!(class.declares_implements("IOnTap"));
    assert_eq!(class.fields.len(), 1);
    let ctor = class.first_constructor().unwrap_or_else(|| panic!("no ctor"));
    assert_eq!(
        &unit.source[ctor.span.to_range()],
        "  Button(this.onTap, {String label});"
    );
    assert!(ctor.params[0].field_forwarding);
    assert!(ctor.params[1].is_named());
}

#[test]
fn test_named_args_render() {
    let mut b = TreeBuilder::new();
    b.var("Widget", "w", |b| {
        b.new_expr("Surface", |b| vec![b.named_arg("onTap", |b| b.fn_literal(&[]))])
    });
    let unit = b.finish();
    assert_eq!(unit.source, "Widget w = new Surface(onTap: () {}, );\n");
}

#[test]
fn test_type_ref_reads_nullable_suffix() {
    assert_eq!(
        type_ref("OnTap?"),
        TypeExpr::Named {
            name: "OnTap".to_string(),
            args: Vec::new(),
            nullable: true,
        }
    );
    assert_eq!(type_ref("Ctx"), TypeExpr::named("Ctx"));
    assert_eq!(
        named_param("onTap", "OnTap?").ty.map(|t| t.base_name()),
        Some("OnTap".to_string())
    );
}
