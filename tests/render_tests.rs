mod common;

use chrono::{TimeZone, Utc};
use common::{FakeResults, generate_values, placeholders, s};
use realm_query_builder::{
    BuilderOptions, QueryBuilder, QueryState, Spacing, Value, query,
    render::{ExpressionPrinter, render, render_with},
};
use rust_decimal::Decimal;

fn padded() -> QueryBuilder<FakeResults> {
    QueryBuilder::with_options(
        FakeResults::new(),
        BuilderOptions::new().spacing(Spacing::Padded),
    )
}

// ============================================================================
// Basics
// ============================================================================

#[test]
fn test_empty_state_is_true_predicate() {
    let rendered = render(&QueryState::new());

    assert_eq!(rendered.expression, "TRUEPREDICATE");
    assert!(rendered.values.is_empty());
}

#[test]
fn test_empty_state_keeps_tail() {
    let builder = query(FakeResults::new()).distinct(["a", "b"]).limit(0);

    assert_eq!(render(builder.state()).expression, "TRUEPREDICATE DISTINCT(a,b) LIMIT(0)");
}

#[test]
fn test_markers_without_actions_render_nothing() {
    let builder = query(FakeResults::new()).not().begin_group();

    assert_eq!(render(builder.state()).expression, "TRUEPREDICATE");
}

#[test]
fn test_values_keep_kind() {
    let at = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
    let builder = query(FakeResults::new())
        .greater_than("created", at)
        .less_than("price", Decimal::new(1999, 2))
        .equal_to("deleted_at", Option::<i64>::None, false)
        .not_equal_to("ratio", 0.5, false);
    let rendered = builder.render();

    assert_eq!(
        rendered.expression,
        "created > $0 AND price < $1 AND deleted_at == $2 AND ratio != $3"
    );
    assert_eq!(
        rendered.values,
        vec![
            Value::Timestamp(at),
            Value::Decimal(Decimal::new(1999, 2)),
            Value::Null,
            Value::Float(0.5),
        ]
    );
}

#[test]
fn test_render_is_repeatable() {
    let builder = query(FakeResults::new()).equal_to("a", 1, false).in_("b", [1, 2]);

    assert_eq!(builder.render(), builder.render());
    assert_eq!(render(builder.state()), builder.render());
}

// ============================================================================
// Raw fragments
// ============================================================================

#[test]
fn test_raw_fragment_is_renumbered() {
    let builder = query(FakeResults::new())
        .equal_to("name", "Ada", false)
        .raw("tags.@count > $0 AND ANY tags.name == $1", [Value::from(2), s("math")]);
    let rendered = builder.render();

    assert_eq!(
        rendered.expression,
        "name == $0 AND tags.@count > $1 AND ANY tags.name == $2"
    );
    assert_eq!(rendered.values, vec![s("Ada"), Value::Integer(2), s("math")]);
}

#[test]
fn test_raw_fragment_reusing_a_placeholder() {
    let builder = query(FakeResults::new())
        .raw("a == $0 OR b == $0", ["x"])
        .equal_to("c", "y", false);

    assert_eq!(builder.render().expression, "a == $0 OR b == $0 AND c == $1");
}

#[test]
fn test_raw_fragment_without_values() {
    let builder = query(FakeResults::new())
        .equal_to("a", 1, false)
        .raw("deleted == false", Vec::<Value>::new())
        .equal_to("b", 2, false);
    let rendered = builder.render();

    assert_eq!(rendered.expression, "a == $0 AND deleted == false AND b == $1");
    assert_eq!(rendered.values, vec![Value::Integer(1), Value::Integer(2)]);
}

#[test]
fn test_raw_fragment_quoted_placeholder_stays_literal() {
    let builder = query(FakeResults::new())
        .equal_to("a", 1, false)
        .raw("name == '$0' OR age > $0", [5]);

    assert_eq!(
        builder.render().expression,
        "a == $0 AND name == '$0' OR age > $1"
    );
}

#[test]
fn test_raw_fragment_oversized_placeholder() {
    let builder = query(FakeResults::new())
        .equal_to("a", 1, false)
        .raw("b == $99999999999999999999999", [2]);
    let rendered = builder.render();

    assert_eq!(rendered.expression, "a == $0 AND b == $99999999999999999999999");
    assert_eq!(rendered.values, vec![Value::Integer(1), Value::Integer(2)]);
}

#[test]
fn test_raw_fragment_inside_group() {
    let builder = query(FakeResults::new())
        .equal_to("a", 1, false)
        .or()
        .not()
        .begin_group()
        .raw("b > $0 AND c < $1", [1, 2])
        .end_group()
        .unwrap();

    assert_eq!(
        builder.render().expression,
        "a == $0 OR NOT (b > $1 AND c < $2)"
    );
}

// ============================================================================
// Alignment
// ============================================================================

#[test]
fn test_raw_fragment_keeps_local_order() {
    let builder = query(FakeResults::new())
        .in_("a", ["value0", "value1"])
        .or()
        .false_predicate()
        .raw("b == $1 OR c == $0", ["value3", "value2"])
        .between("d", "value4", "value5");
    let rendered = builder.render();

    assert_eq!(placeholders(&rendered.expression), vec![0, 1, 3, 2, 4, 5]);
    assert_eq!(rendered.values.len(), 6);
}

// ============================================================================
// Padded spacing
// ============================================================================

#[test]
fn test_padded_between() {
    let builder = padded()
        .equal_to("field1", "value1", false)
        .between("field2", 5, 10);

    assert_eq!(
        builder.render().expression,
        "field1 == $0 AND  ( field2 >= $1 AND field2 <= $2 ) "
    );
}

#[test]
fn test_padded_group() {
    let builder = padded()
        .equal_to("field0", "value0", false)
        .or()
        .begin_group()
        .equal_to("field1", "value1", false)
        .end_group()
        .unwrap();

    assert_eq!(builder.render().expression, "field0 == $0 OR  ( field1 == $1 ) ");
}

#[test]
fn test_padded_nested_groups() {
    let builder = padded()
        .equal_to("field0", "value0", false)
        .begin_group()
        .begin_group()
        .equal_to("field1", "value1", false)
        .or()
        .equal_to("field2", "value2", false)
        .end_group()
        .unwrap()
        .begin_group()
        .equal_to("field3", "value3", false)
        .equal_to("field4", "value4", false)
        .end_group()
        .unwrap()
        .end_group()
        .unwrap();

    assert_eq!(
        builder.render().expression,
        "field0 == $0 AND  (  ( field1 == $1 OR field2 == $2 )  AND  ( field3 == $3 AND field4 == $4 )  ) "
    );
    assert_eq!(builder.render().values, generate_values(5));
}

#[test]
fn test_padded_not() {
    let builder = padded().not().equal_to("field0", "value0", false);

    assert_eq!(builder.render().expression, " NOT field0 == $0");
}

#[test]
fn test_padded_in_and_tail() {
    let builder = padded()
        .equal_to("field0", "value0", false)
        .in_("field1", ["value1"])
        .equal_to("field2", "value2", false)
        .distinct(["field1"])
        .limit(3);

    assert_eq!(
        builder.render().expression,
        "field0 == $0 AND  ( field1 == $1 )  AND field2 == $2 DISTINCT(field1) LIMIT(3)"
    );
}

#[test]
fn test_same_state_renders_both_spacings() {
    let builder = query(FakeResults::new())
        .not()
        .begin_group()
        .equal_to("a", 1, false)
        .end_group()
        .unwrap();

    assert_eq!(render_with(builder.state(), Spacing::Compact).expression, "NOT (a == $0)");
    assert_eq!(
        ExpressionPrinter::new(Spacing::Padded).print(builder.state()).expression,
        " NOT  ( a == $0 ) "
    );
}
