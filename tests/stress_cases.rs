mod common;
use common::*;
use searchstring::*;

#[test]
fn complex_mixed_query() {
    let query =
        parse("op1:value op1:value2 op2:\"multi, 'word', value\" sometext -op3:value more text");
    assert_eq!(
        segments(&query),
        [("sometext", false), ("more", false), ("text", false)]
    );
    assert_eq!(keyword_count(&query), 3);
    assert_eq!(
        query.conditions(),
        [
            cond("op1", "value", false),
            cond("op1", "value2", false),
            cond("op2", "multi, 'word', value", false),
            cond("op3", "value", true),
        ]
    );
}

#[test]
fn parsing_is_total_over_hostile_inputs() {
    for input in [
        "::::",
        "-:-:-",
        "\\",
        "\\\\\\",
        "\"\"\"",
        "''\"'\"",
        ",,,,",
        "a:b,c:d -",
        ": : :",
        "-\"",
        "🦀:🔥 -🙂",
        &"x".repeat(10_000),
        &"to:a ".repeat(2_000),
    ] {
        let _ = parse(input);
    }
}

#[test]
fn long_comma_chain_keeps_every_value() {
    let input = format!("k:{}", vec!["v"; 500].join(","));
    let query = parse(&input);
    assert_eq!(query.conditions().len(), 500);
    assert!(query.conditions().iter().all(|c| c.keyword == "k" && c.value == "v"));
}

#[test]
fn unicode_values_survive_round_trips() {
    let query = parse("from:héllo@exämple.com tëxt");
    assert_eq!(values_of(&query, "from"), [("héllo@exämple.com", false)]);
    assert_eq!(segments(&query), [("tëxt", false)]);
    assert_fixed_point("from:héllo@exämple.com tëxt");
}

#[test]
fn scalar_value_projection() {
    let parsed = parse("to:me").parsed_query();
    assert_eq!(parsed.value("to"), Some(Value::Scalar("me".to_string())));
    assert_eq!(parsed.value("missing"), None);
    assert_eq!(parsed.exclude_value("to"), None);
}

#[test]
fn list_value_projection() {
    let parsed = parse("from:a@x.com,b@y.com").parsed_query();
    assert_eq!(
        parsed.value("from"),
        Some(Value::List(vec!["a@x.com".to_string(), "b@y.com".to_string()]))
    );
}

#[test]
fn range_value_projection() {
    let parsed = parse("date:1/10/2013-15/04/2014").parsed_query();
    assert_eq!(
        parsed.value("date"),
        Some(Value::Range(RangeValue {
            from: "1/10/2013".to_string(),
            to: "15/04/2014".to_string(),
        }))
    );

    // A plain dashed word is not a range.
    let parsed = parse("name:foo-bar").parsed_query();
    assert_eq!(parsed.value("name"), Some(Value::Scalar("foo-bar".to_string())));
}

#[test]
fn parsed_query_serializes_to_the_documented_shape() {
    let parsed = parse("to:me -from:joe@acme.com").parsed_query();
    let rendered = serde_json::to_value(&parsed).unwrap();
    assert_eq!(
        rendered,
        serde_json::json!({
            "include": { "to": ["me"] },
            "exclude": { "from": ["joe@acme.com"] },
        })
    );
}
