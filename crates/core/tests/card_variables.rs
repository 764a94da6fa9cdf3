use std::collections::BTreeSet;
use std::sync::{Arc, Mutex};

use cardkit_core::vars::{
    Card, CardValue, JsonNode, Mapping, NodeRef, VariableMap, VariableValue,
    discover_variables, discover_variables_deep, resolve_card_variables, substitute,
};
use serde_json::json;

fn names(list: &[&str]) -> Vec<String> {
    list.iter().map(|s| s.to_string()).collect()
}

fn vars(pairs: &[(&str, VariableValue)]) -> VariableMap {
    pairs.iter().map(|(k, v)| (k.to_string(), v.clone())).collect()
}

#[test]
fn discovery_in_order() {
    assert_eq!(discover_variables("{a} and {b}"), Some(names(&["a", "b"])));
    assert_eq!(discover_variables("no vars"), None);
}

#[test]
fn deep_discovery_is_unique() {
    let config = CardValue::from(json!({
        "title": "{x}",
        "nested": {"body": "{y} and {x}"},
        "series": [{"label": "{z}"}, "{y}", 7]
    }));
    let found: BTreeSet<String> = discover_variables_deep(&config).into_iter().collect();
    assert_eq!(found, ["x", "y", "z"].into_iter().map(String::from).collect());
}

#[test]
fn deep_discovery_skips_render_nodes() {
    let mut config = Mapping::new();
    config.insert("title".into(), "{visible}".into());
    config.insert("icon".into(), CardValue::node(JsonNode(json!({"$node": "svg", "label": "{hidden}"}))));
    assert_eq!(discover_variables_deep(&CardValue::Mapping(config)), names(&["visible"]));
}

#[test]
fn exact_numeric_match_yields_a_number() {
    let values = vars(&[("threshold", 42.into())]);
    let out = substitute(&names(&["threshold"]), &values, &"{threshold}".into());
    assert_eq!(out, CardValue::Number(42.0));
}

#[test]
fn lookup_is_case_insensitive() {
    let values = vars(&[("name", "X".into())]);
    let out = substitute(&names(&["Name"]), &values, &"hello {Name}".into());
    assert_eq!(out, CardValue::from("hello X"));
}

#[test]
fn missing_values_leave_placeholders() {
    let values = vars(&[("known", "yes".into())]);
    let out = substitute(&names(&["known", "unknown"]), &values, &"{known} {unknown}".into());
    assert_eq!(out, CardValue::from("yes {unknown}"));
}

#[test]
fn resolution_is_idempotent() {
    let values = vars(&[("site", "Boston".into())]);
    let target = CardValue::from(json!({"title": "{site} / {floor}"}));
    let once = substitute(&names(&["site", "floor"]), &values, &target);
    let twice = substitute(&discover_variables_deep(&once), &values, &once);
    assert_eq!(once, twice);
}

#[test]
fn callback_replaces_the_whole_target() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let seen = Arc::clone(&calls);
    let values = vars(&[(
        "status",
        VariableValue::callback(move |name, target| {
            seen.lock().unwrap().push((name.to_string(), target.to_string()));
            CardValue::from("replaced")
        }),
    )]);

    let out = substitute(&names(&["Status"]), &values, &"Device is {Status} now".into());
    assert_eq!(out, CardValue::from("replaced"));
    assert_eq!(
        calls.lock().unwrap().as_slice(),
        &[("Status".to_string(), "Device is {Status} now".to_string())]
    );
}

#[test]
fn callback_fires_without_a_placeholder() {
    let values = vars(&[("x", VariableValue::callback(|_, _| CardValue::Bool(true)))]);
    let out = substitute(&names(&["x"]), &values, &"nothing here".into());
    assert_eq!(out, CardValue::Bool(true));
}

#[test]
fn substitution_is_sequential() {
    // `{a}` expands to text containing `{b}`, which the later variable then sees.
    let values = vars(&[("a", "{b}".into()), ("b", "done".into())]);
    let out = substitute(&names(&["a", "b"]), &values, &"{a}".into());
    assert_eq!(out, CardValue::from("done"));

    let reversed = substitute(&names(&["b", "a"]), &values, &"{a}".into());
    assert_eq!(reversed, CardValue::from("{b}"));
}

#[test]
fn non_text_values_pass_through() {
    let values = vars(&[("a", "x".into())]);
    for value in [CardValue::Null, CardValue::Bool(false), CardValue::Number(1.5)] {
        assert_eq!(substitute(&names(&["a"]), &values, &value), value);
    }
}

#[test]
fn render_nodes_keep_identity() {
    let node = NodeRef::new(JsonNode(json!({"$node": "chart", "title": "{a}"})));
    let target = CardValue::Sequence(vec![CardValue::Node(node.clone()), "{a}".into()]);
    let out = substitute(&names(&["a"]), &vars(&[("a", "x".into())]), &target);

    let CardValue::Sequence(items) = out else { panic!("expected sequence") };
    match &items[0] {
        CardValue::Node(same) => assert!(same.ptr_eq(&node)),
        other => panic!("expected node, got {other:?}"),
    }
    assert_eq!(items[1], CardValue::from("x"));
}

#[test]
fn resolve_merges_and_substitutes() {
    let card = Card::from_json(json!({
        "id": "pressure",
        "size": "MEDIUM",
        "content": {
            "attributes": [{"label": "{sensor} pressure", "thresholds": [{"value": "{limit}"}]}]
        },
        "cardVariables": {"sensor": "Pump 3", "limit": 80, "Site": "Boston"}
    }))
    .unwrap();

    let resolved = resolve_card_variables(
        Some("{site}: {sensor}".into()),
        Some(CardValue::from("ignored")),
        None,
        card,
    );

    insta::assert_snapshot!(
        serde_json::to_string_pretty(&resolved).unwrap(),
        @r#"
    {
      "cardVariables": {
        "Site": "Boston",
        "limit": 80,
        "sensor": "Pump 3"
      },
      "content": {
        "attributes": [
          {
            "label": "Pump 3 pressure",
            "thresholds": [
              {
                "value": 80
              }
            ]
          }
        ]
      },
      "id": "pressure",
      "size": "MEDIUM",
      "title": "Boston: Pump 3"
    }
    "#
    );
}

#[test]
fn resolve_expands_placeholders_inside_variable_values() {
    let card = Card::from_json(json!({
        "title": "{greeting}",
        "cardVariables": {"greeting": "Hi {name}", "name": "Bob"}
    }))
    .unwrap();

    let resolved = resolve_card_variables(None, None, None, card);
    assert_eq!(resolved.get("title"), Some(&CardValue::from("Hi Bob")));

    let variables = resolved.card_variables.unwrap();
    assert!(matches!(&variables["greeting"], VariableValue::Text(t) if t == "Hi Bob"));
    assert!(matches!(&variables["name"], VariableValue::Text(t) if t == "Bob"));
}

#[test]
fn resolve_leaves_callback_variables_alone() {
    let fields = Mapping::from([("title".to_string(), CardValue::from("{label}"))]);
    let card = Card::new(fields).with_variables(vars(&[
        ("label", "{unit} reading".into()),
        ("unit", "kPa".into()),
        ("status", VariableValue::callback(|_, target| CardValue::from(target))),
    ]));

    let resolved = resolve_card_variables(None, None, None, card);
    let variables = resolved.card_variables.unwrap();
    assert!(matches!(&variables["status"], VariableValue::Callback(_)));
    assert!(matches!(&variables["label"], VariableValue::Text(t) if t == "kPa reading"));
}

#[test]
fn spliced_numbers_use_exponent_form_at_the_extremes() {
    let values = vars(&[("rows", 1e21.into())]);
    let out = substitute(&names(&["rows"]), &values, &"{rows} rows".into());
    assert_eq!(out, CardValue::from("1e+21 rows"));
}

#[test]
fn resolve_without_variables_only_merges() {
    let mut fields = Mapping::new();
    fields.insert("title".into(), "Card {title}".into());
    let resolved = resolve_card_variables(
        Some("positional".into()),
        None,
        Some(CardValue::Number(3.0)),
        Card::new(fields),
    );
    assert_eq!(resolved.get("title"), Some(&CardValue::from("Card {title}")));
    assert_eq!(resolved.get("values"), Some(&CardValue::Number(3.0)));
    assert!(resolved.get("content").is_none());
    assert!(resolved.card_variables.is_none());
}
