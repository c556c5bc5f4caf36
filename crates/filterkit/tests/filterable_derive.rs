//! Integration tests for the Filterable derive macro.
//!
//! These tests verify that `#[derive(Filterable)]` describes struct fields
//! correctly and that records seed the builder with `$eq`/`$in` conditions.

#![cfg(feature = "derive")]
#![allow(dead_code)] // Some fields are intentionally skipped for testing

use chrono::{DateTime, TimeZone, Utc};
use filterkit::{produce, FieldValue, FilterBuilder, FilterValue, Filterable, ObjectId};
use serde_json::json;

// =============================================================================
// Basic derive tests
// =============================================================================

#[derive(Filterable)]
struct Search {
    name: String,

    #[filter(rename = "capName")]
    cap_name: String,

    age: u32,

    tags: Vec<String>,

    #[filter(skip)]
    page: usize,
}

fn empty_search() -> Search {
    Search {
        name: String::new(),
        cap_name: String::new(),
        age: 0,
        tags: Vec::new(),
        page: 0,
    }
}

#[test]
fn test_key_constants_generated() {
    assert_eq!(Search::NAME, "name");
    assert_eq!(Search::CAP_NAME, "capName");
    assert_eq!(Search::AGE, "age");
    assert_eq!(Search::TAGS, "tags");
}

#[test]
fn test_describe_fields_in_declaration_order() {
    let fields = empty_search().describe_fields();
    let keys: Vec<&str> = fields.iter().map(|f| f.key.as_str()).collect();
    assert_eq!(keys, ["name", "capName", "age", "tags"]);
    assert_eq!(fields[3].value, FieldValue::Sequence(Vec::new()));
}

#[test]
fn test_zero_record_produces_nothing() {
    let search = Search {
        page: 7,
        ..empty_search()
    };
    assert!(produce(&search).is_empty());
    assert!(FilterBuilder::new().from_record(&search).build().is_empty());
}

#[test]
fn test_record_seeds_eq_and_in() {
    let search = Search {
        name: "a".to_string(),
        cap_name: "A".to_string(),
        age: 8,
        tags: vec!["x".to_string(), "y".to_string()],
        page: 2,
    };
    let filter = FilterBuilder::new().from_record(&search).build();
    assert_eq!(
        filter.to_json(),
        json!({
            "name": { "$eq": "a" },
            "capName": { "$eq": "A" },
            "age": { "$eq": 8 },
            "tags": { "$in": ["x", "y"] }
        })
    );
}

#[test]
fn test_record_combines_with_views_and_or() {
    let first = Search {
        name: "a".to_string(),
        ..empty_search()
    };
    let second = Search {
        age: 30,
        ..empty_search()
    };

    let filter = FilterBuilder::new()
        .from_record(&first)
        .number("age")
        .gte(18)
        .or()
        .from_record(&second)
        .build();

    assert_eq!(
        filter.to_json(),
        json!({ "$or": [
            { "name": { "$eq": "a" }, "age": { "$gte": 18 } },
            { "age": { "$eq": 30 } }
        ]})
    );
}

// =============================================================================
// Field kinds
// =============================================================================

#[derive(Filterable)]
struct Event<'a> {
    #[filter(rename = "_id")]
    id: ObjectId,
    kind: &'a str,
    at: DateTime<Utc>,
    score: Option<f64>,
    active: bool,
    r#type: Option<String>,
    codes: Vec<u16>,
}

#[test]
fn test_field_kinds() {
    let at = Utc.with_ymd_and_hms(2024, 6, 1, 8, 30, 0).unwrap();
    let id = ObjectId::parse_str("5f1a2b3c4d5e6f7a8b9c0d1e").unwrap();
    let event = Event {
        id,
        kind: "click",
        at,
        score: Some(0.5),
        active: true,
        r#type: Some("ui".to_string()),
        codes: vec![200, 404],
    };

    assert_eq!(Event::_ID, "_id");
    assert_eq!(Event::TYPE, "type");

    let pairs = produce(&event);
    assert_eq!(
        pairs,
        vec![
            ("_id".to_string(), FilterValue::ObjectId(id)),
            ("kind".to_string(), FilterValue::from("click")),
            ("at".to_string(), FilterValue::DateTime(at)),
            ("score".to_string(), FilterValue::from(0.5f64)),
            ("active".to_string(), FilterValue::Bool(true)),
            ("type".to_string(), FilterValue::from("ui")),
            ("codes".to_string(), FilterValue::from(vec![200u16, 404])),
        ]
    );
}

#[test]
fn test_zero_kinds_are_skipped() {
    let event = Event {
        id: ObjectId::default(),
        kind: "",
        at: Utc.timestamp_opt(0, 0).unwrap(),
        score: None,
        active: false,
        r#type: Some(String::new()),
        codes: Vec::new(),
    };
    assert!(produce(&event).is_empty());
}

// =============================================================================
// Generic records
// =============================================================================

#[derive(Filterable)]
struct Tagged<T: filterkit::FilterField> {
    label: String,
    value: T,
}

#[test]
fn test_generic_record() {
    let tagged = Tagged {
        label: "n".to_string(),
        value: 5i64,
    };
    let filter = FilterBuilder::new().from_record(&tagged).build();
    assert_eq!(
        filter.to_json(),
        json!({ "label": { "$eq": "n" }, "value": { "$eq": 5 } })
    );
}
