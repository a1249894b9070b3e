#![allow(non_snake_case)]

use neomap_core::populate::populate;
use neomap_core::shape::{Kind, Shape};
use neomap_core::traits::Composite;
use neomap_core::{shapes, transform_row, ConvertedRow, MapError, Node, Relationship, Value};
use neomap_macros::Composite;

#[derive(Debug, Default, PartialEq, Composite)]
struct Document {
    ID: String,
}

#[derive(Debug, Default, PartialEq, Composite)]
struct Category {
    ID: String,
    Name: String,
}

#[derive(Debug, Default, PartialEq, Composite)]
struct TagsWith {
    Agent: String,
}

#[derive(Debug, Default, PartialEq, Composite)]
#[neomap(name = "Person")]
struct PersonRow {
    Name: String,
    Age: i64,
    Happy: bool,
    #[neomap(skip)]
    cache: Option<u32>,
}

#[derive(Debug, Default, PartialEq, Composite)]
struct Measurement {
    Label: String,
    Reading: f64,
}

#[derive(Debug, Default, PartialEq, Composite)]
struct Contact {
    ID: String,
    Nick: Option<String>,
}

#[derive(Debug, Default, PartialEq, Composite)]
struct Keyword {
    r#type: String,
}

#[derive(Debug, Default, PartialEq, Composite)]
struct Empty {}

#[test]
fn test_composite_trait_impl() {
    assert_eq!(Document::NAME, "Document");
    assert_eq!(PersonRow::NAME, "Person");
    assert_eq!(Empty::FIELDS.len(), 0);
}

#[test]
fn test_field_table() {
    let fields = PersonRow::FIELDS;
    assert_eq!(fields.len(), 4);
    assert_eq!(fields[0].name, "Name");
    assert_eq!(fields[0].kind, Kind::String);
    assert_eq!(fields[1].kind, Kind::Integer);
    assert_eq!(fields[2].kind, Kind::Boolean);
    assert_eq!(fields[3].name, "cache");
    assert!(!fields[3].settable);
    assert_eq!(Measurement::FIELDS[1].kind, Kind::Float);
}

#[test]
fn test_raw_identifier_field_name() {
    assert_eq!(Keyword::FIELDS[0].name, "type");
    let props = [("type".to_string(), Value::from("tag"))].into_iter().collect();
    let k: Keyword = populate(&props).unwrap();
    assert_eq!(k.r#type, "tag");
}

#[test]
fn test_has_shape_is_composite() {
    match Shape::of::<Category>() {
        Shape::Composite(c) => {
            assert_eq!(c.name(), "Category");
            assert_eq!(c.fields().len(), 2);
        }
        other => panic!("expected composite shape, got: {other:?}"),
    }
}

#[test]
fn test_populate_derived() {
    let node = Node::new(
        1,
        ["Person"],
        [
            ("Name", Value::from("Rupert")),
            ("Age", Value::from(29)),
            ("Happy", Value::from(true)),
            ("cache", Value::from(7)),
        ],
    );
    let p: PersonRow = populate(&node.properties).unwrap();
    assert_eq!(
        p,
        PersonRow { Name: "Rupert".into(), Age: 29, Happy: true, cache: None }
    );
}

#[test]
fn test_populate_round_trip() {
    let original = PersonRow { Name: "Ada".into(), Age: 36, Happy: true, cache: None };
    let node = Node::new(
        1,
        ["Person"],
        [
            ("Name", Value::from(original.Name.clone())),
            ("Age", Value::from(original.Age)),
            ("Happy", Value::from(original.Happy)),
        ],
    );
    assert_eq!(populate::<PersonRow>(&node.properties).unwrap(), original);
}

#[test]
fn test_unsupported_field_kind() {
    let node = Node::new(1, ["Measurement"], [("Label", Value::from("t")), ("Reading", Value::from(1.5))]);
    let err = populate::<Measurement>(&node.properties).unwrap_err();
    match err {
        MapError::UnsupportedFieldKind { shape, field, kind } => {
            assert_eq!(shape, "Measurement");
            assert_eq!(field, "Reading");
            assert_eq!(kind, Kind::Float);
        }
        other => panic!("expected UnsupportedFieldKind, got: {other}"),
    }

    let partial = Node::new(1, ["Measurement"], [("Label", "t")]);
    let m: Measurement = populate(&partial.properties).unwrap();
    assert_eq!(m.Label, "t");
    assert_eq!(m.Reading, 0.0);
}

#[test]
fn test_optional_field_kind() {
    assert_eq!(Contact::FIELDS[1].kind, Kind::Any);

    let absent = Node::new(1, ["Contact"], [("ID", "c1")]);
    let c: Contact = populate(&absent.properties).unwrap();
    assert_eq!(c, Contact { ID: "c1".into(), Nick: None });

    let null = Node::new(1, ["Contact"], [("ID", Value::from("c1")), ("Nick", Value::Null)]);
    assert_eq!(populate::<Contact>(&null.properties).unwrap().Nick, None);

    let present = Node::new(1, ["Contact"], [("ID", "c1"), ("Nick", "cee")]);
    match populate::<Contact>(&present.properties).unwrap_err() {
        MapError::UnsupportedFieldKind { shape, field, kind } => {
            assert_eq!(shape, "Contact");
            assert_eq!(field, "Nick");
            assert_eq!(kind, Kind::Any);
        }
        other => panic!("expected UnsupportedFieldKind, got: {other}"),
    }
}

#[test]
fn test_mismatch_names_field() {
    let node = Node::new(1, ["Document"], [("ID", true)]);
    let err = populate::<Document>(&node.properties).unwrap_err();
    let msg = err.to_string();
    assert!(msg.contains("'ID'"));
    assert!(msg.contains("Boolean"));
}

fn tagged_row(category: &str) -> Vec<Value> {
    vec![
        Node::new(1, ["Document"], [("ID", "doc")]).into(),
        Node::new(2, ["Category"], [("ID", category)]).into(),
        Relationship::new(3, 1, 2, "TAGS_WITH", [("Agent", "user")]).into(),
        Value::Integer(300),
    ]
}

#[test]
fn test_end_to_end_row() {
    let shapes = shapes![Document, Category, TagsWith, i64];
    let row = transform_row(Some(tagged_row("catA")), &shapes).unwrap().unwrap();
    let (doc, cat, tag, n): (Document, Category, TagsWith, i64) = row.extract().unwrap();
    assert_eq!(doc, Document { ID: "doc".into() });
    assert_eq!(cat, Category { ID: "catA".into(), Name: String::new() });
    assert_eq!(tag, TagsWith { Agent: "user".into() });
    assert_eq!(n, 300);
}

#[test]
fn test_end_to_end_with_sequences() {
    let mut row = tagged_row("catB");
    row.push(Value::from(vec![1, 2, 3]));
    row.push(Value::from(vec!["a", "b"]));
    let shapes = shapes![Document, Category, TagsWith, i64, Vec<i64>, Vec<String>];
    let mut converted = transform_row(Some(row), &shapes).unwrap().unwrap();

    assert_eq!(converted.take::<Category>(1).unwrap().ID, "catB");
    assert_eq!(converted.take::<Vec<i64>>(4).unwrap(), vec![1, 2, 3]);
    assert_eq!(converted.take::<Vec<String>>(5).unwrap(), vec!["a".to_string(), "b".to_string()]);
}

#[test]
fn test_positional_downcast_to_wrong_composite() {
    let shapes = shapes![Document, Category, TagsWith, i64];
    let mut row = transform_row(Some(tagged_row("catA")), &shapes).unwrap().unwrap();
    match row.take::<Category>(0).unwrap_err() {
        MapError::Downcast { index, found, .. } => {
            assert_eq!(index, 0);
            assert_eq!(found, "Document");
        }
        other => panic!("expected Downcast, got: {other}"),
    }
}

#[test]
fn test_width_mismatch_is_not_an_error() {
    let shapes = shapes![Document, Category];
    let row = transform_row(Some(tagged_row("catA")), &shapes).unwrap().unwrap();
    match row {
        ConvertedRow::Unshaped { values, shapes } => {
            assert_eq!(values, tagged_row("catA"));
            assert_eq!(shapes, 2);
        }
        other => panic!("expected unshaped row, got: {other:?}"),
    }
}
