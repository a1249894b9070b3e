#![allow(non_snake_case)]

use neo4rs::{BoltList, BoltType, Row};
use neomap::prelude::*;

#[derive(Debug, Default, PartialEq, Composite)]
struct Category {
    ID: String,
}

fn category_row(id: &str, tags: &[&str]) -> Row {
    let node = BoltType::Node(neo4rs::BoltNode::new(
        neo4rs::BoltInteger::new(1),
        vec![BoltType::from("Category")].into(),
        vec![(neo4rs::BoltString::from("ID"), BoltType::from(id))]
            .into_iter()
            .collect(),
    ));
    let tags = BoltType::List(BoltList::from(
        tags.iter().map(|t| BoltType::from(*t)).collect::<Vec<_>>(),
    ));
    let fields = BoltList::from(vec![BoltType::from("c"), BoltType::from("tags")]);
    Row::new(fields, BoltList::from(vec![node, tags]))
}

fn stream_of(rows: Vec<Result<Row, neo4rs::Error>>, projection: Projection) -> ShapedStream {
    ShapedStream::new(futures::stream::iter(rows), projection)
}

#[tokio::test]
async fn test_stream_converts_rows_in_order() {
    let projection = Projection::of::<(Category, Vec<String>)>(["c", "tags"]);
    let mut stream = stream_of(
        vec![Ok(category_row("a", &["x"])), Ok(category_row("b", &["y", "z"]))],
        projection,
    );

    let (first, tags): (Category, Vec<String>) = stream.next().await.unwrap().unwrap().extract().unwrap();
    assert_eq!(first, Category { ID: "a".into() });
    assert_eq!(tags, vec!["x"]);

    let (second, tags): (Category, Vec<String>) = stream.next().await.unwrap().unwrap().extract().unwrap();
    assert_eq!(second.ID, "b");
    assert_eq!(tags, vec!["y", "z"]);

    assert!(stream.next().await.is_none());
}

#[tokio::test]
async fn test_stream_missing_column_gives_unshaped_row() {
    let projection = Projection::new().column::<Category>("c").column::<i64>("score");
    let mut stream = stream_of(vec![Ok(category_row("a", &[]))], projection);

    let row = stream.next().await.unwrap().unwrap();
    assert!(!row.is_shaped());
    assert_eq!(row.into_raw().map(|v| v.len()), Some(1));
}

#[tokio::test]
async fn test_stream_reports_conversion_failure() {
    let projection = Projection::of::<(Category, Vec<i64>)>(["c", "tags"]);
    let mut stream = stream_of(vec![Ok(category_row("a", &["x"]))], projection);

    match stream.next().await.unwrap().unwrap_err() {
        MapError::ElementMismatch { index, .. } => assert_eq!(index, 0),
        other => panic!("expected ElementMismatch, got: {other}"),
    }
}

#[tokio::test]
async fn test_stream_passes_driver_errors_through() {
    let projection = Projection::of::<(Category,)>(["c"]);
    let mut stream = stream_of(
        vec![Err(neo4rs::Error::ConnectionError), Ok(category_row("a", &[]))],
        projection,
    );

    assert!(matches!(stream.next().await, Some(Err(MapError::Neo4j(_)))));
    let (c,): (Category,) = stream.next().await.unwrap().unwrap().extract().unwrap();
    assert_eq!(c.ID, "a");
}
