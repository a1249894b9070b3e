#![doc = r#"
Typed rows for Neo4j query results, built on [`neo4rs`] 0.8.

`neomap` executes parameterized Cypher and converts each returned row
into caller-chosen Rust types, one shape per result column, without any
per-query marshalling code.

# Quick start

## Describe the shapes

```rust
use neomap::prelude::*;

#[derive(Debug, Default, PartialEq, Composite)]
#[allow(non_snake_case)]
struct Document {
    ID: String,
}

#[derive(Debug, Default, PartialEq, Composite)]
#[allow(non_snake_case)]
struct TagsWith {
    Agent: String,
}
```

Fields are filled from the entity property with exactly the same name.
Missing or `null` properties leave the field at its `Default` value.

## Convert rows

```rust
use neomap::prelude::*;
use neomap::core::transform_row;

# #[derive(Debug, Default, PartialEq, Composite)]
# #[allow(non_snake_case)]
# struct Document { ID: String }
let row = vec![
    Value::Node(Node::new(1, ["Document"], [("ID", "doc")])),
    Value::from(300),
    Value::from(vec!["a", "b"]),
];
let shapes = shapes![Document, i64, Vec<String>];

let converted = transform_row(Some(row), &shapes)?.expect("row present");
let (doc, n, tags): (Document, i64, Vec<String>) = converted.extract()?;
assert_eq!(doc, Document { ID: "doc".into() });
assert_eq!(n, 300);
assert_eq!(tags, ["a", "b"]);
# Ok::<(), MapError>(())
```

Entities go to their composite shape, lists to a typed sequence, and
everything else passes through unchanged. A row whose width differs from
the number of shapes comes back as [`ConvertedRow::Unshaped`] with the
raw values, and a query with no matching row yields `None`.

## Query a database

```rust,no_run
use neomap::prelude::*;

# #[derive(Debug, Default, Composite)] #[allow(non_snake_case)] struct Document { ID: String }
# #[derive(Debug, Default, Composite)] #[allow(non_snake_case)] struct Category { ID: String }
# async fn example() -> Result<(), MapError> {
let client = Client::connect(&ClientConfig::from_env()?).await?;

client
    .exec(statement("CREATE (n:Document {ID: $id})").param("id", "doc"))
    .await?;

let rows: Vec<(Document, Category, Vec<i64>)> = client
    .read_rows_as(
        statement("MATCH (n:Document)-[:TAGS_WITH]->(m:Category) RETURN n, m, [1,2,3] AS xs"),
        ["n", "m", "xs"],
    )
    .await?;
# Ok(())
# }
```

# Supported field kinds

| Neo4j type | composite field | sequence element | passthrough slot |
|------------|-----------------|------------------|------------------|
| Integer | `i64` | `i64` | `i64` |
| Boolean | `bool` | `bool` | `bool` |
| String | `String` | `String` | `String` |
| Float | — | `f64` | `f64` |
| anything | — | `Value` | `Value` |

Composite fields of other types (`f64`, `Vec<_>`, `Value`) can be declared,
but populating one from a present property fails with
[`MapError::UnsupportedFieldKind`].

# Error handling

All conversions return [`MapError`]. Failures are never swallowed: the
first field, element, or row that cannot be converted ends the call.

```text
type mismatch on field 'ID': expected String, got Boolean
```

[`neo4rs`]: https://docs.rs/neo4rs
"#]

pub mod client;
pub mod config;
pub mod prelude;
pub mod projection;
pub mod statement;
pub mod stream;

pub use neomap_core as core;
pub use neomap_core::{shapes, ConvertedRow, MapError};
pub use neomap_macros::Composite;
