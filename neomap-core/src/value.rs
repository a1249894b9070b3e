//! The dynamic value model and its conversion from `neo4rs::BoltType`.
//!
//! [`Value`] is a closed sum type: every shape a driver value can take is a
//! variant, so the converters downstream match exhaustively instead of
//! probing types at runtime.

use std::collections::HashMap;

use neo4rs::BoltType;

use crate::error::MapError;

/// Property mapping of a node or relationship: property name → value.
pub type PropertyMap = HashMap<String, Value>;

/// A dynamically-typed value for one column of a query result.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
    Bytes(bytes::Bytes),
    List(Vec<Value>),
    Map(PropertyMap),
    Node(Node),
    Relationship(Relationship),
    Path(Path),
    Point2D(Point2D),
    Point3D(Point3D),
    Date(chrono::NaiveDate),
    LocalTime(chrono::NaiveTime),
    Time(chrono::NaiveTime, chrono::FixedOffset),
    LocalDateTime(chrono::NaiveDateTime),
    DateTime(chrono::DateTime<chrono::FixedOffset>),
    Duration(std::time::Duration),
}

impl Value {
    /// Human-readable variant name, used in error messages to describe
    /// the value actually received.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "Null",
            Value::Boolean(_) => "Boolean",
            Value::Integer(_) => "Integer",
            Value::Float(_) => "Float",
            Value::String(_) => "String",
            Value::Bytes(_) => "Bytes",
            Value::List(_) => "List",
            Value::Map(_) => "Map",
            Value::Node(_) => "Node",
            Value::Relationship(_) => "Relationship",
            Value::Path(_) => "Path",
            Value::Point2D(_) => "Point2D",
            Value::Point3D(_) => "Point3D",
            Value::Date(_) => "Date",
            Value::LocalTime(_) => "LocalTime",
            Value::Time(..) => "Time",
            Value::LocalDateTime(_) => "LocalDateTime",
            Value::DateTime(_) => "DateTime",
            Value::Duration(_) => "Duration",
        }
    }

    /// The property mapping of a graph entity.
    ///
    /// Only nodes and relationships carry one. A plain `Map` value is data,
    /// not an entity, and returns `None`.
    pub fn properties(&self) -> Option<&PropertyMap> {
        match self {
            Value::Node(n) => Some(&n.properties),
            Value::Relationship(r) => Some(&r.properties),
            _ => None,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }
}

/// A graph node: identity, labels and properties.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Node {
    pub id: i64,
    pub labels: Vec<String>,
    pub properties: PropertyMap,
}

impl Node {
    /// Build a node from `(name, value)` property pairs.
    ///
    /// ```rust
    /// # use neomap_core::value::Node;
    /// let doc = Node::new(1, ["Document"], [("ID", "doc")]);
    /// assert_eq!(doc.labels, vec!["Document".to_string()]);
    /// ```
    pub fn new<L, P, K, V>(id: i64, labels: L, properties: P) -> Self
    where
        L: IntoIterator,
        L::Item: Into<String>,
        P: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Node {
            id,
            labels: labels.into_iter().map(Into::into).collect(),
            properties: properties
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A graph relationship.
///
/// `start` and `end` are `None` for relationships that arrive unbound,
/// i.e. as segments of a [`Path`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Relationship {
    pub id: i64,
    pub start: Option<i64>,
    pub end: Option<i64>,
    pub typ: String,
    pub properties: PropertyMap,
}

impl Relationship {
    pub fn new<P, K, V>(id: i64, start: i64, end: i64, typ: impl Into<String>, properties: P) -> Self
    where
        P: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        Relationship {
            id,
            start: Some(start),
            end: Some(end),
            typ: typ.into(),
            properties: properties
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

/// A path: alternating nodes and unbound relationships.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    pub nodes: Vec<Node>,
    pub relationships: Vec<Relationship>,
    pub indices: Vec<i64>,
}

/// A 2-dimensional point from Neo4j's spatial system.
///
/// `sr_id` is the Spatial Reference System Identifier (e.g. `4326` for
/// WGS 84 geographic, `7203` for cartesian).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point2D {
    pub sr_id: i64,
    pub x: f64,
    pub y: f64,
}

/// A 3-dimensional point. Same as [`Point2D`] with a `z` component.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Point3D {
    pub sr_id: i64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

// ---------------------------------------------------------------------------
// Conveniences for building values by hand
// ---------------------------------------------------------------------------

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Integer(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Integer(v as i64)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Boolean(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_owned())
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<Node> for Value {
    fn from(v: Node) -> Self {
        Value::Node(v)
    }
}

impl From<Relationship> for Value {
    fn from(v: Relationship) -> Self {
        Value::Relationship(v)
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(v: Vec<T>) -> Self {
        Value::List(v.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map_or(Value::Null, Into::into)
    }
}

// ---------------------------------------------------------------------------
// Inbound boundary: neo4rs::BoltType -> Value
// ---------------------------------------------------------------------------

fn props_from_bolt(map: neo4rs::BoltMap) -> Result<PropertyMap, MapError> {
    let mut out = HashMap::with_capacity(map.value.len());
    for (k, v) in map.value {
        out.insert(k.value, Value::try_from(v)?);
    }
    Ok(out)
}

fn node_from_bolt(node: neo4rs::BoltNode) -> Result<Node, MapError> {
    let labels = node
        .labels
        .value
        .into_iter()
        .filter_map(|l| match l {
            BoltType::String(s) => Some(s.value),
            _ => None,
        })
        .collect();
    Ok(Node {
        id: node.id.value,
        labels,
        properties: props_from_bolt(node.properties)?,
    })
}

fn unbound_from_bolt(rel: neo4rs::BoltUnboundedRelation) -> Result<Relationship, MapError> {
    Ok(Relationship {
        id: rel.id.value,
        start: None,
        end: None,
        typ: rel.typ.value,
        properties: props_from_bolt(rel.properties)?,
    })
}

impl TryFrom<BoltType> for Value {
    type Error = MapError;

    fn try_from(value: BoltType) -> Result<Self, MapError> {
        Ok(match value {
            BoltType::Null(_) => Value::Null,
            BoltType::Boolean(b) => Value::Boolean(b.value),
            BoltType::Integer(i) => Value::Integer(i.value),
            BoltType::Float(f) => Value::Float(f.value),
            BoltType::String(s) => Value::String(s.value),
            BoltType::Bytes(b) => Value::Bytes(b.value),
            BoltType::List(xs) => Value::List(
                xs.value
                    .into_iter()
                    .map(Value::try_from)
                    .collect::<Result<_, _>>()?,
            ),
            BoltType::Map(m) => Value::Map(props_from_bolt(m)?),
            BoltType::Node(n) => Value::Node(node_from_bolt(n)?),
            BoltType::Relation(r) => Value::Relationship(Relationship {
                id: r.id.value,
                start: Some(r.start_node_id.value),
                end: Some(r.end_node_id.value),
                typ: r.typ.value,
                properties: props_from_bolt(r.properties)?,
            }),
            BoltType::UnboundedRelation(r) => Value::Relationship(unbound_from_bolt(r)?),
            BoltType::Path(p) => {
                let nodes = p
                    .nodes()
                    .into_iter()
                    .map(node_from_bolt)
                    .collect::<Result<_, _>>()?;
                let relationships = p
                    .rels()
                    .into_iter()
                    .map(unbound_from_bolt)
                    .collect::<Result<_, _>>()?;
                let indices = p.indices().into_iter().map(|i| i.value).collect();
                Value::Path(Path { nodes, relationships, indices })
            }
            BoltType::Point2D(p) => Value::Point2D(Point2D {
                sr_id: p.sr_id.value,
                x: p.x.value,
                y: p.y.value,
            }),
            BoltType::Point3D(p) => Value::Point3D(Point3D {
                sr_id: p.sr_id.value,
                x: p.x.value,
                y: p.y.value,
                z: p.z.value,
            }),
            BoltType::Duration(d) => Value::Duration(d.into()),
            BoltType::Date(d) => {
                let date: chrono::NaiveDate = d.try_into().map_err(|e: neo4rs::Error| {
                    MapError::Mapping(format!("BoltDate -> NaiveDate: {e}"))
                })?;
                Value::Date(date)
            }
            BoltType::Time(t) => {
                let (time, offset): (chrono::NaiveTime, chrono::FixedOffset) = t.into();
                Value::Time(time, offset)
            }
            BoltType::LocalTime(t) => Value::LocalTime(t.into()),
            BoltType::LocalDateTime(dt) => {
                let ndt: chrono::NaiveDateTime = dt.try_into().map_err(|e: neo4rs::Error| {
                    MapError::Mapping(format!("BoltLocalDateTime -> NaiveDateTime: {e}"))
                })?;
                Value::LocalDateTime(ndt)
            }
            BoltType::DateTime(dt) => {
                let cdt: chrono::DateTime<chrono::FixedOffset> =
                    dt.try_into().map_err(|e: neo4rs::Error| {
                        MapError::Mapping(format!("BoltDateTime -> DateTime<FixedOffset>: {e}"))
                    })?;
                Value::DateTime(cdt)
            }
            BoltType::DateTimeZoneId(dt) => {
                let cdt: chrono::DateTime<chrono::FixedOffset> =
                    (&dt).try_into().map_err(|e: neo4rs::Error| {
                        MapError::Mapping(format!(
                            "BoltDateTimeZoneId -> DateTime<FixedOffset>: {e}"
                        ))
                    })?;
                Value::DateTime(cdt)
            }
        })
    }
}
