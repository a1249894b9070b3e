//! Streaming query results converted row by row.

use std::pin::Pin;

use futures::stream::Stream;
use neomap_core::{transform_row, ConvertedRow, MapError, Record};

use crate::projection::Projection;

/// A stream of rows converted through a [`Projection`].
///
/// Created by [`Client::stream_rows`](crate::client::Client::stream_rows).
/// Each call to [`next()`](Self::next) pulls the next row from the database
/// and converts it. The pooled connection is held until the stream is
/// dropped.
///
/// # Example
///
/// ```rust,no_run
/// # use neomap::prelude::*;
/// # async fn example(client: &Client) -> Result<(), MapError> {
/// let projection = Projection::new().column::<Vec<String>>("tags");
/// let mut stream = client
///     .stream_rows(statement("MATCH (d:Document) RETURN d.tags AS tags"), projection)
///     .await?;
///
/// while let Some(row) = stream.next().await {
///     let tags: Vec<String> = row?.take(0)?;
///     println!("{tags:?}");
/// }
/// # Ok(())
/// # }
/// ```
pub struct ShapedStream {
    inner: Pin<Box<dyn Stream<Item = Result<neo4rs::Row, neo4rs::Error>> + Send>>,
    projection: Projection,
}

impl ShapedStream {
    /// Convert the rows of any row stream through `projection`.
    pub fn new<S>(inner: S, projection: Projection) -> Self
    where
        S: Stream<Item = Result<neo4rs::Row, neo4rs::Error>> + Send + 'static,
    {
        Self {
            inner: Box::pin(inner),
            projection,
        }
    }

    /// Pull the next row from the stream and convert it.
    ///
    /// Returns `None` when the stream is exhausted.
    pub async fn next(&mut self) -> Option<Result<ConvertedRow, MapError>> {
        use futures::StreamExt;
        let row = match self.inner.next().await? {
            Ok(row) => row,
            Err(e) => return Some(Err(MapError::Neo4j(e))),
        };
        let converted = self
            .projection
            .row(&row)
            .values()
            .and_then(|values| transform_row(Some(values), self.projection.shapes()));
        converted.transpose()
    }
}
