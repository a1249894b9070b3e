//! A thin session wrapper over [`neo4rs::Graph`].

use neo4rs::{Graph, Row};

use neomap_core::{convert_many, convert_single, ConvertedRow, FromConvertedRow, MapError};

use crate::config::ClientConfig;
use crate::projection::Projection;
use crate::statement::Statement;
use crate::stream::ShapedStream;

/// Executes statements and converts their rows.
///
/// Every call takes its own result stream from the connection pool and
/// hands the connection back when that stream is dropped, which happens
/// before the call returns, on success and on error alike.
///
/// # Example
///
/// ```rust,no_run
/// # use neomap::prelude::*;
/// # #[derive(Debug, Default, Composite)] #[allow(non_snake_case)] struct Document { ID: String }
/// # #[derive(Debug, Default, Composite)] #[allow(non_snake_case)] struct Category { ID: String }
/// # async fn example() -> Result<(), MapError> {
/// let client = Client::connect(&ClientConfig::new("bolt://localhost:7687", "neo4j", "password")).await?;
///
/// let projection = Projection::of::<(Document, Category, i64)>(["n", "m", "300"]);
/// let row = client
///     .read_single_row(
///         statement("MATCH (n:Document)-[:TAGS_WITH]->(m:Category) RETURN n, m, 300"),
///         &projection,
///     )
///     .await?;
///
/// if let Some(row) = row {
///     let (doc, cat, n): (Document, Category, i64) = row.extract()?;
/// }
/// # Ok(())
/// # }
/// ```
#[derive(Clone)]
pub struct Client {
    graph: Graph,
}

impl Client {
    /// Connect using `config`.
    pub async fn connect(config: &ClientConfig) -> Result<Self, MapError> {
        log::debug!("connecting to {}", config.uri);
        let graph = Graph::connect(config.to_neo4rs()?).await?;
        Ok(Self { graph })
    }

    /// Wrap an already connected graph.
    pub fn from_graph(graph: Graph) -> Self {
        Self { graph }
    }

    pub fn graph(&self) -> &Graph {
        &self.graph
    }

    /// Round-trip a trivial statement to check the connection and credentials.
    pub async fn ping(&self) -> Result<(), MapError> {
        self.exec(Statement::new("RETURN 1")).await
    }

    /// Execute a statement, discarding any result rows.
    pub async fn exec(&self, stmt: impl Into<Statement>) -> Result<(), MapError> {
        let stmt = stmt.into();
        log::debug!("exec: {}", stmt.text());
        self.graph.run(stmt.into_query()).await?;
        Ok(())
    }

    /// Run setup statements such as `CREATE INDEX` / `CREATE CONSTRAINT`
    /// in order, stopping at the first failure.
    pub async fn bootstrap<S: AsRef<str>>(&self, statements: &[S]) -> Result<(), MapError> {
        for s in statements {
            self.exec(Statement::new(s.as_ref())).await?;
        }
        Ok(())
    }

    /// Execute a statement and pass every row to `transform`.
    ///
    /// The first error from `transform` ends the call.
    pub async fn query<T, F>(&self, stmt: impl Into<Statement>, mut transform: F) -> Result<Vec<T>, MapError>
    where
        F: FnMut(&Row) -> Result<T, MapError>,
    {
        let rows = self.fetch_rows(stmt.into()).await?;
        rows.iter().map(&mut transform).collect()
    }

    /// Execute a statement and pass its first row, if any, to `transform`.
    pub async fn query_single<T, F>(&self, stmt: impl Into<Statement>, transform: F) -> Result<Option<T>, MapError>
    where
        F: FnOnce(&Row) -> Result<T, MapError>,
    {
        let stmt = stmt.into();
        log::debug!("query_single: {}", stmt.text());
        let mut stream = self.graph.execute(stmt.into_query()).await?;
        match stream.next().await? {
            Some(row) => Ok(Some(transform(&row)?)),
            None => Ok(None),
        }
    }

    /// Read the first row, converted through `projection`.
    ///
    /// `Ok(None)` means no row matched; it is not an error.
    pub async fn read_single_row(
        &self,
        stmt: impl Into<Statement>,
        projection: &Projection,
    ) -> Result<Option<ConvertedRow>, MapError> {
        let converted = self
            .query_single(stmt, |row| convert_single(Some(&projection.row(row)), projection.shapes()))
            .await?;
        Ok(converted.flatten())
    }

    /// Read every row, converted through `projection`.
    ///
    /// Fails on the first row that cannot be converted and returns none of
    /// the rows converted before it.
    pub async fn read_rows(
        &self,
        stmt: impl Into<Statement>,
        projection: &Projection,
    ) -> Result<Vec<ConvertedRow>, MapError> {
        let rows = self.fetch_rows(stmt.into()).await?;
        convert_many(rows.iter().map(|row| projection.row(row)), projection.shapes())
    }

    /// Read the first row straight into a tuple.
    ///
    /// ```rust,no_run
    /// # use neomap::prelude::*;
    /// # async fn example(client: &Client) -> Result<(), MapError> {
    /// let count: Option<(i64,)> = client
    ///     .read_single_as(statement("MATCH (n) RETURN count(n) AS c"), ["c"])
    ///     .await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn read_single_as<T: FromConvertedRow>(
        &self,
        stmt: impl Into<Statement>,
        keys: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Option<T>, MapError> {
        let projection = Projection::of::<T>(keys);
        self.read_single_row(stmt, &projection)
            .await?
            .map(ConvertedRow::extract)
            .transpose()
    }

    /// Read every row straight into tuples.
    pub async fn read_rows_as<T: FromConvertedRow>(
        &self,
        stmt: impl Into<Statement>,
        keys: impl IntoIterator<Item = impl Into<String>>,
    ) -> Result<Vec<T>, MapError> {
        let projection = Projection::of::<T>(keys);
        self.read_rows(stmt, &projection)
            .await?
            .into_iter()
            .map(ConvertedRow::extract)
            .collect()
    }

    /// Execute a statement and convert rows lazily as they arrive.
    pub async fn stream_rows(
        &self,
        stmt: impl Into<Statement>,
        projection: Projection,
    ) -> Result<ShapedStream, MapError> {
        use futures::TryStreamExt;
        let stmt = stmt.into();
        log::debug!("stream_rows: {}", stmt.text());
        let detached = self.graph.execute(stmt.into_query()).await?;
        let stream = detached.into_stream().into_stream();
        Ok(ShapedStream::new(stream, projection))
    }

    /// Release the client. Pooled connections close once every clone of
    /// the underlying graph is gone.
    pub fn close(self) {
        drop(self.graph);
    }

    async fn fetch_rows(&self, stmt: Statement) -> Result<Vec<Row>, MapError> {
        log::debug!("query: {}", stmt.text());
        let mut stream = self.graph.execute(stmt.into_query()).await?;
        let mut out = Vec::new();
        while let Some(row) = stream.next().await? {
            out.push(row);
        }
        Ok(out)
    }
}
