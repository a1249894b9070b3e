//! Parameterized Cypher statements.

use neo4rs::{BoltType, Query};

/// A Cypher statement plus its named parameters, wrapping [`neo4rs::Query`].
///
/// # Examples
///
/// ```rust
/// # use neomap::statement::Statement;
/// let stmt = Statement::new("MATCH (n:Document {ID: $id}) RETURN n")
///     .param("id", "doc");
/// assert_eq!(stmt.text(), "MATCH (n:Document {ID: $id}) RETURN n");
/// ```
pub struct Statement {
    text: String,
    inner: Query,
}

impl Statement {
    /// Create a new statement from Cypher text.
    pub fn new(text: impl Into<String>) -> Self {
        let text: String = text.into();
        let inner = neo4rs::query(&text);
        Self { text, inner }
    }

    /// Bind a named parameter. Accepts any type that converts to `BoltType`.
    pub fn param(mut self, key: impl Into<String>, value: impl Into<BoltType>) -> Self {
        let k: String = key.into();
        self.inner = self.inner.param(&k, value.into());
        self
    }

    /// Bind every `(name, value)` pair, e.g. from a `HashMap`.
    ///
    /// ```rust
    /// # use std::collections::HashMap;
    /// # use neomap::statement::Statement;
    /// let params: HashMap<&str, &str> = [("documentID", "doc"), ("agent", "user")].into();
    /// let stmt = Statement::new("MERGE (n:Document {ID: $documentID})").params(params);
    /// ```
    pub fn params<K, V>(mut self, params: impl IntoIterator<Item = (K, V)>) -> Self
    where
        K: Into<String>,
        V: Into<BoltType>,
    {
        for (k, v) in params {
            self = self.param(k, v);
        }
        self
    }

    /// The Cypher text, as given.
    pub fn text(&self) -> &str {
        &self.text
    }

    pub(crate) fn into_query(self) -> Query {
        self.inner
    }
}

impl From<&str> for Statement {
    fn from(text: &str) -> Self {
        Statement::new(text)
    }
}

impl From<String> for Statement {
    fn from(text: String) -> Self {
        Statement::new(text)
    }
}

/// Convenience constructor — equivalent to [`Statement::new`].
pub fn statement(text: impl Into<String>) -> Statement {
    Statement::new(text)
}
