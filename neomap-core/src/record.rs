
//! Record sources for the row transformer.
//!
//! Anything that can list one row's values in order is a [`Record`]:
//! hand-built `Value` rows, raw `BoltType` lists from the driver, or the
//! facade's keyed view over a `neo4rs::Row`.

use neo4rs::BoltType;

use crate::error::MapError;
use crate::traits::Record;
use crate::value::Value;

impl Record for [Value] {
    fn values(&self) -> Result<Vec<Value>, MapError> {
        Ok(self.to_vec())
    }
}

impl Record for Vec<Value> {
    fn values(&self) -> Result<Vec<Value>, MapError> {
        Ok(self.clone())
    }
}

impl Record for [BoltType] {
    fn values(&self) -> Result<Vec<Value>, MapError> {
        self.iter().cloned().map(Value::try_from).collect()
    }
}

impl Record for Vec<BoltType> {
    fn values(&self) -> Result<Vec<Value>, MapError> {
        self.as_slice().values()
    }
}

impl<R: Record + ?Sized> Record for &R {
    fn values(&self) -> Result<Vec<Value>, MapError> {
        (**self).values()
    }
}
