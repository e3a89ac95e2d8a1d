use std::pin::Pin;

use serde::{Deserialize, Serialize};

pub mod naming;
pub mod reduce;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyValue {
    pub key: String,
    pub value: String,
}

pub trait ReduceApp {
    fn reduce(&self, key: String, values: Vec<String>) -> Pin<Box<dyn Future<Output=Result<String, anyhow::Error>> + 'static>>;
}
