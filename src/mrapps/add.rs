use std::pin::Pin;

use anyhow::Context as _;

use crate::mr::ReduceApp;

pub struct Add;

impl ReduceApp for Add {
    fn reduce(&self, key: String, values: Vec<String>) -> Pin<Box<dyn Future<Output=Result<String, anyhow::Error>> + 'static>> {
        Box::pin(async move {
            let mut sum: i64 = 0;
            for value in values {
                sum += value.parse::<i64>()
                    .with_context(|| format!("non-integer value for key {}", key))?;
            }
            Ok(sum.to_string())
        })
    }
}
