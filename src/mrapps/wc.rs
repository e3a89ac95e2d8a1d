use std::pin::Pin;

use crate::mr::ReduceApp;

pub struct WC;

impl ReduceApp for WC {
    fn reduce(&self, _key: String, values: Vec<String>) -> Pin<Box<dyn Future<Output=Result<String, anyhow::Error>> + 'static>> {
        Box::pin(async move {
            Ok(values.len().to_string())
        })
    }
}
