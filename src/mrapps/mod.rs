mod add;
mod wc;

use crate::mr::ReduceApp;

pub fn get_app(app: String) -> Result<Box<dyn ReduceApp>, anyhow::Error> {
    match app.as_str() {
        "wc" => Ok(Box::new(wc::WC)),
        "add" => Ok(Box::new(add::Add)),
        _ => Err(anyhow::anyhow!("Unknown app: {}", app)),
    }
}
