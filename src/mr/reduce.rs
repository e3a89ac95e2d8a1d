use std::collections::HashMap;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use tokio::fs::File;
use tokio::io::AsyncWriteExt as _;

use super::{KeyValue, ReduceApp};

/// Runs one reduce task: reads the intermediate file each map task produced
/// for this partition, groups all values by key, calls the app's reduce
/// once per distinct key, and writes the results to `out_file` as a stream
/// of JSON records. Any read, decode or write failure aborts the whole
/// invocation; the caller is expected to rerun it from scratch.
pub async fn run<N>(
    job_name: &str,
    reduce_task: usize,
    out_file: impl AsRef<Path>,
    n_map: usize,
    reduce_name: N,
    app: &dyn ReduceApp,
) -> Result<(), anyhow::Error>
where
    N: Fn(&str, usize, usize) -> PathBuf,
{
    let mut intermediate = vec![];
    for map_task in 0..n_map {
        let path = reduce_name(job_name, map_task, reduce_task);
        let contents = tokio::fs::read_to_string(&path).await
            .with_context(|| format!("reading intermediate file {}", path.display()))?;
        for kv in serde_json::Deserializer::from_str(&contents).into_iter::<KeyValue>() {
            let kv = kv.with_context(|| format!("decoding intermediate file {}", path.display()))?;
            intermediate.push(kv);
        }
    }
    log::debug!("reduce task {}: {} records from {} map tasks", reduce_task, intermediate.len(), n_map);

    let mut groups: HashMap<String, Vec<String>> = HashMap::new();
    for kv in intermediate {
        groups.entry(kv.key).or_default().push(kv.value);
    }

    let out_file = out_file.as_ref();
    let mut out = File::create(out_file).await
        .with_context(|| format!("creating output file {}", out_file.display()))?;
    for (key, values) in groups {
        let value = app.reduce(key.clone(), values).await?;
        let mut line = serde_json::to_string(&KeyValue { key, value })?;
        line.push('\n');
        out.write_all(line.as_bytes()).await
            .with_context(|| format!("writing output file {}", out_file.display()))?;
    }
    out.flush().await
        .with_context(|| format!("flushing output file {}", out_file.display()))?;

    log::info!("reduce task {} done", reduce_task);
    Ok(())
}
