use std::path::PathBuf;

use clap::Parser;
use mapred::mr::{naming, reduce};

#[derive(Parser)]
#[command(name = "mrreduce")]
struct Args {
    app: String,
    job_name: String,
    reduce_task: usize,
    n_map: usize,
    #[arg(long)]
    out_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::fmt::init();
    let args = Args::parse();

    let app = mapred::mrapps::get_app(args.app)?;
    let out_file = args.out_file
        .unwrap_or_else(|| naming::merge_name(&args.job_name, args.reduce_task));

    reduce::run(
        &args.job_name,
        args.reduce_task,
        out_file,
        args.n_map,
        naming::reduce_name,
        app.as_ref(),
    ).await?;

    Ok(())
}
