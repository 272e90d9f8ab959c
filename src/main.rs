use std::io::{self, Write};

use clap::Parser;
use tracing_subscriber::EnvFilter;
use whereami_client::cli::Args;
use whereami_client::driver;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();

    let mut stdout = io::stdout().lock();
    if let Err(err) = driver::run(&args.server_address, args.count, &mut stdout).await {
        let _ = stdout.flush();
        let mut stderr = io::stderr().lock();
        let _ = err.report(&mut stderr);
        std::process::exit(1);
    }
}
