// src/main.rs
use anyhow::Result;
use clap::Parser;
use zlink::Args;
use zlink::cli::init_logging;

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);
    zlink::run(args)
}
