use anyhow::Context;

use sheetd_server::{ServerConfig, SheetServer};
use sheetd_store::{DatasetStore, JsonFileStore};

use crate::cli::{Cli, Command, ServeArgs, ShowArgs};

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => serve(args),
        Command::Show(args) => show(args),
    }
}

fn serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match &args.config {
        Some(path) => ServerConfig::from_file(path)
            .with_context(|| format!("loading config from {}", path.display()))?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(data_file) = args.data_file {
        config.data_path = data_file;
    }

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()
        .context("building tokio runtime")?;
    runtime
        .block_on(SheetServer::new(config).serve())
        .context("server exited with error")?;
    Ok(())
}

fn show(args: ShowArgs) -> anyhow::Result<()> {
    let store = JsonFileStore::new(&args.data_file);
    let dataset = store
        .load()
        .with_context(|| format!("loading dataset from {}", args.data_file.display()))?;
    println!("{}", serde_json::to_string_pretty(&dataset)?);
    Ok(())
}
