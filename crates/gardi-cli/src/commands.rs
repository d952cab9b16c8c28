use colored::Colorize;

use gardi_server::{Server, ServerConfig};
use gardi_store::{Collection, DocumentStore, DocumentStoreExt, FsDocumentStore};

use crate::cli::*;

pub fn run_command(cli: Cli) -> anyhow::Result<()> {
    match cli.command {
        Command::Serve(args) => cmd_serve(args),
        Command::List(args) => cmd_list(args),
        Command::Show(args) => cmd_show(args),
    }
}

fn cmd_serve(args: ServeArgs) -> anyhow::Result<()> {
    let mut config = match args.config {
        Some(path) => ServerConfig::load(&path)?,
        None => ServerConfig::default(),
    };
    if let Some(bind) = args.bind {
        config.bind_addr = bind;
    }
    if let Some(root) = args.data_root {
        config.data_root = root;
    }

    println!(
        "{} gardi server on {} (data root: {})",
        "✓".green().bold(),
        config.bind_addr.to_string().bold(),
        config.data_root.display()
    );

    let runtime = tokio::runtime::Builder::new_multi_thread()
        .enable_all()
        .build()?;
    runtime.block_on(Server::new(config).serve())?;
    Ok(())
}

fn cmd_list(args: ListArgs) -> anyhow::Result<()> {
    let collection: Collection = args.collection.parse()?;
    let store = FsDocumentStore::open(args.data_root)?;
    let ids = store.list(collection, &args.user)?;

    if ids.is_empty() {
        println!("No documents under {}/{}.", collection, args.user.bold());
        return Ok(());
    }
    for id in &ids {
        println!("{id}");
    }
    println!(
        "{} {} document(s) under {}/{}",
        "✓".green(),
        ids.len().to_string().bold(),
        collection,
        args.user.bold()
    );
    Ok(())
}

fn cmd_show(args: ShowArgs) -> anyhow::Result<()> {
    let collection: Collection = args.collection.parse()?;
    let store = FsDocumentStore::open(args.data_root)?;
    let document: serde_json::Value = store.get(collection, &args.user, &args.id)?;
    println!("{}", serde_json::to_string_pretty(&document)?);
    Ok(())
}
