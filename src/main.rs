use clap::Parser;
use pronote::cli::{
    handle_colors, handle_delete, handle_edit, handle_favorite, handle_list, handle_new,
    handle_search, handle_show, Cli, Commands, EditArgs, NewArgs,
};
use pronote::StoreConfig;
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = StoreConfig::at(&cli.root);

    let result = match cli.command {
        Commands::New {
            title,
            content,
            stdin,
            color,
            favorite,
            json,
        } => handle_new(
            &config,
            NewArgs {
                title,
                content,
                stdin,
                color,
                favorite,
                json,
            },
        ),
        Commands::List { favorites, json } => handle_list(&config, favorites, json),
        Commands::Show { id, json } => handle_show(&config, id, json),
        Commands::Edit {
            id,
            title,
            content,
            stdin,
            color,
            json,
        } => handle_edit(
            &config,
            EditArgs {
                id,
                title,
                content,
                stdin,
                color,
                json,
            },
        ),
        Commands::Favorite { id } => handle_favorite(&config, id),
        Commands::Delete { id, force } => handle_delete(&config, id, force),
        Commands::Search { query, json } => handle_search(&config, query, json),
        Commands::Colors => handle_colors(),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
