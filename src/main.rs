use clap::Parser;
use games_admin::{
    api::GamesClient,
    cli::{Cli, Commands},
    config::Config,
    games::{AppId, GamePatch, GameRecord},
    Error, Result,
};

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let mut config = Config::load()?;

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { config.log_level.as_str() };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(log_level)).init();
    log::debug!("Configuration loaded");

    // Command-line overrides are not persisted
    if let Some(base_url) = cli.base_url {
        config.base_url = base_url;
    }
    if let Some(node) = cli.node {
        config.node = node;
    }
    config.validate()?;

    let client = GamesClient::new(&config)?;

    match cli.command {
        None | Some(Commands::Gui) => run_gui(client),

        Some(Commands::List) => match client.list_games().await {
            Ok(games) => {
                if games.is_empty() {
                    println!("No games found");
                } else {
                    print_table(&games);
                }
            }
            Err(e) => fail("Failed to list games", e),
        },

        Some(Commands::Add(args)) => match args.into_form().validate() {
            Ok(record) => match client.create_game(&record).await {
                Ok(()) => println!("✓ Created game {}", record.app_id),
                Err(e) => fail("Failed to create game", e),
            },
            Err(errors) => fail("Invalid game", Error::Validation(errors)),
        },

        Some(Commands::Update { app_id, fields }) => {
            let Some(app_id) = AppId::parse(&app_id) else {
                eprintln!("Error: App ID is required");
                std::process::exit(1);
            };
            let patch = GamePatch::from(fields);
            if patch.is_empty() {
                eprintln!("Error: Specify at least one field to update");
                std::process::exit(1);
            }
            if let Err(errors) = patch.validate() {
                fail("Invalid update", Error::Validation(errors));
            }

            match client.patch_game(&app_id, &patch).await {
                Ok(()) => println!("✓ Updated game {}", app_id),
                Err(e) => fail("Failed to update game", e),
            }
        }

        Some(Commands::Delete { app_id }) => {
            let Some(app_id) = AppId::parse(&app_id) else {
                eprintln!("Error: App ID is required");
                std::process::exit(1);
            };

            match client.delete_game(&app_id).await {
                Ok(()) => println!("✓ Deleted game {}", app_id),
                Err(e) => fail("Failed to delete game", e),
            }
        }

        Some(Commands::Status) => {
            println!("Games Admin Status");
            println!("==================");
            println!();
            println!("Version: {}", env!("CARGO_PKG_VERSION"));
            println!("Collection: {}", client.collection_url()?);
            println!("Log Level: {}", config.log_level);
            match config.request_timeout_secs {
                Some(secs) => println!("Request Timeout: {}s", secs),
                None => println!("Request Timeout: transport default"),
            }
            println!();

            if let Ok(config_path) = Config::config_path() {
                println!("Config Path: {:?}", config_path);
            }
        }
    }

    Ok(())
}

fn run_gui(client: GamesClient) {
    use games_admin::gui::GamesApp;

    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size([1200.0, 700.0])
            .with_min_inner_size([800.0, 400.0])
            .with_title("Games Admin"),
        ..Default::default()
    };

    if let Err(e) = eframe::run_native(
        "Games Admin",
        native_options,
        Box::new(|cc| Ok(Box::new(GamesApp::new(cc, client)))),
    ) {
        eprintln!("Failed to run GUI: {}", e);
        std::process::exit(1);
    }
}

fn fail(context: &str, error: Error) -> ! {
    log::error!("{}: {}", context, error);
    eprintln!("{}: {}", context, error);
    std::process::exit(1);
}

fn print_table(games: &[GameRecord]) {
    let rows: Vec<[String; 6]> = games
        .iter()
        .map(|g| {
            [
                g.app_id.to_string(),
                g.name.clone(),
                g.release_date.clone(),
                g.price.to_string(),
                g.developers.clone(),
                g.publishers.clone(),
            ]
        })
        .collect();

    let headers = ["App ID", "Name", "Release Date", "Price", "Developers", "Publishers"];
    let mut widths = headers.map(|h| h.chars().count());
    for row in &rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.chars().count());
        }
    }

    let line = |cells: &[String]| {
        cells
            .iter()
            .zip(widths)
            .map(|(cell, width)| format!("{:<width$}", cell, width = width))
            .collect::<Vec<_>>()
            .join("  ")
    };

    println!("{}", line(headers.map(String::from).as_slice()));
    println!("{}", widths.map(|w| "-".repeat(w)).join("  "));
    for row in &rows {
        println!("{}", line(row.as_slice()));
    }
}
