use clap::{Parser, Subcommand};
use log::debug;
use resep_pintar::render::{HtmlRenderer, Renderer, TerminalReporter, TextRenderer};
use resep_pintar::{build_pipeline, AppConfig, SearchOutcome};
use std::path::{Path, PathBuf};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "resep-pintar")]
#[command(about = "Cari resep dari bahan yang Anda miliki", long_about = None)]
struct Cli {
    /// Render as a standalone HTML document
    #[arg(long, global = true, conflicts_with = "json")]
    html: bool,

    /// Print search results as JSON
    #[arg(long, global = true)]
    json: bool,

    /// Path to a TOML configuration file (default: ./config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Show the home page
    Home,
    /// Show information about the application
    About,
    /// Search recipes by ingredients, e.g. "daging sapi, bawang putih"
    Search {
        /// Comma-separated ingredients in Indonesian
        ingredients: String,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    let default_level = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_level))
        .init();

    let renderer: Box<dyn Renderer> = if cli.html {
        Box::new(HtmlRenderer)
    } else {
        Box::new(TextRenderer)
    };

    match cli.command {
        Commands::Home => {
            print!("{}", renderer.home());
            ExitCode::SUCCESS
        }
        Commands::About => {
            print!("{}", renderer.about());
            ExitCode::SUCCESS
        }
        Commands::Search { ingredients } => {
            search(cli.config.as_deref(), cli.json, renderer.as_ref(), &ingredients)
        }
    }
}

fn search(
    config_path: Option<&Path>,
    json: bool,
    renderer: &dyn Renderer,
    ingredients: &str,
) -> ExitCode {
    let config = match AppConfig::load(config_path) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("[x] Konfigurasi tidak valid: {}", e);
            return ExitCode::FAILURE;
        }
    };
    debug!("Using {} translator", config.translation.provider);

    let pipeline = match build_pipeline(&config) {
        Ok(pipeline) => pipeline,
        Err(e) => {
            eprintln!("[x] {}", e);
            return ExitCode::FAILURE;
        }
    };

    let mut reporter = TerminalReporter::new();
    let result = pipeline.run(ingredients, &mut reporter);

    if json {
        match &result {
            Ok(SearchOutcome::Found(recipes)) => match serde_json::to_string_pretty(recipes) {
                Ok(output) => println!("{}", output),
                Err(e) => {
                    eprintln!("[x] {}", e);
                    return ExitCode::FAILURE;
                }
            },
            Ok(SearchOutcome::NoMatches) => println!("[]"),
            Err(e) => eprintln!("[x] {}", e),
        }
    } else {
        print!("{}", renderer.search_results(ingredients, &result));
    }

    if result.is_ok() {
        ExitCode::SUCCESS
    } else {
        ExitCode::FAILURE
    }
}
