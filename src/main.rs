use clap::Parser;
use line_scout::cli::{Cli, Commands};
use line_scout::config::Config;

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load(&cli.config).unwrap_or_else(|e| {
        eprintln!("Warning: Could not load config from {}: {}", cli.config, e);
        eprintln!("Using default configuration");
        toml::from_str(include_str!("../config.toml.example")).expect("Invalid default config")
    });

    line_scout::telemetry::init_logging(&config.telemetry.log_level)?;

    match cli.command {
        Commands::Analyze(args) => {
            args.execute(&config)?;
        }
        Commands::Chart(args) => {
            args.execute(&config)?;
        }
        Commands::Config => {
            println!("Current configuration:");
            println!(
                "  Quotes file: {}",
                config
                    .input
                    .quotes_file
                    .as_deref()
                    .map_or("(none)".to_string(), |p| p.display().to_string())
            );
            println!("  Spread buffer: {}", config.analysis.spread_buffer);
            println!("  Total buffer: {}", config.analysis.total_buffer);
            println!("  Log level: {}", config.telemetry.log_level);
        }
    }

    Ok(())
}
