use bear_tools::application::{ConvertOptions, ConvertService};
use bear_tools::cli::{format_note, Cli, Commands};
use bear_tools::domain::TitlePolicy;
use bear_tools::error::BearError;
use bear_tools::infrastructure::{Config, DocumentSource};
use clap::Parser;
use std::str::FromStr;

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), BearError> {
    match cli.command {
        Some(Commands::Json {
            file,
            pretty,
            compact,
            title_policy,
            config,
        }) => {
            let title_policy = title_policy
                .as_deref()
                .map(TitlePolicy::from_str)
                .transpose()
                .map_err(BearError::Config)?;

            let pretty = match (pretty, compact) {
                (true, _) => Some(true),
                (_, true) => Some(false),
                _ => None,
            };

            let config = Config::discover(config.as_deref())?;
            let options = ConvertOptions::from_config(&config, title_policy, pretty);
            log::debug!("Converting with {:?}", options);

            let service = ConvertService::new(options);
            let note = service.extract(&DocumentSource::from_arg(file))?;

            println!("{}", format_note(&note, options.pretty)?);
            Ok(())
        }
        None => {
            println!("bear-tools - Tools for plain-text notes");
            println!("Usage: bear-tools json [FILE] < note.md");
            println!("Use --help for usage information");
            Ok(())
        }
    }
}
