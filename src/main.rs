use anyhow::Context;
use clap::Parser;
use datatable_search::adapters::loader::{load_records, load_request};
use datatable_search::utils::{logger, validation::Validate};
use datatable_search::{CliConfig, DatatableSearch, SearchError, SearchOptions};

fn run(config: &CliConfig) -> anyhow::Result<String> {
    let options = match &config.config {
        Some(path) => SearchOptions::from_file(path)
            .with_context(|| format!("failed to load options from {}", path))?,
        None => SearchOptions::default(),
    };
    options.validate()?;
    tracing::debug!("Search options: {:?}", options);

    let records = load_records(&config.records)
        .with_context(|| format!("failed to load records from {}", config.records))?;
    let request = load_request(&config.request)
        .with_context(|| format!("failed to load request from {}", config.request))?;

    let draw = request.draw;
    let result = DatatableSearch::new(options).search(records, &request)?;
    tracing::info!(
        "Returning {} row(s): {} filtered of {} total",
        result.rows.len(),
        result.filtered_count,
        result.total_count
    );

    Ok(serde_json::to_string_pretty(&result.into_response(draw))?)
}

fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose);

    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    if let Err(e) = config.validate() {
        tracing::error!("Configuration validation failed: {}", e);
        eprintln!("❌ {}", e);
        eprintln!("💡 {}", e.recovery_suggestion());
        std::process::exit(1);
    }

    match run(&config) {
        Ok(body) => println!("{}", body),
        Err(e) => {
            tracing::error!("Search failed: {:#}", e);
            eprintln!("❌ {:#}", e);

            let search_error = e.downcast_ref::<SearchError>();
            if let Some(search_error) = search_error {
                eprintln!("💡 {}", search_error.recovery_suggestion());
            }

            // 2 for a bad request body, 1 for everything else
            let exit_code = match search_error {
                Some(err) if err.is_request_error() => 2,
                _ => 1,
            };
            std::process::exit(exit_code);
        }
    }
}
