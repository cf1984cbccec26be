use crate::utils::error::Result;
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
use clap::Parser;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize, Parser)]
#[command(name = "datatable-search")]
#[command(about = "Run a DataTables server-side search over a local records file")]
pub struct CliConfig {
    #[arg(long, help = "Records file: a JSON array of objects or a CSV with a header row")]
    pub records: String,

    #[arg(long, help = "JSON file holding the DataTables request body")]
    pub request: String,

    #[arg(long, help = "Optional TOML file with search options")]
    pub config: Option<String>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        validate_path("records", &self.records)?;
        validate_file_extension("records", &self.records, &["json", "csv"])?;
        validate_path("request", &self.request)?;
        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        Ok(())
    }
}
