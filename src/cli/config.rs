use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "formwork",
    version,
    about = "HTML form serialization and binding toolkit"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: formwork.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Append a JSONL operation trace to this file
    #[arg(long, global = true)]
    pub trace: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Serialize a form document into nested JSON data
    Serialize {
        /// Path to the form document JSON
        #[arg(long)]
        form: String,

        /// Drop entries whose value is empty
        #[arg(long)]
        skip_empty: bool,

        /// Pretty-print the JSON output
        #[arg(long)]
        pretty: bool,
    },

    /// Apply nested JSON data onto a form document's element states
    Apply {
        /// Path to the form document JSON
        #[arg(long)]
        form: String,

        /// Path to the structured data JSON
        #[arg(long)]
        data: String,

        /// Write the updated document here (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Reset a form document's element states
    Reset {
        /// Path to the form document JSON
        #[arg(long)]
        form: String,

        /// Clear hidden inputs too, instead of leaving them untouched
        #[arg(long)]
        clear_hidden: bool,

        /// Write the reset document here (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Build an HTTP request descriptor from a form document
    Request {
        /// Path to the form document JSON
        #[arg(long)]
        form: String,

        /// HTTP method
        #[arg(long, default_value = "GET")]
        method: String,

        /// Target URL
        #[arg(long)]
        url: String,

        /// Drop entries whose value is empty
        #[arg(long)]
        skip_empty: bool,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `formwork.yaml`
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub serialize: SerializeConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct SerializeConfig {
    #[serde(default)]
    pub skip_empty: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TraceConfig {
    pub file: Option<String>,
}

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or("formwork.yaml");
    match std::fs::read_to_string(config_path) {
        Ok(content) => serde_yaml::from_str(&content).unwrap_or_default(),
        Err(_) => AppConfig::default(),
    }
}
