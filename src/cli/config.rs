use clap::{Parser, Subcommand};
use serde::{Deserialize, Serialize};

pub const DEFAULT_CONFIG_PATH: &str = "ui-elements.yaml";

// ============================================================================
// CLI Argument Parsing (clap derive)
// ============================================================================

#[derive(Parser, Debug)]
#[command(
    name = "ui-elements",
    version,
    about = "Extract, classify and prioritize UI elements from UI-Automator dumps"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Verbosity level (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Path to config file (default: ui-elements.yaml in current dir)
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Append a JSONL trace event per run to this file
    #[arg(long, global = true)]
    pub trace: Option<String>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Process a dump into a priority-sorted element list
    Process {
        /// JSON or XML dump to process
        #[arg(long)]
        input: String,

        /// Input format: auto, json or xml
        #[arg(long, default_value = "auto")]
        format: String,

        /// Report style: json or summary (default from config, else json)
        #[arg(long)]
        report: Option<String>,

        /// Output file path (default: stdout)
        #[arg(short, long)]
        output: Option<String>,
    },

    /// Check that a dump contains usable elements
    Validate {
        /// JSON or XML dump to check
        #[arg(long)]
        input: String,

        /// Input format: auto, json or xml
        #[arg(long, default_value = "auto")]
        format: String,
    },

    /// Export the element table as CSV
    Export {
        /// JSON or XML dump to export
        #[arg(long)]
        input: String,

        /// Input format: auto, json or xml
        #[arg(long, default_value = "auto")]
        format: String,

        /// CSV file path (default: config export.output, else stdout)
        #[arg(short, long)]
        output: Option<String>,
    },
}

// ============================================================================
// Config File Model (optional YAML)
// ============================================================================

/// Optional YAML config file: `ui-elements.yaml`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default)]
    pub process: ProcessConfig,
    #[serde(default)]
    pub export: ExportConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProcessConfig {
    /// Pretty-print the JSON response
    #[serde(default = "default_true")]
    pub pretty: bool,

    #[serde(default = "default_json")]
    pub report: String,
}

impl Default for ProcessConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            report: "json".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ExportConfig {
    pub output: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct TraceConfig {
    pub path: Option<String>,
}

// Serde default helpers
fn default_true() -> bool { true }
fn default_json() -> String { "json".to_string() }

// ============================================================================
// Config File Loading
// ============================================================================

/// Load config from a YAML file. Returns defaults if file is missing or malformed.
pub fn load_config(path: Option<&str>) -> AppConfig {
    let config_path = path.unwrap_or(DEFAULT_CONFIG_PATH);
    match std::fs::read_to_string(config_path) {
        Ok(content) => match serde_yaml::from_str(&content) {
            Ok(config) => config,
            Err(e) => {
                tracing::warn!(path = config_path, error = %e, "malformed config, using defaults");
                AppConfig::default()
            }
        },
        Err(_) => AppConfig::default(),
    }
}

// ============================================================================
// Logging
// ============================================================================

/// Default log filter for a `-v` count. `RUST_LOG` overrides it.
pub fn log_level(verbose: u8) -> &'static str {
    match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    }
}

/// Install the stderr fmt subscriber.
pub fn init_logging(verbose: u8) {
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(log_level(verbose)));

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}
