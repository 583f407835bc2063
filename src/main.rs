use clap::Parser;
use cody_chat_export::process;
use cody_chat_export::prompt::PromptError;
use eyre::{Context, Result, eyre};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_TIMEZONE: &str = "Asia/Yekaterinburg";
const DEFAULT_PROJECT_TAG: &str = "cody_chat";

/// Export Sourcegraph Cody AI chat history to Markdown files.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Path to the Cody chat history JSON export.
    /// Defaults to Documents/chat.json if not set in config.
    #[arg(long, value_name = "PATH")]
    file: Option<PathBuf>,

    /// Path to a specific configuration file.
    /// Defaults to $XDG_CONFIG_HOME/cody-chat-export/config.toml
    #[arg(long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// IANA timezone for display dates (e.g. "Asia/Yekaterinburg").
    #[arg(long, value_name = "ZONE")]
    timezone: Option<String>,
}

#[derive(Deserialize, Default)]
struct FileConfig {
    file_path: Option<PathBuf>,
    timezone: Option<String>,
    project_tag: Option<String>,
}

fn default_store_path() -> PathBuf {
    dirs::document_dir()
        .map(|d| d.join("chat.json"))
        .unwrap_or_else(|| PathBuf::from("chat.json"))
}

fn load_file_config(explicit_path: Option<&Path>) -> Result<FileConfig> {
    let path = if let Some(p) = explicit_path {
        if !p.exists() {
            return Err(eyre!("Config file not found: {}", p.display()));
        }
        Some(p.to_path_buf())
    } else {
        // Search: XDG/OS config dir, then nothing
        dirs::config_dir()
            .map(|d| d.join("cody-chat-export/config.toml"))
            .filter(|p| p.exists())
    };

    match path {
        None => Ok(FileConfig::default()),
        Some(p) => {
            let content = fs::read_to_string(&p)
                .wrap_err_with(|| format!("Failed to read config: {}", p.display()))?;
            toml::from_str(&content)
                .wrap_err_with(|| format!("Failed to parse config: {}", p.display()))
        }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // 1. Load config file (CLI path > default path)
    let file_cfg = load_file_config(cli.config.as_deref())?;

    // 2. Resolve store path (CLI > Config > Default)
    let store_path = cli
        .file
        .or(file_cfg.file_path)
        .unwrap_or_else(default_store_path);

    if !store_path.exists() {
        return Err(eyre!(
            "Chat export not found at: {}\nUse --file to specify the path manually.",
            store_path.display()
        ));
    }

    // 3. Resolve timezone (CLI > Config > Default)
    let zone_name = cli
        .timezone
        .or(file_cfg.timezone)
        .unwrap_or_else(|| DEFAULT_TIMEZONE.to_string());
    let timezone = zone_name
        .parse()
        .map_err(|_| eyre!("Unknown timezone: {}", zone_name))?;

    let project_tag = file_cfg
        .project_tag
        .unwrap_or_else(|| DEFAULT_PROJECT_TAG.to_string());

    let config = process::ExportConfig {
        store_path,
        timezone,
        project_tag,
    };

    // Mistyped selections are expected user input, not crashes: report them
    // as a single line and exit cleanly.
    match process::run(config) {
        Err(report) if report.downcast_ref::<PromptError>().is_some() => {
            eprintln!("{report}");
            Ok(())
        }
        result => result,
    }
}
