//! The export flow: load, list, ask, extract, filter, and dispatch to a sink.

use crate::exporter;
use crate::importer;
use crate::messages::{self, Message};
use crate::prompt::{self, OutputMode};
use crate::timefmt::TimeFormat;
use chrono_tz::Tz;
use eyre::{Context, Result};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

/// Configuration required to run the export.
/// This decouples the logic from how the arguments were parsed (CLI/Config file).
pub struct ExportConfig {
    pub store_path: PathBuf,
    pub timezone: Tz,
    pub project_tag: String,
}

/// The main entry point for the business logic.
/// Lists the chats, collects the user's request, and runs the pipeline.
pub fn run(config: ExportConfig) -> Result<()> {
    let store = importer::load_store(&config.store_path)?;
    let timefmt = TimeFormat::new(config.timezone);

    let chats: Vec<(String, String)> = store
        .chat
        .keys()
        .map(|key| Ok((key.clone(), timefmt.to_display(key)?)))
        .collect::<Result<_>>()?;

    if chats.is_empty() {
        println!("No chats found in {}", config.store_path.display());
        return Ok(());
    }

    println!("Available chats:");
    for (number, (_, display)) in chats.iter().enumerate() {
        println!("{}. {}", number + 1, display);
    }

    let stdin = io::stdin();
    let request = prompt::collect_request(&mut stdin.lock(), &mut io::stdout(), chats.len())?;

    let (key, display) = &chats[request.index];
    let extracted = messages::extract_messages(&store, key, request.include_context);
    let filtered = messages::filter_messages(extracted, request.include_user);

    match request.output {
        OutputMode::Terminal => print_messages(display, &filtered),
        OutputMode::MarkdownFile => {
            let sortable = timefmt.to_sortable_date(key)?;
            let filename = exporter::output_filename(display);
            let file = File::create(&filename)
                .wrap_err_with(|| format!("Failed to create: {filename}"))?;
            let mut writer = BufWriter::new(file);
            exporter::write_chat_markdown(
                &mut writer,
                &filtered,
                &config.project_tag,
                &sortable,
                display,
            )
            .wrap_err("Failed to write chat markdown")?;
            writer.flush().wrap_err("Failed to flush markdown file")?;
            println!("\nChat saved to: {filename}");
        }
    }

    Ok(())
}

fn print_messages(display_date: &str, messages: &[Message]) {
    println!("\nChat messages from {display_date}:\n");
    for message in messages {
        println!("ROLE: {}", message.role.label());
        println!("TEXT: {}", message.text);
        if !message.context.is_empty() {
            println!("\nATTACHED FILES:");
            for path in &message.context {
                println!("- {path}");
            }
        }
        println!("---\n");
    }
}
