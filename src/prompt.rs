//! Console adapter: turns the interactive question sequence into a typed request.
//!
//! The core pipeline never touches stdin. Everything it needs is collected here
//! into an [`ExportRequest`] up front, so a bad answer aborts before any output
//! is produced.

use eyre::{Context, Result};
use std::io::{BufRead, Write};
use thiserror::Error;

/// Expected user-input mistakes. Reported as a single friendly line at the top
/// level, not as a fatal error report.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PromptError {
    #[error("Invalid chat selection")]
    Selection,
    #[error("Invalid output format selection")]
    OutputMode,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputMode {
    Terminal,
    MarkdownFile,
}

/// Everything the export pipeline needs from the user, fully validated.
#[derive(Debug, Clone, Copy)]
pub struct ExportRequest {
    /// Zero-based index into the chat list, already bounds-checked.
    pub index: usize,
    pub include_context: bool,
    pub include_user: bool,
    pub output: OutputMode,
}

/// Parse a 1-based selection against the list length.
pub fn parse_selection(input: &str, chat_count: usize) -> Result<usize, PromptError> {
    let number: usize = input.trim().parse().map_err(|_| PromptError::Selection)?;
    if number == 0 || number > chat_count {
        return Err(PromptError::Selection);
    }
    Ok(number - 1)
}

/// Explicit yes/no parsing at the boundary. Only the fixed affirmative tokens
/// count as yes; anything else, blank input included, is no.
pub fn parse_yes_no(input: &str) -> bool {
    matches!(input.trim().to_ascii_lowercase().as_str(), "yes" | "y")
}

pub fn parse_output_mode(input: &str) -> Result<OutputMode, PromptError> {
    match input.trim() {
        "1" => Ok(OutputMode::Terminal),
        "2" => Ok(OutputMode::MarkdownFile),
        _ => Err(PromptError::OutputMode),
    }
}

fn ask<R: BufRead, W: Write>(input: &mut R, output: &mut W, question: &str) -> Result<String> {
    write!(output, "{question}").wrap_err("Failed to write prompt")?;
    output.flush().wrap_err("Failed to flush prompt")?;
    let mut line = String::new();
    input
        .read_line(&mut line)
        .wrap_err("Failed to read console input")?;
    Ok(line)
}

/// Ask the four questions in order and assemble the request.
///
/// Generic over the reader and writer so tests can drive it with in-memory
/// buffers instead of a terminal.
pub fn collect_request<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    chat_count: usize,
) -> Result<ExportRequest> {
    let index = parse_selection(&ask(input, output, "\nSelect a chat number: ")?, chat_count)?;
    let include_context = parse_yes_no(&ask(
        input,
        output,
        "Include attached context files? (yes/no): ",
    )?);
    let include_user = parse_yes_no(&ask(input, output, "Include user messages? (yes/no): ")?);
    let mode = parse_output_mode(&ask(
        input,
        output,
        "Choose output format (1 - terminal, 2 - markdown file): ",
    )?)?;

    Ok(ExportRequest {
        index,
        include_context,
        include_user,
        output: mode,
    })
}
