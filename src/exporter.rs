//! Markdown document assembly: frontmatter, heading, and paired message blocks.

use crate::fences::reformat_fences;
use crate::messages::Message;
use eyre::{Context, Result};
use serde::Serialize;
use std::io::{self, Write};

#[derive(Serialize)]
struct Frontmatter<'a> {
    project: &'a str,
    date: &'a str,
}

/// Write the full Markdown document for one chat.
///
/// Messages are grouped two per dialog block in their original order (a trailing
/// unpaired message forms a lone final block), with a horizontal rule after each
/// block. Fence annotations in message text are normalized before templating.
pub fn write_chat_markdown<W: Write>(
    writer: &mut W,
    messages: &[Message],
    project_tag: &str,
    sortable_date: &str,
    display_date: &str,
) -> io::Result<()> {
    let frontmatter = Frontmatter {
        project: project_tag,
        date: sortable_date,
    };

    writeln!(writer, "---")?;
    let yaml = serde_yaml::to_string(&frontmatter).map_err(io::Error::other)?;
    write!(writer, "{yaml}")?;
    writeln!(writer, "---")?;
    writeln!(writer)?;
    writeln!(writer, "# Chat from {display_date}")?;
    writeln!(writer)?;

    for pair in messages.chunks(2) {
        for message in pair {
            writeln!(writer, "### {}", message.role.label())?;
            writeln!(writer, "{}", reformat_fences(&message.text))?;
            if !message.context.is_empty() {
                writeln!(writer)?;
                writeln!(writer, "Attached files:")?;
                for path in &message.context {
                    writeln!(writer, "- {path}")?;
                }
            }
            writeln!(writer)?;
        }
        writeln!(writer, "---")?;
        writeln!(writer)?;
    }

    Ok(())
}

/// Render the document into a single string.
pub fn render_chat_markdown(
    messages: &[Message],
    project_tag: &str,
    sortable_date: &str,
    display_date: &str,
) -> Result<String> {
    let mut buffer = Vec::new();
    write_chat_markdown(&mut buffer, messages, project_tag, sortable_date, display_date)
        .wrap_err("Failed to render chat markdown")?;
    String::from_utf8(buffer).wrap_err("Rendered markdown was not valid UTF-8")
}

/// Derive the output filename from the display date: `:` is not allowed in
/// filenames on every platform, and spaces are awkward in links.
pub fn output_filename(display_date: &str) -> String {
    format!("chat_{}.md", display_date.replace(':', "-").replace(' ', "_"))
}

/// Best-effort recovery of the `date:` field from a rendered document's
/// frontmatter. Returns `None` when the text does not start with a frontmatter
/// block or the block carries no date.
pub fn parse_frontmatter_date(document: &str) -> Option<String> {
    let mut lines = document.lines();
    if lines.next()?.trim() != "---" {
        return None;
    }
    for line in lines {
        if line.trim() == "---" {
            break;
        }
        if let Some(rest) = line.strip_prefix("date:") {
            return Some(rest.trim().trim_matches('\'').trim_matches('"').to_string());
        }
    }
    None
}
