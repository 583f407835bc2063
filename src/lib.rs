//! # cody-chat-export
//!
//! A CLI tool that exports [Sourcegraph Cody](https://sourcegraph.com/cody) AI chat
//! conversations to local Markdown files.
//!
//! ## What it does
//!
//! Cody keeps chat history as a single JSON export: a `chat` mapping from an
//! RFC-1123-style timestamp key to a conversation, where each conversation is a list
//! of interactions carrying an optional human turn (with attached context files) and
//! an optional assistant turn. This tool loads that export, lists the conversations
//! with their dates converted to your local timezone, and renders the one you pick
//! either straight to the terminal or to a Markdown file with YAML frontmatter
//! (project tag + sortable date) suitable for an Obsidian vault.
//!
//! The export file is only ever read — your data is never modified.
//!
//! ## Usage
//!
//! ```sh
//! # Interactive: list chats, pick one, choose terminal or Markdown output
//! cody-chat-export
//!
//! # With an explicit export file and timezone
//! cody-chat-export --file ~/Documents/chat.json --timezone Asia/Yekaterinburg
//! ```
//!
//! Preferences can be persisted in `~/.config/cody-chat-export/config.toml`.
//!
//! ## Output
//!
//! Markdown files are written to the current directory as
//! `chat_<display-date>.md`, with `:` replaced by `-` and spaces by `_` so the
//! name is filesystem-safe. Fenced code blocks annotated as ` ```lang:file ` are
//! rewritten with the filename as an italic caption above a clean ` ```lang `
//! fence.

pub mod exporter;
pub mod fences;
pub mod importer;
pub mod messages;
pub mod process;
pub mod prompt;
pub mod timefmt;
