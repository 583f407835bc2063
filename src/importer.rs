//! Type definitions for the Cody chat-history JSON export, plus the load boundary.
//!
//! Export layout:
//! ```json
//! {
//!   "chat": {
//!     "Wed, 25 Dec 2024 13:30:45 GMT": {
//!       "interactions": [
//!         {
//!           "humanMessage": {
//!             "text": "...",
//!             "contextFiles": [{ "uri": { "path": "/src/app.py" } }]
//!           },
//!           "assistantMessage": { "text": "..." }
//!         }
//!       ]
//!     }
//!   }
//! }
//! ```
//!
//! Everything below the timestamp key is best-effort: missing lists deserialize as
//! empty, and both turns of an interaction are independently optional. The only
//! hard requirement is the `text` field on a turn that is present.

use eyre::{Context, Result};
use indexmap::IndexMap;
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// Substituted for a context file whose nested `uri.path` is absent.
pub const PATH_NOT_SPECIFIED: &str = "path not specified";

/// The whole export. `chat` preserves the file's key order, which is what the
/// numbered selection list is built from.
#[derive(Debug, Deserialize)]
pub struct ChatStore {
    #[serde(default)]
    pub chat: IndexMap<String, Conversation>,
}

#[derive(Debug, Deserialize)]
pub struct Conversation {
    #[serde(default)]
    pub interactions: Vec<Interaction>,
}

/// One exchange unit. In practice the turns alternate, but the format does not
/// guarantee a strict request/response pair.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Interaction {
    pub human_message: Option<HumanTurn>,
    pub assistant_message: Option<AssistantTurn>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanTurn {
    pub text: String,
    #[serde(default)]
    pub context_files: Vec<ContextFile>,
}

#[derive(Debug, Deserialize)]
pub struct AssistantTurn {
    pub text: String,
}

#[derive(Debug, Deserialize)]
pub struct ContextFile {
    pub uri: Option<FileUri>,
}

#[derive(Debug, Deserialize)]
pub struct FileUri {
    pub path: Option<String>,
}

impl ContextFile {
    /// Resolve the display path, substituting a placeholder when any level of the
    /// nested location is missing.
    pub fn display_path(&self) -> &str {
        self.uri
            .as_ref()
            .and_then(|uri| uri.path.as_deref())
            .unwrap_or(PATH_NOT_SPECIFIED)
    }
}

/// Read and parse the whole export into memory.
pub fn load_store(path: &Path) -> Result<ChatStore> {
    let content = fs::read_to_string(path)
        .wrap_err_with(|| format!("Failed to read chat export: {}", path.display()))?;
    serde_json::from_str(&content)
        .wrap_err_with(|| format!("Failed to parse chat export: {}", path.display()))
}
