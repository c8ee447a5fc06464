//! Command metadata catalog and help-subject resolution
//!
//! The catalog describes what help exists; deciding article content is the
//! builders' job (`articles`), and laying it out is the renderers' job. The
//! catalog is read-only for the duration of a render call.

use serde::{Deserialize, Serialize};

use crate::error::SubjectError;

/// Metadata for one command in the catalog
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct CommandSpec {
    /// Command name, also the help subject that resolves to it
    pub name: String,

    /// One-line summary shown in the root topic list
    pub summary: String,

    /// Long description shown on the command's own help article
    pub description: Option<String>,

    /// Usage line; defaults to `{{config.bin}} <name>` when absent
    pub usage: Option<String>,

    /// Flags accepted by the command
    pub flags: Vec<FlagSpec>,

    /// Example invocations
    pub examples: Vec<String>,

    /// Hidden commands are listed only with `--all`
    pub hidden: bool,
}

/// Metadata for one flag of a command
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FlagSpec {
    /// Short flag character, without the leading dash
    pub short: Option<String>,

    /// Long flag name, without the leading dashes
    pub long: String,

    /// One-line summary shown in the flag table
    pub summary: Option<String>,

    /// Hidden flags are listed only with `--all`
    pub hidden: bool,
}

impl FlagSpec {
    /// Flag label as shown in the flag table, e.g. `-f, --force`.
    #[must_use]
    pub fn label(&self) -> String {
        match &self.short {
            Some(short) => format!("-{short}, --{}", self.long),
            None => format!("--{}", self.long),
        }
    }
}

/// Resolve a help subject to a command in the catalog.
///
/// Subject words are joined with spaces and matched against command names
/// exactly. No match is the "not found" condition the caller must surface as
/// a non-zero process outcome.
pub fn resolve_subject<'a>(
    commands: &'a [CommandSpec],
    words: &[String],
) -> Result<&'a CommandSpec, SubjectError> {
    let subject = words.join(" ");
    commands
        .iter()
        .find(|command| command.name == subject)
        .ok_or(SubjectError::NotFound(subject))
}
