//! Help article builders
//!
//! Builders decide article content from the command catalog; the renderers
//! own layout. Help text emitted here may carry `{{config.*}}` placeholders,
//! which the renderers substitute just before layout.

use crate::article::{Article, ListEntry, Section};
use crate::catalog::CommandSpec;
use crate::config::Config;

/// Build the root help article: usage, topic list, footer.
///
/// Hidden commands are included only when `all` is set.
#[must_use]
pub fn build_root_article(config: &Config, all: bool) -> Article {
    let mut article = Article::new("{{config.bin}} {{config.version}}")
        .section(Section::prose("usage", "{{config.bin}} [COMMAND]"));

    let topics: Vec<ListEntry> = config
        .commands
        .iter()
        .filter(|command| all || !command.hidden)
        .map(|command| ListEntry::new(command.name.clone(), command.summary.clone()))
        .collect();
    if !topics.is_empty() {
        article = article.section(Section::list("commands", topics));
    }

    article.section(Section::prose(
        "help",
        "Run {{config.bin}} COMMAND for more information on a command.",
    ))
}

/// Build the help article for one command.
///
/// Hidden flags are included only when `all` is set.
#[must_use]
pub fn build_command_article(command: &CommandSpec, all: bool) -> Article {
    let usage = command
        .usage
        .clone()
        .unwrap_or_else(|| format!("{{{{config.bin}}}} {}", command.name));

    let mut article = Article::new(command.name.clone()).section(Section::prose("usage", usage));

    let description = command.description.as_deref().unwrap_or(&command.summary);
    if !description.is_empty() {
        article = article.section(Section::prose("description", description));
    }

    let flags: Vec<ListEntry> = command
        .flags
        .iter()
        .filter(|flag| all || !flag.hidden)
        .map(|flag| ListEntry {
            label: Some(flag.label()),
            description: flag.summary.clone(),
        })
        .collect();
    if !flags.is_empty() {
        article = article.section(Section::list("flags", flags));
    }

    if !command.examples.is_empty() {
        article = article.section(Section::code("examples", command.examples.clone()));
    }

    article
}
