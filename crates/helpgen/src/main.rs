//! helpgen CLI
//!
//! Renders help articles for a configured command catalog to a terminal
//! screen or to Markdown.

#![forbid(unsafe_code)]

use std::path::Path;

use clap::Parser;

use helpgen_core::articles::{build_command_article, build_root_article};
use helpgen_core::catalog::resolve_subject;
use helpgen_core::config::{Config, ConfigOverrides};
use helpgen_core::logging::{init_logging, LogConfig};
use helpgen_core::render::{render_article, HelpFormat, RenderOptions};
use helpgen_core::template::TemplateContext;

/// helpgen - render help articles for a configured command catalog
#[derive(Parser)]
#[command(name = "helpgen")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Help subject (command name); omit for the root help screen
    subject: Vec<String>,

    /// Output format: screen, markdown, or man
    #[arg(long, short = 'f', default_value = "screen")]
    format: String,

    /// Include hidden commands and flags
    #[arg(long)]
    all: bool,

    /// Configuration file path
    #[arg(short, long)]
    config: Option<String>,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    if let Err(err) = run() {
        eprintln!("Error: {err}");
        if let Some(hint) = err
            .downcast_ref::<helpgen_core::Error>()
            .and_then(helpgen_core::Error::hint)
        {
            eprintln!("  {hint}");
        }
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let mut overrides = ConfigOverrides::default();
    if cli.verbose {
        overrides.log_level = Some("debug".to_string());
    }

    let config_path = cli.config.as_deref().map(Path::new);
    let config = Config::load_with_overrides(config_path, config_path.is_some(), &overrides)?;

    init_logging(&LogConfig {
        level: config.general.log_level.clone(),
        format: config.general.log_format,
    })?;

    let Some(format) = HelpFormat::parse(&cli.format) else {
        anyhow::bail!(
            "invalid format: {} (expected screen, markdown, or man)",
            cli.format
        );
    };
    let opts = RenderOptions {
        format,
        all: cli.all,
    };

    let article = if cli.subject.is_empty() {
        build_root_article(&config, opts.all)
    } else {
        let command = resolve_subject(&config.commands, &cli.subject)
            .map_err(helpgen_core::Error::from)?;
        build_command_article(command, opts.all)
    };

    let ctx = TemplateContext::from_config(&config);
    let output = render_article(&article, &ctx, &opts);
    println!("{output}");

    tracing::debug!(format = %opts.format, all = opts.all, "Rendered help article");

    Ok(())
}
