//! Command-line entry point: renders one message from a workspace's dictionary.

use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use msg_translator::config::{
    ConfigManager,
    SettingsOverrides,
};
use msg_translator::{
    PlaceholderStyle,
    Replacements,
    build,
    load_dictionary_file,
};
use tracing_subscriber::EnvFilter;

/// Render a message key in the configured language.
#[derive(Debug, Parser)]
#[command(name = "msg-translate", version, about)]
struct Cli {
    /// Message key to render.
    key: String,

    /// Directory holding `.msg-translate.json` (defaults to the current directory).
    #[arg(long, short = 'w')]
    workspace: Option<PathBuf>,

    /// Message dictionary JSON file, overriding `messagesFile`.
    #[arg(long, short = 'm')]
    messages: Option<PathBuf>,

    /// Language code, overriding `language`.
    #[arg(long, short = 'l')]
    lang: Option<String>,

    /// Placeholder style (`single` or `double`), overriding `placeholderStyle`.
    #[arg(long)]
    style: Option<PlaceholderStyle>,

    /// Replacement as `name=value`; may be repeated.
    #[arg(long = "set", short = 's', value_parser = parse_replacement)]
    replacements: Vec<(String, String)>,

    /// Print the placeholder names of the template instead of rendering it.
    #[arg(long)]
    placeholders: bool,
}

/// Splits `name=value` at the first `=`.
fn parse_replacement(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.to_string(), value.to_string()))
        .ok_or_else(|| format!("expected name=value, got '{raw}'"))
}

#[allow(clippy::print_stdout)]
fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let workspace = match cli.workspace {
        Some(dir) => dir,
        None => std::env::current_dir().context("Failed to resolve current directory")?,
    };

    let mut config_manager = ConfigManager::new();
    config_manager.load_settings(Some(workspace))?;

    config_manager
        .apply_overrides(SettingsOverrides { language: cli.lang, placeholder_style: cli.style })?;

    let messages_path = cli.messages.unwrap_or_else(|| config_manager.messages_path());
    let dictionary = load_dictionary_file(&messages_path)
        .with_context(|| format!("Failed to load messages from {}", messages_path.display()))?;

    let settings = config_manager.get_settings();
    let translator =
        build(&dictionary, settings.language.as_str(), Some(settings.translator_config()));

    if cli.placeholders {
        for name in translator.placeholders(&cli.key)? {
            println!("{name}");
        }
        return Ok(());
    }

    let replacements: Replacements = cli.replacements.into_iter().collect();
    let rendered = translator
        .resolve(&cli.key, Some(&replacements))
        .with_context(|| format!("No message rendered for '{}'", cli.key))?;

    println!("{rendered}");
    Ok(())
}
