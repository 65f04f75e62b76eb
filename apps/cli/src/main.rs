use std::{
    io::{IsTerminal, stdin},
    path::PathBuf,
    time::Duration,
};

use anyhow::Result;
use clap::{ArgAction, Parser, ValueEnum};
use console::style;
use tracing_subscriber::EnvFilter;
use ytchapters_core::{
    ChapterPipeline, ChatCompletionsGenerator, Provider, Session, YtDlpTranscripts,
    format_chapters_export,
};

use crate::{
    app::{App, prompt_api_key},
    ui::{create_spinner, print_banner, print_error},
};

mod app;
mod clipboard;
mod ui;

/// CLI wrapper for Provider enum (needed for clap ValueEnum)
#[derive(Clone, Default, ValueEnum)]
enum CliProvider {
    #[default]
    Gemini,
    Grok,
    Openai,
}

impl From<CliProvider> for Provider {
    fn from(cli: CliProvider) -> Self {
        match cli {
            CliProvider::Gemini => Provider::Gemini,
            CliProvider::Grok => Provider::Grok,
            CliProvider::Openai => Provider::Openai,
        }
    }
}

#[derive(Parser)]
#[command(name = "ytchapters")]
#[command(about = "Generate clickable YouTube chapters from a video's transcript with an AI model")]
struct Cli {
    /// YouTube video URL. Prompted for when omitted.
    url: Option<String>,

    /// AI provider for chapter generation
    #[arg(short, long, default_value = "gemini")]
    provider: CliProvider,

    /// API key. Defaults to the provider's environment variable (e.g. GEMINI_API_KEY).
    #[arg(long)]
    api_key: Option<String>,

    /// Override the provider's default model
    #[arg(short, long)]
    model: Option<String>,

    /// Caption languages to request from yt-dlp
    #[arg(long, default_value = "en.*")]
    sub_langs: String,

    /// Directory for exported chapter files. Defaults to the Downloads folder.
    #[arg(short, long)]
    out_dir: Option<PathBuf>,

    /// Model API request timeout in seconds
    #[arg(long, default_value_t = 120)]
    timeout: u64,

    /// Print the chapters once and exit instead of opening the interactive menu
    #[arg(long)]
    print: bool,

    /// Increase log verbosity (-v, -vv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

fn init_tracing(verbose: u8) {
    let default_directives = match verbose {
        0 => "warn",
        1 => "warn,ytchapters=debug,ytchapters_core=debug",
        _ => "debug",
    };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_directives));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn default_out_dir() -> PathBuf {
    dirs::download_dir().unwrap_or_else(|| PathBuf::from("."))
}

fn non_blank(key: Option<String>) -> Option<String> {
    key.map(|k| k.trim().to_string()).filter(|k| !k.is_empty())
}

/// A key given up front: the flag wins over the environment, blanks count as unset.
fn preset_api_key(flag: Option<String>, env: Option<String>) -> Option<String> {
    non_blank(flag).or_else(|| non_blank(env))
}

/// Flag, then environment, then a masked prompt when someone is at the keyboard.
fn resolve_api_key(
    flag: Option<String>,
    provider: &Provider,
    interactive: bool,
) -> Result<Option<String>> {
    if let Some(key) = preset_api_key(flag, provider.api_key_from_env()) {
        return Ok(Some(key));
    }
    if !interactive {
        return Ok(None);
    }

    prompt_api_key(provider.name())
}

/// One-shot mode: generate and print the export text to stdout.
async fn print_once(
    pipeline: &ChapterPipeline<YtDlpTranscripts, ChatCompletionsGenerator>,
    url: &str,
    api_key: Option<&str>,
) -> Result<()> {
    let mut session = Session::new();
    let spinner = create_spinner("Generating chapters...");
    let result = pipeline.run(&mut session, url, api_key).await;
    spinner.finish_and_clear();

    match result {
        Ok(parsed) => {
            println!("{}", format_chapters_export(&parsed.chapters));
            Ok(())
        }
        Err(e) => {
            print_error(&e);
            std::process::exit(1);
        }
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let provider: Provider = cli.provider.into();
    let interactive = !cli.print && stdin().is_terminal();
    let api_key = resolve_api_key(cli.api_key, &provider, interactive)?;

    let mut generator =
        ChatCompletionsGenerator::new(&provider, Duration::from_secs(cli.timeout))?;
    if let Some(model) = cli.model {
        generator = generator.with_model(model);
    }
    let model = generator.model().to_string();
    let provider_name = provider.name();
    let transcripts = YtDlpTranscripts::new(cli.sub_langs);
    let pipeline = ChapterPipeline::new(provider, transcripts, generator);

    if !interactive {
        let url = cli.url.unwrap_or_default();
        return print_once(&pipeline, &url, api_key.as_deref()).await;
    }

    print_banner(provider_name, &model);
    if api_key.is_none() {
        println!(
            "{}\n",
            style("No API key set: choose \"Enter API key\" after the first attempt.").dim()
        );
    }

    let out_dir = cli.out_dir.unwrap_or_else(default_out_dir);
    App::new(pipeline, api_key, out_dir).run(cli.url).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flag_wins_over_environment() {
        assert_eq!(
            preset_api_key(Some("flag-key".into()), Some("env-key".into())),
            Some("flag-key".to_string())
        );
    }

    #[test]
    fn blank_flag_falls_back_to_environment() {
        assert_eq!(
            preset_api_key(Some("   ".into()), Some(" env-key\n".into())),
            Some("env-key".to_string())
        );
        assert_eq!(preset_api_key(None, Some("env-key".into())), Some("env-key".to_string()));
    }

    #[test]
    fn blank_values_count_as_unset() {
        assert_eq!(preset_api_key(Some("".into()), Some("  ".into())), None);
        assert_eq!(preset_api_key(None, None), None);
    }

    #[test]
    fn non_interactive_resolution_never_prompts() {
        let key = resolve_api_key(Some("flag-key".into()), &Provider::Gemini, false).unwrap();
        assert_eq!(key.as_deref(), Some("flag-key"));
    }
}
