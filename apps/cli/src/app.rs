use std::{path::PathBuf, time::Instant};

use anyhow::Result;
use console::style;
use dialoguer::{Input, Password, Select, theme::ColorfulTheme};
use tracing::warn;
use ytchapters_core::{
    ChapterGenerator, ChapterPipeline, Session, TranscriptProvider, format_chapters_export,
    write_export,
};

use crate::{
    clipboard::copy_to_clipboard,
    ui::{
        chapter_line, create_spinner, format_duration, print_block, print_chapters, print_error,
        print_ok, print_player,
    },
};

enum Action {
    Play(usize),
    Copy,
    Export,
    ShowTranscript,
    ShowModelOutput,
    EnterApiKey,
    Retry,
    NewVideo,
    Quit,
}

/// The interactive terminal session.
pub struct App<T, G> {
    pipeline: ChapterPipeline<T, G>,
    session: Session,
    api_key: Option<String>,
    out_dir: PathBuf,
    last_url: Option<String>,
}

impl<T: TranscriptProvider, G: ChapterGenerator> App<T, G> {
    pub fn new(
        pipeline: ChapterPipeline<T, G>,
        api_key: Option<String>,
        out_dir: PathBuf,
    ) -> Self {
        Self {
            pipeline,
            session: Session::new(),
            api_key,
            out_dir,
            last_url: None,
        }
    }

    pub async fn run(mut self, initial_url: Option<String>) -> Result<()> {
        let mut next_url = initial_url;

        loop {
            let url = match next_url.take() {
                Some(url) => url,
                None => prompt_url()?,
            };
            self.generate(&url).await;

            match self.menu().await? {
                Some(url) => next_url = Some(url),
                None => break,
            }
        }

        Ok(())
    }

    /// Run the whole Generate action, reporting any failure on screen.
    async fn generate(&mut self, url: &str) {
        self.last_url = Some(url.to_string());
        let api_key = self.api_key.as_deref();

        if let Err(e) = self.pipeline.prepare(&mut self.session, url, api_key) {
            print_error(&e);
            return;
        }
        if let Some(target) = self.session.playback().target() {
            print_player(&target);
        }

        let step_start = Instant::now();
        let spinner = create_spinner("Fetching transcript...");
        match self.pipeline.fetch_transcript(&mut self.session).await {
            Ok(segments) => spinner.finish_with_message(format!(
                "{} Transcript fetched: {} segments {}",
                style("✓").green().bold(),
                segments.len(),
                style(format!("[{}]", format_duration(step_start.elapsed()))).dim()
            )),
            Err(e) => {
                spinner.finish_and_clear();
                print_error(&e);
                return;
            }
        }

        let step_start = Instant::now();
        let spinner = create_spinner(&format!(
            "Generating chapters ({})...",
            self.pipeline.provider().name()
        ));
        let api_key = api_key.unwrap_or_default();
        match self.pipeline.generate_chapters(&mut self.session, api_key).await {
            Ok(parsed) => {
                spinner.finish_with_message(format!(
                    "{} Chapters generated {}",
                    style("✓").green().bold(),
                    style(format!("[{}]", format_duration(step_start.elapsed()))).dim()
                ));
                print_chapters(parsed);
            }
            Err(e) => {
                spinner.finish_and_clear();
                print_error(&e);
            }
        }
    }

    fn actions(&self) -> Vec<(String, Action)> {
        let mut actions = Vec::new();
        let chapters = self.session.chapters();

        for (i, c) in chapters.chapters.iter().enumerate() {
            let line = chapter_line(&c.start_label, &c.end_label, &c.description);
            actions.push((format!("Play ▶  {line}"), Action::Play(i)));
        }
        if !chapters.is_empty() {
            actions.push(("Copy chapters".to_string(), Action::Copy));
            actions.push(("⬇️  Export as .txt".to_string(), Action::Export));
        }
        if self.session.transcript().is_some() {
            actions.push(("📄 View full transcript".to_string(), Action::ShowTranscript));
        }
        if !self.session.chapter_text().is_empty() {
            actions.push(("🧾 Model output (raw)".to_string(), Action::ShowModelOutput));
        }
        if self.api_key.is_none() {
            actions.push(("🔑 Enter API key".to_string(), Action::EnterApiKey));
        }
        if self.last_url.is_some() {
            actions.push(("✨ Generate again".to_string(), Action::Retry));
        }
        actions.push(("🎥 New video".to_string(), Action::NewVideo));
        actions.push(("Quit".to_string(), Action::Quit));
        actions
    }

    /// Handle actions until the user asks for another video (`Some(url)`) or quits.
    async fn menu(&mut self) -> Result<Option<String>> {
        loop {
            let actions = self.actions();
            let labels: Vec<&str> = actions.iter().map(|(label, _)| label.as_str()).collect();

            let Some(choice) = Select::with_theme(&ColorfulTheme::default())
                .with_prompt("Choose an action")
                .items(&labels)
                .default(0)
                .interact_opt()?
            else {
                return Ok(None);
            };

            match actions[choice].1 {
                Action::Play(index) => {
                    if let Some(target) = self.session.select_chapter(index) {
                        print_player(&target);
                    }
                }
                Action::Copy => {
                    let text = format_chapters_export(&self.session.chapters().chapters);
                    match copy_to_clipboard(&text) {
                        Ok(()) => print_ok("Copied ✓"),
                        Err(e) => {
                            warn!(error = %e, "clipboard copy failed");
                            print_error(&e);
                        }
                    }
                }
                Action::Export => self.export().await,
                Action::ShowTranscript => {
                    if let Some(text) = self.session.transcript_text() {
                        print_block("Raw Transcript", &text);
                    }
                }
                Action::ShowModelOutput => {
                    print_block("Model Output (raw)", self.session.chapter_text());
                }
                Action::EnterApiKey => {
                    self.api_key = prompt_api_key(self.pipeline.provider().name())?;
                }
                Action::Retry => {
                    if let Some(url) = self.last_url.clone() {
                        self.generate(&url).await;
                    }
                }
                Action::NewVideo => return Ok(Some(prompt_url()?)),
                Action::Quit => return Ok(None),
            }
        }
    }

    async fn export(&self) {
        let Some(video_id) = self.session.video_id() else {
            return;
        };
        let text = format_chapters_export(&self.session.chapters().chapters);
        match write_export(&self.out_dir, video_id, &text).await {
            Ok(path) => print_ok(&format!("Saved {}", style(path.display()).cyan())),
            Err(e) => {
                warn!(%video_id, error = %e, "export failed");
                print_error(&e);
            }
        }
    }
}

fn prompt_url() -> Result<String> {
    Ok(Input::<String>::with_theme(&ColorfulTheme::default())
        .with_prompt("🎥 YouTube Video URL")
        .allow_empty(true)
        .interact_text()?)
}

/// Masked credential prompt; a blank answer means no key.
pub fn prompt_api_key(provider_name: &str) -> Result<Option<String>> {
    let key = Password::with_theme(&ColorfulTheme::default())
        .with_prompt(format!("🔑 {provider_name} API Key"))
        .allow_empty_password(true)
        .interact()?;
    Ok(Some(key).filter(|k| !k.trim().is_empty()))
}
