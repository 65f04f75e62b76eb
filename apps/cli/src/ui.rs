use std::time::Duration;

use console::style;
use indicatif::{ProgressBar, ProgressStyle};
use ytchapters_core::{ParsedChapters, PlayerTarget};

pub fn format_duration(d: Duration) -> String {
    let secs = d.as_secs_f64();
    if secs < 60.0 {
        format!("{:.1}s", secs)
    } else {
        format!("{:.0}m {:.0}s", (secs / 60.0).floor(), secs % 60.0)
    }
}

pub fn create_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_chars("⠁⠂⠄⡀⢀⠠⠐⠈ ")
            .template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(msg.to_string());
    pb.enable_steady_tick(Duration::from_millis(80));
    pb
}

pub fn print_banner(provider: &str, model: &str) {
    println!(
        "\n{}  {}",
        style("ytchapters").cyan().bold(),
        style("YouTube Chapter Generator").dim()
    );
    println!(
        "{} {}\n",
        style("Model:").dim(),
        style(format!("{provider} / {model}")).yellow()
    );
}

pub fn rule() {
    println!("{}", style("─".repeat(60)).dim());
}

pub fn print_error(err: &dyn std::fmt::Display) {
    eprintln!("{} {}", style("Error:").red().bold(), err);
}

pub fn print_ok(msg: &str) {
    println!("{} {}", style("✓").green().bold(), msg);
}

pub fn print_player(target: &PlayerTarget) {
    let heading = match target.start_seconds {
        Some(_) => "▶ Now playing",
        None => "▶ Video preview",
    };
    println!("\n{}", style(heading).bold());
    println!("  {} {}", style("embed").dim(), style(target.embed_url()).cyan());
    println!("  {} {}\n", style("watch").dim(), style(target.watch_url()).cyan());
}

/// One line per chapter: `start – end  description`.
pub fn chapter_line(start_label: &str, end_label: &str, description: &str) -> String {
    format!("{} – {}  {}", start_label, end_label, description)
}

pub fn print_chapters(parsed: &ParsedChapters) {
    println!("\n{}\n", style("📌 Chapters").bold());
    if parsed.is_empty() {
        println!(
            "  {}",
            style("The model returned no recognisable chapter lines.").yellow()
        );
    }
    for (i, chapter) in parsed.chapters.iter().enumerate() {
        println!(
            "  {:>2}. {} {}",
            i + 1,
            style(format!("{} – {}", chapter.start_label, chapter.end_label))
                .magenta()
                .bold(),
            chapter.description
        );
    }
    if parsed.skipped > 0 {
        println!(
            "\n  {}",
            style(format!("({} unrecognised lines ignored)", parsed.skipped)).dim()
        );
    }
    println!();
}

pub fn print_block(title: &str, body: &str) {
    println!("\n{}", style(title).bold());
    rule();
    println!("{}", body);
    rule();
}
