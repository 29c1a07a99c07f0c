use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use colored::Colorize;
use serde::Serialize;
use tabled::{settings::Style, Table, Tabled};
use tracing::debug;

use crate::cli::OutputFormat;
use crate::error::Result;

struct Settings {
    format: OutputFormat,
    quiet: bool,
    out: Option<PathBuf>,
}

/// Global output settings, fixed once at startup
static SETTINGS: OnceLock<Settings> = OnceLock::new();

pub fn init(format: OutputFormat, quiet: bool, out: Option<PathBuf>) {
    let _ = SETTINGS.set(Settings { format, quiet, out });
}

fn settings() -> &'static Settings {
    SETTINGS.get_or_init(|| Settings {
        format: OutputFormat::default(),
        quiet: false,
        out: None,
    })
}

pub fn format() -> OutputFormat {
    settings().format
}

/// Write rendered output to the --out file, or stdout
fn write_output(out: Option<&Path>, text: &str) -> Result<()> {
    match out {
        Some(path) => {
            std::fs::write(path, text)?;
            debug!(path = %path.display(), bytes = text.len(), "wrote output");
        }
        None => println!("{text}"),
    }
    Ok(())
}

/// Render records as a table, JSON, or an HTML fragment
pub fn format_list<T, R, F>(
    format: OutputFormat,
    items: &[T],
    to_row: F,
    to_html: impl FnOnce(&[T]) -> String,
) -> String
where
    T: Serialize,
    R: Tabled,
    F: Fn(&T) -> R,
{
    match format {
        OutputFormat::Json => serde_json::to_string_pretty(items).unwrap_or_default(),
        OutputFormat::Html => to_html(items),
        OutputFormat::Table => {
            let rows: Vec<R> = items.iter().map(to_row).collect();
            Table::new(rows).with(Style::rounded()).to_string()
        }
    }
}

/// Print records in the global output mode
pub fn print_list<T, R, F>(
    items: &[T],
    to_row: F,
    to_html: impl FnOnce(&[T]) -> String,
) -> Result<()>
where
    T: Serialize,
    R: Tabled,
    F: Fn(&T) -> R,
{
    let text = format_list(format(), items, to_row, to_html);
    print_text(&text)
}

/// Print already-formatted list output to the --out file, or stdout
pub fn print_text(text: &str) -> Result<()> {
    write_output(settings().out.as_deref(), text)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Stream {
    Stdout,
    Stderr,
}

/// Where a status message goes and how it reads, or None when suppressed.
///
/// A message followed by a list is dropped in JSON mode so stdout stays a
/// single document.
fn message_line(
    format: OutputFormat,
    quiet: bool,
    message: &str,
    list_follows: bool,
) -> Option<(Stream, String)> {
    if quiet {
        return None;
    }

    match format {
        OutputFormat::Json if list_follows => None,
        OutputFormat::Json => Some((
            Stream::Stdout,
            serde_json::json!({ "message": message }).to_string(),
        )),
        // Keep stdout clean for the fragment
        OutputFormat::Html => Some((Stream::Stderr, message.to_string())),
        OutputFormat::Table => Some((Stream::Stdout, message.green().to_string())),
    }
}

fn emit_message(message: &str, list_follows: bool) {
    let settings = settings();
    match message_line(settings.format, settings.quiet, message, list_follows) {
        Some((Stream::Stdout, line)) => println!("{line}"),
        Some((Stream::Stderr, line)) => eprintln!("{line}"),
        None => {}
    }
}

/// Print a success message (skipped when quiet, simple object in JSON mode)
pub fn print_message(message: &str) {
    emit_message(message, false);
}

/// Print a success message that precedes a refreshed list
pub fn print_message_before_list(message: &str) {
    emit_message(message, true);
}

/// Truncate a string with ellipsis
pub fn truncate(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render;
    use crate::types::Subscriber;

    #[test]
    fn test_truncate_short() {
        assert_eq!(truncate("short", 10), "short");
    }

    #[test]
    fn test_truncate_long() {
        assert_eq!(truncate("a long description", 9), "a long...");
    }

    #[test]
    fn test_truncate_multibyte() {
        assert_eq!(truncate("ééééééééé", 5), "éé...");
    }

    fn subscribers() -> Vec<Subscriber> {
        vec![
            Subscriber {
                email: "a@example.com".to_string(),
            },
            Subscriber {
                email: "b@example.com".to_string(),
            },
        ]
    }

    #[derive(Tabled)]
    struct EmailRow {
        #[tabled(rename = "Email")]
        email: String,
    }

    fn row(s: &Subscriber) -> EmailRow {
        EmailRow {
            email: s.email.clone(),
        }
    }

    #[test]
    fn test_format_list_html_uses_renderer() {
        let text = format_list(OutputFormat::Html, &subscribers(), row, render::subscribers);
        assert_eq!(
            text,
            r#"<li class="list-group-item">a@example.com</li><li class="list-group-item">b@example.com</li>"#
        );
    }

    #[test]
    fn test_format_list_json_is_array() {
        let text = format_list(OutputFormat::Json, &subscribers(), row, render::subscribers);
        let parsed: serde_json::Value = serde_json::from_str(&text).unwrap();
        assert_eq!(parsed[1]["email"], "b@example.com");
    }

    #[test]
    fn test_format_list_table_has_header() {
        let text = format_list(OutputFormat::Table, &subscribers(), row, render::subscribers);
        assert!(text.contains("Email"));
        assert!(text.contains("a@example.com"));
        assert!(!text.contains("<li"));
    }

    #[test]
    fn test_write_output_to_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("project-list.html");

        write_output(Some(&path), "<div>cards</div>").unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "<div>cards</div>");
    }

    #[test]
    fn test_write_output_missing_dir_fails() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("missing").join("out.html");
        assert!(write_output(Some(&path), "x").is_err());
    }

    #[test]
    fn test_json_message_shape() {
        let (stream, line) =
            message_line(OutputFormat::Json, false, "Subscribed \"ok\"", false).unwrap();
        assert_eq!(stream, Stream::Stdout);
        let parsed: serde_json::Value = serde_json::from_str(&line).unwrap();
        assert_eq!(parsed, serde_json::json!({ "message": "Subscribed \"ok\"" }));
    }

    #[test]
    fn test_json_message_dropped_before_list() {
        assert_eq!(
            message_line(OutputFormat::Json, false, "Project Added", true),
            None
        );
    }

    #[test]
    fn test_html_message_goes_to_stderr() {
        let (stream, line) =
            message_line(OutputFormat::Html, false, "Client Added", true).unwrap();
        assert_eq!(stream, Stream::Stderr);
        assert_eq!(line, "Client Added");
    }

    #[test]
    fn test_table_message_kept_before_list() {
        let (stream, line) =
            message_line(OutputFormat::Table, false, "Project Added", true).unwrap();
        assert_eq!(stream, Stream::Stdout);
        assert!(line.contains("Project Added"));
    }

    #[test]
    fn test_quiet_suppresses_messages() {
        assert_eq!(message_line(OutputFormat::Table, true, "x", false), None);
        assert_eq!(message_line(OutputFormat::Json, true, "x", false), None);
    }
}
