//! Exporting a note as a downloadable text or HTML file.

use pulldown_cmark::{html, CowStr, Event, HeadingLevel, Parser, Tag, TagEnd};

use crate::crypto::decrypt;
use crate::error::{JotterError, Result};
use crate::note::Note;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ExportFormat {
    #[default]
    Text,
    Html,
}

impl ExportFormat {
    pub fn extension(self) -> &'static str {
        match self {
            ExportFormat::Text => "txt",
            ExportFormat::Html => "html",
        }
    }

    pub fn mime_type(self) -> &'static str {
        match self {
            ExportFormat::Text => "text/plain",
            ExportFormat::Html => "text/html",
        }
    }
}

impl std::str::FromStr for ExportFormat {
    type Err = JotterError;

    fn from_str(value: &str) -> Result<Self> {
        match value.to_ascii_lowercase().as_str() {
            "text" | "txt" => Ok(ExportFormat::Text),
            "html" => Ok(ExportFormat::Html),
            other => Err(JotterError::Validation(format!(
                "Unsupported export format: {} (use text or html)",
                other
            ))),
        }
    }
}

/// A rendered export ready to be written to disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ExportedFile {
    pub file_name: String,
    pub contents: String,
    pub format: ExportFormat,
}

/// Export `note`, decrypting its body with `password` when it is locked.
///
/// # Errors
///
/// - `JotterError::Validation` if the note is locked and no password was given,
///   or if title or body is empty
/// - `JotterError::Decryption` if the password is wrong
pub fn export_note(note: &Note, password: Option<&str>, format: ExportFormat) -> Result<ExportedFile> {
    let content = if note.is_locked {
        let password = password.filter(|p| !p.is_empty()).ok_or_else(|| {
            JotterError::Validation("A password is required to export a locked note".to_string())
        })?;
        decrypt(&note.encrypted_content, password)?
    } else {
        note.content.clone()
    };
    render(&note.title, &content, &note.tags, format)
}

/// Render an export from plaintext fields.
///
/// # Errors
///
/// Returns `JotterError::Validation` if title or content is blank.
pub fn render(title: &str, content: &str, tags: &[String], format: ExportFormat) -> Result<ExportedFile> {
    if title.trim().is_empty() || content.trim().is_empty() {
        return Err(JotterError::Validation("There is no note to export".to_string()));
    }
    let contents = match format {
        ExportFormat::Text => render_text(title, content, tags),
        ExportFormat::Html => render_html(title, content, tags),
    };
    Ok(ExportedFile {
        file_name: file_name(title, format),
        contents,
        format,
    })
}

/// `<title>.<ext>`, with path separators and control characters replaced.
pub fn file_name(title: &str, format: ExportFormat) -> String {
    let stem: String = title
        .trim()
        .chars()
        .map(|c| match c {
            '/' | '\\' | ':' | '\0' => '_',
            c if c.is_control() => '_',
            c => c,
        })
        .collect();
    format!("{}.{}", stem, format.extension())
}

fn tag_line(tags: &[String]) -> Option<String> {
    if tags.is_empty() {
        None
    } else {
        Some(format!("Tags: {}", tags.join(", ")))
    }
}

fn render_text(title: &str, content: &str, tags: &[String]) -> String {
    let mut out = format!("{}\n\n{}", title, content);
    if let Some(line) = tag_line(tags) {
        out.push_str("\n\n");
        out.push_str(&line);
    }
    out.push('\n');
    out
}

fn render_html(title: &str, content: &str, tags: &[String]) -> String {
    let mut heading = String::new();
    html::push_html(
        &mut heading,
        [
            Event::Start(Tag::Heading {
                level: HeadingLevel::H1,
                id: None,
                classes: Vec::new(),
                attrs: Vec::new(),
            }),
            Event::Text(CowStr::from(title)),
            Event::End(TagEnd::Heading(HeadingLevel::H1)),
        ]
        .into_iter(),
    );

    let mut body = String::new();
    // Raw HTML in the body is shown as text, not injected into the page.
    let events = Parser::new(content).map(|event| match event {
        Event::Html(raw) | Event::InlineHtml(raw) => Event::Text(raw),
        other => other,
    });
    html::push_html(&mut body, events);

    let mut footer = String::new();
    if let Some(line) = tag_line(tags) {
        html::push_html(
            &mut footer,
            [
                Event::Start(Tag::Paragraph),
                Event::Text(CowStr::from(line)),
                Event::End(TagEnd::Paragraph),
            ]
            .into_iter(),
        );
    }

    let mut page_title = String::new();
    html::push_html(&mut page_title, std::iter::once(Event::Text(CowStr::from(title))));

    format!(
        "<!DOCTYPE html>\n<html>\n<head>\n<meta charset=\"utf-8\">\n<title>{}</title>\n</head>\n<body>\n{}<article>\n{}</article>\n{}</body>\n</html>\n",
        page_title, heading, body, footer
    )
}
