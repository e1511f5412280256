//! Rendering primitives for CLI output.

use comfy_table::{presets, Attribute, Cell, ContentArrangement, Table};
use owo_colors::OwoColorize;

use jotter_core::notification::{Notification, NotificationKind};

use super::context::UiContext;

/// Badge types for status indicators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Badge {
    Ok,
    Warn,
    Err,
}

impl Badge {
    pub fn text(&self) -> &'static str {
        match self {
            Self::Ok => "[OK]",
            Self::Warn => "[WARN]",
            Self::Err => "[ERR]",
        }
    }
}

pub fn badge(ctx: &UiContext, badge: Badge) -> String {
    let text = badge.text();
    if !ctx.color {
        return text.to_string();
    }
    match badge {
        Badge::Ok => text.green().to_string(),
        Badge::Warn => text.yellow().to_string(),
        Badge::Err => text.red().to_string(),
    }
}

/// One status line for an editor notification.
pub fn notification(ctx: &UiContext, notification: &Notification) -> String {
    let kind = match notification.kind {
        NotificationKind::Success => Badge::Ok,
        NotificationKind::Error => Badge::Err,
    };
    format!("{} {}", badge(ctx, kind), notification.message)
}

/// Render note rows.
///
/// TTY: borderless table with a dim header row.
/// Piped: tab-separated values, no header.
pub fn note_table(ctx: &UiContext, headers: &[&str], rows: &[Vec<String>]) -> String {
    if !ctx.is_tty {
        return rows
            .iter()
            .map(|row| row.join("\t"))
            .collect::<Vec<_>>()
            .join("\n");
    }

    let mut table = Table::new();
    table.load_preset(presets::NOTHING);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let header_cells: Vec<Cell> = headers
        .iter()
        .map(|h| {
            let cell = Cell::new(h);
            if ctx.color {
                cell.add_attribute(Attribute::Dim)
            } else {
                cell
            }
        })
        .collect();
    table.set_header(header_cells);

    for i in 0..headers.len() {
        if let Some(column) = table.column_mut(i) {
            column.set_padding((0, 2));
        }
    }
    for row in rows {
        table.add_row(row);
    }
    table.to_string()
}
