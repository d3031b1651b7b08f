//! # Rendering Module
//!
//! Turns command results into terminal text. Layout (column widths,
//! truncation, padding) is computed on the plain cell text with
//! `unicode-width`, and color is applied afterwards so escape codes never
//! skew the alignment.

use chrono::{DateTime, Utc};
use colored::Colorize;
use parish::api::{CmdMessage, MessageLevel};
use parish::commands::KindCount;
use parish::config::{ParishConfig, KEYS};
use parish::model::{Event, Member, PastoralGroup, Post, PostStatus, RecordKind, Toggle, User};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub const MAX_CELL_WIDTH: usize = 40;
pub const COLUMN_GAP: &str = "  ";
const EMPTY_LIST: &str = "Nenhum registro encontrado.";

/// A record that renders as one table row.
pub trait Tabular {
    const HEADERS: &'static [&'static str];

    fn cells(&self) -> Vec<String>;

    /// Inactive or unpublished rows are dimmed.
    fn is_dimmed(&self) -> bool {
        false
    }
}

impl Tabular for User {
    const HEADERS: &'static [&'static str] = &["ID", "Nome", "E-mail", "Papel", "Status", "Criado"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.role.to_string(),
            self.status().to_string(),
            format_time_ago(self.created_at),
        ]
    }

    fn is_dimmed(&self) -> bool {
        !self.active
    }
}

impl Tabular for Post {
    const HEADERS: &'static [&'static str] = &["ID", "Título", "Autor", "Status", "Criado"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.author.clone(),
            self.status().to_string(),
            format_time_ago(self.created_at),
        ]
    }

    fn is_dimmed(&self) -> bool {
        self.status == PostStatus::Draft
    }
}

impl Tabular for PastoralGroup {
    const HEADERS: &'static [&'static str] = &["ID", "Nome", "Coordenador", "Reunião", "Status"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.coordinator.clone(),
            self.meeting.clone(),
            self.status().to_string(),
        ]
    }

    fn is_dimmed(&self) -> bool {
        !self.active
    }
}

impl Tabular for Member {
    const HEADERS: &'static [&'static str] =
        &["ID", "Nome", "E-mail", "Telefone", "Pastoral", "Papel", "Status"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.email.clone(),
            self.phone.clone(),
            self.group_id.to_string(),
            self.role.to_string(),
            self.status().to_string(),
        ]
    }

    fn is_dimmed(&self) -> bool {
        !self.active
    }
}

impl Tabular for Event {
    const HEADERS: &'static [&'static str] =
        &["ID", "Título", "Data", "Local", "Categoria", "Inscritos"];

    fn cells(&self) -> Vec<String> {
        let enrolled = match self.max_participants {
            Some(max) => format!("{}/{}", self.participants.len(), max),
            None => self.participants.len().to_string(),
        };
        vec![
            self.id.to_string(),
            self.title.clone(),
            self.date.format("%d/%m/%Y %H:%M").to_string(),
            self.location.clone(),
            self.category.to_string(),
            enrolled,
        ]
    }

    fn is_dimmed(&self) -> bool {
        self.is_full()
    }
}

pub fn render_table<R: Tabular>(records: &[R]) -> String {
    render_table_internal(records, colored::control::SHOULD_COLORIZE.should_colorize())
}

fn render_table_internal<R: Tabular>(records: &[R], use_color: bool) -> String {
    if records.is_empty() {
        return format!("{}\n", EMPTY_LIST);
    }

    let rows: Vec<Vec<String>> = records
        .iter()
        .map(|r| {
            r.cells()
                .into_iter()
                .map(|cell| truncate_to_width(&cell, MAX_CELL_WIDTH))
                .collect()
        })
        .collect();

    let mut widths: Vec<usize> = R::HEADERS.iter().map(|h| h.width()).collect();
    for row in &rows {
        for (i, cell) in row.iter().enumerate() {
            widths[i] = widths[i].max(cell.width());
        }
    }

    let mut output = String::new();
    let header = layout_line(R::HEADERS.iter().copied(), &widths);
    if use_color {
        output.push_str(&header.bold().to_string());
    } else {
        output.push_str(&header);
    }
    output.push('\n');

    for (record, row) in records.iter().zip(&rows) {
        let line = layout_line(row.iter().map(String::as_str), &widths);
        if use_color && record.is_dimmed() {
            output.push_str(&line.dimmed().to_string());
        } else {
            output.push_str(&line);
        }
        output.push('\n');
    }

    output
}

fn layout_line<'a>(cells: impl Iterator<Item = &'a str>, widths: &[usize]) -> String {
    let mut line = String::new();
    for (i, cell) in cells.enumerate() {
        if i > 0 {
            line.push_str(COLUMN_GAP);
        }
        line.push_str(cell);
        let padding = widths[i].saturating_sub(cell.width());
        line.push_str(&" ".repeat(padding));
    }
    line.trim_end().to_string()
}

fn plural(kind: RecordKind) -> &'static str {
    match kind {
        RecordKind::User => "Usuários",
        RecordKind::Post => "Publicações",
        RecordKind::PastoralGroup => "Pastorais",
        RecordKind::Member => "Membros",
        RecordKind::Event => "Eventos",
    }
}

pub fn render_summary(counts: &[KindCount]) -> String {
    let label_width = counts
        .iter()
        .map(|c| plural(c.kind).width())
        .max()
        .unwrap_or(0);

    let mut output = String::new();
    for count in counts {
        let label = plural(count.kind);
        let padding = " ".repeat(label_width.saturating_sub(label.width()));
        output.push_str(&format!("{}{}  {:>4}", label, padding, count.total));
        if count.visible != count.total {
            output.push_str(&format!("  ({} visíveis)", count.visible));
        }
        output.push('\n');
    }
    output
}

pub fn render_config(config: &ParishConfig) -> String {
    let mut output = String::new();
    for key in KEYS {
        if let Some(value) = config.get(key) {
            output.push_str(&format!("{} = {}\n", key, value));
        }
    }
    output
}

pub fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
        }
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    formatter.convert(duration.to_std().unwrap_or_default())
}
