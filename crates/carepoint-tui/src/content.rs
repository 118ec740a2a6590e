//! Line-based screen content
//!
//! Every screen is built as a list of one-row lines plus the rows that can be
//! selected. Rendering, keyboard selection and mouse hit-testing all share
//! the same row layout.

use carepoint_core::navigation::Route;
use carepoint_core::profile::ProfileField;
use chrono::{DateTime, Utc};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};
use uuid::Uuid;

/// What activating a selectable row does
#[derive(Debug, Clone, PartialEq)]
pub enum Selectable {
    Open(Route),
    Slot(DateTime<Utc>),
    Field(ProfileField),
    Appointment(Uuid),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ItemRow {
    pub row: u16,
    pub height: u16,
    pub target: Selectable,
}

impl ItemRow {
    pub fn contains(&self, row: u16) -> bool {
        row >= self.row && row < self.row + self.height
    }
}

pub struct ScreenContent {
    lines: Vec<Line<'static>>,
    items: Vec<ItemRow>,
    selected: usize,
    selection_style: Style,
    width: u16,
}

impl ScreenContent {
    pub fn new(width: u16, selected: usize, selection_style: Style) -> Self {
        Self {
            lines: Vec::new(),
            items: Vec::new(),
            selected,
            selection_style,
            width,
        }
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn line(&mut self, line: impl Into<Line<'static>>) {
        self.lines.push(line.into());
    }

    pub fn blank(&mut self) {
        self.lines.push(Line::default());
    }

    pub fn heading(&mut self, text: impl Into<String>, style: Style) {
        self.lines.push(Line::from(Span::styled(
            text.into(),
            style.add_modifier(Modifier::BOLD),
        )));
    }

    /// Word-wrapped paragraph
    pub fn paragraph(&mut self, text: &str, indent: u16, style: Style) {
        let pad = " ".repeat(indent as usize);
        for row in wrap_text(text, self.width.saturating_sub(indent).max(1) as usize) {
            self.lines.push(Line::from(Span::styled(format!("{}{}", pad, row), style)));
        }
    }

    /// Add a selectable block of rows
    ///
    /// The block currently selected gets a marker and the selection style.
    pub fn item(&mut self, lines: Vec<Line<'static>>, target: Selectable) {
        let index = self.items.len();
        let is_selected = index == self.selected;
        let row = self.lines.len() as u16;
        let height = lines.len().max(1) as u16;

        if lines.is_empty() {
            self.lines.push(Line::default());
        }
        for line in lines {
            let marker = if is_selected { "▌ " } else { "  " };
            let style = line.style;
            let mut spans = vec![Span::styled(marker, self.selection_style.remove_modifier(Modifier::BOLD))];
            spans.extend(line.spans);
            let mut line = Line::from(spans).style(style);
            if is_selected {
                line = line.patch_style(self.selection_style);
            }
            self.lines.push(line);
        }

        self.items.push(ItemRow { row, height, target });
    }

    pub fn height(&self) -> u16 {
        self.lines.len().min(u16::MAX as usize) as u16
    }

    pub fn lines(&self) -> &[Line<'static>] {
        &self.lines
    }

    pub fn items(&self) -> &[ItemRow] {
        &self.items
    }

    /// Index of the item covering content `row`
    pub fn item_at_row(&self, row: u16) -> Option<usize> {
        self.items.iter().position(|item| item.contains(row))
    }
}

/// Greedy word wrap by display width
pub fn wrap_text(text: &str, width: usize) -> Vec<String> {
    let width = width.max(1);
    let mut rows = Vec::new();
    let mut current = String::new();

    for word in text.split_whitespace() {
        let needed = if current.is_empty() {
            word.width()
        } else {
            current.width() + 1 + word.width()
        };
        if needed > width && !current.is_empty() {
            rows.push(std::mem::take(&mut current));
        }
        if word.width() > width {
            // Hard-break words longer than a row
            for c in word.chars() {
                if current.width() + c.width().unwrap_or(0) > width {
                    rows.push(std::mem::take(&mut current));
                }
                current.push(c);
            }
            continue;
        }
        if !current.is_empty() {
            current.push(' ');
        }
        current.push_str(word);
    }
    if !current.is_empty() || rows.is_empty() {
        rows.push(current);
    }
    rows
}

/// Truncate to `max` display columns with an ellipsis
pub fn truncate_str(s: &str, max: usize) -> String {
    if s.width() <= max {
        return s.to_string();
    }
    let mut out = String::new();
    for c in s.chars() {
        if out.width() + c.width().unwrap_or(0) + 1 > max {
            break;
        }
        out.push(c);
    }
    out.push('…');
    out
}
