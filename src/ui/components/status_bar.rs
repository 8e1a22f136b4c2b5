//! Status bar component

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Style},
    widgets::{Block, Paragraph},
    Frame,
};

use crate::constants::STATUS_HINTS;

/// Transient feedback shown in place of the key hints
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StatusMessage {
    Info(String),
    Error(String),
}

/// Status bar component
pub struct StatusBar;

impl StatusBar {
    /// Render the status bar
    pub fn render(f: &mut Frame, area: Rect, message: Option<&StatusMessage>, animating: bool) {
        let (status_text, status_color) = match message {
            Some(StatusMessage::Error(text)) => (text.clone(), Color::Red),
            Some(StatusMessage::Info(text)) => (text.clone(), Color::Green),
            None if animating => ("…".to_string(), Color::Yellow),
            None => (STATUS_HINTS.to_string(), Color::Gray),
        };

        let status_bar = Paragraph::new(status_text)
            .block(Block::default())
            .alignment(Alignment::Center)
            .style(Style::default().fg(status_color));

        f.render_widget(status_bar, area);
    }
}
