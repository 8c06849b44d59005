//! One nav entry in the sidebar

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Paragraph, Widget};

use crate::ui::theme;

pub struct SidebarItem<'a> {
    label: &'a str,
    shortcut: char,
    active: bool,
}

impl<'a> SidebarItem<'a> {
    pub fn new(label: &'a str, shortcut: char, active: bool) -> Self {
        Self {
            label,
            shortcut,
            active,
        }
    }

    pub fn style(&self) -> Style {
        if self.active {
            Style::default()
                .fg(Color::White)
                .bg(theme::SIDEBAR_ACTIVE_BG)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::Gray).bg(theme::SIDEBAR_BG)
        }
    }
}

impl Widget for SidebarItem<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let style = self.style();
        let line = Line::from(vec![
            Span::styled(format!(" {} ", self.shortcut), Style::default().fg(theme::MUTED)),
            Span::raw(self.label),
        ]);
        Paragraph::new(line).style(style).render(area, buf);
    }
}
