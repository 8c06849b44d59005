//! Headline figure with a signed week-over-week change

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Widget};

use crate::data::KpiTile;
use crate::ui::{format, theme};

pub struct KpiCard<'a> {
    tile: &'a KpiTile,
}

impl<'a> KpiCard<'a> {
    pub fn new(tile: &'a KpiTile) -> Self {
        Self { tile }
    }

    pub fn lines(&self) -> Vec<Line<'a>> {
        vec![
            Line::from(Span::styled(self.tile.title, Style::default().fg(theme::MUTED))),
            Line::from(Span::styled(
                self.tile.value,
                Style::default().add_modifier(Modifier::BOLD),
            )),
            Line::from(Span::styled(
                format::change_line(self.tile.change),
                Style::default().fg(theme::change_color(self.tile.change)),
            )),
        ]
    }
}

impl Widget for KpiCard<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let paragraph = Paragraph::new(Text::from(self.lines()))
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Left);
        paragraph.render(area, buf);
    }
}
