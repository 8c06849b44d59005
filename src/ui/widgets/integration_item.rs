//! Compact integration row with a tooltip
//!
//! Used instead of the card grid when the board cannot fit every card. The
//! rows are a one-line index; the tooltip pane shows the selected card whole.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Clear, Paragraph, Widget};

use crate::data::Integration;
use crate::modules::integrations::IntegrationCard;
use crate::ui::theme;
use crate::ui::widgets::IntegrationCardView;

const ITEM_BG: Color = Color::Rgb(230, 255, 237);

pub struct IntegrationItem<'a> {
    integration: &'a Integration,
    selected: bool,
}

impl<'a> IntegrationItem<'a> {
    pub fn new(integration: &'a Integration) -> Self {
        Self {
            integration,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }
}

impl Widget for IntegrationItem<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let mut style = Style::default().fg(Color::Black).bg(ITEM_BG);
        if self.selected {
            style = style.add_modifier(Modifier::BOLD | Modifier::REVERSED);
        }
        let line = Line::from(vec![
            Span::raw(format!(" {} ", theme::icon_glyph(self.integration.icon))),
            Span::raw(self.integration.name),
            Span::styled(
                format!("  {}", self.integration.status.label()),
                Style::default().fg(theme::status_color(self.integration.status)),
            ),
        ]);
        Paragraph::new(line).style(style).render(area, buf);
    }
}

/// Details of the selected item, drawn in the pane under the list
pub struct IntegrationTooltip<'a> {
    card: &'a IntegrationCard,
}

impl<'a> IntegrationTooltip<'a> {
    pub fn new(card: &'a IntegrationCard) -> Self {
        Self { card }
    }
}

impl Widget for IntegrationTooltip<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Clear.render(area, buf);
        IntegrationCardView::new(self.card)
            .selected(true)
            .render(area, buf);
    }
}
