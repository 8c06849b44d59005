//! Integration card
//!
//! Draws one card from the board. All state lives in
//! [`IntegrationCard`]; this widget only reads it.
//!
//! Text is wrapped here rather than by the paragraph, so the number of lines
//! built for a width is exactly the number of rows the card needs.

use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, BorderType, Borders, Paragraph, Widget};

use crate::data::Integration;
use crate::modules::integrations::{ActionTaken, IntegrationCard};
use crate::ui::{format, theme};

pub const SHOW_LABEL: &str = "[ Show AI Recommendation ]";
pub const HIDE_LABEL: &str = "[ Hide AI Recommendation ]";
pub const RECOMMENDATION_HEADING: &str = "AI Recommendation:";

const APPROVE_BUTTON: &str = " Approve (a) ";
const REVIEW_BUTTON: &str = " Review (v) ";

pub struct IntegrationCardView<'a> {
    card: &'a IntegrationCard,
    selected: bool,
}

impl<'a> IntegrationCardView<'a> {
    pub fn new(card: &'a IntegrationCard) -> Self {
        Self {
            card,
            selected: false,
        }
    }

    pub fn selected(mut self, selected: bool) -> Self {
        self.selected = selected;
        self
    }

    /// Card body wrapped to `width` columns, borders excluded.
    pub fn lines(&self, width: usize) -> Vec<Line<'static>> {
        card_lines(
            self.card.integration(),
            self.card.is_expanded(),
            self.card.action_taken(),
            width,
        )
    }

    /// Rows needed to draw the card, borders included, at `width` columns.
    pub fn height(&self, width: u16) -> u16 {
        outer_height(self.lines(width.saturating_sub(2) as usize).len())
    }

    /// Height of `card` in its largest state, so the layout does not jump
    /// when the recommendation is opened.
    pub fn tallest_height(card: &IntegrationCard, width: u16) -> u16 {
        let lines = card_lines(
            card.integration(),
            card.can_expand(),
            ActionTaken::None,
            width.saturating_sub(2) as usize,
        );
        outer_height(lines.len())
    }
}

fn outer_height(lines: usize) -> u16 {
    u16::try_from(lines).unwrap_or(u16::MAX).saturating_add(2)
}

fn wrapped(text: &str, width: usize, style: Style) -> impl Iterator<Item = Line<'static>> {
    format::wrap(text, width)
        .into_iter()
        .map(move |row| Line::from(Span::styled(row, style)))
}

fn card_lines(
    integration: &Integration,
    expanded: bool,
    action: ActionTaken,
    width: usize,
) -> Vec<Line<'static>> {
    let status_color = theme::status_color(integration.status);
    let (trend, trend_color) = theme::trend_glyph(integration.kpi.trend);

    let glyph = format!("{} ", theme::icon_glyph(integration.icon));
    let name_width = width.saturating_sub(glyph.chars().count());
    let mut lines = vec![Line::from(vec![
        Span::styled(glyph, Style::default().fg(theme::ACCENT)),
        Span::styled(
            format::truncate(integration.name, name_width),
            Style::default().add_modifier(Modifier::BOLD),
        ),
    ])];
    lines.extend(wrapped(
        integration.description,
        width,
        Style::default().fg(theme::MUTED),
    ));

    let badge = Span::styled(
        format!(" {} ", integration.status.label()),
        Style::default()
            .fg(Color::Black)
            .bg(status_color)
            .add_modifier(Modifier::BOLD),
    );
    let kpi = vec![
        Span::raw(format!("{}: ", integration.kpi.label)),
        Span::styled(integration.kpi.value, Style::default().fg(theme::ACCENT)),
        Span::styled(format!(" {trend}"), Style::default().fg(trend_color)),
    ];
    let kpi_width: usize = kpi.iter().map(|span| span.content.chars().count()).sum();
    if badge.content.chars().count() + 2 + kpi_width <= width {
        let mut spans = vec![badge, Span::raw("  ")];
        spans.extend(kpi);
        lines.push(Line::from(spans));
    } else {
        lines.push(Line::from(badge));
        lines.push(Line::from(kpi));
    }

    lines.extend(wrapped(integration.ai_insight, width, Style::default()));

    let Some(recommendation) = integration.ai_recommendation else {
        return lines;
    };

    lines.push(Line::from(Span::styled(
        if expanded { HIDE_LABEL } else { SHOW_LABEL },
        Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD),
    )));
    if !expanded {
        return lines;
    }

    lines.push(Line::from(Span::styled(
        RECOMMENDATION_HEADING,
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.extend(wrapped(recommendation, width, Style::default()));

    match action {
        ActionTaken::None => {
            let approve = Span::styled(
                APPROVE_BUTTON,
                Style::default().fg(Color::White).bg(theme::ACCENT),
            );
            let review = Span::styled(
                REVIEW_BUTTON,
                Style::default().fg(Color::White).bg(Color::DarkGray),
            );
            if APPROVE_BUTTON.len() + 1 + REVIEW_BUTTON.len() <= width {
                lines.push(Line::from(vec![approve, Span::raw(" "), review]));
            } else {
                lines.push(Line::from(approve));
                lines.push(Line::from(review));
            }
        }
        taken => lines.push(Line::from(vec![
            Span::styled("✔ ", Style::default().fg(theme::POSITIVE)),
            Span::styled(
                format!("Action taken: {}", taken.label()),
                Style::default()
                    .fg(theme::action_color(taken))
                    .add_modifier(Modifier::BOLD),
            ),
        ])),
    }
    lines
}

impl Widget for IntegrationCardView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let status_color = theme::status_color(self.card.integration().status);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(if self.selected {
                BorderType::Thick
            } else {
                BorderType::Rounded
            })
            .border_style(Style::default().fg(status_color));
        let inner = block.inner(area);
        block.render(area, buf);

        // Short of rows: keep the title and drop from the top of the body, so
        // the toggle, buttons and confirmation stay on screen.
        let mut lines = self.lines(inner.width as usize);
        let overflow = lines.len().saturating_sub(inner.height as usize);
        if overflow > 0 {
            let end = (1 + overflow).min(lines.len());
            lines.drain(1.min(end)..end);
        }
        Paragraph::new(Text::from(lines)).render(inner, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::INTEGRATIONS;

    fn text_of(lines: &[Line]) -> String {
        lines
            .iter()
            .map(|line| {
                line.spans
                    .iter()
                    .map(|s| s.content.as_ref())
                    .collect::<String>()
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn rendered(view: IntegrationCardView, width: u16, height: u16) -> String {
        let area = Rect { x: 0, y: 0, width, height };
        let mut buf = Buffer::empty(area);
        view.render(area, &mut buf);
        (0..height)
            .map(|y| (0..width).map(|x| buf.get(x, y).symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn test_no_toggle_without_recommendation() {
        for integration in INTEGRATIONS.iter().filter(|i| !i.has_recommendation()) {
            let card = IntegrationCard::new(integration);
            let text = text_of(&IntegrationCardView::new(&card).lines(40));
            assert!(!text.contains(SHOW_LABEL));
            assert!(!text.contains(HIDE_LABEL));
        }
    }

    #[test]
    fn test_expanded_card_shows_buttons_then_confirmation() {
        let mut card = IntegrationCard::new(&INTEGRATIONS[4]);
        let text = text_of(&IntegrationCardView::new(&card).lines(40));
        assert!(text.contains(SHOW_LABEL));
        assert!(!text.contains(RECOMMENDATION_HEADING));

        card.toggle();
        let text = text_of(&IntegrationCardView::new(&card).lines(40));
        assert!(text.contains(HIDE_LABEL));
        assert!(text.contains("Approve (a)"));

        card.take_action(ActionTaken::Review);
        let text = text_of(&IntegrationCardView::new(&card).lines(40));
        assert!(!text.contains("Approve (a)"));
        assert!(text.contains("Action taken: Review"));
    }

    #[test]
    fn test_status_badge_and_trend() {
        let card = IntegrationCard::new(&INTEGRATIONS[2]);
        let lines = IntegrationCardView::new(&card).lines(80);
        let badge = &lines[2].spans[0];
        assert_eq!(badge.content, " Issue ");
        assert_eq!(badge.style.bg, Some(theme::status_color(crate::data::Status::Issue)));
        assert_eq!(lines[2].spans[4].content, " ▼");
    }

    #[test]
    fn test_lines_fit_width() {
        for integration in INTEGRATIONS.iter() {
            let mut card = IntegrationCard::new(integration);
            card.toggle();
            for width in [28, 41, 88] {
                for line in IntegrationCardView::new(&card).lines(width) {
                    assert!(line.width() <= width, "{} at {width}", integration.name);
                }
            }
        }
    }

    #[test]
    fn test_tallest_height_covers_every_state() {
        for integration in INTEGRATIONS.iter() {
            let mut card = IntegrationCard::new(integration);
            let tallest = IntegrationCardView::tallest_height(&card, 43);
            assert!(IntegrationCardView::new(&card).height(43) <= tallest);
            if card.toggle() {
                assert_eq!(IntegrationCardView::new(&card).height(43), tallest);
                card.take_action(ActionTaken::Approve);
                assert_eq!(IntegrationCardView::new(&card).height(43), tallest);
            }
        }
    }

    #[test]
    fn test_card_drawn_at_measured_height_shows_everything() {
        let mut card = IntegrationCard::new(&INTEGRATIONS[1]);
        card.toggle();
        let view = IntegrationCardView::new(&card);
        let height = view.height(43);
        let text = rendered(view, 43, height);
        assert!(text.contains("Warehouse Management"));
        assert!(text.contains("Recommend optimizing"));
        assert!(text.contains("Hide AI Recommendation"));
        assert!(text.contains(RECOMMENDATION_HEADING));
        assert!(text.contains("Implement new slotting"));
        assert!(text.contains("Approve (a)"));
        assert!(text.contains("Review (v)"));
    }

    #[test]
    fn test_short_card_keeps_title_and_controls() {
        let mut card = IntegrationCard::new(&INTEGRATIONS[1]);
        card.toggle();
        let text = rendered(IntegrationCardView::new(&card), 43, 8);
        assert!(text.contains("Warehouse Management"));
        assert!(text.contains("Approve (a)"));
        assert!(!text.contains("Warehouse operations"));
    }
}
