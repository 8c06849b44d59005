use ratatui::layout::{Alignment, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Clear, Paragraph, Wrap};
use ratatui::Frame;

pub mod format;
pub mod layout;
pub mod tabs;
pub mod theme;
pub mod widgets;

use crate::app::{App, InputMode, StatusLevel, Tab};
use crate::ui::widgets::SidebarItem;

pub const APP_TITLE: &str = "GREEN GARDEN";
pub const HEADER_TITLE: &str = "Inventory Dashboard";
pub const SEARCH_PLACEHOLDER: &str = "Search";

pub fn draw(f: &mut Frame, app: &App) {
    let areas = layout::areas(f.size());

    draw_sidebar(f, areas, app);
    draw_header(f, areas);
    tabs::render_content(f, areas.content, app);
    draw_status_line(f, areas.status_line, app);
    draw_command_line(f, areas.command_line, app);

    if app.help_open {
        draw_help_popup(f, areas.size, app);
    }
}

fn draw_sidebar(f: &mut Frame, areas: layout::UiAreas, app: &App) {
    f.render_widget(
        Block::default().style(Style::default().bg(theme::SIDEBAR_BG)),
        areas.sidebar,
    );

    let title = Paragraph::new(Line::from(Span::styled(
        APP_TITLE,
        Style::default()
            .fg(Color::White)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center)
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, areas.sidebar_title);

    for (i, tab) in Tab::ALL.iter().enumerate() {
        let Some(rect) = layout::sidebar_item_rect(areas.sidebar_nav, i) else {
            break;
        };
        f.render_widget(
            SidebarItem::new(tab.title(), tab.shortcut(), *tab == app.active_tab),
            rect,
        );
    }
}

fn draw_header(f: &mut Frame, areas: layout::UiAreas) {
    let title = Paragraph::new(Line::from(Span::styled(
        HEADER_TITLE,
        Style::default().add_modifier(Modifier::BOLD),
    )))
    .block(Block::default().borders(Borders::BOTTOM));
    f.render_widget(title, areas.header_title);

    // Inert: drawn, never focused.
    let search = Paragraph::new(Span::styled(
        SEARCH_PLACEHOLDER,
        Style::default().fg(theme::MUTED),
    ))
    .block(Block::default().borders(Borders::ALL));
    f.render_widget(search, areas.search);
}

fn draw_status_line(f: &mut Frame, area: Rect, app: &App) {
    let mut spans = vec![
        Span::styled("Tab ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.active_tab.title())),
        Span::styled("Period ", Style::default().fg(Color::DarkGray)),
        Span::raw(format!("{}  ", app.report_period.title())),
    ];
    if let Some(board) = app.integrations.as_ref() {
        if let Some(card) = board.selected_card() {
            spans.push(Span::styled("Card ", Style::default().fg(Color::DarkGray)));
            spans.push(Span::raw(format!("{}  ", card.integration().name)));
        }
    }
    if let Some(hover) = app.hover {
        spans.push(Span::styled("Cursor ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::raw(format!("{:?} #{}", hover.chart, hover.index + 1)));
    }

    let paragraph = Paragraph::new(Line::from(spans))
        .style(Style::default().fg(Color::White))
        .alignment(Alignment::Left);
    f.render_widget(paragraph, area);
}

/// Completion hint for a partially typed command
pub fn command_hint(input: &str) -> Option<&'static str> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return None;
    }

    let commands = [
        ("dashboard", "Go to Dashboard"),
        ("stores", "Go to Stores"),
        ("reports", "Go to Reports"),
        ("integrations", "Go to Smarter Integration"),
        ("weekly", "Weekly report"),
        ("monthly", "Monthly report"),
        ("yearly", "Yearly report"),
        ("export", "Export reports: export [json|csv]"),
        ("help", "Toggle help"),
        ("quit", "Quit"),
    ];

    commands
        .iter()
        .find(|(cmd, _)| cmd.starts_with(input.as_str()))
        .map(|(_, desc)| *desc)
}

fn action_hints(app: &App) -> Line<'static> {
    let hints = match app.active_tab {
        Tab::Dashboard | Tab::Stores => "←/→ cursor  c chart  1-4 tabs  : command  ? help  q quit",
        Tab::Reports => "w/m/y period  ←/→ cycle  : command  ? help  q quit",
        Tab::SmarterIntegration => {
            "j/k select  Enter recommendation  a approve  v review  y copy  ? help"
        }
    };
    Line::from(Span::styled(hints, Style::default().fg(Color::DarkGray)))
}

fn draw_command_line(f: &mut Frame, area: Rect, app: &App) {
    let content = match app.input_mode {
        InputMode::Command => {
            let hint_text = command_hint(&app.command.input)
                .unwrap_or("dashboard | stores | reports | integrations | export");
            Line::from(vec![
                Span::styled(": ", Style::default().fg(Color::Yellow)),
                Span::raw(app.command.input.clone()),
                Span::styled(
                    format!("  {hint_text}"),
                    Style::default().fg(Color::DarkGray),
                ),
            ])
        }
        InputMode::Normal => match app.status_text() {
            Some((text, level)) => {
                let color = match level {
                    StatusLevel::Info => Color::LightGreen,
                    StatusLevel::Warn => Color::LightYellow,
                    StatusLevel::Error => Color::LightRed,
                };
                Line::from(vec![
                    Span::styled("msg: ", Style::default().fg(Color::DarkGray)),
                    Span::styled(text.to_string(), Style::default().fg(color)),
                ])
            }
            None => action_hints(app),
        },
    };

    let paragraph = Paragraph::new(content).style(Style::default().fg(Color::White));
    f.render_widget(paragraph, area);
}

fn draw_help_popup(f: &mut Frame, area: Rect, app: &App) {
    let popup_area = layout::centered_rect(64, 70, area);
    f.render_widget(Clear, popup_area);

    let lines = vec![
        Line::from("Navigation"),
        Line::from("  1-4        Jump to tab"),
        Line::from("  [ / ]      Prev/Next tab (also Tab / Shift-Tab)"),
        Line::from("  Mouse      Click tabs, periods, cards; hover charts"),
        Line::from(""),
        Line::from("Charts (Dashboard, Stores)"),
        Line::from("  ← / →      Move cursor"),
        Line::from("  c          Next chart"),
        Line::from(""),
        Line::from("Reports"),
        Line::from("  w / m / y  Weekly / Monthly / Yearly"),
        Line::from("  ← / →      Cycle period"),
        Line::from(""),
        Line::from("Smarter Integration"),
        Line::from("  j / k      Select card"),
        Line::from("  Enter      Show/Hide AI Recommendation"),
        Line::from("  a / v      Approve / Review"),
        Line::from("  y          Copy AI insight"),
        Line::from(""),
        Line::from("  :          Command line (export json|csv)"),
        Line::from("  ?          Toggle help"),
        Line::from("  Esc        Close"),
        Line::from("  q          Quit"),
        Line::from(""),
        Line::from(format!("Active tab: {}", app.active_tab.title())),
    ];

    let paragraph = Paragraph::new(Text::from(lines))
        .block(Block::default().title("Help").borders(Borders::ALL))
        .alignment(Alignment::Left)
        .wrap(Wrap { trim: true });

    f.render_widget(paragraph, popup_area);
}
