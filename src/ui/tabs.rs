//! Content pane, one renderer per tab
//!
//! Everything here reads `App` and draws. No state is changed while drawing.

use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::text::{Line, Span, Text};
use ratatui::widgets::{Block, Borders, Paragraph, Wrap};
use ratatui::Frame;

use crate::app::{App, ChartId, Tab};
use crate::data::{
    ReportPeriod, DASHBOARD_KPIS, DEMAND_FORECAST, INTEGRATION_KPIS, INVENTORY, STORES,
    WORKFLOWS, WORK_QUEUES,
};
use crate::modules::integrations::IntegrationBoard;
use crate::ui::layout;
use crate::ui::widgets::{
    IntegrationCardView, IntegrationItem, IntegrationTooltip, InventoryChart, KpiCard,
    StoreComparisonChart, WeatherDemandChart,
};
use crate::ui::{format, theme};

pub const STORES_DETAIL: &str = "Detailed statistics on inventory management, including waste \
reduction, stockout occurrences, and inventory turnover rates.";
pub const QR_ACCESS_TEXT: &str =
    "Scan this QR code to access detailed product origin and quality information.";
pub const QR_TRUST_TEXT: &str = "This QR code integrates with our blockchain-based IBM Food \
Trust system for complete supply chain transparency.";

const QR_GLYPH: [&str; 3] = ["█▀▀█ ▄▀ █▀▀█", "█▄▄█ ▀▄ ▄ ▀▄", "█▄▄█ ▄█▀ ▀▄█"];

pub fn render_content(f: &mut Frame, area: Rect, app: &App) {
    match app.active_tab {
        Tab::Dashboard => draw_dashboard(f, area, app),
        Tab::Stores => draw_stores(f, area, app),
        Tab::Reports => draw_reports(f, area, app.report_period),
        Tab::SmarterIntegration => draw_integrations(f, area, app.integrations.as_ref()),
    }
}

fn hover_index(app: &App, chart: ChartId) -> Option<usize> {
    app.hover
        .filter(|hover| hover.chart == chart)
        .map(|hover| hover.index)
}

fn section_block(title: &str) -> Block<'static> {
    Block::default().borders(Borders::ALL).title(Span::styled(
        title.to_string(),
        Style::default().add_modifier(Modifier::BOLD),
    ))
}

fn draw_kpi_row(f: &mut Frame, areas: &[Rect], tiles: &[crate::data::KpiTile]) {
    for (tile, area) in tiles.iter().zip(areas.iter()) {
        f.render_widget(KpiCard::new(tile), *area);
    }
}

fn draw_dashboard(f: &mut Frame, area: Rect, app: &App) {
    let areas = layout::dashboard_layout(area, DASHBOARD_KPIS.len(), WORK_QUEUES.len());
    draw_kpi_row(f, &areas.kpis, &DASHBOARD_KPIS);

    f.render_widget(
        InventoryChart::new(&INVENTORY).hover(hover_index(app, ChartId::Inventory)),
        areas.inventory_chart,
    );
    f.render_widget(
        WeatherDemandChart::new(&DEMAND_FORECAST).hover(hover_index(app, ChartId::Demand)),
        areas.demand_chart,
    );

    draw_workflows(f, areas.workflows);
    draw_work_queues(f, areas.queues);
}

fn draw_workflows(f: &mut Frame, area: Rect) {
    let block = section_block("Intelligent Workflows");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
        .split(inner);
    let cells: Vec<Rect> = rows
        .iter()
        .flat_map(|row| {
            Layout::default()
                .direction(Direction::Horizontal)
                .constraints([Constraint::Ratio(1, 2), Constraint::Ratio(1, 2)])
                .split(*row)
                .to_vec()
        })
        .collect();

    for (workflow, cell) in WORKFLOWS.iter().zip(cells) {
        let text = Line::from(vec![
            Span::styled("● ", Style::default().fg(theme::ACCENT)),
            Span::raw(workflow.text),
        ]);
        f.render_widget(
            Paragraph::new(text)
                .style(Style::default().bg(theme::TILE_BG).fg(Color::Black))
                .wrap(Wrap { trim: true }),
            cell,
        );
    }
}

fn draw_work_queues(f: &mut Frame, area: Rect) {
    let block = section_block("Work Queues");
    let inner = block.inner(area);
    f.render_widget(block, area);

    // Buttons are drawn but never receive input.
    for (i, item) in WORK_QUEUES.iter().enumerate() {
        let y = inner.y + i as u16;
        if y >= inner.y + inner.height {
            break;
        }
        let button = format!("[ {} ]", item.action);
        let button_width = button.chars().count() as u16;
        let text_width = inner.width.saturating_sub(button_width + 1) as usize;
        let row = Rect {
            x: inner.x,
            y,
            width: inner.width,
            height: 1,
        };
        let line = Line::from(vec![
            Span::raw(format::truncate(item.text, text_width)),
            Span::raw(" "),
        ]);
        f.render_widget(Paragraph::new(line), row);
        f.render_widget(
            Paragraph::new(Span::styled(
                button,
                Style::default().fg(theme::ACCENT).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Right),
            row,
        );
    }
}

fn draw_stores(f: &mut Frame, area: Rect, app: &App) {
    let areas = layout::stores_layout(area);
    f.render_widget(
        StoreComparisonChart::new(&STORES).hover(hover_index(app, ChartId::Stores)),
        areas.chart,
    );
    f.render_widget(
        Paragraph::new(STORES_DETAIL)
            .block(section_block("Detailed Statistics"))
            .wrap(Wrap { trim: true }),
        areas.details,
    );
}

/// Button style for a period selector; exactly one is active.
pub fn period_button_style(active: bool) -> Style {
    if active {
        Style::default()
            .fg(Color::White)
            .bg(theme::ACCENT)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(theme::ACCENT).bg(theme::TILE_BG)
    }
}

fn draw_reports(f: &mut Frame, area: Rect, period: ReportPeriod) {
    let areas = layout::reports_layout(area, ReportPeriod::ALL.len());

    for (candidate, rect) in ReportPeriod::ALL.iter().zip(areas.buttons.iter()) {
        if rect.height == 0 {
            continue;
        }
        let label = format!("{} ({})", candidate.title(), candidate.shortcut());
        f.render_widget(
            Paragraph::new(label)
                .alignment(Alignment::Center)
                .style(period_button_style(*candidate == period)),
            Rect {
                y: rect.y + rect.height / 2,
                height: 1,
                ..*rect
            },
        );
    }

    f.render_widget(
        section_block(&format!("{} Summary", period.title())),
        areas.summary,
    );

    let summary = period.summary();
    let overall = summary
        .comparison()
        .map(|value| format!("{value}%"))
        .unwrap_or_else(|| "--".to_string());
    let tiles = [
        ("Total Sales", format::currency(summary.total_sales)),
        ("Wastage Reduction", format!("{}%", summary.wastage_reduction)),
        ("Stockout Reduction", format!("{}%", summary.stockout_reduction)),
        ("Overall Performance", overall),
    ];
    for ((title, value), rect) in tiles.into_iter().zip(areas.tiles.iter()) {
        let text = Text::from(vec![
            Line::from(Span::styled(title, Style::default().fg(theme::MUTED))),
            Line::from(Span::styled(
                value,
                Style::default().add_modifier(Modifier::BOLD),
            )),
        ]);
        f.render_widget(
            Paragraph::new(text).block(Block::default().borders(Borders::ALL)),
            *rect,
        );
    }
}

fn draw_integrations(f: &mut Frame, area: Rect, board: Option<&IntegrationBoard>) {
    let cards = board.map_or(&[][..], |board| board.cards());
    let areas = layout::integrations_layout(area, INTEGRATION_KPIS.len(), cards);
    draw_kpi_row(f, &areas.kpis, &INTEGRATION_KPIS);

    f.render_widget(
        section_block("System Integrations and AI Insights"),
        areas.board,
    );
    if let Some(board) = board {
        if let Some(compact) = areas.compact {
            draw_compact_board(f, compact, board);
        } else {
            for (i, (card, rect)) in board.cards().iter().zip(areas.cards.iter()).enumerate() {
                f.render_widget(
                    IntegrationCardView::new(card).selected(i == board.selected()),
                    *rect,
                );
            }
        }
    }

    if let Some(traceability) = areas.traceability {
        draw_traceability(f, traceability);
    }
}

fn draw_compact_board(f: &mut Frame, areas: layout::CompactAreas, board: &IntegrationBoard) {
    let list = areas.list;
    for (i, card) in board.cards().iter().enumerate() {
        let y = list.y + i as u16;
        if y >= list.y + list.height {
            break;
        }
        let row = Rect {
            x: list.x,
            y,
            width: list.width,
            height: 1,
        };
        f.render_widget(
            IntegrationItem::new(card.integration()).selected(i == board.selected()),
            row,
        );
    }

    if areas.tooltip.height == 0 {
        return;
    }
    if let Some(card) = board.selected_card() {
        f.render_widget(IntegrationTooltip::new(card), areas.tooltip);
    }
}

fn draw_traceability(f: &mut Frame, area: Rect) {
    let block = section_block("Product Traceability");
    let inner = block.inner(area);
    f.render_widget(block, area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(14), Constraint::Min(0)])
        .split(inner);

    let qr: Vec<Line> = QR_GLYPH.iter().map(|row| Line::from(*row)).collect();
    f.render_widget(Paragraph::new(Text::from(qr)), columns[0]);
    f.render_widget(
        Paragraph::new(Text::from(vec![
            Line::from(QR_ACCESS_TEXT),
            Line::from(Span::styled(QR_TRUST_TEXT, Style::default().fg(theme::MUTED))),
        ]))
        .wrap(Wrap { trim: true }),
        columns[1],
    );
}
