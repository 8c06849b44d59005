//! Screen geometry
//!
//! Drawing and mouse hit-testing both go through these functions so a click
//! always lands on what was drawn there.

use ratatui::layout::{Constraint, Direction, Layout, Rect};

use crate::modules::integrations::IntegrationCard;
use crate::ui::widgets::IntegrationCardView;

pub const SIDEBAR_WIDTH: u16 = 28;
pub const SEARCH_WIDTH: u16 = 24;
pub const PERIOD_BUTTON_WIDTH: u16 = 13;
pub const CARD_MIN_WIDTH: u16 = 30;
pub const CARD_COLUMNS: usize = 3;
pub const KPI_HEIGHT: u16 = 5;
pub const TRACE_HEIGHT: u16 = 5;
pub const BOARD_MIN_HEIGHT: u16 = 16;

#[derive(Debug, Clone, Copy)]
pub struct UiAreas {
    pub size: Rect,
    pub sidebar: Rect,
    pub sidebar_title: Rect,
    pub sidebar_nav: Rect,
    pub header: Rect,
    pub header_title: Rect,
    pub search: Rect,
    pub content: Rect,
    pub status_line: Rect,
    pub command_line: Rect,
}

pub fn areas(size: Rect) -> UiAreas {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size);

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(SIDEBAR_WIDTH), Constraint::Min(0)])
        .split(vertical[0]);

    let sidebar_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(main_chunks[0]);

    let pane_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(main_chunks[1]);

    let header_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(SEARCH_WIDTH)])
        .split(pane_chunks[0]);

    UiAreas {
        size,
        sidebar: main_chunks[0],
        sidebar_title: sidebar_chunks[0],
        sidebar_nav: sidebar_chunks[1],
        header: pane_chunks[0],
        header_title: header_chunks[0],
        search: header_chunks[1],
        content: pane_chunks[1],
        status_line: vertical[1],
        command_line: vertical[2],
    }
}

/// Row of the `index`th nav item, one blank row between items.
pub fn sidebar_item_rect(nav: Rect, index: usize) -> Option<Rect> {
    let offset = u16::try_from(index).ok()?.checked_mul(2)?;
    if offset >= nav.height {
        return None;
    }
    Some(Rect {
        x: nav.x.saturating_add(1),
        y: nav.y + offset,
        width: nav.width.saturating_sub(2),
        height: 1,
    })
}

fn even_columns(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let constraints: Vec<Constraint> = (0..count)
        .map(|_| Constraint::Ratio(1, count as u32))
        .collect();
    Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

fn even_rows(area: Rect, count: usize) -> Vec<Rect> {
    if count == 0 {
        return Vec::new();
    }
    let constraints: Vec<Constraint> = (0..count)
        .map(|_| Constraint::Ratio(1, count as u32))
        .collect();
    Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(area)
        .to_vec()
}

#[derive(Debug, Clone)]
pub struct DashboardAreas {
    pub kpis: Vec<Rect>,
    pub inventory_chart: Rect,
    pub demand_chart: Rect,
    pub workflows: Rect,
    pub queues: Rect,
}

pub fn dashboard_layout(content: Rect, kpi_count: usize, queue_count: usize) -> DashboardAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(5),
            Constraint::Min(10),
            Constraint::Length(8),
            Constraint::Length(queue_count as u16 + 2),
        ])
        .split(content);

    let charts = even_columns(rows[1], 2);

    DashboardAreas {
        kpis: even_columns(rows[0], kpi_count),
        inventory_chart: charts[0],
        demand_chart: charts[1],
        workflows: rows[2],
        queues: rows[3],
    }
}

#[derive(Debug, Clone, Copy)]
pub struct StoresAreas {
    pub chart: Rect,
    pub details: Rect,
}

pub fn stores_layout(content: Rect) -> StoresAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(10), Constraint::Length(5)])
        .split(content);
    StoresAreas {
        chart: rows[0],
        details: rows[1],
    }
}

#[derive(Debug, Clone)]
pub struct ReportsAreas {
    pub buttons: Vec<Rect>,
    pub summary: Rect,
    pub tiles: Vec<Rect>,
}

pub fn reports_layout(content: Rect, periods: usize) -> ReportsAreas {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(3), Constraint::Min(0)])
        .split(content);

    let mut constraints = vec![Constraint::Min(0)];
    for i in 0..periods {
        if i > 0 {
            constraints.push(Constraint::Length(1));
        }
        constraints.push(Constraint::Length(PERIOD_BUTTON_WIDTH));
    }
    constraints.push(Constraint::Min(0));
    let button_row = Layout::default()
        .direction(Direction::Horizontal)
        .constraints(constraints)
        .split(rows[0]);
    let buttons = (0..periods).map(|i| button_row[1 + i * 2]).collect();

    let summary = rows[1];
    let inner = inner(summary);
    let tiles = even_rows(inner, 2)
        .into_iter()
        .flat_map(|row| even_columns(row, 2))
        .collect();

    ReportsAreas {
        buttons,
        summary,
        tiles,
    }
}

#[derive(Debug, Clone, Copy)]
pub struct CompactAreas {
    /// One row per card, top to bottom
    pub list: Rect,
    /// Pane under the list showing the selected card
    pub tooltip: Rect,
}

#[derive(Debug, Clone)]
pub struct IntegrationAreas {
    /// Empty when the terminal is too short to spare the row
    pub kpis: Vec<Rect>,
    pub board: Rect,
    /// One rect per card in grid mode; empty when compact
    pub cards: Vec<Rect>,
    pub compact: Option<CompactAreas>,
    pub traceability: Option<Rect>,
}

/// The board keeps at least `BOARD_MIN_HEIGHT` rows. On short terminals the
/// KPI tiles go first, then the traceability panel.
pub fn integrations_layout(
    content: Rect,
    kpi_count: usize,
    cards: &[IntegrationCard],
) -> IntegrationAreas {
    let show_kpis = content.height >= KPI_HEIGHT + BOARD_MIN_HEIGHT;
    let show_trace = content.height >= KPI_HEIGHT + TRACE_HEIGHT + BOARD_MIN_HEIGHT;

    let mut constraints = Vec::with_capacity(3);
    if show_kpis {
        constraints.push(Constraint::Length(KPI_HEIGHT));
    }
    constraints.push(Constraint::Min(0));
    if show_trace {
        constraints.push(Constraint::Length(TRACE_HEIGHT));
    }
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints(constraints)
        .split(content);

    let (kpis, board) = if show_kpis {
        (even_columns(rows[0], kpi_count), rows[1])
    } else {
        (Vec::new(), rows[0])
    };
    let traceability = show_trace.then(|| rows[2]);

    let board_inner = inner(board);
    let (cards, compact) = if cards.is_empty() {
        (Vec::new(), None)
    } else if let Some(grid) = card_grid(board_inner, cards) {
        (grid, None)
    } else {
        (Vec::new(), Some(compact_areas(board_inner, cards.len())))
    };

    IntegrationAreas {
        kpis,
        board,
        cards,
        compact,
        traceability,
    }
}

/// Three columns, each row as tall as its tallest card. `None` when a card
/// would be cut off.
fn card_grid(area: Rect, cards: &[IntegrationCard]) -> Option<Vec<Rect>> {
    if area.width < CARD_MIN_WIDTH * CARD_COLUMNS as u16 {
        return None;
    }
    let columns = even_columns(area, CARD_COLUMNS);
    let bottom = area.y.saturating_add(area.height);

    let mut rects = Vec::with_capacity(cards.len());
    let mut y = area.y;
    for row in cards.chunks(CARD_COLUMNS) {
        let height = row
            .iter()
            .zip(columns.iter())
            .map(|(card, column)| IntegrationCardView::tallest_height(card, column.width))
            .max()
            .unwrap_or(0);
        if y.saturating_add(height) > bottom {
            return None;
        }
        rects.extend(columns.iter().take(row.len()).map(|column| Rect {
            x: column.x,
            y,
            width: column.width,
            height,
        }));
        y += height;
    }
    Some(rects)
}

fn compact_areas(area: Rect, card_count: usize) -> CompactAreas {
    let list_height = u16::try_from(card_count)
        .unwrap_or(u16::MAX)
        .min(area.height);
    CompactAreas {
        list: Rect {
            height: list_height,
            ..area
        },
        tooltip: Rect {
            y: area.y + list_height,
            height: area.height - list_height,
            ..area
        },
    }
}

pub fn inner(rect: Rect) -> Rect {
    Rect {
        x: rect.x.saturating_add(1),
        y: rect.y.saturating_add(1),
        width: rect.width.saturating_sub(2),
        height: rect.height.saturating_sub(2),
    }
}

pub fn rect_contains(rect: Rect, col: u16, row: u16) -> bool {
    col >= rect.x
        && col < rect.x.saturating_add(rect.width)
        && row >= rect.y
        && row < rect.y.saturating_add(rect.height)
}

pub fn centered_rect(percent_x: u16, percent_y: u16, r: Rect) -> Rect {
    let popup_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage((100 - percent_y) / 2),
            Constraint::Percentage(percent_y),
            Constraint::Percentage((100 - percent_y) / 2),
        ])
        .split(r);

    Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage((100 - percent_x) / 2),
            Constraint::Percentage(percent_x),
            Constraint::Percentage((100 - percent_x) / 2),
        ])
        .split(popup_layout[1])[1]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::INTEGRATIONS;

    fn screen(width: u16, height: u16) -> Rect {
        Rect { x: 0, y: 0, width, height }
    }

    #[test]
    fn test_areas_partition_screen() {
        let ui = areas(screen(160, 50));
        assert_eq!(ui.sidebar.width, SIDEBAR_WIDTH);
        assert_eq!(ui.search.width, SEARCH_WIDTH);
        assert_eq!(ui.command_line.y, 49);
        assert_eq!(ui.status_line.y, 48);
        assert_eq!(ui.content.x, SIDEBAR_WIDTH);
    }

    #[test]
    fn test_sidebar_items_are_spaced() {
        let nav = Rect { x: 0, y: 3, width: 28, height: 10 };
        assert_eq!(sidebar_item_rect(nav, 0).map(|r| r.y), Some(3));
        assert_eq!(sidebar_item_rect(nav, 3).map(|r| r.y), Some(9));
        assert!(sidebar_item_rect(nav, 5).is_none());
    }

    #[test]
    fn test_reports_buttons_do_not_overlap() {
        let layout = reports_layout(screen(100, 30), 3);
        assert_eq!(layout.buttons.len(), 3);
        assert_eq!(layout.tiles.len(), 4);
        for pair in layout.buttons.windows(2) {
            assert!(pair[0].x + pair[0].width <= pair[1].x);
        }
    }

    fn board() -> Vec<IntegrationCard> {
        INTEGRATIONS.iter().map(IntegrationCard::new).collect()
    }

    #[test]
    fn test_integrations_grid_or_compact() {
        let cards = board();
        let wide = integrations_layout(areas(screen(160, 50)).content, 4, &cards);
        assert_eq!(wide.cards.len(), 6);
        assert!(wide.compact.is_none());
        assert!(wide.traceability.is_some());

        for (w, h) in [(160, 40), (120, 40), (80, 24), (60, 40)] {
            let narrow = integrations_layout(areas(screen(w, h)).content, 4, &cards);
            assert!(narrow.cards.is_empty(), "{w}x{h}");
            assert!(narrow.compact.is_some(), "{w}x{h}");
        }
    }

    #[test]
    fn test_grid_cards_get_their_full_height() {
        let mut cards = board();
        for card in cards.iter_mut() {
            card.toggle();
        }
        for (w, h) in [(160, 50), (200, 60)] {
            let layout = integrations_layout(areas(screen(w, h)).content, 4, &cards);
            let board_inner = inner(layout.board);
            assert_eq!(layout.cards.len(), cards.len());
            for (card, rect) in cards.iter().zip(layout.cards.iter()) {
                assert!(IntegrationCardView::new(card).height(rect.width) <= rect.height);
                assert!(rect.y + rect.height <= board_inner.y + board_inner.height);
            }
        }
    }

    #[test]
    fn test_compact_tooltip_below_list() {
        let layout = integrations_layout(areas(screen(80, 24)).content, 4, &board());
        let compact = layout.compact.unwrap();
        assert_eq!(compact.list.height, 6);
        assert_eq!(compact.tooltip.y, compact.list.y + 6);
        assert!(compact.tooltip.height >= 8);
        assert!(!rect_contains(compact.list, compact.tooltip.x, compact.tooltip.y));
        // Short terminal: the board keeps the room.
        assert!(layout.kpis.is_empty());
        assert!(layout.traceability.is_none());
    }

    #[test]
    fn test_rect_contains_edges() {
        let r = Rect { x: 2, y: 2, width: 3, height: 3 };
        assert!(rect_contains(r, 2, 2));
        assert!(rect_contains(r, 4, 4));
        assert!(!rect_contains(r, 5, 4));
    }
}
