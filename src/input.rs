//! Key and mouse dispatch
//!
//! Mouse hit-testing recomputes the same layout the renderer uses, so both
//! agree on where things are for a given terminal size.

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::app::{App, ChartId, InputMode, Tab};
use crate::core::Module;
use crate::data::{
    ReportPeriod, DASHBOARD_KPIS, DEMAND_FORECAST, INTEGRATION_KPIS, INVENTORY, STORES,
    WORK_QUEUES,
};
use crate::ui::layout::{self, rect_contains};
use crate::ui::widgets::{InventoryChart, StoreComparisonChart, WeatherDemandChart};

pub fn handle_key(app: &mut App, key: KeyEvent) {
    if key.kind != KeyEventKind::Press {
        return;
    }

    // Ctrl+C quits from any mode, help included.
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        app.should_quit = true;
        return;
    }

    if app.help_open {
        if matches!(key.code, KeyCode::Char('?') | KeyCode::Esc | KeyCode::Char('q')) {
            app.help_open = false;
        }
        return;
    }

    match app.input_mode {
        InputMode::Normal => handle_normal_mode(app, key),
        InputMode::Command => handle_command_mode(app, key),
    }
}

fn handle_normal_mode(app: &mut App, key: KeyEvent) {
    if key.modifiers.contains(KeyModifiers::CONTROL) {
        return;
    }

    match key.code {
        KeyCode::Char('q') => app.should_quit = true,
        KeyCode::Char('?') => app.help_open = true,
        KeyCode::Char(':') => app.enter_command(),
        KeyCode::Esc => {
            app.clear_hover();
            app.status = None;
        }
        KeyCode::Char(ch @ '1'..='4') => {
            let idx = (ch as u8 - b'1') as usize;
            if let Some(tab) = Tab::ALL.get(idx).copied() {
                app.select_tab(tab);
            }
        }
        KeyCode::Char(']') | KeyCode::Tab => app.cycle_tab(true),
        KeyCode::Char('[') | KeyCode::BackTab => app.cycle_tab(false),
        _ => handle_tab_key(app, key),
    }
}

fn handle_tab_key(app: &mut App, key: KeyEvent) {
    match app.active_tab {
        Tab::Dashboard | Tab::Stores => match key.code {
            KeyCode::Right | KeyCode::Char('l') => app.move_hover(true),
            KeyCode::Left | KeyCode::Char('h') => app.move_hover(false),
            KeyCode::Char('c') => app.cycle_hover_chart(),
            _ => {}
        },
        Tab::Reports => match key.code {
            KeyCode::Right | KeyCode::Char('l') => app.cycle_period(true),
            KeyCode::Left | KeyCode::Char('h') => app.cycle_period(false),
            KeyCode::Char(ch) => {
                if let Some(period) = ReportPeriod::ALL
                    .iter()
                    .copied()
                    .find(|period| period.shortcut() == ch)
                {
                    app.select_period(period);
                }
            }
            _ => {}
        },
        Tab::SmarterIntegration => {
            let action = match app.integrations.as_mut() {
                Some(board) => board.handle_key(key),
                None => return,
            };
            app.apply_action(action);
        }
    }
}

fn handle_command_mode(app: &mut App, key: KeyEvent) {
    match key.code {
        KeyCode::Esc => app.exit_command(),
        KeyCode::Enter => app.apply_command(),
        KeyCode::Backspace => {
            app.command.input.pop();
        }
        KeyCode::Char(ch) => {
            if key.modifiers.contains(KeyModifiers::CONTROL) {
                return;
            }
            app.command.input.push(ch);
        }
        _ => {}
    }
}

/// `size` is the full terminal area the last frame was drawn into.
pub fn handle_mouse(app: &mut App, mouse: MouseEvent, size: Rect) {
    if app.help_open || app.input_mode == InputMode::Command {
        return;
    }
    let col = mouse.column;
    let row = mouse.row;

    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_click(app, size, col, row),
        MouseEventKind::Moved => handle_move(app, size, col, row),
        MouseEventKind::ScrollUp => scroll(app, true),
        MouseEventKind::ScrollDown => scroll(app, false),
        _ => {}
    }
}

fn scroll(app: &mut App, up: bool) {
    match app.active_tab {
        Tab::SmarterIntegration => {
            if let Some(board) = app.integrations.as_mut() {
                if up {
                    board.select_prev();
                } else {
                    board.select_next();
                }
            }
        }
        Tab::Reports => app.cycle_period(!up),
        Tab::Dashboard | Tab::Stores => app.move_hover(!up),
    }
}

fn handle_click(app: &mut App, size: Rect, col: u16, row: u16) {
    let areas = layout::areas(size);

    if rect_contains(areas.sidebar_nav, col, row) {
        for (i, tab) in Tab::ALL.iter().enumerate() {
            if let Some(rect) = layout::sidebar_item_rect(areas.sidebar_nav, i) {
                if rect_contains(rect, col, row) {
                    app.select_tab(*tab);
                    return;
                }
            }
        }
        return;
    }

    if !rect_contains(areas.content, col, row) {
        return;
    }

    match app.active_tab {
        Tab::Reports => {
            let reports = layout::reports_layout(areas.content, ReportPeriod::ALL.len());
            if let Some(idx) = reports
                .buttons
                .iter()
                .position(|rect| rect_contains(*rect, col, row))
            {
                app.select_period(ReportPeriod::ALL[idx]);
            }
        }
        Tab::SmarterIntegration => {
            let Some(board) = app.integrations.as_mut() else {
                return;
            };
            let board_areas =
                layout::integrations_layout(areas.content, INTEGRATION_KPIS.len(), board.cards());
            let hit = match board_areas.compact {
                // The tooltip pane holds the selected card; clicks there never reselect.
                Some(compact) if rect_contains(compact.tooltip, col, row) => None,
                Some(compact) if rect_contains(compact.list, col, row) => {
                    Some((row - compact.list.y) as usize)
                }
                Some(_) => None,
                None => board_areas
                    .cards
                    .iter()
                    .position(|rect| rect_contains(*rect, col, row)),
            };
            if let Some(idx) = hit {
                board.select(idx);
            }
        }
        Tab::Dashboard | Tab::Stores => handle_move(app, size, col, row),
    }
}

fn handle_move(app: &mut App, size: Rect, col: u16, row: u16) {
    let areas = layout::areas(size);
    let charts: Vec<(ChartId, Rect)> = match app.active_tab {
        Tab::Dashboard => {
            let dash =
                layout::dashboard_layout(areas.content, DASHBOARD_KPIS.len(), WORK_QUEUES.len());
            vec![
                (ChartId::Inventory, dash.inventory_chart),
                (ChartId::Demand, dash.demand_chart),
            ]
        }
        Tab::Stores => vec![(ChartId::Stores, layout::stores_layout(areas.content).chart)],
        Tab::Reports | Tab::SmarterIntegration => return,
    };

    for (chart, rect) in charts {
        if rect_contains(rect, col, row) {
            let index = match chart {
                ChartId::Inventory => InventoryChart::new(&INVENTORY).index_at(rect, col),
                ChartId::Demand => WeatherDemandChart::new(&DEMAND_FORECAST).index_at(rect, col),
                ChartId::Stores => StoreComparisonChart::new(&STORES).index_at(rect, col),
            };
            if let Some(index) = index {
                app.set_hover(chart, index);
            }
            return;
        }
    }
}
