//! Full-frame rendering through the test backend

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::backend::TestBackend;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::Terminal;

use greengarden::app::{App, Tab};
use greengarden::data::{ReportPeriod, INTEGRATIONS, INTEGRATION_KPIS};
use greengarden::input::handle_key;
use greengarden::ui::{self, layout, tabs, theme};

fn render(app: &App, width: u16, height: u16) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
    terminal.draw(|f| ui::draw(f, app)).unwrap();
    terminal.backend().buffer().clone()
}

fn rect_text(buf: &Buffer, rect: Rect) -> String {
    let mut out = String::new();
    for y in rect.y..rect.y + rect.height {
        for x in rect.x..rect.x + rect.width {
            out.push_str(buf.get(x, y).symbol());
        }
        out.push('\n');
    }
    out
}

fn screen_text(buf: &Buffer) -> String {
    rect_text(buf, buf.area)
}

fn press(app: &mut App, code: KeyCode) {
    handle_key(app, KeyEvent::new(code, KeyModifiers::NONE));
}

fn board_areas(app: &App, buf: &Buffer) -> layout::IntegrationAreas {
    let content = layout::areas(buf.area).content;
    let cards = app.integrations.as_ref().map_or(&[][..], |board| board.cards());
    layout::integrations_layout(content, INTEGRATION_KPIS.len(), cards)
}

/// Common terminal sizes: roomy grid, two compact boards, and 80x24.
const SIZES: [(u16, u16); 4] = [(160, 50), (160, 40), (120, 40), (80, 24)];

const W: u16 = 160;
const H: u16 = 50;

#[test]
fn test_shell_chrome() {
    let buf = render(&App::new(), W, H);
    let text = screen_text(&buf);
    assert!(text.contains(ui::APP_TITLE));
    assert!(text.contains(ui::HEADER_TITLE));
    assert!(text.contains(ui::SEARCH_PLACEHOLDER));
    for tab in Tab::ALL {
        assert!(text.contains(tab.title()));
    }
    assert!(text.contains("Intelligent Workflows"));
    assert!(text.contains("Work Queues"));
    assert!(text.contains("[ Resolve ]"));
}

#[test]
fn test_kpi_sign_prefix_rendered() {
    let text = screen_text(&render(&App::new(), W, H));
    assert!(text.contains("-2.5% vs. Last Week"));
    assert!(text.contains("+0.7% vs. Last Week"));
}

#[test]
fn test_report_tiles_match_period_literals() {
    let expected = [
        (ReportPeriod::Weekly, "$1,250,000", "15%", "20%", "5%"),
        (ReportPeriod::Monthly, "$5,000,000", "12%", "18%", "10%"),
        (ReportPeriod::Yearly, "$60,000,000", "10%", "15%", "8%"),
    ];
    for (period, sales, wastage, stockout, overall) in expected {
        let mut app = App::new();
        app.select_tab(Tab::Reports);
        app.select_period(period);
        let buf = render(&app, W, H);

        let content = layout::areas(buf.area).content;
        let tiles = layout::reports_layout(content, ReportPeriod::ALL.len()).tiles;
        let tile_text: Vec<String> = tiles.iter().map(|rect| rect_text(&buf, *rect)).collect();
        assert!(tile_text[0].contains("Total Sales") && tile_text[0].contains(sales));
        assert!(tile_text[1].contains("Wastage Reduction") && tile_text[1].contains(wastage));
        assert!(tile_text[2].contains("Stockout Reduction") && tile_text[2].contains(stockout));
        assert!(tile_text[3].contains("Overall Performance") && tile_text[3].contains(overall));
        assert!(screen_text(&buf).contains(&format!("{} Summary", period.title())));
    }
}

#[test]
fn test_exactly_one_period_button_active() {
    let mut app = App::new();
    app.select_tab(Tab::Reports);
    for key in ['m', 'y', 'w', 'y'] {
        press(&mut app, KeyCode::Char(key));
        let buf = render(&app, W, H);
        let content = layout::areas(buf.area).content;
        let buttons = layout::reports_layout(content, ReportPeriod::ALL.len()).buttons;

        let active: Vec<ReportPeriod> = ReportPeriod::ALL
            .iter()
            .zip(buttons.iter())
            .filter(|(_, rect)| {
                let cell = buf.get(rect.x + rect.width / 2, rect.y + rect.height / 2);
                cell.bg == tabs::period_button_style(true).bg.unwrap()
            })
            .map(|(period, _)| *period)
            .collect();
        assert_eq!(active, vec![app.report_period]);
    }
}

#[test]
fn test_expand_control_only_on_recommended_cards() {
    let mut app = App::new();
    app.select_tab(Tab::SmarterIntegration);
    let buf = render(&app, W, H);
    let cards = board_areas(&app, &buf).cards;
    assert_eq!(cards.len(), INTEGRATIONS.len());

    for (integration, rect) in INTEGRATIONS.iter().zip(cards.iter()) {
        let text = rect_text(&buf, *rect);
        assert!(text.contains(integration.name));
        assert_eq!(
            text.contains("Show AI Recommendation"),
            integration.has_recommendation(),
            "{}",
            integration.name
        );
    }
    assert!(screen_text(&buf).contains("Product Traceability"));
}

#[test]
fn test_recommendation_controls_visible_at_common_sizes() {
    for (w, h) in SIZES {
        let mut app = App::new();
        press(&mut app, KeyCode::Char('4'));
        press(&mut app, KeyCode::Char('j'));

        let buf = render(&app, w, h);
        let text = rect_text(&buf, board_areas(&app, &buf).board);
        assert!(text.contains("Warehouse Management"), "{w}x{h}");
        assert!(text.contains("Show AI Recommendation"), "{w}x{h}");

        press(&mut app, KeyCode::Enter);
        let buf = render(&app, w, h);
        let text = rect_text(&buf, board_areas(&app, &buf).board);
        assert!(text.contains("Hide AI Recommendation"), "{w}x{h}");
        assert!(text.contains("AI Recommendation:"), "{w}x{h}");
        assert!(text.contains("Implement new slotting"), "{w}x{h}");
        assert!(text.contains("Approve (a)"), "{w}x{h}");
        assert!(text.contains("Review (v)"), "{w}x{h}");
        assert!(screen_text(&buf).contains("Showing AI recommendation"), "{w}x{h}");

        press(&mut app, KeyCode::Char('a'));
        let buf = render(&app, w, h);
        let text = rect_text(&buf, board_areas(&app, &buf).board);
        assert!(text.contains("Action taken: Approve"), "{w}x{h}");
        assert!(!text.contains("Approve (a)"), "{w}x{h}");
    }
}

#[test]
fn test_every_expanded_grid_card_is_whole() {
    let mut app = App::new();
    app.select_tab(Tab::SmarterIntegration);
    for i in 0..INTEGRATIONS.len() {
        let board = app.integrations.as_mut().unwrap();
        board.select(i);
        let _ = board.toggle_selected();
    }

    let buf = render(&app, W, H);
    let cards = board_areas(&app, &buf).cards;
    assert_eq!(cards.len(), INTEGRATIONS.len());
    for (integration, rect) in INTEGRATIONS.iter().zip(cards.iter()) {
        let text = rect_text(&buf, *rect);
        assert!(text.contains(integration.name));
        let lead: Vec<&str> = integration.description.split_whitespace().take(2).collect();
        assert!(text.contains(&lead.join(" ")), "{}", integration.name);
        if integration.has_recommendation() {
            assert!(text.contains("Hide AI Recommendation"), "{}", integration.name);
            assert!(text.contains("Review (v)"), "{}", integration.name);
        }
    }
}

#[test]
fn test_compact_board_on_narrow_terminal() {
    let mut app = App::new();
    app.select_tab(Tab::SmarterIntegration);
    let buf = render(&app, 90, 40);
    let areas = board_areas(&app, &buf);
    let compact = areas.compact.expect("90 columns is too narrow for the grid");

    let list = rect_text(&buf, compact.list);
    for integration in INTEGRATIONS.iter() {
        assert!(list.contains(integration.name), "{}", integration.name);
    }
    let tooltip = rect_text(&buf, compact.tooltip);
    assert!(tooltip.contains("Enterprise Resource Planning"));
    assert!(tooltip.contains("All ERP data is synchronizing correctly."));
    assert!(!tooltip.contains("Show AI Recommendation"));

    press(&mut app, KeyCode::Char('j'));
    let buf = render(&app, 90, 40);
    let tooltip = rect_text(&buf, compact.tooltip);
    assert!(tooltip.contains("Warehouse Management"));
    assert!(tooltip.contains("Show AI Recommendation"));
}

#[test]
fn test_dashboard_identical_after_tab_round_trip() {
    let mut app = App::new();
    let before = render(&app, W, H);
    for _ in 0..Tab::ALL.len() {
        press(&mut app, KeyCode::Char(']'));
        render(&app, W, H);
    }
    assert_eq!(app.active_tab, Tab::Dashboard);
    assert_eq!(render(&app, W, H), before);
}

#[test]
fn test_hover_tooltip_shown_then_cleared_by_tab_switch() {
    let mut app = App::new();
    press(&mut app, KeyCode::Right);
    let text = screen_text(&render(&app, W, H));
    assert!(text.contains("Organic Apples · Current Stock: 80"));

    press(&mut app, KeyCode::Char('2'));
    press(&mut app, KeyCode::Char('1'));
    let text = screen_text(&render(&app, W, H));
    assert!(!text.contains("Current Stock: 80"));
}

#[test]
fn test_status_badge_color() {
    let mut app = App::new();
    app.select_tab(Tab::SmarterIntegration);
    let buf = render(&app, W, H);
    let cards = board_areas(&app, &buf).cards;
    assert_eq!(cards.len(), INTEGRATIONS.len());

    for (integration, rect) in INTEGRATIONS.iter().zip(cards.iter()) {
        let border = buf.get(rect.x, rect.y + 1);
        assert_eq!(border.fg, theme::status_color(integration.status));
    }
}

#[test]
fn test_tiny_terminal_does_not_panic() {
    let mut app = App::new();
    for tab in Tab::ALL {
        app.select_tab(tab);
        render(&app, 40, 12);
        render(&app, 20, 6);
    }
}
