//! Chart wrappers
//!
//! Each wrapper maps fixed record fields onto series, draws a framed plot
//! with a legend line, and shows a tooltip line for the hovered index.

use ratatui::buffer::Buffer;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Color, Modifier, Style};
use ratatui::symbols;
use ratatui::text::{Line, Span};
use ratatui::widgets::{
    Axis, Bar, BarChart, BarGroup, Block, Borders, Chart, Dataset, GraphType, Paragraph, Widget,
};

use crate::data::inventory::weather_categories;
use crate::data::{DemandPoint, InventoryItem, StoreMetrics};
use crate::ui::{format, theme};

const GROUP_GAP: u16 = 2;
const MAX_BAR_WIDTH: u16 = 9;

fn legend_line(series: &[(&'static str, Color)]) -> Line<'static> {
    let mut spans = Vec::with_capacity(series.len() * 2);
    for (i, (name, color)) in series.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled("■ ", Style::default().fg(*color)));
        spans.push(Span::raw(*name));
    }
    Line::from(spans)
}

/// Legend, plot and tooltip rows inside the chart border.
fn frame_rows(area: Rect) -> [Rect; 3] {
    let inner = Block::default().borders(Borders::ALL).inner(area);
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(inner);
    [rows[0], rows[1], rows[2]]
}

/// Area between the legend and the tooltip line of a chart drawn in `area`.
pub fn plot_area(area: Rect) -> Rect {
    frame_rows(area)[1]
}

/// Draw the frame, legend and tooltip; return the plot area.
fn render_frame(
    area: Rect,
    buf: &mut Buffer,
    title: &str,
    series: &[(&'static str, Color)],
    tooltip: Option<String>,
    border_style: Style,
) -> Rect {
    let block = Block::default()
        .borders(Borders::ALL)
        .title(Span::styled(
            title.to_string(),
            Style::default().add_modifier(Modifier::BOLD),
        ))
        .border_style(border_style);
    block.render(area, buf);
    let rows = frame_rows(area);

    Paragraph::new(legend_line(series))
        .alignment(Alignment::Center)
        .render(rows[0], buf);

    if let Some(text) = tooltip {
        Paragraph::new(Line::from(Span::styled(
            text,
            Style::default().fg(Color::Black).bg(Color::White),
        )))
        .render(rows[2], buf);
    }

    rows[1]
}

fn render_empty(plot: Rect, buf: &mut Buffer) {
    Paragraph::new(Span::styled("No data", Style::default().fg(theme::MUTED)))
        .alignment(Alignment::Center)
        .render(plot, buf);
}

fn hovered_border(hover: Option<usize>) -> Style {
    if hover.is_some() {
        Style::default().fg(Color::Cyan)
    } else {
        Style::default()
    }
}

/// Bar width that fits `groups` groups of `per_group` bars into `width`.
pub fn bar_width(width: u16, groups: usize, per_group: usize) -> u16 {
    if groups == 0 || per_group == 0 {
        return 1;
    }
    let gaps = GROUP_GAP.saturating_mul(groups.saturating_sub(1) as u16);
    let usable = width.saturating_sub(gaps) as usize;
    ((usable / (groups * per_group)) as u16).clamp(1, MAX_BAR_WIDTH)
}

/// Group under column `col`, laid out the way [`render_grouped_bars`] draws.
fn grouped_index_at(plot: Rect, groups: usize, per_group: usize, col: u16) -> Option<usize> {
    if groups == 0 || col < plot.x || col >= plot.x.saturating_add(plot.width) {
        return None;
    }
    let group_width = bar_width(plot.width, groups, per_group) * per_group as u16;
    let index = ((col - plot.x) / (group_width + GROUP_GAP)) as usize;
    Some(index.min(groups - 1))
}

fn render_grouped_bars(
    plot: Rect,
    buf: &mut Buffer,
    groups: &[(&'static str, Vec<u64>)],
    series: &[(&'static str, Color)],
    hover: Option<usize>,
) {
    if groups.is_empty() {
        render_empty(plot, buf);
        return;
    }

    let width = bar_width(plot.width, groups.len(), series.len());
    let label_width = width as usize * series.len();
    let max = groups
        .iter()
        .flat_map(|(_, values)| values.iter().copied())
        .max()
        .unwrap_or(0)
        .max(1);

    let mut chart = BarChart::default()
        .bar_width(width)
        .bar_gap(0)
        .group_gap(GROUP_GAP)
        .max(max);

    for (index, (label, values)) in groups.iter().enumerate() {
        let highlighted = hover == Some(index);
        let bars: Vec<Bar> = values
            .iter()
            .zip(series.iter())
            .map(|(value, (_, color))| {
                let mut style = Style::default().fg(*color);
                if highlighted {
                    style = style.add_modifier(Modifier::BOLD);
                }
                Bar::default()
                    .value(*value)
                    .style(style)
                    .value_style(Style::default().fg(Color::Black).bg(*color))
            })
            .collect();
        let label_style = if highlighted {
            Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD)
        } else {
            Style::default()
        };
        let group = BarGroup::default()
            .label(Line::from(Span::styled(
                format::truncate(label, label_width),
                label_style,
            )))
            .bars(&bars);
        chart = chart.data(group);
    }

    chart.render(plot, buf);
}

pub struct InventoryChart<'a> {
    data: &'a [InventoryItem],
    hover: Option<usize>,
}

impl<'a> InventoryChart<'a> {
    pub const TITLE: &'static str = "Inventory Levels";
    const SERIES: [(&'static str, Color); 2] = [
        ("Current Stock", theme::SERIES[0]),
        ("Optimal Stock", theme::SERIES[1]),
    ];

    pub fn new(data: &'a [InventoryItem]) -> Self {
        Self { data, hover: None }
    }

    pub fn hover(mut self, hover: Option<usize>) -> Self {
        self.hover = hover;
        self
    }

    /// Item under column `col` of a chart drawn in `area`.
    pub fn index_at(&self, area: Rect, col: u16) -> Option<usize> {
        grouped_index_at(plot_area(area), self.data.len(), Self::SERIES.len(), col)
    }

    pub fn tooltip(&self) -> Option<String> {
        let item = self.data.get(self.hover?)?;
        Some(format!(
            "{} · Current Stock: {} · Optimal Stock: {}",
            item.product, item.current, item.optimal
        ))
    }
}

impl Widget for InventoryChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let plot = render_frame(
            area,
            buf,
            Self::TITLE,
            &Self::SERIES,
            self.tooltip(),
            hovered_border(self.hover),
        );
        let groups: Vec<(&'static str, Vec<u64>)> = self
            .data
            .iter()
            .map(|item| (item.product, vec![item.current as u64, item.optimal as u64]))
            .collect();
        render_grouped_bars(plot, buf, &groups, &Self::SERIES, self.hover);
    }
}

pub struct StoreComparisonChart<'a> {
    data: &'a [StoreMetrics],
    hover: Option<usize>,
}

impl<'a> StoreComparisonChart<'a> {
    pub const TITLE: &'static str = "Store Comparison";
    const SERIES: [(&'static str, Color); 4] = [
        ("Waste", theme::SERIES[0]),
        ("Stockouts", theme::SERIES[1]),
        ("Excess", theme::SERIES[2]),
        ("Donations", theme::SERIES[3]),
    ];

    pub fn new(data: &'a [StoreMetrics]) -> Self {
        Self { data, hover: None }
    }

    pub fn hover(mut self, hover: Option<usize>) -> Self {
        self.hover = hover;
        self
    }

    pub fn index_at(&self, area: Rect, col: u16) -> Option<usize> {
        grouped_index_at(plot_area(area), self.data.len(), Self::SERIES.len(), col)
    }

    pub fn tooltip(&self) -> Option<String> {
        let store = self.data.get(self.hover?)?;
        Some(format!(
            "{} · Waste: {} · Stockouts: {} · Excess: {} · Donations: {}",
            store.name, store.waste, store.stockouts, store.excess, store.donations
        ))
    }
}

impl Widget for StoreComparisonChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let plot = render_frame(
            area,
            buf,
            Self::TITLE,
            &Self::SERIES,
            self.tooltip(),
            hovered_border(self.hover),
        );
        let groups: Vec<(&'static str, Vec<u64>)> = self
            .data
            .iter()
            .map(|s| {
                (
                    s.name,
                    vec![
                        s.waste as u64,
                        s.stockouts as u64,
                        s.excess as u64,
                        s.donations as u64,
                    ],
                )
            })
            .collect();
        render_grouped_bars(plot, buf, &groups, &Self::SERIES, self.hover);
    }
}

/// Demand on the left axis, weather on a categorical right axis.
///
/// Weather labels are plotted at their category ordinal scaled onto the
/// demand bounds, so the line's height carries no numeric meaning.
pub struct WeatherDemandChart<'a> {
    data: &'a [DemandPoint],
    hover: Option<usize>,
}

impl<'a> WeatherDemandChart<'a> {
    pub const TITLE: &'static str = "Demand Forecast (Weather-based)";
    const SERIES: [(&'static str, Color); 2] =
        [("Demand", theme::SERIES[0]), ("Weather", theme::SERIES[1])];

    pub fn new(data: &'a [DemandPoint]) -> Self {
        Self { data, hover: None }
    }

    pub fn hover(mut self, hover: Option<usize>) -> Self {
        self.hover = hover;
        self
    }

    pub fn tooltip(&self) -> Option<String> {
        let point = self.data.get(self.hover?)?;
        Some(format!(
            "{} · Demand: {} · Weather: {}",
            point.day, point.demand, point.weather
        ))
    }

    /// Left-axis bounds: zero up to the next multiple of 50.
    pub fn demand_bounds(&self) -> [f64; 2] {
        let max = self.data.iter().map(|p| p.demand).max().unwrap_or(0);
        let top = (max.div_ceil(50).max(1) * 50) as f64;
        [0.0, top]
    }

    /// Each weather category with its height as a fraction of the axis.
    pub fn weather_axis(&self) -> Vec<(&'static str, f64)> {
        let categories = weather_categories(self.data);
        let slots = categories.len() as f64 + 1.0;
        categories
            .into_iter()
            .enumerate()
            .map(|(ord, label)| (label, (ord as f64 + 1.0) / slots))
            .collect()
    }

    fn y_labels(&self) -> [String; 3] {
        let [lo, hi] = self.demand_bounds();
        [
            format!("{}", lo),
            format!("{}", (lo + hi) / 2.0),
            format!("{}", hi),
        ]
    }

    fn right_axis_width(axis: &[(&'static str, f64)]) -> u16 {
        axis.iter()
            .map(|(label, _)| label.chars().count() as u16)
            .max()
            .unwrap_or(0)
            + 1
    }

    /// Split the plot into the line chart and the categorical right axis.
    fn plot_columns(&self, plot: Rect) -> (Rect, Rect) {
        let cols = Layout::default()
            .direction(Direction::Horizontal)
            .constraints([
                Constraint::Min(0),
                Constraint::Length(Self::right_axis_width(&self.weather_axis())),
            ])
            .split(plot);
        (cols[0], cols[1])
    }

    /// Where the points land for a chart drawn in `area`: right of the y-axis
    /// labels and axis line, above the x-axis line and labels.
    pub fn graph_area(&self, area: Rect) -> Rect {
        let (chart, _) = self.plot_columns(plot_area(area));
        let y_labels = self
            .y_labels()
            .iter()
            .map(|label| label.chars().count() as u16)
            .max()
            .unwrap_or(0);
        // A left-aligned first x label hangs one column past the axis.
        let first_x = self
            .data
            .first()
            .map_or(0, |p| p.day.chars().count() as u16)
            .saturating_sub(1);
        let gutter = y_labels.max(first_x).min(chart.width / 3) + 1;
        Rect {
            x: chart.x.saturating_add(gutter),
            y: chart.y,
            width: chart.width.saturating_sub(gutter),
            height: chart.height.saturating_sub(2),
        }
    }

    /// Day nearest to column `col` of a chart drawn in `area`.
    pub fn index_at(&self, area: Rect, col: u16) -> Option<usize> {
        let graph = self.graph_area(area);
        if self.data.is_empty()
            || graph.width == 0
            || col < graph.x
            || col >= graph.x.saturating_add(graph.width)
        {
            return None;
        }
        let last = self.data.len() - 1;
        let span = graph.width.saturating_sub(1).max(1) as f64;
        let index = ((col - graph.x) as f64 / span * last as f64).round() as usize;
        Some(index.min(last))
    }

    fn weather_fraction(axis: &[(&'static str, f64)], weather: &str) -> f64 {
        axis.iter()
            .find(|(label, _)| *label == weather)
            .map(|(_, fraction)| *fraction)
            .unwrap_or(0.0)
    }
}

impl Widget for WeatherDemandChart<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let plot = render_frame(
            area,
            buf,
            Self::TITLE,
            &Self::SERIES,
            self.tooltip(),
            hovered_border(self.hover),
        );
        if self.data.is_empty() {
            render_empty(plot, buf);
            return;
        }

        let axis = self.weather_axis();
        let (chart_area, right) = self.plot_columns(plot);

        let [lo, hi] = self.demand_bounds();
        let demand: Vec<(f64, f64)> = self
            .data
            .iter()
            .enumerate()
            .map(|(i, p)| (i as f64, p.demand as f64))
            .collect();
        let weather: Vec<(f64, f64)> = self
            .data
            .iter()
            .enumerate()
            .map(|(i, p)| {
                let fraction = Self::weather_fraction(&axis, p.weather);
                (i as f64, lo + fraction * (hi - lo))
            })
            .collect();
        let hovered: Vec<(f64, f64)> = self
            .hover
            .and_then(|i| demand.get(i).copied())
            .into_iter()
            .collect();

        let x_max = (self.data.len().saturating_sub(1)).max(1) as f64;
        let x_labels: Vec<Span> = self.data.iter().map(|p| Span::raw(p.day)).collect();
        let y_labels: Vec<Span> = self.y_labels().into_iter().map(Span::raw).collect();

        let datasets = vec![
            Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Self::SERIES[0].1))
                .data(&demand),
            Dataset::default()
                .marker(symbols::Marker::Braille)
                .graph_type(GraphType::Line)
                .style(Style::default().fg(Self::SERIES[1].1))
                .data(&weather),
            Dataset::default()
                .marker(symbols::Marker::Block)
                .graph_type(GraphType::Scatter)
                .style(Style::default().fg(Color::White))
                .data(&hovered),
        ];

        Chart::new(datasets)
            .x_axis(
                Axis::default()
                    .bounds([0.0, x_max])
                    .labels(x_labels)
                    .style(Style::default().fg(theme::MUTED)),
            )
            .y_axis(
                Axis::default()
                    .bounds([lo, hi])
                    .labels(y_labels)
                    .style(Style::default().fg(theme::MUTED)),
            )
            .render(chart_area, buf);

        // Categorical right axis; the bottom two rows belong to the x axis.
        let graph_height = right.height.saturating_sub(2);
        if graph_height == 0 || right.width < 2 {
            return;
        }
        for (label, fraction) in &axis {
            let offset = ((1.0 - fraction) * (graph_height - 1) as f64).round() as u16;
            buf.set_string(
                right.x + 1,
                right.y + offset,
                label,
                Style::default().fg(Self::SERIES[1].1),
            );
        }
    }
}
