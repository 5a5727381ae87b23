//! TUI layout and widget rendering.

use ratatui::Frame;
use ratatui::layout::{Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Axis, Block, Borders, Chart, Dataset, GraphType, List, ListItem, ListState, Paragraph};

use super::runtime::App;
use super::style;

/// Renders the full TUI frame.
pub fn render(frame: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Min(10),   // body
            Constraint::Length(1), // footer
        ])
        .split(frame.area());
    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(28), Constraint::Min(40)])
        .split(rows[1]);

    render_header(frame, app, rows[0]);
    render_items(frame, app, body[0]);
    render_chart(frame, app, body[1]);
    render_footer(frame, app, rows[2]);
}

fn render_header(frame: &mut Frame, app: &App, area: Rect) {
    let selected = app.selected_item().map_or("-", |i| i.name.as_str());
    let header = Line::from(vec![
        Span::styled(
            " TCC ",
            Style::default()
                .fg(style::HEADER_FG)
                .bg(style::HEADER_BG)
                .add_modifier(Modifier::BOLD),
        ),
        Span::raw(" "),
        Span::styled(selected, Style::default().add_modifier(Modifier::BOLD)),
        Span::raw(format!(" │ {}/{} ", app.selected + 1, app.items().len())),
    ]);
    frame.render_widget(Paragraph::new(header), area);
}

fn render_items(frame: &mut Frame, app: &App, area: Rect) {
    let items: Vec<ListItem> = app
        .items()
        .iter()
        .map(|i| {
            let tag = if i.is_load { "L" } else { "B" };
            let flag = if i.emergency { " !" } else { "" };
            ListItem::new(format!("{tag} {}{flag}", i.name))
        })
        .collect();
    let list = List::new(items)
        .block(Block::default().title(" Items ").borders(Borders::ALL))
        .highlight_style(Style::default().bg(style::SELECTED_BG).add_modifier(Modifier::BOLD));
    let mut state = ListState::default().with_selected(Some(app.selected));
    frame.render_stateful_widget(list, area, &mut state);
}

/// Log-log chart; coordinates are decade exponents.
fn render_chart(frame: &mut Frame, app: &App, area: Rect) {
    let chart = match app.chart() {
        Ok(chart) => chart,
        Err(e) => {
            let msg = Paragraph::new(Line::from(Span::styled(
                e.to_string(),
                Style::default().fg(style::ERROR_FG),
            )))
            .block(Block::default().title(" Chart ").borders(Borders::ALL));
            frame.render_widget(msg, area);
            return;
        }
    };

    let data: Vec<Vec<(f64, f64)>> = chart.series.iter().map(|s| style::log_points(&s.points)).collect();
    let datasets: Vec<Dataset> = chart
        .series
        .iter()
        .zip(&data)
        .map(|(s, points)| {
            Dataset::default()
                .name(s.label.clone())
                .graph_type(GraphType::Line)
                .marker(style::marker(s.style))
                .style(Style::default().fg(style::series_color(s.color)))
                .data(points)
        })
        .collect();

    let bounds = |min: f64, max: f64| [min.log10(), max.log10()];
    let x = bounds(chart.x_axis.min, chart.x_axis.max);
    let y = bounds(chart.y_axis.min, chart.y_axis.max);
    let labels = |ticks: &[f64]| -> Vec<String> { ticks.iter().map(|t| style::decade_label(t.log10())).collect() };

    let widget = Chart::new(datasets)
        .block(Block::default().title(format!(" {} ", chart.title)).borders(Borders::ALL))
        .x_axis(
            Axis::default()
                .title(chart.x_axis.label.as_str())
                .bounds(x)
                .labels(labels(&chart.x_axis.ticks)),
        )
        .y_axis(
            Axis::default()
                .title(chart.y_axis.label.as_str())
                .bounds(y)
                .labels(labels(&chart.y_axis.ticks)),
        );
    frame.render_widget(widget, area);
}

fn render_footer(frame: &mut Frame, app: &App, area: Rect) {
    let footer = Paragraph::new(Line::from(Span::styled(
        format!(" q:Quit  ↑/↓:Select  r:Reload │ {}", app.status),
        Style::default().fg(style::FOOTER_FG),
    )));
    frame.render_widget(footer, area);
}
