use ratatui::{
    layout::Flex,
    prelude::*,
    widgets::{
        Bar, BarChart, BarGroup, Block, Borders, Clear, Paragraph, Row, Table, TableState, Tabs,
        Wrap,
    },
};
use tui_logger::{TuiLoggerLevelOutput, TuiLoggerWidget};

use super::{App, InputMode, PageView};
use crate::classify::BadgeTone;
use crate::notify::NotificationLevel;
use crate::pages::Route;
use crate::pages::dashboard::{DashboardSummary, WEEKLY_PERFORMANCE};
use crate::pages::orders::OrderDetail;
use crate::session::FieldKind;
use crate::utils::format_currency;

fn tone_color(tone: BadgeTone) -> Color {
    match tone {
        BadgeTone::Success => Color::Green,
        BadgeTone::Info => Color::Blue,
        BadgeTone::Warning => Color::Yellow,
        BadgeTone::Danger => Color::Red,
        BadgeTone::Accent => Color::Magenta,
        BadgeTone::Muted => Color::DarkGray,
        BadgeTone::Neutral => Color::Gray,
    }
}

fn border(title: impl Into<String>, color: Color) -> Block<'static> {
    Block::default()
        .title(format!(" {} ", title.into()))
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color))
}

fn centered(area: Rect, percent_x: u16, percent_y: u16) -> Rect {
    let [area] = Layout::vertical([Constraint::Percentage(percent_y)])
        .flex(Flex::Center)
        .areas(area);
    let [area] = Layout::horizontal([Constraint::Percentage(percent_x)])
        .flex(Flex::Center)
        .areas(area);
    area
}

fn optional(value: Option<f64>, unit: &str) -> String {
    value.map_or_else(|| "-".to_string(), |v| format!("{:.1}{}", v, unit))
}

pub(super) fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(1),    // Page + Logs
            Constraint::Length(3), // Toasts
        ])
        .split(f.area());

    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(70), Constraint::Percentage(30)])
        .split(chunks[1]);

    render_header(f, app, chunks[0]);

    match app.page() {
        Some(page) => render_page(f, app, page, main_chunks[0]),
        None => render_dashboard(f, &app.state.dashboard(), main_chunks[0]),
    }

    let logs = TuiLoggerWidget::default()
        .block(
            Block::default()
                .title(" Logs ")
                .border_style(Style::default().fg(Color::White).add_modifier(Modifier::DIM))
                .borders(Borders::ALL),
        )
        .output_separator('|')
        .output_timestamp(Some("%H:%M:%S".to_string()))
        .output_level(Some(TuiLoggerLevelOutput::Abbreviated))
        .output_target(false)
        .output_file(false)
        .output_line(false)
        .style(Style::default().fg(Color::White))
        .state(&app.logger_state);
    f.render_widget(logs, main_chunks[1]);

    render_footer(f, app, chunks[2]);

    match app.input_mode {
        InputMode::Form => {
            if let Some(page) = app.page() {
                render_form(f, app, page);
            }
        }
        InputMode::Detail => {
            if let Some(detail) = &app.detail {
                render_detail(f, detail);
            }
        }
        InputMode::Normal | InputMode::Search => {}
    }
}

fn render_header(f: &mut Frame, app: &App, area: Rect) {
    let titles: Vec<Line> = Route::ALL
        .iter()
        .enumerate()
        .map(|(i, r)| Line::from(format!("{} {}", i + 1, r.title())))
        .collect();
    let tabs = Tabs::new(titles)
        .select(app.state.route().index())
        .style(Style::default().fg(Color::Gray))
        .highlight_style(
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )
        .block(border("Restaurant Back Office", Color::Cyan));
    f.render_widget(tabs, area);
}

fn render_footer(f: &mut Frame, app: &App, area: Rect) {
    let line = match app.state.toasts().latest() {
        Some(n) => {
            let color = match n.level {
                NotificationLevel::Success => Color::Green,
                NotificationLevel::Error => Color::Red,
            };
            Line::from(Span::styled(n.message.clone(), Style::default().fg(color)))
        }
        None => Line::from(""),
    };
    let help = match app.input_mode {
        InputMode::Normal if app.page().is_some() => {
            "/ search | c tab | a add | e edit | d delete | q quit"
        }
        InputMode::Normal => "1-5 / Tab switch page | q quit",
        InputMode::Search => "Enter/Esc done",
        InputMode::Form => "Tab next field | ←/→ choose | Enter save | Esc cancel",
        InputMode::Detail => "Esc close",
    };
    let footer = Paragraph::new(line).block(
        Block::default()
            .borders(Borders::ALL)
            .title(format!(" {} ", help))
            .border_style(Style::default().fg(Color::DarkGray)),
    );
    f.render_widget(footer, area);
}

fn render_dashboard(f: &mut Frame, summary: &DashboardSummary, area: Rect) {
    let rows = Layout::vertical([
        Constraint::Length(6),
        Constraint::Min(8),
        Constraint::Length(8),
    ])
    .split(area);

    let kpi = |label: &str, value: String| {
        Line::from(vec![
            Span::raw(format!("{:<24}", label)),
            Span::styled(value, Style::default().fg(Color::Yellow)),
        ])
    };
    let kpis = Paragraph::new(vec![
        kpi(
            "Orders",
            format!(
                "{} ({} completed, {} in progress)",
                summary.total_orders, summary.completed_orders, summary.in_progress_orders
            ),
        ),
        kpi("Avg service time", optional(summary.avg_service_time, " min")),
        kpi("On-time rate", optional(summary.on_time_rate, "%")),
        kpi("Revenue", format_currency(summary.revenue)),
    ])
    .block(border("Dashboard", Color::Cyan));
    f.render_widget(kpis, rows[0]);

    let groups: Vec<BarGroup> = WEEKLY_PERFORMANCE
        .iter()
        .map(|d| {
            BarGroup::default().label(Line::from(d.day)).bars(&[
                Bar::default()
                    .value(u64::from(d.order_time))
                    .style(Style::default().fg(Color::Cyan)),
                Bar::default()
                    .value(u64::from(d.service_time))
                    .style(Style::default().fg(Color::Green)),
            ])
        })
        .collect();
    let mut chart = BarChart::default()
        .block(border("Weekly order / service time (min)", Color::Blue))
        .bar_width(3)
        .group_gap(2);
    for group in groups {
        chart = chart.data(group);
    }
    f.render_widget(chart, rows[1]);

    let lists = Layout::horizontal([Constraint::Ratio(1, 3); 3]).split(rows[2]);

    let top: Vec<Line> = summary
        .top_menu_items
        .iter()
        .map(|m| Line::from(format!("{:<22} {:.1}", m.name, m.rating)))
        .collect();
    f.render_widget(Paragraph::new(top).block(border("Top rated", Color::Magenta)), lists[0]);

    let staff: Vec<Line> = summary
        .staff_efficiency
        .iter()
        .map(|s| Line::from(format!("{:<12} {:>3}%", s.name, s.efficiency)))
        .collect();
    f.render_widget(
        Paragraph::new(staff).block(border(
            format!("Staff {}", optional(summary.staff_performance, "%")),
            Color::Magenta,
        )),
        lists[1],
    );

    let recent: Vec<Line> = summary
        .recent_orders
        .iter()
        .map(|o| {
            Line::from(vec![
                Span::raw(format!("#{} T{} {} ", o.id, o.table, o.time)),
                Span::styled(o.status.as_str(), Style::default().fg(tone_color(o.tone))),
            ])
        })
        .collect();
    f.render_widget(
        Paragraph::new(recent).block(border("Recent orders", Color::Magenta)),
        lists[2],
    );
}

fn render_page(f: &mut Frame, app: &App, page: &dyn PageView, area: Rect) {
    let chunks = Layout::vertical([Constraint::Length(3), Constraint::Min(1)]).split(area);

    let search_style = match app.input_mode {
        InputMode::Search => Style::default().fg(Color::Yellow),
        _ => Style::default().fg(Color::Gray),
    };
    let search_title = format!("Search | Tab: {}", page.category_label());
    let width = chunks[0].width.max(3) - 3;
    let (text, scroll) = if app.input_mode == InputMode::Search {
        let scroll = app.input.visual_scroll(width as usize);
        (app.input.value(), scroll)
    } else {
        (page.search_term(), 0)
    };
    let search = Paragraph::new(text)
        .style(search_style)
        .scroll((0, scroll as u16))
        .block(border(search_title, Color::Cyan));
    f.render_widget(search, chunks[0]);
    if app.input_mode == InputMode::Search {
        f.set_cursor_position((
            chunks[0].x + ((app.input.visual_cursor().max(scroll) - scroll) as u16) + 1,
            chunks[0].y + 1,
        ));
    }

    let header = Row::new(page.columns().iter().copied())
        .style(Style::default().add_modifier(Modifier::BOLD));
    let rows: Vec<Row> = page
        .rows()
        .into_iter()
        .map(|cells| {
            Row::new(cells.into_iter().map(|c| {
                let style = c
                    .tone
                    .map(|t| Style::default().fg(tone_color(t)))
                    .unwrap_or_default();
                ratatui::widgets::Cell::from(c.text).style(style)
            }))
        })
        .collect();
    let widths = vec![Constraint::Fill(1); page.columns().len()];
    let title = format!(
        "{} ({} of {})",
        app.state.route().title(),
        page.visible_len(),
        page.record_count()
    );
    let table = Table::new(rows, widths)
        .header(header)
        .block(border(title, Color::Cyan))
        .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED));
    let mut state = TableState::default().with_selected(Some(app.selected_row()));
    f.render_stateful_widget(table, chunks[1], &mut state);
}

fn render_form(f: &mut Frame, app: &App, page: &dyn PageView) {
    let area = centered(f.area(), 60, 60);
    f.render_widget(Clear, area);

    let verb = if page.form_editing() { "Edit" } else { "Add" };
    let fields = page.form_fields();
    let mut lines = Vec::with_capacity(fields.len());
    let mut cursor = None;
    for (i, field) in fields.iter().enumerate() {
        let focused = i == app.field_index;
        let marker = if field.required { "*" } else { " " };
        let label = format!("{:>14}{} ", field.label, marker);
        let value = match (focused, field.kind) {
            (true, FieldKind::Text) => {
                cursor = Some((label.chars().count() + app.input.visual_cursor(), i));
                app.input.value().to_string()
            }
            (true, FieldKind::Choice(_)) => {
                format!("◀ {} ▶", page.form_value(field.key).unwrap_or_default())
            }
            (false, _) => page.form_value(field.key).unwrap_or_default(),
        };
        let style = if focused {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };
        lines.push(Line::from(vec![Span::raw(label), Span::styled(value, style)]));
    }

    let form = Paragraph::new(lines)
        .block(border(format!("{} {}", verb, page.noun()), Color::Yellow))
        .wrap(Wrap { trim: false });
    f.render_widget(form, area);

    if let Some((x, y)) = cursor {
        f.set_cursor_position((area.x + 1 + x as u16, area.y + 1 + y as u16));
    }
}

fn render_detail(f: &mut Frame, detail: &OrderDetail) {
    let area = centered(f.area(), 60, 70);
    f.render_widget(Clear, area);

    let mut lines = vec![
        Line::from(format!("Table {}  Server {}", detail.table, detail.server)),
        Line::from(vec![
            Span::raw(format!("{}  {}  ", detail.date, detail.time_range)),
            Span::styled(
                detail.status.as_str(),
                Style::default().fg(tone_color(detail.status_tone)),
            ),
        ]),
        Line::from(""),
    ];
    lines.extend(detail.lines.iter().map(|l| {
        Line::from(format!(
            "{:>3} x {:<24} {:>10} {:>10}",
            l.quantity,
            l.name,
            format_currency(l.unit_price),
            format_currency(l.line_total)
        ))
    }));
    lines.push(Line::from(""));
    lines.push(Line::from(format!(
        "Items {}  Subtotal {}  Discount {}",
        detail.item_count,
        format_currency(detail.subtotal),
        format_currency(detail.discount)
    )));
    lines.push(Line::from(Span::styled(
        format!("Total {}", format_currency(detail.final_total)),
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(vec![
        Span::raw(format!("Service time (expected {} min): ", detail.expected_time)),
        Span::styled(
            detail.service_time.clone(),
            Style::default().fg(tone_color(detail.service_tone)),
        ),
    ]));

    let popup = Paragraph::new(lines)
        .block(border(format!("Order #{}", detail.id), Color::Yellow))
        .wrap(Wrap { trim: false });
    f.render_widget(popup, area);
}
