use ratatui::Frame;
use ratatui::layout::{Alignment, Constraint, Direction, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::{Line, Span};
use ratatui::widgets::{Bar, BarChart, BarGroup, Block, Borders, Paragraph, Wrap};

use crate::core::ReportLogic;
use crate::utils::clock::Clock;
use crate::utils::date;
use crate::utils::formatting::format_mins;

use super::app::{App, Field, Mode, Tone, View};

/// Key hints shown as the dashboard's button bar
const BUTTONS: [(&str, &str); 11] = [
    ("s", "Start"),
    ("x", "Stop"),
    ("v", "Entries"),
    ("c", "Summary"),
    ("b", "Chart"),
    ("h", "Heatmap"),
    ("d", "Delete"),
    ("t", "Theme"),
    ("e", "Export CSV"),
    ("Tab", "Edit"),
    ("q", "Quit"),
];

/// Draw the whole dashboard for the current view
pub fn render<C: Clock>(frame: &mut Frame, app: &App<C>) {
    let area = frame.area();
    let theme = &app.theme;

    frame.render_widget(
        Block::default().style(Style::default().bg(theme.background).fg(theme.text)),
        area,
    );

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // header
            Constraint::Length(4), // task + category inputs
            Constraint::Length(1), // timer label
            Constraint::Length(2), // buttons
            Constraint::Min(3),    // content
            Constraint::Length(1), // status row
        ])
        .split(area);

    render_header(frame, app, chunks[0]);
    render_inputs(frame, app, chunks[1]);
    render_timer(frame, app, chunks[2]);
    render_buttons(frame, app, chunks[3]);

    match app.view {
        View::Log => render_log(frame, app, chunks[4]),
        View::Entries => render_entries(frame, app, chunks[4]),
        View::Summary => render_summary(frame, app, chunks[4]),
        View::Chart => render_chart(frame, app, chunks[4]),
        View::Heatmap => render_heatmap(frame, app, chunks[4]),
    }

    render_status(frame, app, chunks[5]);
}

fn render_header<C: Clock>(frame: &mut Frame, app: &App<C>, area: Rect) {
    let title = Paragraph::new(Line::from(Span::styled(
        "⏰ TimeLoom – Productivity Visualizer",
        Style::default()
            .fg(app.theme.accent)
            .add_modifier(Modifier::BOLD),
    )))
    .alignment(Alignment::Center);
    frame.render_widget(title, area);
}

fn render_inputs<C: Clock>(frame: &mut Frame, app: &App<C>, area: Rect) {
    let theme = &app.theme;
    let field_line = |label: &str, value: &str, focused: bool| {
        let cursor = if focused { "▏" } else { "" };
        let label_style = if focused {
            Style::default()
                .fg(theme.accent)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(theme.text)
        };
        Line::from(vec![
            Span::styled(format!("{label:<10}"), label_style),
            Span::styled(
                format!("{value}{cursor}"),
                Style::default().bg(theme.textbox).fg(theme.text),
            ),
        ])
    };

    let lines = vec![
        field_line(
            "Task:",
            &app.task_input,
            app.mode == Mode::Edit(Field::Task),
        ),
        field_line(
            "Category:",
            &app.category_input,
            app.mode == Mode::Edit(Field::Category),
        ),
    ];

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(theme.dim));
    frame.render_widget(Paragraph::new(lines).block(block), area);
}

fn render_timer<C: Clock>(frame: &mut Frame, app: &App<C>, area: Rect) {
    let style = Style::default()
        .fg(app.theme.accent)
        .add_modifier(Modifier::BOLD);
    let mut spans = vec![Span::styled(app.timer_label(), style)];
    if let Some(entry) = app.timer.current() {
        spans.push(Span::styled(
            format!("  {} ({})", entry.task, entry.category),
            Style::default().fg(app.theme.text),
        ));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans)).alignment(Alignment::Center),
        area,
    );
}

fn render_buttons<C: Clock>(frame: &mut Frame, app: &App<C>, area: Rect) {
    let key_style = Style::default()
        .fg(app.theme.accent)
        .add_modifier(Modifier::BOLD);
    let label_style = Style::default().fg(app.theme.text);

    let mut spans = Vec::new();
    for (key, label) in BUTTONS {
        spans.push(Span::styled(format!("[{key}]"), key_style));
        spans.push(Span::styled(format!(" {label}  "), label_style));
    }
    frame.render_widget(
        Paragraph::new(Line::from(spans))
            .alignment(Alignment::Center)
            .wrap(Wrap { trim: true }),
        area,
    );
}

fn content_block<C: Clock>(app: &App<C>, title: &str) -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .title(format!(" {title} "))
        .border_style(Style::default().fg(app.theme.dim))
        .style(Style::default().bg(app.theme.textbox).fg(app.theme.text))
}

fn render_log<C: Clock>(frame: &mut Frame, app: &App<C>, area: Rect) {
    // keep the newest messages visible
    let inner_h = area.height.saturating_sub(2) as usize;
    let skip = app.messages.len().saturating_sub(inner_h);
    let lines: Vec<Line> = app
        .messages
        .iter()
        .skip(skip)
        .map(|(tone, msg)| match tone {
            Tone::Normal => Line::from(msg.as_str()),
            Tone::Warning => Line::from(Span::styled(
                msg.as_str(),
                Style::default().fg(app.theme.warning),
            )),
        })
        .collect();

    frame.render_widget(
        Paragraph::new(lines).block(content_block(app, "Messages")),
        area,
    );
}

fn render_entries<C: Clock>(frame: &mut Frame, app: &App<C>, area: Rect) {
    let entries = app.store.load();
    let lines: Vec<Line> = if entries.is_empty() {
        vec![Line::from("No records found.")]
    } else {
        entries
            .iter()
            .enumerate()
            .map(|(i, e)| {
                Line::from(format!(
                    "{}. {} ({}) - {} mins",
                    i,
                    e.task,
                    e.category,
                    format_mins(e.minutes())
                ))
            })
            .collect()
    };

    frame.render_widget(
        Paragraph::new(lines).block(content_block(app, "📋 All Logged Entries")),
        area,
    );
}

fn render_summary<C: Clock>(frame: &mut Frame, app: &App<C>, area: Rect) {
    let totals = ReportLogic::category_totals(&app.store.load());
    let lines: Vec<Line> = if totals.is_empty() {
        vec![Line::from("No records to summarize.")]
    } else {
        totals
            .iter()
            .map(|(cat, mins)| Line::from(format!("{}: {} mins", cat, format_mins(*mins))))
            .collect()
    };

    frame.render_widget(
        Paragraph::new(lines).block(content_block(app, "Category Summary")),
        area,
    );
}

fn render_chart<C: Clock>(frame: &mut Frame, app: &App<C>, area: Rect) {
    let totals = ReportLogic::category_totals(&app.store.load());
    let block = content_block(app, "Weekly Productivity Summary (minutes per category)");

    if totals.is_empty() {
        frame.render_widget(
            Paragraph::new("No data available to display chart.").block(block),
            area,
        );
        return;
    }

    let bars: Vec<Bar> = totals
        .iter()
        .map(|(cat, mins)| {
            Bar::default()
                .value(mins.round().max(0.0) as u64)
                .text_value(format_mins(*mins))
                .label(Line::from(cat.clone()))
        })
        .collect();

    let inner_w = area.width.saturating_sub(2);
    let n = bars.len() as u16;
    let bar_width = (inner_w / n.max(1)).saturating_sub(1).clamp(3, 12);

    let chart = BarChart::default()
        .block(block)
        .bar_width(bar_width)
        .bar_gap(1)
        .bar_style(Style::default().fg(app.theme.bar))
        .value_style(
            Style::default()
                .fg(app.theme.text)
                .bg(app.theme.bar)
                .add_modifier(Modifier::BOLD),
        )
        .label_style(Style::default().fg(app.theme.text))
        .data(BarGroup::default().bars(&bars));

    frame.render_widget(chart, area);
}

fn render_heatmap<C: Clock>(frame: &mut Frame, app: &App<C>, area: Rect) {
    let entries = app.store.load();
    let block = content_block(app, "Weekly Heatmap (Total Minutes per Day)");

    if entries.is_empty() {
        frame.render_widget(
            Paragraph::new("No data to display heatmap.").block(block),
            area,
        );
        return;
    }

    let days = ReportLogic::weekly_totals(&entries, date::today());
    let max = days.iter().map(|d| d.minutes).fold(0.0_f64, f64::max);

    let inner = block.inner(area);
    frame.render_widget(block, area);

    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(1),    // cells
            Constraint::Length(1), // weekday labels
        ])
        .split(inner);

    let cell_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 7); 7])
        .split(rows[0]);
    let label_areas = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Ratio(1, 7); 7])
        .split(rows[1]);

    for (i, day) in days.iter().enumerate() {
        let color = app.theme.heat_color(day.minutes, max);
        let text_color = if max > 0.0 && day.minutes / max > 0.5 {
            app.theme.heat_color(0.0, max)
        } else {
            app.theme.heat_color(max, max)
        };
        let cell = Paragraph::new(format!("{:.0}", day.minutes))
            .alignment(Alignment::Center)
            .style(Style::default().bg(color).fg(text_color));
        frame.render_widget(cell, cell_areas[i]);

        let label = Paragraph::new(day.weekday_label()).alignment(Alignment::Center);
        frame.render_widget(label, label_areas[i]);
    }
}

fn render_status<C: Clock>(frame: &mut Frame, app: &App<C>, area: Rect) {
    let text = match app.mode {
        Mode::Navigate => format!(
            "{} mode · {} entries · {}",
            app.theme_kind.label(),
            app.store.load().len(),
            app.store.path().display()
        ),
        Mode::Edit(_) => "Editing: type to fill the field, Tab switches field, Enter/Esc done".into(),
        Mode::Delete => format!(
            "Enter entry number to delete: {}▏ (Enter confirm, Esc cancel)",
            app.delete_input
        ),
    };
    frame.render_widget(
        Paragraph::new(Span::styled(text, Style::default().fg(app.theme.dim))),
        area,
    );
}
