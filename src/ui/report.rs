//! Text renderings of the stored entries and their aggregates.

use crate::core::ReportLogic;
use crate::models::{DayTotal, TimeEntry};
use crate::ui::messages::header;
use crate::utils::colors::{CYAN, GREY, RESET, shade_for};
use crate::utils::formatting::{format_mins, mins2readable, pad_left, pad_right};
use crate::utils::table::{Column, Table};
use chrono::NaiveDate;
use indexmap::IndexMap;
use unicode_width::UnicodeWidthStr;

pub const NO_RECORDS: &str = "No records found.";

/// Width of the longest bar in the text chart.
pub const CHART_WIDTH: usize = 40;

pub fn render_entries_table(entries: &[TimeEntry], separator: &str) -> String {
    if entries.is_empty() {
        return format!("{NO_RECORDS}\n");
    }

    let mut table = Table::new(vec![
        Column::new("#"),
        Column::new("Task"),
        Column::new("Category"),
        Column::new("Start"),
        Column::new("End"),
        Column::new("Duration (min)"),
    ])
    .with_separator(separator);

    for (i, e) in entries.iter().enumerate() {
        table.add_row(vec![
            i.to_string(),
            e.task.clone(),
            e.category.clone(),
            e.start_str(),
            e.end_str(),
            e.duration_mins.map(format_mins).unwrap_or_default(),
        ]);
    }

    table.render()
}

pub fn render_category_summary(totals: &IndexMap<String, f64>) -> String {
    if totals.is_empty() {
        return format!("{NO_RECORDS}\n");
    }

    let mut out = String::from("\nCategory Summary (Total Time in Minutes):\n");
    for (cat, total) in totals {
        out.push_str(&format!("  • {}: {} mins\n", cat, format_mins(*total)));
    }

    let grand = totals.values().fold(0.0_f64, |acc, m| acc + m);
    out.push_str(&format!(
        "  Total: {} mins ({})\n",
        format_mins(grand),
        mins2readable(grand)
    ));
    out
}

/// Horizontal bar chart of minutes per category.
pub fn render_bar_chart(totals: &IndexMap<String, f64>) -> String {
    if totals.is_empty() {
        return format!("{NO_RECORDS}\n");
    }

    let max = totals.values().copied().fold(0.0_f64, f64::max);
    let label_w = totals
        .keys()
        .map(|k| UnicodeWidthStr::width(k.as_str()))
        .max()
        .unwrap_or(0);

    let mut out = header("Weekly Productivity Summary");
    for (cat, total) in totals {
        let len = if max > 0.0 {
            ((total / max) * CHART_WIDTH as f64).round() as usize
        } else {
            0
        };
        out.push_str(&format!(
            "{} │{}{}{} {}\n",
            pad_right(cat, label_w),
            CYAN,
            "█".repeat(len),
            RESET,
            format_mins(*total)
        ));
    }
    out.push_str(&format!(
        "{}  Total Time (Minutes)\n",
        pad_left("", label_w)
    ));
    out
}

/// One-row heatmap of the seven days ending on `today`: a shaded cell per
/// day, weekday labels underneath.
pub fn render_heatmap(entries: &[TimeEntry], today: NaiveDate) -> String {
    if entries.is_empty() {
        return format!("{NO_RECORDS}\n");
    }

    let days = ReportLogic::weekly_totals(entries, today);
    let max = days.iter().map(|d| d.minutes).fold(0.0_f64, f64::max);

    let mut out = header("Weekly Heatmap (Total Minutes per Day)");

    let cells: Vec<String> = days
        .iter()
        .map(|d| {
            let shade = shade_for(d.minutes, max).to_string().repeat(3);
            format!("{CYAN}{shade}{RESET}")
        })
        .collect();
    out.push_str(&format!("│{}│\n", cells.join("│")));

    let labels: Vec<String> = days.iter().map(DayTotal::weekday_label).collect();
    out.push_str(&format!(" {}\n", labels.join(" ")));

    let values: Vec<String> = days
        .iter()
        .map(|d| pad_left(&format!("{:.0}", d.minutes), 3))
        .collect();
    out.push_str(&format!("{GREY} {}{RESET}\n", values.join(" ")));

    out
}
