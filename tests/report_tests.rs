mod common;
use chrono::NaiveDate;
use common::{entry, sample_entries, ts};
use timeloom::core::ReportLogic;
use timeloom::models::TimeEntry;
use timeloom::ui::report::{
    render_bar_chart, render_category_summary, render_entries_table, render_heatmap,
};

#[test]
fn test_category_totals_sum_by_category_in_first_seen_order() {
    let totals = ReportLogic::category_totals(&sample_entries());

    let keys: Vec<&str> = totals.keys().map(String::as_str).collect();
    assert_eq!(keys, ["Work", "Study"]);
    assert_eq!(totals["Work"], 120.0);
    assert_eq!(totals["Study"], 45.0);
}

#[test]
fn test_category_totals_match_grand_total() {
    let entries = sample_entries();
    let totals = ReportLogic::category_totals(&entries);
    let sum: f64 = totals.values().sum();
    assert_eq!(sum, ReportLogic::grand_total(&entries));
}

#[test]
fn test_running_entries_count_as_zero() {
    let mut entries = sample_entries();
    entries.push(TimeEntry::running("Open", "Work", ts("2025-09-02 09:00:00")));

    let totals = ReportLogic::category_totals(&entries);
    assert_eq!(totals["Work"], 120.0);
}

#[test]
fn test_weekly_totals_cover_seven_days_ending_today() {
    let today = NaiveDate::from_ymd_opt(2025, 9, 2).expect("date");
    let mut entries = sample_entries();
    // outside the window
    entries.push(entry("Old", "Work", "2025-08-20 09:00:00", "2025-08-20 10:00:00"));

    let days = ReportLogic::weekly_totals(&entries, today);

    assert_eq!(days.len(), 7);
    assert_eq!(days[0].date, NaiveDate::from_ymd_opt(2025, 8, 27).expect("date"));
    assert_eq!(days[6].date, today);
    assert_eq!(days[5].minutes, 135.0);
    assert_eq!(days[6].minutes, 30.0);
    assert!(days[..5].iter().all(|d| d.minutes == 0.0));
    assert_eq!(days[6].weekday_label(), "Tue");
}

#[test]
fn test_entries_table_lists_every_entry_with_index() {
    let out = render_entries_table(&sample_entries(), "-");

    assert!(out.contains("Duration (min)"));
    assert!(out.contains("Write report"));
    assert!(out.contains("2025-09-01 10:30:00"));
    let rows: Vec<&str> = out.lines().skip(2).collect();
    assert_eq!(rows.len(), 3);
    assert!(rows[1].starts_with('1'));
    assert!(rows[1].contains("Read book"));
}

#[test]
fn test_empty_renderings_report_no_records() {
    let empty = ReportLogic::category_totals(&[]);
    assert_eq!(render_entries_table(&[], "-"), "No records found.\n");
    assert_eq!(render_category_summary(&empty), "No records found.\n");
    assert_eq!(render_bar_chart(&empty), "No records found.\n");
    let today = NaiveDate::from_ymd_opt(2025, 9, 1).expect("date");
    assert_eq!(render_heatmap(&[], today), "No records found.\n");
}

#[test]
fn test_summary_and_chart_show_category_minutes() {
    let totals = ReportLogic::category_totals(&sample_entries());

    let summary = render_category_summary(&totals);
    assert!(summary.contains("Work: 120 mins"));
    assert!(summary.contains("Study: 45 mins"));
    assert!(summary.contains("Total: 165 mins (02h 45m)"));

    let chart = render_bar_chart(&totals);
    let work_line = chart.lines().find(|l| l.starts_with("Work")).expect("work bar");
    let study_line = chart.lines().find(|l| l.starts_with("Study")).expect("study bar");
    assert!(work_line.matches('█').count() > study_line.matches('█').count());
}

#[test]
fn test_heatmap_has_weekday_labels() {
    let today = NaiveDate::from_ymd_opt(2025, 9, 2).expect("date");
    let out = render_heatmap(&sample_entries(), today);
    assert!(out.contains("Wed Thu Fri Sat Sun Mon Tue"));
    assert!(out.contains("135"));
}

#[test]
fn test_empty_days_total_positive_zero() {
    let today = NaiveDate::from_ymd_opt(2025, 9, 1).expect("date");
    let days = ReportLogic::weekly_totals(&[], today);
    assert!(days.iter().all(|d| d.minutes == 0.0 && d.minutes.is_sign_positive()));
    assert!(ReportLogic::grand_total(&[]).is_sign_positive());

    // only Tuesday has time; the other six days print as plain 0
    let tuesday = NaiveDate::from_ymd_opt(2025, 9, 2).expect("date");
    let out = render_heatmap(&sample_entries()[2..], tuesday);
    assert!(!out.contains("-0"));
    let values = out.lines().last().expect("values row");
    assert_eq!(values.matches(" 0").count(), 6);
    assert!(values.contains("30"));
}
