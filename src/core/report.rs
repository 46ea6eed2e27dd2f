use crate::models::{DayTotal, TimeEntry};
use chrono::{Duration, NaiveDate};
use indexmap::IndexMap;

pub struct ReportLogic;

impl ReportLogic {
    /// Minutes per category, in order of first appearance.
    pub fn category_totals(entries: &[TimeEntry]) -> IndexMap<String, f64> {
        let mut totals: IndexMap<String, f64> = IndexMap::new();
        for e in entries {
            *totals.entry(e.category.clone()).or_insert(0.0) += e.minutes();
        }
        totals
    }

    /// Minutes per day for the seven days ending on `today`, oldest first.
    pub fn weekly_totals(entries: &[TimeEntry], today: NaiveDate) -> Vec<DayTotal> {
        (0..7)
            .rev()
            .map(|back| {
                let date = today - Duration::days(back);
                let minutes = entries
                    .iter()
                    .filter(|e| e.start_date() == date)
                    .map(TimeEntry::minutes)
                    .fold(0.0, |acc, m| acc + m);
                DayTotal { date, minutes }
            })
            .collect()
    }

    /// Sum of all tracked minutes.
    pub fn grand_total(entries: &[TimeEntry]) -> f64 {
        entries
            .iter()
            .map(TimeEntry::minutes)
            .fold(0.0, |acc, m| acc + m)
    }
}
