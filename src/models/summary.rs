use chrono::NaiveDate;

/// Total tracked minutes for one calendar day (heatmap cell).
#[derive(Debug, Clone, PartialEq)]
pub struct DayTotal {
    pub date: NaiveDate,
    pub minutes: f64,
}

impl DayTotal {
    /// Short weekday label, e.g. "Mon".
    pub fn weekday_label(&self) -> String {
        self.date.format("%a").to_string()
    }
}
