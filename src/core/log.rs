use crate::errors::AppResult;
use crate::store::RecordStore;
use crate::store::log::read_log;
use ansi_term::Colour;
use regex::Regex;
use std::sync::LazyLock;

static ANSI_RE: LazyLock<Option<Regex>> = LazyLock::new(|| Regex::new(r"\x1B\[[0-9;]*[mK]").ok());

const OP_WIDTH: usize = 60;

fn strip_ansi(s: &str) -> String {
    match ANSI_RE.as_ref() {
        Some(re) => re.replace_all(s, "").into_owned(),
        None => s.to_string(),
    }
}

/// ANSI colour for each audit operation
fn color_for_operation(op: &str) -> Colour {
    match op {
        "add" => Colour::Green,
        "del" => Colour::Red,
        "edit" => Colour::Yellow,
        "export" => Colour::Cyan,
        "backup" => Colour::Blue,
        "init" => Colour::RGB(255, 153, 51),
        _ => Colour::White,
    }
}

pub struct LogLogic;

impl LogLogic {
    /// Render the audit log, one line per record.
    pub fn render_log(store: &RecordStore) -> AppResult<String> {
        let records = read_log(store.path())?;
        if records.is_empty() {
            return Ok("No log entries.\n".to_string());
        }

        let id_w = records.len().to_string().len();
        let date_w = records.iter().map(|r| r.date.len()).max().unwrap_or(0);

        let mut out = String::from("📜 Internal log:\n\n");

        for (i, rec) in records.iter().enumerate() {
            let color = color_for_operation(&rec.operation);

            let op_target = if rec.target.is_empty() {
                rec.operation.clone()
            } else {
                format!("{} ({})", rec.operation, rec.target)
            };

            // truncate on the visible text, then colour only the operation word
            let visible = strip_ansi(&op_target);
            let truncated = if visible.chars().count() > OP_WIDTH {
                let mut s: String = visible.chars().take(OP_WIDTH - 3).collect();
                s.push_str("...");
                s
            } else {
                visible
            };

            let recolored = match truncated.split_once(' ') {
                Some((op_word, rest)) => format!("{} {}", color.paint(op_word), rest),
                None => color.paint(truncated.as_str()).to_string(),
            };

            let padding = " ".repeat(OP_WIDTH.saturating_sub(strip_ansi(&recolored).chars().count()));

            out.push_str(&format!(
                "{:>id_w$}: {:<date_w$} | {}{} => {}\n",
                i + 1,
                rec.date,
                recolored,
                padding,
                rec.message,
                id_w = id_w,
                date_w = date_w
            ));
        }

        Ok(out)
    }
}
