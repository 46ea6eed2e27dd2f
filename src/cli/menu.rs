//! Interactive numbered menu: the line-oriented front end.

use crate::core::del::DeleteLogic;
use crate::core::{ReportLogic, Timer};
use crate::errors::{AppError, AppResult};
use crate::store::RecordStore;
use crate::ui::messages::{Level, line};
use crate::ui::report::{render_category_summary, render_entries_table};
use crate::utils::clock::{Clock, SystemClock};
use crate::utils::formatting::format_mins;
use std::io::{BufRead, Write};

pub const MENU: &str = "
========= ⏰ TimeLoom =========
1. Start timer
2. Stop timer
3. View all entries
4. Category summary
5. Delete entry
6. Exit
";

pub struct MenuSession<'a, R, W, C: Clock = SystemClock> {
    store: &'a RecordStore,
    timer: Timer<C>,
    separator: String,
    input: R,
    out: W,
}

impl<'a, R: BufRead, W: Write> MenuSession<'a, R, W, SystemClock> {
    pub fn new(store: &'a RecordStore, separator: &str, input: R, out: W) -> Self {
        Self::with_timer(store, Timer::new(), separator, input, out)
    }
}

impl<'a, R: BufRead, W: Write, C: Clock> MenuSession<'a, R, W, C> {
    pub fn with_timer(
        store: &'a RecordStore,
        timer: Timer<C>,
        separator: &str,
        input: R,
        out: W,
    ) -> Self {
        Self {
            store,
            timer,
            separator: separator.to_string(),
            input,
            out,
        }
    }

    pub fn timer(&self) -> &Timer<C> {
        &self.timer
    }

    pub fn timer_mut(&mut self) -> &mut Timer<C> {
        &mut self.timer
    }

    /// Loop until the user picks "Exit" or input ends.
    pub fn run(&mut self) -> AppResult<()> {
        loop {
            let Some(choice) = self.prompt(&format!("{MENU}Choose an option: "))? else {
                self.exit()?;
                return Ok(());
            };

            match choice.as_str() {
                "1" => self.start()?,
                "2" => self.stop()?,
                "3" => {
                    let table = render_entries_table(&self.store.load(), &self.separator);
                    write!(self.out, "{table}")?;
                }
                "4" => {
                    let totals = ReportLogic::category_totals(&self.store.load());
                    write!(self.out, "{}", render_category_summary(&totals))?;
                }
                "5" => self.delete()?,
                "6" => {
                    self.exit()?;
                    return Ok(());
                }
                _ => writeln!(self.out, "Invalid option. Try again.")?,
            }
        }
    }

    /// Print `label` and read one trimmed line; `None` at end of input.
    fn prompt(&mut self, label: &str) -> AppResult<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;

        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        Ok(Some(buf.trim().to_string()))
    }

    fn say(&mut self, level: Level, msg: impl std::fmt::Display) -> AppResult<()> {
        writeln!(self.out, "{}", line(level, msg))?;
        Ok(())
    }

    pub fn start(&mut self) -> AppResult<()> {
        let task = self.prompt("Enter task name: ")?.unwrap_or_default();
        let category = self.prompt("Enter category: ")?.unwrap_or_default();

        match self.timer.start(&task, &category) {
            Ok(entry) => {
                let msg = format!("⏱ Timer started for task: {}", entry.task);
                writeln!(self.out, "{msg}")?;
            }
            Err(e @ (AppError::TimerAlreadyRunning(_) | AppError::MissingTaskOrCategory)) => {
                self.say(Level::Warning, e)?;
            }
            Err(e) => return Err(e),
        }
        Ok(())
    }

    pub fn stop(&mut self) -> AppResult<()> {
        match self.timer.stop(self.store) {
            Ok(entry) => self.say(
                Level::Success,
                format!(
                    "Task '{}' logged ({} mins).",
                    entry.task,
                    format_mins(entry.minutes())
                ),
            ),
            Err(AppError::TimerNotRunning) => self.say(Level::Warning, AppError::TimerNotRunning),
            Err(e) => Err(e),
        }
    }

    pub fn delete(&mut self) -> AppResult<()> {
        let raw = self
            .prompt("Enter entry number to delete: ")?
            .unwrap_or_default();

        let Ok(index) = raw.parse::<usize>() else {
            return self.say(Level::Error, "Please enter a non-negative integer.");
        };

        if DeleteLogic::apply(self.store, index)? {
            self.say(Level::Success, "Entry deleted.")
        } else {
            self.say(Level::Warning, "Invalid entry number.")
        }
    }

    fn exit(&mut self) -> AppResult<()> {
        if let Some(entry) = self.timer.discard() {
            self.say(
                Level::Warning,
                format!(
                    "Timer for '{}' was still running and has not been logged.",
                    entry.task
                ),
            )?;
        }
        writeln!(self.out, "👋 Exiting TimeLoom. Have a productive day!")?;
        Ok(())
    }
}
