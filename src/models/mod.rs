pub mod entry;
pub mod summary;

pub use entry::TimeEntry;
pub use summary::DayTotal;
