pub mod backup;
pub mod del;
pub mod edit;
pub mod log;
pub mod report;
pub mod timer;

pub use report::ReportLogic;
pub use timer::Timer;
