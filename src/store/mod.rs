pub mod log;
pub mod records;

pub use records::RecordStore;
