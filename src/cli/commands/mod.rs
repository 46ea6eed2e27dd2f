pub mod backup;
pub mod config;
pub mod dashboard;
pub mod del;
pub mod edit;
pub mod export;
pub mod init;
pub mod log;
pub mod menu;
pub mod report;
