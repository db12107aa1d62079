pub mod banner;
pub mod browse;
pub mod config;
pub mod export;
pub mod init;
pub mod log;
pub mod timeline;
pub mod trend;
