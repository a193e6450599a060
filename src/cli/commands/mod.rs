pub mod config;
pub mod db;
pub mod export;
pub mod init;
pub mod log;
pub mod mark;
pub mod range;
pub mod show;
pub mod summary;
pub mod todo;
pub mod trend;
