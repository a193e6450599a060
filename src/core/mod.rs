pub mod analytics;
pub mod export;
pub mod log;
pub mod migrator;
pub mod range;
pub mod summary;
pub mod tracker;
