pub mod report;
pub mod target;
