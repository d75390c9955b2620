pub mod add;
pub mod calculator;
pub mod del;
pub mod edit;
pub mod list;
pub mod log;
pub mod summary;
