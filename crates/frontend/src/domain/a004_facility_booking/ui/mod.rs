pub mod calendar;
pub mod list;
