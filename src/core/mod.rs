pub mod calendar;
pub mod reminder;
