pub mod branches;
pub mod clubs;
pub mod schedules;
