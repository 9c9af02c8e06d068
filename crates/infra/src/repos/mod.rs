pub mod branches;
pub mod clubs;
pub mod coaches;
pub mod schedule_slots;

pub use branches::CreateBranch;
pub use clubs::{CreateClub, UpdateClub};
pub use schedule_slots::CreateScheduleSlot;
