pub mod attendance;
pub mod employee;
pub mod entries;
pub mod login;
