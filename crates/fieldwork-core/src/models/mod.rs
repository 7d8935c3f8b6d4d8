pub mod question;
pub mod response;
pub mod session;

mod timestamp_compat;
