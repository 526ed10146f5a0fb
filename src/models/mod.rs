pub mod responses;
pub mod user;
