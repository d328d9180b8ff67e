pub mod permissions;
pub mod session;
pub mod users;
