pub mod branch_permissions;
pub mod session;
pub mod users;
