pub mod a001_client_type;
pub mod a002_client;
pub mod a010_vehicle;
pub mod a011_withdrawal;
pub mod a012_receipt;
pub mod a013_transfer;
pub mod directories;
pub mod lookups;
