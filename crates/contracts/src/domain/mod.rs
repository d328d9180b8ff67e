pub mod common;

pub mod a001_client_type;
pub mod a002_client;
pub mod a003_source;
pub mod a004_product;
pub mod a005_storage;
pub mod a006_withdrawal_reason;
pub mod a007_carrier;
pub mod a008_branch;
pub mod a009_counterparty;
pub mod a010_vehicle;
pub mod a011_withdrawal;
pub mod a012_receipt;
pub mod a013_transfer;
