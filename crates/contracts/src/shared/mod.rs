pub mod api_error;
pub mod batch;
pub mod display;
pub mod dynamic_form;
pub mod filters;
pub mod inflight;
pub mod list_query;
pub mod page;
pub mod phone;
pub mod request_sequence;
pub mod validation;
