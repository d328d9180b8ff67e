pub mod api_utils;
pub mod components;
pub mod dynamic_form;
pub mod form_utils;
pub mod http;
pub mod icons;
pub mod list_utils;
pub mod modal;
pub mod page_frame;
pub mod page_standard;
pub mod storage;
pub mod toast;
