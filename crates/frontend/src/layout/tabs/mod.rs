//! Tab management
//!
//! - `page`: TabPage wrapper around tab content
//! - `registry`: tab.key → View
//! - `tab_labels`: tab.key → title

pub mod page;
pub mod registry;
pub mod tab_labels;

pub use page::TabPage;
pub use tab_labels::{detail_tab_key, tab_label_for_key};
