pub mod date_range_picker;
pub mod filter_panel;
pub mod lookup_select;
pub mod pagination_controls;
pub mod sortable_header_cell;

pub use date_range_picker::DateRangePicker;
pub use filter_panel::{FilterPanel, FilterTag};
pub use lookup_select::{sorted_options, LookupSelect};
pub use pagination_controls::{PaginationControls, PAGE_SIZE_OPTIONS};
pub use sortable_header_cell::SortableHeaderCell;
