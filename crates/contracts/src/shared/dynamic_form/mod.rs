pub mod create_form;
pub mod field_type;
pub mod filter_form;
pub mod schema;
pub mod table;
pub mod values;

pub use create_form::{
    build_create_controls, collect_field_values, collect_object, inputs_from_object, ControlKind,
    FormControl, FormInputs, SelectOption,
};
pub use field_type::FieldType;
pub use filter_form::{
    build_filter_controls, static_filter_controls, FilterControl, FilterKind, RangeInput,
    TRI_STATE_OPTIONS,
};
pub use schema::{sorted_fields, ClientTypeField, ListValue, DEFAULT_COLUMN_WIDTH};
pub use table::{build_table_columns, ColumnKind, StaticColumn, TableColumn};
pub use values::FieldValue;
