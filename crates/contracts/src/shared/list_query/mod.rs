//! Search / filter / paginate over already-fetched list data.

pub mod criteria;
pub mod field;
pub mod view;

pub use criteria::{apply, Criteria, FilterValue, SEARCH_KEY};
pub use field::{parse_iso_date, FieldValue, ListRecord};
pub use view::{sort_records, ListView, DEFAULT_PAGE_SIZE};
