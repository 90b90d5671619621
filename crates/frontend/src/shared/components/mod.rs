pub mod form_field;
pub mod notice;
pub mod page_header;
pub mod pagination_controls;

pub use form_field::{SelectField, TextField};
pub use notice::Notice;
pub use page_header::PageHeader;
pub use pagination_controls::PaginationControls;
