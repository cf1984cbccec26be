pub mod filter;
pub mod paginate;
pub mod search;

pub use crate::domain::model::{ColumnFilter, FieldKind, FieldValue, Record, SearchResult, TableResponse};
pub use crate::domain::ports::{AsFieldValue, Searchable};
pub use crate::domain::request::{ColumnDef, OrderSpec, SearchValue, TableRequest};
