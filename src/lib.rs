pub mod adapters;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::config::SearchOptions;
pub use crate::core::filter::{filter_by_any_field, filter_by_columns};
pub use crate::core::paginate::sort_and_page;
pub use crate::core::search::{custom_search, DatatableSearch};
pub use crate::domain::model::{ColumnFilter, FieldKind, FieldValue, Record, SearchResult, TableResponse};
pub use crate::domain::ports::{AsFieldValue, Searchable};
pub use crate::domain::request::{ColumnDef, OrderSpec, SearchValue, TableRequest};
pub use crate::utils::error::{Result, SearchError};
