#[cfg(feature = "cli")]
pub mod cli;
pub mod options;

#[cfg(feature = "cli")]
pub use cli::CliConfig;
pub use options::{
    Combine, FilterOptions, KindProbe, MatchMode, PagingOptions, SearchOptions, SortOptions,
    SortPolicy, TotalCount,
};
