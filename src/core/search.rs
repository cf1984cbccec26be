use crate::config::{FilterOptions, SearchOptions, TotalCount};
use crate::core::filter::{filter_by_any_field, filter_by_columns};
use crate::core::paginate::sort_and_page;
use crate::core::{ColumnFilter, SearchResult, Searchable, TableRequest};
use crate::utils::error::{Result, SearchError};

/// Per-column search boxes that carry a value.
pub fn column_filters(request: &TableRequest, options: &FilterOptions) -> Vec<ColumnFilter> {
    request
        .columns
        .iter()
        .filter_map(|column| {
            let value = column.search_value()?;
            if options.ignore_blank_column_search && value.is_empty() {
                return None;
            }
            Some(ColumnFilter::new(column.data.as_str(), value))
        })
        .collect()
}

/// Sort field and direction from the first order entry only.
///
/// Without an order entry the field is empty and the direction ascending.
pub fn sort_key(request: &TableRequest) -> Result<(&str, bool)> {
    let Some(order) = request.order.as_ref().and_then(|order| order.first()) else {
        return Ok(("", true));
    };

    let column = request
        .columns
        .get(order.column)
        .ok_or_else(|| SearchError::InvalidOrderColumn {
            index: order.column,
            columns: request.columns.len(),
        })?;

    Ok((column.data.as_str(), order.is_ascending()))
}

/// `(skip, take)` from `start`/`length`. A negative length means no limit,
/// a negative start counts as zero.
pub fn page_window(request: &TableRequest, max_page_length: Option<usize>) -> (usize, Option<usize>) {
    let skip = usize::try_from(request.start).unwrap_or(0);
    let take = usize::try_from(request.length).ok();
    let take = match (take, max_page_length) {
        (Some(take), Some(max)) => Some(take.min(max)),
        (None, Some(max)) => Some(max),
        (take, None) => take,
    };
    (skip, take)
}

/// Filter, sort and page `records` as described by `request`.
///
/// The global search runs over every column name of the request, then the
/// per-column filters narrow the set further. An order entry pointing past
/// the column list is an error.
pub fn custom_search<T: Searchable>(
    records: Vec<T>,
    request: &TableRequest,
    options: &SearchOptions,
) -> Result<SearchResult<T>> {
    let filters = column_filters(request, &options.filter);
    let (sort_by, ascending) = sort_key(request)?;
    let (skip, take) = page_window(request, options.paging.max_page_length);

    let total_count = records.len();
    let mut records = records;

    if let Some(search_by) = request.global_search() {
        let columns = request.column_names();
        records = filter_by_any_field(records, columns.as_slice(), search_by, &options.filter);
    }

    if !filters.is_empty() {
        records = filter_by_columns(records, &filters, &options.filter);
    }

    let mut result = sort_and_page(records, sort_by, ascending, skip, take, options.sort.policy);
    if options.paging.total_count == TotalCount::Original {
        result.total_count = total_count;
    }

    tracing::debug!(
        "draw {}: {} row(s) on page, {} filtered, {} total",
        request.draw,
        result.rows.len(),
        result.filtered_count,
        result.total_count
    );

    Ok(result)
}

/// Holds a set of [`SearchOptions`] and runs searches with them.
#[derive(Debug, Clone, Default)]
pub struct DatatableSearch {
    options: SearchOptions,
}

impl DatatableSearch {
    pub fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    pub fn options(&self) -> &SearchOptions {
        &self.options
    }

    pub fn search<T: Searchable>(&self, records: Vec<T>, request: &TableRequest) -> Result<SearchResult<T>> {
        custom_search(records, request, &self.options)
    }

    pub fn filter_by_any_field<T: Searchable, S: AsRef<str>>(
        &self,
        records: Vec<T>,
        field_names: &[S],
        value: &str,
    ) -> Vec<T> {
        filter_by_any_field(records, field_names, value, &self.options.filter)
    }

    pub fn filter_by_columns<T: Searchable>(&self, records: Vec<T>, filters: &[ColumnFilter]) -> Vec<T> {
        filter_by_columns(records, filters, &self.options.filter)
    }

    pub fn sort_and_page<T: Searchable>(
        &self,
        records: Vec<T>,
        sort_field: &str,
        ascending: bool,
        skip: usize,
        take: Option<usize>,
    ) -> SearchResult<T> {
        sort_and_page(records, sort_field, ascending, skip, take, self.options.sort.policy)
    }
}
