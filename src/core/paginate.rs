use crate::config::SortPolicy;
use crate::core::{FieldValue, SearchResult, Searchable};
use std::cmp::Ordering;

fn compare_field<T: Searchable>(a: &T, b: &T, field: &str) -> Ordering {
    let left = a.field_value(field).unwrap_or(FieldValue::Null);
    let right = b.field_value(field).unwrap_or(FieldValue::Null);
    left.compare(&right)
}

/// Sort on `sort_field`, then cut the `skip`/`take` window.
///
/// The sort is stable in both directions, so rows with equal keys keep
/// their input order. An empty field name, or a field missing from every
/// row, leaves the order untouched. `take: None` means "everything after
/// `skip`".
///
/// Both counts in the returned result are the size of `records`: this step
/// cannot see what the set looked like before filtering.
pub fn sort_and_page<T: Searchable>(
    mut records: Vec<T>,
    sort_field: &str,
    ascending: bool,
    skip: usize,
    take: Option<usize>,
    policy: SortPolicy,
) -> SearchResult<T> {
    if policy == SortPolicy::FieldValue && !sort_field.is_empty() {
        records.sort_by(|a, b| {
            let ordering = compare_field(a, b, sort_field);
            if ascending {
                ordering
            } else {
                ordering.reverse()
            }
        });
    }

    let filtered_count = records.len();
    let rows: Vec<T> = records
        .into_iter()
        .skip(skip)
        .take(take.unwrap_or(usize::MAX))
        .collect();

    tracing::debug!(
        "Sorted on '{}' ({}), returning {} of {} row(s) from offset {}",
        sort_field,
        if ascending { "asc" } else { "desc" },
        rows.len(),
        filtered_count,
        skip
    );

    SearchResult {
        rows,
        filtered_count,
        total_count: filtered_count,
    }
}
