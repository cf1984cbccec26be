use crate::config::{Combine, FilterOptions, KindProbe, MatchMode};
use crate::core::{ColumnFilter, FieldKind, FieldValue, Searchable};
use std::borrow::Cow;

/// Column names that parse as numbers belong to grid columns without a
/// backing field (array-fed grids send the column index) and are never searched.
///
/// Besides plain floats this accepts `,` group separators, a `¤` currency
/// sign, a trailing sign (`5-`) and accounting parentheses (`(5)`).
pub fn is_numeric_name(name: &str) -> bool {
    let mut body = name.trim();
    if let Some(inner) = body.strip_prefix('(').and_then(|b| b.strip_suffix(')')) {
        // a parenthesized number is already negative
        if inner.trim_start().starts_with(['-', '+']) {
            return false;
        }
        body = inner.trim();
    }
    body = body
        .strip_prefix('¤')
        .or_else(|| body.strip_suffix('¤'))
        .unwrap_or(body)
        .trim();

    if matches!(body, "NaN" | "Infinity" | "-Infinity") {
        return true;
    }

    let signed = match body.strip_suffix('-') {
        Some(rest) => format!("-{}", rest.trim_end()),
        None => body.strip_suffix('+').unwrap_or(body).trim_end().to_string(),
    };
    let digits: String = signed.chars().filter(|c| *c != ',').collect();
    !digits.is_empty() && digits.parse::<f64>().map(f64::is_finite).unwrap_or(false)
}

/// Substring test with the configured mode and case handling.
#[derive(Debug, Clone)]
struct TextMatcher {
    needle: String,
    mode: MatchMode,
    case_sensitive: bool,
}

impl TextMatcher {
    fn new(value: &str, options: &FilterOptions) -> Self {
        let needle = if options.case_sensitive {
            value.to_string()
        } else {
            value.to_lowercase()
        };
        Self {
            needle,
            mode: options.match_mode,
            case_sensitive: options.case_sensitive,
        }
    }

    fn matches(&self, text: &str) -> bool {
        let text = if self.case_sensitive {
            Cow::Borrowed(text)
        } else {
            Cow::Owned(text.to_lowercase())
        };
        match self.mode {
            MatchMode::Contains => text.contains(self.needle.as_str()),
            MatchMode::StartsWith => text.starts_with(self.needle.as_str()),
            MatchMode::EndsWith => text.ends_with(self.needle.as_str()),
        }
    }
}

/// "field contains value" for one text field.
#[derive(Debug, Clone)]
struct FieldPredicate {
    field: String,
    matcher: TextMatcher,
}

impl FieldPredicate {
    fn test<T: Searchable>(&self, record: &T) -> bool {
        match record.field_value(&self.field) {
            Some(FieldValue::Text(text)) => self.matcher.matches(&text),
            _ => false,
        }
    }
}

impl Combine {
    fn fold<T: Searchable>(self, predicates: &[FieldPredicate], record: &T) -> bool {
        match self {
            Combine::Any => predicates.iter().any(|p| p.test(record)),
            Combine::All => predicates.iter().all(|p| p.test(record)),
        }
    }
}

fn resolve_kind<T: Searchable>(records: &[T], field: &str, probe: KindProbe) -> Option<FieldKind> {
    let declared = match probe {
        KindProbe::Declared => T::declared_kind(field),
        KindProbe::FirstRecord => None,
    };
    declared.or_else(|| records.first()?.field_value(field)?.kind())
}

fn build_predicate<T: Searchable>(
    records: &[T],
    field: &str,
    value: &str,
    options: &FilterOptions,
) -> Option<FieldPredicate> {
    if field.is_empty() || is_numeric_name(field) {
        tracing::trace!("Skipping column '{}': no backing field", field);
        return None;
    }

    match resolve_kind(records, field, options.kind_probe) {
        Some(FieldKind::Text) => Some(FieldPredicate {
            field: field.to_string(),
            matcher: TextMatcher::new(value, options),
        }),
        kind => {
            tracing::trace!("Skipping column '{}': kind {:?} is not searchable", field, kind);
            None
        }
    }
}

fn apply<T: Searchable>(records: Vec<T>, predicates: &[FieldPredicate], combine: Combine) -> Vec<T> {
    // No usable field means nothing can match, not "no filter".
    if predicates.is_empty() {
        tracing::debug!("No searchable field among the requested columns; result is empty");
        return Vec::new();
    }

    records
        .into_iter()
        .filter(|record| combine.fold(predicates, record))
        .collect()
}

/// Global search: keep records whose text fields among `field_names` match `value`.
///
/// Fields are folded with `options.global_combine` (OR by default).
pub fn filter_by_any_field<T, S>(
    records: Vec<T>,
    field_names: &[S],
    value: &str,
    options: &FilterOptions,
) -> Vec<T>
where
    T: Searchable,
    S: AsRef<str>,
{
    let predicates: Vec<FieldPredicate> = field_names
        .iter()
        .filter_map(|field| build_predicate(&records, field.as_ref(), value, options))
        .collect();

    tracing::debug!(
        "Global search '{}' over {} field(s) of {} record(s)",
        value,
        predicates.len(),
        records.len()
    );

    apply(records, &predicates, options.global_combine)
}

/// Per-column search: keep records matching every filter.
pub fn filter_by_columns<T: Searchable>(
    records: Vec<T>,
    filters: &[ColumnFilter],
    options: &FilterOptions,
) -> Vec<T> {
    let predicates: Vec<FieldPredicate> = filters
        .iter()
        .filter_map(|filter| build_predicate(&records, &filter.column, &filter.value, options))
        .collect();

    tracing::debug!(
        "Column search with {} active filter(s) over {} record(s)",
        predicates.len(),
        records.len()
    );

    apply(records, &predicates, Combine::All)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Record;

    fn people() -> Vec<Record> {
        vec![
            Record::new().with("Name", "Alice").with("City", "Paris").with("Age", 31),
            Record::new().with("Name", "Bob").with("City", "Berlin").with("Age", 45),
            Record::new().with("Name", "Alicia").with("City", "Boston").with("Age", 28),
        ]
    }

    fn names(records: &[Record]) -> Vec<&str> {
        records
            .iter()
            .filter_map(|r| r.data.get("Name").and_then(|v| v.as_str()))
            .collect()
    }

    #[test]
    fn test_numeric_names() {
        assert!(is_numeric_name("0"));
        assert!(is_numeric_name(" 12 "));
        assert!(is_numeric_name("-3.5"));
        assert!(is_numeric_name("1,000"));
        assert!(is_numeric_name("1e3"));
        assert!(is_numeric_name("NaN"));
        assert!(is_numeric_name("(5)"));
        assert!(is_numeric_name("5-"));
        assert!(is_numeric_name("¤5"));
        assert!(is_numeric_name("¤ 1,250.00"));
        assert!(!is_numeric_name("Name"));
        assert!(!is_numeric_name("()"));
        assert!(!is_numeric_name("(-5)"));
        assert!(!is_numeric_name("-5-"));
        assert!(!is_numeric_name("¤"));
        assert!(!is_numeric_name("inf"));
        assert!(!is_numeric_name(","));
        assert!(!is_numeric_name(""));
    }

    #[test]
    fn test_global_search_matches_substring() {
        let result = filter_by_any_field(people(), &["Name"], "Ali", &FilterOptions::default());
        assert_eq!(names(&result), vec!["Alice", "Alicia"]);
    }

    #[test]
    fn test_global_search_is_case_sensitive_by_default() {
        let result = filter_by_any_field(people(), &["Name"], "ali", &FilterOptions::default());
        assert!(result.is_empty());

        let options = FilterOptions {
            case_sensitive: false,
            ..FilterOptions::default()
        };
        let result = filter_by_any_field(people(), &["Name"], "ali", &options);
        assert_eq!(names(&result), vec!["Alice", "Alicia"]);
    }

    #[test]
    fn test_global_search_any_vs_all() {
        let fields = ["Name", "City"];

        let any = filter_by_any_field(people(), &fields, "B", &FilterOptions::default());
        assert_eq!(names(&any), vec!["Bob", "Alicia"]);

        let options = FilterOptions {
            global_combine: Combine::All,
            ..FilterOptions::default()
        };
        let all = filter_by_any_field(people(), &fields, "B", &options);
        assert_eq!(names(&all), vec!["Bob"]);
    }

    #[test]
    fn test_numeric_and_empty_names_yield_empty_result() {
        let result = filter_by_any_field(people(), &["0", "", "1"], "Alice", &FilterOptions::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_non_text_and_missing_fields_are_skipped() {
        let result = filter_by_any_field(people(), &["Age", "Missing", "Name"], "Bob", &FilterOptions::default());
        assert_eq!(names(&result), vec!["Bob"]);

        let result = filter_by_any_field(people(), &["Age"], "3", &FilterOptions::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_null_on_first_record_disables_dynamic_field() {
        let records = vec![
            Record::new().with("Name", serde_json::Value::Null),
            Record::new().with("Name", "Alice"),
        ];
        let result = filter_by_any_field(records, &["Name"], "A", &FilterOptions::default());
        assert!(result.is_empty());
    }

    #[test]
    fn test_column_filters_require_every_match() {
        let filters = vec![ColumnFilter::new("Name", "A"), ColumnFilter::new("City", "P")];
        let result = filter_by_columns(people(), &filters, &FilterOptions::default());
        assert_eq!(names(&result), vec!["Alice"]);
    }

    #[test]
    fn test_column_filter_skips_numeric_columns() {
        let filters = vec![ColumnFilter::new("0", "zzz"), ColumnFilter::new("City", "B")];
        let result = filter_by_columns(people(), &filters, &FilterOptions::default());
        assert_eq!(names(&result), vec!["Bob", "Alicia"]);
    }

    #[test]
    fn test_empty_column_value_matches_all_text() {
        let filters = vec![ColumnFilter::new("Name", "")];
        let result = filter_by_columns(people(), &filters, &FilterOptions::default());
        assert_eq!(result.len(), 3);
    }

    #[test]
    fn test_match_modes() {
        let starts = FilterOptions {
            match_mode: MatchMode::StartsWith,
            ..FilterOptions::default()
        };
        let result = filter_by_any_field(people(), &["City"], "B", &starts);
        assert_eq!(names(&result), vec!["Bob", "Alicia"]);

        let ends = FilterOptions {
            match_mode: MatchMode::EndsWith,
            ..FilterOptions::default()
        };
        let result = filter_by_any_field(people(), &["Name"], "ia", &ends);
        assert_eq!(names(&result), vec!["Alicia"]);
    }

    #[test]
    fn test_empty_input_stays_empty() {
        let result = filter_by_any_field(Vec::<Record>::new(), &["Name"], "A", &FilterOptions::default());
        assert!(result.is_empty());
    }
}
