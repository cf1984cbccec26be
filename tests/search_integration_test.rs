use datatable_search::config::{Combine, KindProbe, SortPolicy, TotalCount};
use datatable_search::{
    custom_search, filter_by_any_field, filter_by_columns, impl_searchable, sort_and_page,
    ColumnDef, ColumnFilter, DatatableSearch, SearchError, SearchOptions, TableRequest,
};

#[derive(Debug, Clone, PartialEq)]
struct Employee {
    id: u32,
    name: String,
    department: Option<String>,
    salary: f64,
}

impl_searchable!(Employee {
    "Id" => id: u32,
    "Name" => name: String,
    "Department" => department: Option<String>,
    "Salary" => salary: f64,
});

fn employee(id: u32, name: &str, department: Option<&str>, salary: f64) -> Employee {
    Employee {
        id,
        name: name.to_string(),
        department: department.map(str::to_string),
        salary,
    }
}

fn staff() -> Vec<Employee> {
    vec![
        employee(1, "Alice", Some("Engineering"), 120_000.0),
        employee(2, "Bob", Some("Sales"), 80_000.0),
        employee(3, "Alicia", None, 95_000.0),
        employee(4, "Dmitri", Some("Engineering"), 105_000.0),
        employee(5, "Eve", Some("Security"), 99_000.0),
    ]
}

fn ids(rows: &[Employee]) -> Vec<u32> {
    rows.iter().map(|e| e.id).collect()
}

fn grid_request() -> TableRequest {
    TableRequest::new(vec![
        ColumnDef::new("Id"),
        ColumnDef::new("Name"),
        ColumnDef::new("Department"),
        ColumnDef::new("Salary"),
        ColumnDef::new("4"),
    ])
}

#[test]
fn test_global_search_over_names() {
    let rows = filter_by_any_field(staff(), &["Name"], "Ali", &Default::default());
    assert_eq!(ids(&rows), vec![1, 3]);
}

#[test]
fn test_global_search_result_is_subset() {
    let input = staff();
    let rows = filter_by_any_field(input.clone(), &["Name", "Department"], "e", &Default::default());
    assert!(rows.len() <= input.len());
    assert!(rows.iter().all(|row| input.contains(row)));
}

#[test]
fn test_declared_kind_survives_null_first_value() {
    // Alicia has no department; the declared kind still makes the field searchable.
    let mut input = staff();
    input.swap(0, 2);
    let rows = filter_by_any_field(input.clone(), &["Department"], "Eng", &Default::default());
    assert_eq!(ids(&rows), vec![1, 4]);

    let mut options = SearchOptions::default();
    options.filter.kind_probe = KindProbe::FirstRecord;
    let rows = filter_by_any_field(input, &["Department"], "Eng", &options.filter);
    assert!(rows.is_empty());
}

#[test]
fn test_only_numeric_or_non_text_columns_give_empty_result() {
    let rows = filter_by_any_field(staff(), &["0", "", "Salary", "Id"], "1", &Default::default());
    assert!(rows.is_empty());
}

#[test]
fn test_column_filters_and_together() {
    let filters = vec![
        ColumnFilter::new("Department", "Engineering"),
        ColumnFilter::new("Name", "i"),
    ];
    let rows = filter_by_columns(staff(), &filters, &Default::default());
    assert_eq!(ids(&rows), vec![1, 4]);

    let filters = vec![
        ColumnFilter::new("Department", "Engineering"),
        ColumnFilter::new("Name", "Bob"),
    ];
    assert!(filter_by_columns(staff(), &filters, &Default::default()).is_empty());
}

#[test]
fn test_sort_by_numeric_field() {
    let page = sort_and_page(staff(), "Salary", false, 0, Some(3), SortPolicy::FieldValue);
    assert_eq!(ids(&page.rows), vec![1, 4, 5]);
    assert_eq!(page.filtered_count, 5);
}

#[test]
fn test_custom_search_first_page_without_filters() {
    let request = grid_request().with_page(0, 2);
    let result = custom_search(staff(), &request, &SearchOptions::default()).unwrap();

    assert_eq!(ids(&result.rows), vec![1, 2]);
    assert_eq!(result.filtered_count, 5);
    assert_eq!(result.total_count, 5);
}

#[test]
fn test_custom_search_combines_global_column_sort_and_page() {
    let mut request = grid_request()
        .with_search("i")
        .with_order(1, "desc")
        .with_page(0, 10);
    request.columns[2] = ColumnDef::new("Department").with_search("i");

    let result = custom_search(staff(), &request, &SearchOptions::default()).unwrap();

    // "i" hits Alice, Alicia, Dmitri and Eve (Security); Alicia has no department
    assert_eq!(ids(&result.rows), vec![5, 4, 1]);
    assert_eq!(result.filtered_count, 3);
    assert_eq!(result.total_count, 5);
}

#[test]
fn test_custom_search_paging_past_filtered_set() {
    let request = grid_request().with_search("Ali").with_page(1, 5);
    let result = custom_search(staff(), &request, &SearchOptions::default()).unwrap();

    assert_eq!(ids(&result.rows), vec![3]);
    assert_eq!(result.filtered_count, 2);
}

#[test]
fn test_garbage_direction_sorts_descending() {
    let request = grid_request().with_order(0, "upwards");
    let result = custom_search(staff(), &request, &SearchOptions::default()).unwrap();
    assert_eq!(ids(&result.rows), vec![5, 4, 3, 2, 1]);
}

#[test]
fn test_invalid_order_column_is_propagated() {
    let request = grid_request().with_order(9, "asc");
    let err = custom_search(staff(), &request, &SearchOptions::default()).unwrap_err();
    assert!(matches!(err, SearchError::InvalidOrderColumn { index: 9, columns: 5 }));
}

#[test]
fn test_compatibility_options_reproduce_legacy_behavior() {
    let mut options = SearchOptions::default();
    options.filter.global_combine = Combine::All;
    options.sort.policy = SortPolicy::Constant;
    options.paging.total_count = TotalCount::Filtered;
    let service = DatatableSearch::new(options);

    // Under AND, "e" must appear in both name and department.
    let request = grid_request().with_search("e").with_order(1, "desc");
    let result = service.search(staff(), &request).unwrap();

    assert_eq!(ids(&result.rows), vec![1, 5]);
    assert_eq!(result.filtered_count, 2);
    assert_eq!(result.total_count, 2);
}

#[test]
fn test_service_helpers_use_configured_options() {
    let mut options = SearchOptions::default();
    options.filter.case_sensitive = false;
    let service = DatatableSearch::new(options);

    let rows = service.filter_by_any_field(staff(), &["Name"], "ALI");
    assert_eq!(ids(&rows), vec![1, 3]);

    let rows = service.filter_by_columns(staff(), &[ColumnFilter::new("Department", "sales")]);
    assert_eq!(ids(&rows), vec![2]);

    let page = service.sort_and_page(staff(), "Name", true, 0, Some(2));
    assert_eq!(ids(&page.rows), vec![1, 3]);
}

#[test]
fn test_search_over_borrowed_rows() {
    let input = staff();
    let borrowed: Vec<&Employee> = input.iter().collect();
    let request = grid_request().with_search("Bob");

    let result = custom_search(borrowed, &request, &SearchOptions::default()).unwrap();
    assert_eq!(result.rows.len(), 1);
    assert_eq!(result.rows[0].name, "Bob");
}
