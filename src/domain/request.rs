use serde::{de, Deserialize, Deserializer, Serialize};

/// The body a DataTables grid posts in server-side processing mode.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableRequest {
    #[serde(default)]
    pub draw: i64,
    #[serde(default)]
    pub columns: Vec<ColumnDef>,
    #[serde(default)]
    pub search: Option<SearchValue>,
    #[serde(default)]
    pub order: Option<Vec<OrderSpec>>,
    #[serde(default)]
    pub start: i64,
    /// Negative means "all rows".
    #[serde(default = "default_length")]
    pub length: i64,
}

fn default_length() -> i64 {
    -1
}

impl Default for TableRequest {
    fn default() -> Self {
        Self {
            draw: 0,
            columns: Vec::new(),
            search: None,
            order: None,
            start: 0,
            length: default_length(),
        }
    }
}

impl TableRequest {
    pub fn new(columns: Vec<ColumnDef>) -> Self {
        Self {
            columns,
            ..Self::default()
        }
    }

    pub fn with_search(mut self, value: &str) -> Self {
        self.search = Some(SearchValue::new(value));
        self
    }

    pub fn with_order(mut self, column: usize, dir: &str) -> Self {
        self.order
            .get_or_insert_with(Vec::new)
            .push(OrderSpec {
                column,
                dir: dir.to_string(),
            });
        self
    }

    pub fn with_page(mut self, start: i64, length: i64) -> Self {
        self.start = start;
        self.length = length;
        self
    }

    /// The global search box contents, if non-empty.
    pub fn global_search(&self) -> Option<&str> {
        self.search
            .as_ref()
            .and_then(|search| search.value.as_deref())
            .filter(|value| !value.is_empty())
    }

    pub fn column_names(&self) -> Vec<&str> {
        self.columns.iter().map(|column| column.data.as_str()).collect()
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ColumnDef {
    /// Field name bound to the column. Grids fed from arrays send a number
    /// here; it is kept in its textual form.
    #[serde(default, deserialize_with = "field_name")]
    pub data: String,
    #[serde(default)]
    pub search: Option<SearchValue>,
}

impl ColumnDef {
    pub fn new(data: &str) -> Self {
        Self {
            data: data.to_string(),
            search: None,
        }
    }

    pub fn with_search(mut self, value: &str) -> Self {
        self.search = Some(SearchValue::new(value));
        self
    }

    pub fn search_value(&self) -> Option<&str> {
        self.search.as_ref().and_then(|search| search.value.as_deref())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchValue {
    #[serde(default)]
    pub value: Option<String>,
    /// Posted by the grid; regex matching is not supported.
    #[serde(default)]
    pub regex: bool,
}

impl SearchValue {
    pub fn new(value: &str) -> Self {
        Self {
            value: Some(value.to_string()),
            regex: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderSpec {
    pub column: usize,
    #[serde(default)]
    pub dir: String,
}

impl OrderSpec {
    /// Only an exact (case-insensitive) "asc" sorts ascending.
    pub fn is_ascending(&self) -> bool {
        self.dir.to_lowercase() == "asc"
    }
}

fn field_name<'de, D>(deserializer: D) -> std::result::Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    match serde_json::Value::deserialize(deserializer)? {
        serde_json::Value::String(name) => Ok(name),
        serde_json::Value::Number(index) => Ok(index.to_string()),
        serde_json::Value::Null => Ok(String::new()),
        other => Err(de::Error::custom(format!(
            "expected a field name for column data, found {}",
            other
        ))),
    }
}
