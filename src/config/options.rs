use crate::utils::error::{Result, SearchError};
use crate::utils::validation::{validate_positive_number, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Behavior switches for filtering, sorting and paging.
///
/// Defaults give OR semantics for the global search, a real sort on field
/// values and a total count taken before filtering. The other variants
/// reproduce the quirks of older grid backends for callers that depend on them.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SearchOptions {
    pub filter: FilterOptions,
    pub sort: SortOptions,
    pub paging: PagingOptions,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterOptions {
    pub match_mode: MatchMode,
    pub case_sensitive: bool,
    pub global_combine: Combine,
    pub kind_probe: KindProbe,
    /// Drop per-column filters whose value is the empty string.
    pub ignore_blank_column_search: bool,
}

impl Default for FilterOptions {
    fn default() -> Self {
        Self {
            match_mode: MatchMode::Contains,
            case_sensitive: true,
            global_combine: Combine::Any,
            kind_probe: KindProbe::Declared,
            ignore_blank_column_search: false,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchMode {
    #[default]
    Contains,
    StartsWith,
    EndsWith,
}

/// How several field predicates fold into one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Combine {
    #[default]
    Any,
    All,
}

/// Where the kind of a field comes from when deciding whether it is searchable.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum KindProbe {
    /// The type's declared kind; schemaless rows fall back to the first record.
    #[default]
    Declared,
    /// Always the value on the first record. A null there disables the field.
    FirstRecord,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SortOptions {
    pub policy: SortPolicy,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SortPolicy {
    #[default]
    FieldValue,
    /// Every row gets the same key, so input order is kept.
    Constant,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PagingOptions {
    pub total_count: TotalCount,
    pub max_page_length: Option<usize>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TotalCount {
    /// Rows handed to the search, before any filter.
    #[default]
    Original,
    /// Rows after filtering, i.e. the same number as the filtered count.
    Filtered,
}

impl SearchOptions {
    /// Load options from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(SearchError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parse options from a TOML string, expanding `${VAR}` from the environment first.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;

        toml::from_str(&processed_content).map_err(|e| SearchError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| SearchError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for SearchOptions {
    fn validate(&self) -> Result<()> {
        if let Some(max) = self.paging.max_page_length {
            validate_positive_number("paging.max_page_length", max, 1)?;
        }
        Ok(())
    }
}
