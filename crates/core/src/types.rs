//! Core types shared across queryshelf: catalog records, the closed category set,
//! category filters, and the opaque sample-output payload.

use chrono::NaiveDate;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Label shown for the "match all categories" filter.
pub const ALL_CATEGORIES_LABEL: &str = "All Types";

/// Display format for record dates, e.g. `Dec 05, 2024`.
pub const DATE_DISPLAY_FORMAT: &str = "%b %d, %Y";

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// The fixed set of query categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Category {
    #[serde(rename = "Customer Analytics")]
    CustomerAnalytics,
    #[serde(rename = "Trend Analysis")]
    TrendAnalysis,
    #[serde(rename = "Summary Reports")]
    SummaryReports,
    #[serde(rename = "Revenue Analysis")]
    RevenueAnalysis,
}

impl Category {
    /// Every category, in the order the category picker lists them.
    pub const ALL: [Category; 4] = [
        Category::CustomerAnalytics,
        Category::TrendAnalysis,
        Category::SummaryReports,
        Category::RevenueAnalysis,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Category::CustomerAnalytics => "Customer Analytics",
            Category::TrendAnalysis => "Trend Analysis",
            Category::SummaryReports => "Summary Reports",
            Category::RevenueAnalysis => "Revenue Analysis",
        }
    }

    /// Kebab-case form accepted on the command line (`revenue-analysis`).
    pub fn slug(self) -> &'static str {
        match self {
            Category::CustomerAnalytics => "customer-analytics",
            Category::TrendAnalysis => "trend-analysis",
            Category::SummaryReports => "summary-reports",
            Category::RevenueAnalysis => "revenue-analysis",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

/// Returned when a string names none of the known categories.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown category '{0}' (expected one of: Customer Analytics, Trend Analysis, Summary Reports, Revenue Analysis)")]
pub struct ParseCategoryError(pub String);

impl FromStr for Category {
    type Err = ParseCategoryError;

    /// Accepts the display label (any ASCII case) or the kebab-case slug.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Category::ALL
            .into_iter()
            .find(|c| c.label().eq_ignore_ascii_case(trimmed) || c.slug() == trimmed)
            .ok_or_else(|| ParseCategoryError(s.to_string()))
    }
}

/// Category criterion of a search: either every category or exactly one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    pub fn matches(self, category: Category) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(wanted) => wanted == category,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES_LABEL,
            CategoryFilter::Only(c) => c.label(),
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.label())
    }
}

impl From<Category> for CategoryFilter {
    fn from(category: Category) -> Self {
        CategoryFilter::Only(category)
    }
}

impl FromStr for CategoryFilter {
    type Err = ParseCategoryError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if trimmed.eq_ignore_ascii_case(ALL_CATEGORIES_LABEL) || trimmed.eq_ignore_ascii_case("all")
        {
            return Ok(CategoryFilter::All);
        }
        trimmed.parse().map(CategoryFilter::Only)
    }
}

impl Serialize for CategoryFilter {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.label())
    }
}

// ---------------------------------------------------------------------------
// Sample output payload
// ---------------------------------------------------------------------------

/// A single value in a sample-output row.
#[derive(Debug, Clone, PartialEq, Serialize, serde::Deserialize)]
#[serde(untagged)]
pub enum Cell {
    Int(i64),
    Float(f64),
    Text(String),
}

impl fmt::Display for Cell {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Cell::Int(n) => write!(f, "{n}"),
            Cell::Float(x) => write!(f, "{x}"),
            Cell::Text(s) => f.write_str(s),
        }
    }
}

impl From<&str> for Cell {
    fn from(s: &str) -> Self {
        Cell::Text(s.to_string())
    }
}

impl From<i64> for Cell {
    fn from(n: i64) -> Self {
        Cell::Int(n)
    }
}

impl From<f64> for Cell {
    fn from(x: f64) -> Self {
        Cell::Float(x)
    }
}

/// Example result set stored alongside a query. Never searched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, serde::Deserialize)]
pub struct SampleOutput {
    pub columns: Vec<String>,
    #[serde(default)]
    pub rows: Vec<Vec<Cell>>,
}

// ---------------------------------------------------------------------------
// Catalog records
// ---------------------------------------------------------------------------

/// A stored SQL query, with lowercased search fields computed once at construction.
///
/// Title and description are read-only so the lowercased copies stay in sync.
#[derive(Debug, Clone, Serialize)]
pub struct CatalogRecord {
    pub id: String,
    title: String,
    description: String,
    pub category: Category,
    #[serde(rename = "createdAt")]
    pub created_at: NaiveDate,
    pub sql: String,
    #[serde(rename = "sampleOutput")]
    pub sample_output: SampleOutput,
    #[serde(skip)]
    pub(crate) title_lower: String,
    #[serde(skip)]
    pub(crate) description_lower: String,
}

impl CatalogRecord {
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
        created_at: NaiveDate,
    ) -> Self {
        let title = title.into();
        let description = description.into();
        Self {
            id: id.into(),
            title_lower: title.to_lowercase(),
            description_lower: description.to_lowercase(),
            title,
            description,
            category,
            created_at,
            sql: String::new(),
            sample_output: SampleOutput::default(),
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn with_sql(mut self, sql: impl Into<String>) -> Self {
        self.sql = sql.into();
        self
    }

    pub fn with_sample_output(mut self, sample_output: SampleOutput) -> Self {
        self.sample_output = sample_output;
        self
    }

    /// Creation date in the display locale, e.g. `Dec 05, 2024`.
    pub fn display_date(&self) -> String {
        self.created_at.format(DATE_DISPLAY_FORMAT).to_string()
    }
}
