use serde::{Deserialize, Serialize};

/// One spending bucket in the catalog, with display color and icon metadata.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: u32,
    pub name: String,
    pub color: u32,
    pub icon_code: u32,
    pub icon_name: String,
}

/// One dated monetary entry assigned to a category. `note` serializes as
/// JSON null when absent, matching the import schema of the consuming app.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Expense {
    pub id: u32,
    pub category: String,
    pub amount: f64,
    pub date: String,
    pub note: Option<String>,
}

/// Top-level randomized dataset document. Field order is the serialized
/// key order, which reproducibility tests compare byte-for-byte.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ExpenseDataset {
    pub expenses: Vec<Expense>,
    pub categories: Vec<Category>,
}

/// One synthetic time-series document for chart validation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SeriesExport {
    pub exported_at: String,
    pub expenses: Vec<Expense>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DatasetData {
    pub out_path: String,
    pub expense_count: usize,
    pub category_count: usize,
    pub days: u32,
    pub start_date: String,
    pub end_date: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_source: Option<String>,
    pub icon_hint_keys: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesFileData {
    pub file: String,
    pub shape: String,
    pub records: usize,
}

#[derive(Debug, Clone, Serialize)]
pub struct SeriesData {
    pub out_dir: String,
    pub files: Vec<SeriesFileData>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CatalogData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub icon_source: Option<String>,
    pub icon_hint_keys: usize,
    pub matched: usize,
    pub fallback: usize,
    pub categories: Vec<Category>,
}
