use serde::{Deserialize, Serialize};
use serde_json::Value;

/// The authenticated account as returned by `/auth/me` and the login and
/// signup endpoints.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct User {
    pub id: String,
    pub email: String,
    #[serde(default)]
    pub name: Option<String>,
}

#[derive(Serialize, Debug, Clone, PartialEq)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

/// A generated or stored dataset. `data` is backend-shaped and left opaque.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Dataset {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub rows: u64,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub created_at: Option<String>,
    #[serde(default)]
    pub data: Option<Value>,
}

/// One column of a form-driven generation request.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct FieldSpec {
    pub name: String,
    /// Generator kind understood by the backend ("name", "email", "int", ...).
    pub kind: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub params: Option<Value>,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct FormSpec {
    pub fields: Vec<FieldSpec>,
    pub rows: u32,
}

/// One column derived from an expression over other columns.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct Rule {
    pub column: String,
    pub expression: String,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct RuleSpec {
    pub rules: Vec<Rule>,
    pub rows: u32,
}

#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PromptSpec {
    pub prompt: String,
    pub rows: u32,
}

/// Per-column statistics within an analysis report.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct ColumnStats {
    pub name: String,
    #[serde(default)]
    pub dtype: Option<String>,
    #[serde(default)]
    pub null_count: u64,
    #[serde(default)]
    pub unique_count: Option<u64>,
}

/// Result of analyzing an uploaded file. Chart payloads are backend-defined
/// and kept opaque.
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct AnalysisReport {
    pub id: String,
    #[serde(default)]
    pub file_name: Option<String>,
    #[serde(default)]
    pub columns: Vec<ColumnStats>,
    #[serde(default)]
    pub charts: Option<Value>,
    #[serde(default)]
    pub created_at: Option<String>,
}
