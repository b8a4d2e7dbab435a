use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Deserialize)]
pub struct SummarizeRequest {
    #[serde(default)]
    pub input: String,
}

#[derive(Serialize)]
pub struct SummarizeResponse {
    pub input: String,
    #[serde(rename = "summary_markdown")]
    pub summary: String,
    pub summary_html: String,
    pub status: String,
    pub model: String,
    pub summarized_at: DateTime<Utc>,
}

/// Query string of the page. `menu=open` expands the mobile menu.
#[derive(Deserialize, Default)]
pub struct PageQuery {
    pub menu: Option<String>,
}

/// Form body posted by the page.
#[derive(Deserialize)]
pub struct SummarizeForm {
    #[serde(default)]
    pub input: String,
}
