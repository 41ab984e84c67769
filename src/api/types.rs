//! Request and response bodies exchanged with the backend

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Endpoint paths, relative to the configured API base URL
pub mod paths {
    pub const HEALTH: &str = "/health";
    pub const SEARCH_QUERY: &str = "/search/query";
    pub const GENERATOR_GENERATE: &str = "/generator/generate";
    pub const MEETING_TRANSCRIBE: &str = "/meeting/transcribe";
    pub const MEETING_SUMMARIZE: &str = "/meeting/summarize";
    pub const NFR_GENERATE_DOC: &str = "/nfr/generate-doc";
    pub const NFR_EXPORT_PDF: &str = "/nfr/export-pdf";
    pub const NFR_EXPORT_DOCX: &str = "/nfr/export-docx";
}

/// Semantic search over the configured Confluence space
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SearchRequest {
    pub query: String,
    pub top_k: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub space_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub auth_token: Option<String>,
}

/// Sample data generation from a template
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GenerateRequest {
    pub template_id: String,
    pub template_content: String,
    pub count: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SummarizeRequest {
    pub text: String,
}

/// NFR document generation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NfrDocRequest {
    pub project_name: String,
    pub project_description: String,
    pub requirements: BTreeMap<String, Vec<serde_json::Value>>,
}

/// Output format for an exported NFR document
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Pdf,
    Docx,
}

impl ExportFormat {
    pub fn path(self) -> &'static str {
        match self {
            Self::Pdf => paths::NFR_EXPORT_PDF,
            Self::Docx => paths::NFR_EXPORT_DOCX,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Self::Pdf => "PDF",
            Self::Docx => "DOCX",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct TranscribeResponse {
    #[serde(alias = "transcription")]
    pub text: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct SummaryResponse {
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub key_points: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct NfrDocResponse {
    #[serde(default)]
    pub markdown: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExportResponse {
    pub file_path: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    #[serde(default)]
    pub version: Option<String>,
}
