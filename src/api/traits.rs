//! Trait abstraction for the API client to enable mocking in tests

use super::error::ApiError;
use super::types::{
    ExportFormat, ExportResponse, GenerateRequest, HealthResponse, NfrDocRequest, NfrDocResponse,
    SearchRequest, SummarizeRequest, SummaryResponse, TranscribeResponse,
};
use async_trait::async_trait;
use std::path::Path;

/// Backend operations, one per endpoint the views talk to
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ApiClientTrait: Send + Sync {
    /// Check backend liveness
    async fn health(&self) -> Result<HealthResponse, ApiError>;

    /// Run a semantic search query
    async fn search(&self, request: &SearchRequest) -> Result<(), ApiError>;

    /// Generate sample records from a template
    async fn generate(&self, request: &GenerateRequest) -> Result<(), ApiError>;

    /// Upload an audio or text file for transcription
    async fn transcribe(&self, file: &Path) -> Result<TranscribeResponse, ApiError>;

    /// Summarize meeting text
    async fn summarize(&self, request: &SummarizeRequest) -> Result<SummaryResponse, ApiError>;

    /// Generate an NFR document
    async fn generate_nfr_doc(&self, request: &NfrDocRequest) -> Result<NfrDocResponse, ApiError>;

    /// Export a generated NFR document
    async fn export_nfr_doc(
        &self,
        format: ExportFormat,
        markdown: &str,
    ) -> Result<ExportResponse, ApiError>;
}
