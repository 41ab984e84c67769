//! HTTP client for the tGPT backend services
//!
//! Every view talks to the backend through this client. Success is judged
//! by the HTTP status alone; response bodies are only decoded where a view
//! needs derived data from them.

use super::error::ApiError;
use super::traits::ApiClientTrait;
use super::types::{
    paths, ExportFormat, ExportResponse, GenerateRequest, HealthResponse, NfrDocRequest,
    NfrDocResponse, SearchRequest, SummarizeRequest, SummaryResponse, TranscribeResponse,
};
use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use reqwest::{Client, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use std::path::Path;

/// Client for the backend REST API
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: Client,
    base_url: String,
}

impl ApiClient {
    /// Create a client rooted at `base_url`
    pub fn new(base_url: impl Into<String>) -> Result<Self, ApiError> {
        let http = Client::builder().build()?;
        Ok(Self {
            http,
            base_url: base_url.into(),
        })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), path)
    }

    /// Send a request and turn non-2xx answers into errors
    async fn send(&self, request: RequestBuilder) -> Result<Response, ApiError> {
        let response = request.send().await?;
        let status = response.status();

        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ApiError::Status {
                status: status.as_u16(),
                body,
            });
        }

        Ok(response)
    }

    /// Decode a body the caller depends on
    async fn decode<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
        let body = response.text().await?;
        Ok(serde_json::from_str(&body)?)
    }

    /// Decode an optional body, falling back to defaults when it is absent
    /// or shaped differently
    async fn decode_lenient<T: DeserializeOwned + Default>(response: Response) -> T {
        let body = response.text().await.unwrap_or_default();
        match serde_json::from_str(&body) {
            Ok(value) => value,
            Err(err) => {
                tracing::debug!("Ignoring undecodable response body: {err}");
                T::default()
            }
        }
    }
}

#[async_trait]
impl ApiClientTrait for ApiClient {
    async fn health(&self) -> Result<HealthResponse, ApiError> {
        let response = self.send(self.http.get(self.url(paths::HEALTH))).await?;
        Self::decode(response).await
    }

    async fn search(&self, request: &SearchRequest) -> Result<(), ApiError> {
        self.send(self.http.post(self.url(paths::SEARCH_QUERY)).json(request))
            .await?;
        Ok(())
    }

    async fn generate(&self, request: &GenerateRequest) -> Result<(), ApiError> {
        self.send(
            self.http
                .post(self.url(paths::GENERATOR_GENERATE))
                .json(request),
        )
        .await?;
        Ok(())
    }

    async fn transcribe(&self, file: &Path) -> Result<TranscribeResponse, ApiError> {
        let bytes = tokio::fs::read(file).await.map_err(|source| ApiError::File {
            path: file.to_path_buf(),
            source,
        })?;
        let file_name = file
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| "upload".to_string());

        tracing::debug!("Uploading {} ({} bytes)", file_name, bytes.len());
        let form = Form::new().part("file", Part::bytes(bytes).file_name(file_name));

        let response = self
            .send(
                self.http
                    .post(self.url(paths::MEETING_TRANSCRIBE))
                    .multipart(form),
            )
            .await?;
        Self::decode(response).await
    }

    async fn summarize(&self, request: &SummarizeRequest) -> Result<SummaryResponse, ApiError> {
        let response = self
            .send(
                self.http
                    .post(self.url(paths::MEETING_SUMMARIZE))
                    .json(request),
            )
            .await?;
        Ok(Self::decode_lenient(response).await)
    }

    async fn generate_nfr_doc(&self, request: &NfrDocRequest) -> Result<NfrDocResponse, ApiError> {
        let response = self
            .send(self.http.post(self.url(paths::NFR_GENERATE_DOC)).json(request))
            .await?;
        Ok(Self::decode_lenient(response).await)
    }

    async fn export_nfr_doc(
        &self,
        format: ExportFormat,
        markdown: &str,
    ) -> Result<ExportResponse, ApiError> {
        let response = self
            .send(
                self.http
                    .post(self.url(format.path()))
                    .form(&[("markdown_content", markdown)]),
            )
            .await?;
        Self::decode(response).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use serde_json::json;
    use std::collections::BTreeMap;
    use std::io::Write;
    use tokio_test::{assert_err, assert_ok};
    use wiremock::matchers::{body_json, body_string_contains, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> ApiClient {
        ApiClient::new(server.uri()).unwrap()
    }

    #[test]
    fn test_url_joins_without_double_slash() {
        let client = ApiClient::new("http://localhost:8000/").unwrap();
        assert_eq!(
            client.url(paths::SEARCH_QUERY),
            "http://localhost:8000/search/query"
        );
    }

    #[tokio::test]
    async fn test_search_posts_json_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/search/query"))
            .and(body_json(json!({
                "query": "deployment steps",
                "top_k": 5,
                "base_url": "https://wiki.example.com",
                "space_key": "OPS",
                "auth_token": "secret"
            })))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
            .expect(1)
            .mount(&server)
            .await;

        let request = SearchRequest {
            query: "deployment steps".to_string(),
            top_k: 5,
            base_url: Some("https://wiki.example.com".to_string()),
            space_key: Some("OPS".to_string()),
            auth_token: Some("secret".to_string()),
        };
        assert_ok!(client_for(&server).search(&request).await);
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/generator/generate"))
            .respond_with(ResponseTemplate::new(500).set_body_string("template not found"))
            .mount(&server)
            .await;

        let request = GenerateRequest {
            template_id: "custom".to_string(),
            template_content: "{}".to_string(),
            count: 1,
        };
        let err = client_for(&server).generate(&request).await.unwrap_err();
        assert_eq!(err.status(), Some(500));
        assert!(matches!(err, ApiError::Status { ref body, .. } if body == "template not found"));
    }

    #[tokio::test]
    async fn test_connection_refused_is_transport_error() {
        let client = ApiClient::new("http://127.0.0.1:1").unwrap();
        let err = client
            .summarize(&SummarizeRequest {
                text: "notes".to_string(),
            })
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::Transport(_)));
    }

    #[tokio::test]
    async fn test_transcribe_uploads_file_and_reads_text() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/meeting/transcribe"))
            .and(body_string_contains("standup notes"))
            .and(body_string_contains("filename=\"meeting.txt\""))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"text": "hello world"})))
            .expect(1)
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("meeting.txt");
        let mut file = std::fs::File::create(&file_path).unwrap();
        file.write_all(b"standup notes").unwrap();

        let response = client_for(&server).transcribe(&file_path).await.unwrap();
        assert_eq!(response.text, "hello world");
    }

    #[tokio::test]
    async fn test_transcribe_missing_file_never_hits_server() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .respond_with(ResponseTemplate::new(200))
            .expect(0)
            .mount(&server)
            .await;

        let err = client_for(&server)
            .transcribe(Path::new("/definitely/not/here.mp3"))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::File { .. }));
    }

    #[tokio::test]
    async fn test_transcribe_without_text_is_decode_error() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/meeting/transcribe"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({"status": "success"})))
            .mount(&server)
            .await;

        let dir = tempfile::tempdir().unwrap();
        let file_path = dir.path().join("clip.mp3");
        std::fs::write(&file_path, b"ID3").unwrap();

        let result = client_for(&server).transcribe(&file_path).await;
        assert!(matches!(assert_err!(result), ApiError::Decode(_)));
    }

    #[tokio::test]
    async fn test_summarize_accepts_empty_body() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/meeting/summarize"))
            .and(body_json(json!({"text": "we agreed to ship"})))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        let response = client_for(&server)
            .summarize(&SummarizeRequest {
                text: "we agreed to ship".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(response, SummaryResponse::default());
    }

    #[tokio::test]
    async fn test_summarize_reads_summary_and_key_points() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/meeting/summarize"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "status": "success",
                "summary": "Ship on Friday.",
                "key_points": ["- Ship on Friday."]
            })))
            .mount(&server)
            .await;

        let response = client_for(&server)
            .summarize(&SummarizeRequest {
                text: "long meeting".to_string(),
            })
            .await
            .unwrap();
        assert_eq!(response.summary.as_deref(), Some("Ship on Friday."));
        assert_eq!(response.key_points, vec!["- Ship on Friday.".to_string()]);
    }

    #[tokio::test]
    async fn test_generate_nfr_doc_returns_markdown() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/nfr/generate-doc"))
            .and(body_json(json!({
                "project_name": "Atlas",
                "project_description": "Billing",
                "requirements": {}
            })))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": "success", "markdown": "# Atlas"})),
            )
            .mount(&server)
            .await;

        let response = client_for(&server)
            .generate_nfr_doc(&NfrDocRequest {
                project_name: "Atlas".to_string(),
                project_description: "Billing".to_string(),
                requirements: BTreeMap::new(),
            })
            .await
            .unwrap();
        assert_eq!(response.markdown.as_deref(), Some("# Atlas"));
    }

    #[tokio::test]
    async fn test_export_posts_form_field() {
        let server = MockServer::start().await;
        Mock::given(method("POST"))
            .and(path("/nfr/export-pdf"))
            .and(body_string_contains("markdown_content=%23+Atlas"))
            .respond_with(
                ResponseTemplate::new(200).set_body_json(json!({"file_path": "/tmp/atlas.pdf"})),
            )
            .mount(&server)
            .await;

        let response = client_for(&server)
            .export_nfr_doc(ExportFormat::Pdf, "# Atlas")
            .await
            .unwrap();
        assert_eq!(response.file_path, "/tmp/atlas.pdf");
    }

    #[tokio::test]
    async fn test_health_reads_version() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/health"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"status": "healthy", "version": "1.0.0"})),
            )
            .mount(&server)
            .await;

        let response = client_for(&server).health().await.unwrap();
        assert_eq!(response.status, "healthy");
        assert_eq!(response.version.as_deref(), Some("1.0.0"));
    }
}
