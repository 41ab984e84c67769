//! Background request tasks
//!
//! Requests run on spawned tokio tasks so the UI keeps drawing while they
//! are in flight. Each task reports back exactly once through the
//! completion channel drained by the event loop.

use crate::api::{
    paths, ApiClientTrait, ApiError, ExportFormat, ExportResponse, GenerateRequest, HealthResponse,
    NfrDocRequest, NfrDocResponse, SearchRequest, SummarizeRequest, SummaryResponse,
    TranscribeResponse,
};
use crate::state::{Operation, Ticket};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::mpsc::UnboundedSender;

/// A request ready to be sent
#[derive(Debug, Clone)]
pub enum Request {
    Search(SearchRequest),
    Generate(GenerateRequest),
    Transcribe(PathBuf),
    Summarize(SummarizeRequest),
    GenerateNfrDoc(NfrDocRequest),
    ExportNfrDoc {
        format: ExportFormat,
        markdown: String,
    },
}

impl Request {
    pub fn operation(&self) -> Operation {
        match self {
            Self::Search(_) => Operation::Search,
            Self::Generate(_) => Operation::Generate,
            Self::Transcribe(_) => Operation::Transcribe,
            Self::Summarize(_) => Operation::Summarize,
            Self::GenerateNfrDoc(_) => Operation::GenerateNfrDoc,
            Self::ExportNfrDoc { .. } => Operation::ExportNfrDoc,
        }
    }

    /// Path the request is sent to
    pub fn endpoint(&self) -> &'static str {
        match self {
            Self::Search(_) => paths::SEARCH_QUERY,
            Self::Generate(_) => paths::GENERATOR_GENERATE,
            Self::Transcribe(_) => paths::MEETING_TRANSCRIBE,
            Self::Summarize(_) => paths::MEETING_SUMMARIZE,
            Self::GenerateNfrDoc(_) => paths::NFR_GENERATE_DOC,
            Self::ExportNfrDoc { format, .. } => format.path(),
        }
    }
}

/// Result of a request, carrying whatever the view needs from the answer
#[derive(Debug)]
pub enum Response {
    Search(Result<(), ApiError>),
    Generate(Result<(), ApiError>),
    Transcribe(Result<TranscribeResponse, ApiError>),
    Summarize(Result<SummaryResponse, ApiError>),
    GenerateNfrDoc(Result<NfrDocResponse, ApiError>),
    ExportNfrDoc(Result<ExportResponse, ApiError>),
}

impl Response {
    pub fn operation(&self) -> Operation {
        match self {
            Self::Search(_) => Operation::Search,
            Self::Generate(_) => Operation::Generate,
            Self::Transcribe(_) => Operation::Transcribe,
            Self::Summarize(_) => Operation::Summarize,
            Self::GenerateNfrDoc(_) => Operation::GenerateNfrDoc,
            Self::ExportNfrDoc(_) => Operation::ExportNfrDoc,
        }
    }

    /// The error, if the request failed
    pub fn error(&self) -> Option<&ApiError> {
        match self {
            Self::Search(r) | Self::Generate(r) => r.as_ref().err(),
            Self::Transcribe(r) => r.as_ref().err(),
            Self::Summarize(r) => r.as_ref().err(),
            Self::GenerateNfrDoc(r) => r.as_ref().err(),
            Self::ExportNfrDoc(r) => r.as_ref().err(),
        }
    }
}

/// Message sent back to the event loop
#[derive(Debug)]
pub enum Completion {
    Submission { ticket: Ticket, response: Response },
    Health(Result<HealthResponse, ApiError>),
}

/// Send `request` on a background task
pub fn spawn_submission(
    api: Arc<dyn ApiClientTrait>,
    ticket: Ticket,
    request: Request,
    tx: UnboundedSender<Completion>,
) {
    tokio::spawn(async move {
        let response = execute(api.as_ref(), request).await;
        if tx.send(Completion::Submission { ticket, response }).is_err() {
            tracing::debug!(%ticket, "Completion dropped, event loop is gone");
        }
    });
}

/// Check backend health on a background task
pub fn spawn_health_check(api: Arc<dyn ApiClientTrait>, tx: UnboundedSender<Completion>) {
    tokio::spawn(async move {
        let result = api.health().await;
        let _ = tx.send(Completion::Health(result));
    });
}

async fn execute(api: &dyn ApiClientTrait, request: Request) -> Response {
    match request {
        Request::Search(body) => Response::Search(api.search(&body).await),
        Request::Generate(body) => Response::Generate(api.generate(&body).await),
        Request::Transcribe(path) => Response::Transcribe(api.transcribe(&path).await),
        Request::Summarize(body) => Response::Summarize(api.summarize(&body).await),
        Request::GenerateNfrDoc(body) => {
            Response::GenerateNfrDoc(api.generate_nfr_doc(&body).await)
        }
        Request::ExportNfrDoc { format, markdown } => {
            Response::ExportNfrDoc(api.export_nfr_doc(format, &markdown).await)
        }
    }
}
