//! Form structs for each feature view
//!
//! Focus moves over the input fields followed by one actions row. The
//! actions row lists the view's buttons; a button is enabled only while
//! its required fields are filled and no request of the form is pending.

use super::field::FormField;
use crate::api::{
    ExportFormat, GenerateRequest, NfrDocRequest, SearchRequest, SummarizeRequest,
    SummaryResponse,
};
use crate::config::TuiConfig;
use crate::state::SubmissionController;
use std::collections::BTreeMap;
use std::path::PathBuf;

/// Buttons a form can show
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageAction {
    Search,
    Generate,
    LoadJsonTemplate,
    LoadXmlTemplate,
    Transcribe,
    Summarize,
    GenerateDoc,
    Export(ExportFormat),
}

impl PageAction {
    pub fn label(self) -> &'static str {
        match self {
            Self::Search => "Search",
            Self::Generate => "Generate Data",
            Self::LoadJsonTemplate => "Load JSON Template",
            Self::LoadXmlTemplate => "Load XML Template",
            Self::Transcribe => "Upload File",
            Self::Summarize => "Summarize",
            Self::GenerateDoc => "Generate Document",
            Self::Export(ExportFormat::Pdf) => "Export to PDF",
            Self::Export(ExportFormat::Docx) => "Export to DOCX",
        }
    }
}

/// A rendered button and whether it currently accepts presses
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ActionButton {
    pub action: PageAction,
    pub enabled: bool,
}

impl ActionButton {
    fn new(action: PageAction, enabled: bool) -> Self {
        Self { action, enabled }
    }
}

/// Trait for common form operations
pub trait Form {
    /// Number of input fields (the actions row comes after them)
    fn field_count(&self) -> usize;
    fn active_field(&self) -> usize;
    fn set_active_field(&mut self, index: usize);
    fn get_field(&self, index: usize) -> Option<&FormField>;
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField>;
    fn selected_button(&self) -> usize;
    fn set_selected_button(&mut self, index: usize);
    fn actions(&self) -> Vec<ActionButton>;
    fn submission(&self) -> &SubmissionController;
    fn submission_mut(&mut self) -> &mut SubmissionController;

    /// Action pressed by the submit shortcut
    fn primary_action(&self) -> PageAction;

    /// Action pressed by Enter inside a single-line field
    fn field_action(&self, _index: usize) -> PageAction {
        self.primary_action()
    }

    fn next_field(&mut self) {
        let count = self.field_count() + 1;
        let current = self.active_field();
        self.set_active_field((current + 1) % count);
    }

    fn prev_field(&mut self) {
        let count = self.field_count() + 1;
        let current = self.active_field();
        if current == 0 {
            self.set_active_field(count - 1);
        } else {
            self.set_active_field(current - 1);
        }
    }

    /// Returns true if the buttons row is currently active
    fn is_buttons_row_active(&self) -> bool {
        self.active_field() >= self.field_count()
    }

    fn get_active_field_mut(&mut self) -> Option<&mut FormField> {
        let index = self.active_field();
        self.get_field_mut(index)
    }

    fn is_active_field_multiline(&self) -> bool {
        self.get_field(self.active_field())
            .is_some_and(|f| f.is_multiline)
    }

    /// Move to the next button (wraps around)
    fn next_button(&mut self) {
        let count = self.actions().len().max(1);
        self.set_selected_button((self.selected_button() + 1) % count);
    }

    /// Move to the previous button (wraps around)
    fn prev_button(&mut self) {
        let count = self.actions().len().max(1);
        let current = self.selected_button();
        if current == 0 {
            self.set_selected_button(count - 1);
        } else {
            self.set_selected_button(current - 1);
        }
    }

    fn selected_action(&self) -> Option<PageAction> {
        self.actions()
            .get(self.selected_button())
            .map(|button| button.action)
    }

    fn is_enabled(&self, action: PageAction) -> bool {
        self.actions()
            .iter()
            .any(|button| button.action == action && button.enabled)
    }
}

macro_rules! impl_focus {
    () => {
        fn active_field(&self) -> usize {
            self.active_field_index
        }
        fn set_active_field(&mut self, index: usize) {
            self.active_field_index = index.min(self.field_count());
        }
        fn selected_button(&self) -> usize {
            self.selected_button
        }
        fn set_selected_button(&mut self, index: usize) {
            self.selected_button = index;
        }
        fn submission(&self) -> &SubmissionController {
            &self.submission
        }
        fn submission_mut(&mut self) -> &mut SubmissionController {
            &mut self.submission
        }
    };
}

// Search Form
#[derive(Debug, Clone)]
pub struct SearchForm {
    pub query: FormField,
    pub active_field_index: usize,
    pub selected_button: usize,
    pub submission: SubmissionController,
}

impl SearchForm {
    pub fn new() -> Self {
        Self {
            query: FormField::text("query", "Query", "Enter your search query...", false),
            active_field_index: 0,
            selected_button: 0,
            submission: SubmissionController::default(),
        }
    }

    pub fn build_request(&self, config: &TuiConfig) -> SearchRequest {
        SearchRequest {
            query: self.query.as_text().to_string(),
            top_k: config.top_k(),
            base_url: config.confluence.base_url.clone(),
            space_key: config.confluence.space_key.clone(),
            auth_token: config.confluence.auth_token.clone(),
        }
    }
}

impl Default for SearchForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SearchForm {
    impl_focus!();

    fn field_count(&self) -> usize {
        1
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.query),
            _ => None,
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.query),
            _ => None,
        }
    }
    fn actions(&self) -> Vec<ActionButton> {
        vec![ActionButton::new(
            PageAction::Search,
            self.submission.can_submit(!self.query.is_empty()),
        )]
    }
    fn primary_action(&self) -> PageAction {
        PageAction::Search
    }
}

/// Built-in generator templates
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TemplatePreset {
    Json,
    Xml,
}

impl TemplatePreset {
    pub fn content(self) -> &'static str {
        match self {
            Self::Json => {
                "{\n  \"name\": \"$name\",\n  \"email\": \"$email\",\n  \"age\": \"$number\"\n}"
            }
            Self::Xml => {
                "<?xml version=\"1.0\"?>\n<user>\n  <name>$name</name>\n  <email>$email</email>\n  <age>$number</age>\n</user>"
            }
        }
    }
}

/// Default number of generated records
pub const DEFAULT_RECORD_COUNT: u32 = 1;

// Generator Form
#[derive(Debug, Clone)]
pub struct GeneratorForm {
    pub template: FormField,
    pub count: FormField,
    pub active_field_index: usize,
    pub selected_button: usize,
    pub submission: SubmissionController,
}

impl GeneratorForm {
    pub fn new() -> Self {
        Self {
            template: FormField::text(
                "template",
                "Template",
                "Enter your JSON/XML template...",
                true,
            ),
            count: FormField::count("count", "Records", "1 (default)"),
            active_field_index: 0,
            selected_button: 0,
            submission: SubmissionController::default(),
        }
    }

    /// Replace the template with a preset
    pub fn load_preset(&mut self, preset: TemplatePreset) {
        self.template.set_text(preset.content());
    }

    pub fn record_count(&self) -> u32 {
        self.count.count_or(DEFAULT_RECORD_COUNT)
    }

    pub fn build_request(&self) -> GenerateRequest {
        GenerateRequest {
            template_id: "custom".to_string(),
            template_content: self.template.as_text().to_string(),
            count: self.record_count(),
        }
    }
}

impl Default for GeneratorForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for GeneratorForm {
    impl_focus!();

    fn field_count(&self) -> usize {
        2
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.template),
            1 => Some(&self.count),
            _ => None,
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.template),
            1 => Some(&mut self.count),
            _ => None,
        }
    }
    fn actions(&self) -> Vec<ActionButton> {
        vec![
            ActionButton::new(
                PageAction::Generate,
                self.submission.can_submit(!self.template.is_empty()),
            ),
            ActionButton::new(PageAction::LoadJsonTemplate, true),
            ActionButton::new(PageAction::LoadXmlTemplate, true),
        ]
    }
    fn primary_action(&self) -> PageAction {
        PageAction::Generate
    }
}

// Summarizer Form
#[derive(Debug, Clone)]
pub struct SummarizerForm {
    pub file_path: FormField,
    pub text: FormField,
    pub summary: Option<String>,
    pub key_points: Vec<String>,
    pub active_field_index: usize,
    pub selected_button: usize,
    pub submission: SubmissionController,
}

impl SummarizerForm {
    pub fn new() -> Self {
        Self {
            file_path: FormField::text(
                "file_path",
                "Audio / Text File",
                "Path to an audio or .txt file...",
                false,
            ),
            text: FormField::text(
                "text",
                "Meeting Text",
                "Enter or paste your meeting text here...",
                true,
            ),
            summary: None,
            key_points: Vec::new(),
            active_field_index: 0,
            selected_button: 0,
            submission: SubmissionController::default(),
        }
    }

    pub fn upload_path(&self) -> PathBuf {
        PathBuf::from(self.file_path.as_text())
    }

    pub fn build_summarize_request(&self) -> SummarizeRequest {
        SummarizeRequest {
            text: self.text.as_text().to_string(),
        }
    }

    /// Replace the meeting text with a transcription
    pub fn apply_transcription(&mut self, text: String) {
        self.text.set_text(text);
    }

    pub fn apply_summary(&mut self, response: SummaryResponse) {
        self.summary = response.summary;
        self.key_points = response.key_points;
    }
}

impl Default for SummarizerForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for SummarizerForm {
    impl_focus!();

    fn field_count(&self) -> usize {
        2
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.file_path),
            1 => Some(&self.text),
            _ => None,
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.file_path),
            1 => Some(&mut self.text),
            _ => None,
        }
    }
    fn actions(&self) -> Vec<ActionButton> {
        vec![
            ActionButton::new(
                PageAction::Transcribe,
                self.submission.can_submit(!self.file_path.is_empty()),
            ),
            ActionButton::new(
                PageAction::Summarize,
                self.submission.can_submit(!self.text.is_empty()),
            ),
        ]
    }
    fn primary_action(&self) -> PageAction {
        PageAction::Summarize
    }
    fn field_action(&self, index: usize) -> PageAction {
        match index {
            0 => PageAction::Transcribe,
            _ => self.primary_action(),
        }
    }
}

// NFR Form
#[derive(Debug, Clone)]
pub struct NfrForm {
    pub project_name: FormField,
    pub description: FormField,
    /// Markdown returned by the last successful generation
    pub generated_markdown: Option<String>,
    pub active_field_index: usize,
    pub selected_button: usize,
    pub submission: SubmissionController,
}

impl NfrForm {
    pub fn new() -> Self {
        Self {
            project_name: FormField::text("project_name", "Project Name", "Project Name", false),
            description: FormField::text(
                "project_description",
                "Project Description",
                "Project Description",
                true,
            ),
            generated_markdown: None,
            active_field_index: 0,
            selected_button: 0,
            submission: SubmissionController::default(),
        }
    }

    pub fn build_request(&self) -> NfrDocRequest {
        NfrDocRequest {
            project_name: self.project_name.as_text().to_string(),
            project_description: self.description.as_text().to_string(),
            requirements: BTreeMap::new(),
        }
    }
}

impl Default for NfrForm {
    fn default() -> Self {
        Self::new()
    }
}

impl Form for NfrForm {
    impl_focus!();

    fn field_count(&self) -> usize {
        2
    }
    fn get_field(&self, index: usize) -> Option<&FormField> {
        match index {
            0 => Some(&self.project_name),
            1 => Some(&self.description),
            _ => None,
        }
    }
    fn get_field_mut(&mut self, index: usize) -> Option<&mut FormField> {
        match index {
            0 => Some(&mut self.project_name),
            1 => Some(&mut self.description),
            _ => None,
        }
    }
    fn actions(&self) -> Vec<ActionButton> {
        let fields_ready = !self.project_name.is_empty() && !self.description.is_empty();
        let has_document = self.generated_markdown.is_some();
        vec![
            ActionButton::new(
                PageAction::GenerateDoc,
                self.submission.can_submit(fields_ready),
            ),
            ActionButton::new(
                PageAction::Export(ExportFormat::Pdf),
                self.submission.can_submit(has_document),
            ),
            ActionButton::new(
                PageAction::Export(ExportFormat::Docx),
                self.submission.can_submit(has_document),
            ),
        ]
    }
    fn primary_action(&self) -> PageAction {
        PageAction::GenerateDoc
    }
}
