//! Application state definitions

use super::forms::{Form, GeneratorForm, NfrForm, SearchForm, SummarizerForm};
use super::notification::NotificationCenter;

/// Current view in the application
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum View {
    #[default]
    Landing,
    Search,
    Generator,
    Summarizer,
    Nfr,
}

impl View {
    /// All views in sidebar order
    pub const ALL: [View; 5] = [
        View::Landing,
        View::Search,
        View::Generator,
        View::Summarizer,
        View::Nfr,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Self::Landing => "Home",
            Self::Search => "Search",
            Self::Generator => "Generator",
            Self::Summarizer => "Summarizer",
            Self::Nfr => "NFR",
        }
    }

    /// Whether this view hosts a form
    pub fn is_form_view(self) -> bool {
        !matches!(self, Self::Landing)
    }
}

/// A card on the landing view
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FeatureDescriptor {
    pub title: &'static str,
    pub description: &'static str,
    pub view: View,
}

/// Fixed list of features offered on the landing view
pub const FEATURES: [FeatureDescriptor; 4] = [
    FeatureDescriptor {
        title: "Search Results",
        description: "Query multiple Confluence pages with semantic search and QA-based answers",
        view: View::Search,
    },
    FeatureDescriptor {
        title: "Data Generator",
        description: "Generate sample JSON/XML records using templates",
        view: View::Generator,
    },
    FeatureDescriptor {
        title: "Meeting Summarizer",
        description: "Convert meeting audio/text to summaries and update Confluence",
        view: View::Summarizer,
    },
    FeatureDescriptor {
        title: "NFR Assistant",
        description: "Capture and track Non-Functional Requirements with documentation",
        view: View::Nfr,
    },
];

/// Columns of the landing card grid
pub const FEATURE_COLUMNS: usize = 2;

/// Last known backend liveness
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum BackendHealth {
    #[default]
    Unknown,
    Checking,
    Healthy {
        version: Option<String>,
    },
    Unreachable,
}

impl BackendHealth {
    pub fn label(&self) -> String {
        match self {
            Self::Unknown => "backend: unknown".to_string(),
            Self::Checking => "backend: checking...".to_string(),
            Self::Healthy { version: Some(v) } => format!("backend: healthy {v}"),
            Self::Healthy { version: None } => "backend: healthy".to_string(),
            Self::Unreachable => "backend: unreachable".to_string(),
        }
    }
}

/// Main application state
#[derive(Debug, Default)]
pub struct AppState {
    // Navigation
    pub current_view: View,
    pub landing_index: usize,

    // Forms
    pub search: SearchForm,
    pub generator: GeneratorForm,
    pub summarizer: SummarizerForm,
    pub nfr: NfrForm,

    // UI state
    pub notifications: NotificationCenter,
    pub backend_health: BackendHealth,
}

impl AppState {
    /// Form hosted by `view`
    pub fn form(&self, view: View) -> Option<&dyn Form> {
        match view {
            View::Landing => None,
            View::Search => Some(&self.search),
            View::Generator => Some(&self.generator),
            View::Summarizer => Some(&self.summarizer),
            View::Nfr => Some(&self.nfr),
        }
    }

    pub fn form_mut(&mut self, view: View) -> Option<&mut dyn Form> {
        match view {
            View::Landing => None,
            View::Search => Some(&mut self.search),
            View::Generator => Some(&mut self.generator),
            View::Summarizer => Some(&mut self.summarizer),
            View::Nfr => Some(&mut self.nfr),
        }
    }

    pub fn active_form(&self) -> Option<&dyn Form> {
        self.form(self.current_view)
    }

    pub fn active_form_mut(&mut self) -> Option<&mut dyn Form> {
        self.form_mut(self.current_view)
    }

    /// Move landing selection one row down
    pub fn move_landing_down(&mut self) {
        if self.landing_index + FEATURE_COLUMNS < FEATURES.len() {
            self.landing_index += FEATURE_COLUMNS;
        }
    }

    /// Move landing selection one row up
    pub fn move_landing_up(&mut self) {
        if self.landing_index >= FEATURE_COLUMNS {
            self.landing_index -= FEATURE_COLUMNS;
        }
    }

    pub fn move_landing_left(&mut self) {
        if self.landing_index % FEATURE_COLUMNS > 0 {
            self.landing_index -= 1;
        }
    }

    pub fn move_landing_right(&mut self) {
        let last_col = self.landing_index % FEATURE_COLUMNS + 1 == FEATURE_COLUMNS;
        if !last_col && self.landing_index + 1 < FEATURES.len() {
            self.landing_index += 1;
        }
    }

    pub fn selected_feature(&self) -> Option<&FeatureDescriptor> {
        FEATURES.get(self.landing_index)
    }
}
