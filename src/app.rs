//! Application state and input handling

use crate::api::ApiClientTrait;
use crate::config::TuiConfig;
use crate::platform::is_submit_modifier;
use crate::state::{
    AppState, BackendHealth, NotificationEvent, Outcome, PageAction, TemplatePreset, Ticket, View,
};
use crate::tasks::{spawn_health_check, spawn_submission, Completion, Request, Response};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use std::sync::Arc;
use std::time::Instant;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{debug, info, warn};

/// Main application struct
pub struct App {
    /// Current application state
    pub state: AppState,
    config: TuiConfig,
    /// Backend client shared with request tasks
    api: Arc<dyn ApiClientTrait>,
    completion_tx: UnboundedSender<Completion>,
    completion_rx: UnboundedReceiver<Completion>,
    /// Whether the app should quit
    quit: bool,
}

impl App {
    /// Create a new App instance
    pub fn new(config: TuiConfig, api: Arc<dyn ApiClientTrait>) -> Self {
        let (completion_tx, completion_rx) = mpsc::unbounded_channel();
        Self {
            state: AppState::default(),
            config,
            api,
            completion_tx,
            completion_rx,
            quit: false,
        }
    }

    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Ask the backend for its health in the background
    pub fn check_health(&mut self) {
        self.state.backend_health = BackendHealth::Checking;
        spawn_health_check(Arc::clone(&self.api), self.completion_tx.clone());
    }

    /// Apply finished requests and expire notifications
    pub fn tick(&mut self, now: Instant) {
        while let Ok(completion) = self.completion_rx.try_recv() {
            self.apply_completion(completion);
        }
        self.state.notifications.tick(now);
    }

    fn apply_completion(&mut self, completion: Completion) {
        match completion {
            Completion::Submission { ticket, response } => self.finish_submission(ticket, response),
            Completion::Health(Ok(health)) => {
                info!(status = %health.status, version = ?health.version, "Backend is up");
                self.state.backend_health = BackendHealth::Healthy {
                    version: health.version,
                };
            }
            Completion::Health(Err(err)) => {
                warn!(error = %err, "Health check failed");
                self.state.backend_health = BackendHealth::Unreachable;
            }
        }
    }

    fn finish_submission(&mut self, ticket: Ticket, response: Response) {
        let operation = response.operation();
        let outcome = if response.error().is_some() {
            Outcome::Failure
        } else {
            Outcome::Success
        };

        let Some(form) = self.state.form_mut(operation.view()) else {
            return;
        };
        if !form.submission_mut().complete(ticket, outcome) {
            debug!(%ticket, ?operation, "Ignoring stale completion");
            return;
        }

        if let Some(err) = response.error() {
            warn!(%ticket, ?operation, status = ?err.status(), error = %err, "Request failed");
            self.state
                .notifications
                .push(NotificationEvent::destructive(operation.failure_message()));
            return;
        }
        info!(%ticket, ?operation, "Request succeeded");

        let message = match response {
            Response::Transcribe(Ok(body)) => {
                self.state.summarizer.apply_transcription(body.text);
                operation.success_message().to_string()
            }
            Response::Summarize(Ok(body)) => {
                self.state.summarizer.apply_summary(body);
                operation.success_message().to_string()
            }
            Response::GenerateNfrDoc(Ok(body)) => {
                self.state.nfr.generated_markdown = body.markdown;
                operation.success_message().to_string()
            }
            Response::ExportNfrDoc(Ok(body)) => {
                format!("{} {}", operation.success_message(), body.file_path)
            }
            _ => operation.success_message().to_string(),
        };
        self.state
            .notifications
            .push(NotificationEvent::success(operation.success_title(), message));
    }

    /// Switch to `view`
    pub fn navigate(&mut self, view: View) {
        if self.state.current_view != view {
            debug!(from = ?self.state.current_view, to = ?view, "Navigate");
            self.state.current_view = view;
        }
    }

    /// Handle key events
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        // Global keys
        match key.code {
            KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => {
                self.quit = true;
                return;
            }
            KeyCode::F(n @ 1..=5) => {
                self.navigate(View::ALL[usize::from(n) - 1]);
                return;
            }
            KeyCode::Esc => {
                if self.state.notifications.is_empty() {
                    self.navigate(View::Landing);
                } else {
                    self.state.notifications.dismiss();
                }
                return;
            }
            _ => {}
        }

        if self.state.current_view.is_form_view() {
            self.handle_form_key(key);
        } else {
            self.handle_landing_key(key);
        }
    }

    fn handle_landing_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Char('j') | KeyCode::Down => self.state.move_landing_down(),
            KeyCode::Char('k') | KeyCode::Up => self.state.move_landing_up(),
            KeyCode::Char('h') | KeyCode::Left => self.state.move_landing_left(),
            KeyCode::Char('l') | KeyCode::Right => self.state.move_landing_right(),
            KeyCode::Char('r') => self.check_health(),
            KeyCode::Enter => {
                if let Some(feature) = self.state.selected_feature() {
                    let view = feature.view;
                    self.navigate(view);
                }
            }
            _ => {}
        }
    }

    fn handle_form_key(&mut self, key: KeyEvent) {
        let Some(form) = self.state.active_form_mut() else {
            return;
        };
        let on_actions = form.is_buttons_row_active();
        let mut pressed = None;

        match key.code {
            KeyCode::Tab => form.next_field(),
            KeyCode::BackTab => form.prev_field(),
            KeyCode::Char('s') if is_submit_modifier(key.modifiers) => {
                pressed = Some(form.primary_action());
            }
            KeyCode::Up | KeyCode::Left if on_actions => form.prev_button(),
            KeyCode::Down | KeyCode::Right if on_actions => form.next_button(),
            KeyCode::Enter if on_actions => pressed = form.selected_action(),
            KeyCode::Enter => {
                if form.is_active_field_multiline() {
                    if let Some(field) = form.get_active_field_mut() {
                        field.push_char('\n');
                    }
                } else {
                    pressed = Some(form.field_action(form.active_field()));
                }
            }
            KeyCode::Char(c) if !on_actions && !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = form.get_active_field_mut() {
                    field.push_char(c);
                }
            }
            KeyCode::Backspace if !on_actions => {
                if let Some(field) = form.get_active_field_mut() {
                    field.pop_char();
                }
            }
            _ => {}
        }

        if let Some(action) = pressed {
            self.press(action);
        }
    }

    /// Insert pasted text into the active field
    pub fn handle_paste(&mut self, text: &str) {
        let Some(form) = self.state.active_form_mut() else {
            return;
        };
        if form.is_buttons_row_active() {
            return;
        }
        let text = text.replace("\r\n", "\n").replace('\r', "\n");
        if let Some(field) = form.get_active_field_mut() {
            debug!(field = %field.name, len = text.len(), "Paste");
            field.push_str(&text);
        }
    }

    /// Press a button of the active form
    fn press(&mut self, action: PageAction) {
        let Some(form) = self.state.active_form() else {
            return;
        };
        if !form.is_enabled(action) {
            debug!(?action, "Ignoring press on disabled action");
            return;
        }

        let request = match action {
            PageAction::LoadJsonTemplate => {
                self.state.generator.load_preset(TemplatePreset::Json);
                return;
            }
            PageAction::LoadXmlTemplate => {
                self.state.generator.load_preset(TemplatePreset::Xml);
                return;
            }
            PageAction::Search => Request::Search(self.state.search.build_request(&self.config)),
            PageAction::Generate => Request::Generate(self.state.generator.build_request()),
            PageAction::Transcribe => Request::Transcribe(self.state.summarizer.upload_path()),
            PageAction::Summarize => {
                Request::Summarize(self.state.summarizer.build_summarize_request())
            }
            PageAction::GenerateDoc => Request::GenerateNfrDoc(self.state.nfr.build_request()),
            PageAction::Export(format) => {
                let Some(markdown) = self.state.nfr.generated_markdown.clone() else {
                    return;
                };
                debug!(format = format.label(), "Exporting NFR document");
                Request::ExportNfrDoc { format, markdown }
            }
        };
        self.submit(request);
    }

    fn submit(&mut self, request: Request) {
        let operation = request.operation();
        let Some(form) = self.state.form_mut(operation.view()) else {
            return;
        };
        let Some(ticket) = form.submission_mut().begin() else {
            debug!(?operation, "Request already pending");
            return;
        };
        info!(%ticket, ?operation, endpoint = request.endpoint(), "Submitting request");
        spawn_submission(
            Arc::clone(&self.api),
            ticket,
            request,
            self.completion_tx.clone(),
        );
    }
}
