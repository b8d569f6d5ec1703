//! Application state and core logic

use crate::config::SiteConfig;
use crate::intake::{IntakeClient, IntakeClientTrait};
use crate::platform::SUBMIT_MODIFIER;
use crate::state::{AppState, DemoField, DialogFocus, NavTarget, ToastQueue, NAV_LINKS, WAITLIST_HREF};
use crate::workflow::{BlockReason, DemoWorkflow, DialogCommand, SubmitAttempt, WorkflowEvent};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::{self, UnboundedReceiver};

/// Below this width the nav links collapse into a menu
pub const COMPACT_WIDTH: u16 = 80;

/// Main application struct
pub struct App {
    /// Shell state (navigation, dialog visibility)
    pub state: AppState,
    /// Demo request workflow behind the dialog
    pub workflow: DemoWorkflow,
    /// Toasts raised by the workflow
    pub toasts: ToastQueue,
    /// Required fields flagged by the last blocked submit
    pub missing_fields: Vec<DemoField>,
    /// Terminal size (height, width)
    pub terminal_size: Option<(u16, u16)>,
    events: UnboundedReceiver<WorkflowEvent>,
    quit: bool,
}

impl App {
    /// Create the app with an HTTP intake client built from `config`
    pub fn new(config: &SiteConfig) -> Result<Self> {
        let client = IntakeClient::new(config.intake_endpoint(), config.request_timeout())?;
        tracing::info!(endpoint = client.endpoint(), "using intake endpoint");
        Ok(Self::with_client(Arc::new(client), config.reset_delay()))
    }

    pub fn with_client(client: Arc<dyn IntakeClientTrait>, reset_delay: Duration) -> Self {
        let toasts = ToastQueue::new();
        let (tx, rx) = mpsc::unbounded_channel();
        let workflow = DemoWorkflow::new(client, Arc::new(toasts.clone()), tx, reset_delay);

        Self {
            state: AppState::default(),
            workflow,
            toasts,
            missing_fields: Vec::new(),
            terminal_size: None,
            events: rx,
            quit: false,
        }
    }

    /// Check if app should quit
    pub fn should_quit(&self) -> bool {
        self.quit
    }

    /// Narrow terminal: nav links live in a toggle menu
    pub fn is_compact(&self) -> bool {
        self.terminal_size
            .is_some_and(|(_, width)| width < COMPACT_WIDTH)
    }

    /// Per-frame housekeeping
    pub fn tick(&mut self) {
        if !self.toasts.is_empty() {
            self.toasts.prune_expired();
        }
    }

    /// Apply every workflow event that has arrived since the last frame
    pub fn drain_workflow_events(&mut self) {
        while let Ok(event) = self.events.try_recv() {
            self.handle_workflow_event(event);
        }
    }

    pub fn handle_workflow_event(&mut self, event: WorkflowEvent) {
        let command = self.workflow.handle_event(event);
        self.apply(command);
    }

    /// End the session before exiting so no timer outlives the UI
    pub fn shutdown(&mut self) {
        if let Some(session) = self.workflow.session_id() {
            tracing::debug!(%session, "closing demo session on exit");
        }
        self.workflow.close();
        self.state.close_demo_dialog();
    }

    /// Handle a key press
    pub fn handle_key(&mut self, key: KeyEvent) {
        if self.state.demo_dialog_open {
            self.handle_dialog_key(key);
        } else {
            self.handle_nav_key(key);
        }
    }

    fn handle_nav_key(&mut self, key: KeyEvent) {
        match key.code {
            KeyCode::Char('q') => self.quit = true,
            KeyCode::Esc if self.state.menu_open => self.state.menu_open = false,
            KeyCode::Left | KeyCode::Up | KeyCode::Char('h') | KeyCode::Char('k') => {
                self.state.prev_nav()
            }
            KeyCode::Right | KeyCode::Down | KeyCode::Char('l') | KeyCode::Char('j') => {
                self.state.next_nav()
            }
            KeyCode::Enter | KeyCode::Char(' ') => self.activate(self.state.selected_nav()),
            KeyCode::Char('d') => self.open_demo_dialog(),
            KeyCode::Char('m') => self.state.toggle_menu(),
            _ => {}
        }
    }

    fn activate(&mut self, target: NavTarget) {
        self.state.menu_open = false;
        match target {
            NavTarget::Link(index) => {
                if let Some(link) = NAV_LINKS.get(index) {
                    self.state.status_message = Some(format!("{} → {}", link.name, link.href));
                }
            }
            NavTarget::BookDemo => self.open_demo_dialog(),
            NavTarget::JoinWaitlist => {
                self.state.status_message = Some(format!("Join the waitlist → {WAITLIST_HREF}"));
            }
        }
    }

    fn open_demo_dialog(&mut self) {
        self.state.open_demo_dialog();
        self.state.status_message = None;
        self.missing_fields.clear();
        self.workflow.open();
    }

    /// Carry out a dialog request coming from the workflow
    fn apply(&mut self, command: DialogCommand) {
        if command == DialogCommand::Close {
            self.workflow.close();
            self.state.close_demo_dialog();
            self.missing_fields.clear();
        }
    }

    fn handle_dialog_key(&mut self, key: KeyEvent) {
        let focus = self.state.dialog_focus;

        match key.code {
            KeyCode::Esc => self.cancel_demo(),
            KeyCode::Char('s')
                if key.modifiers.contains(KeyModifiers::CONTROL)
                    || key.modifiers.contains(SUBMIT_MODIFIER) =>
            {
                self.submit_demo()
            }
            KeyCode::Tab => self.state.dialog_focus = focus.next(),
            KeyCode::BackTab => self.state.dialog_focus = focus.prev(),
            KeyCode::Enter => match focus {
                DialogFocus::Cancel => self.cancel_demo(),
                DialogFocus::Submit => self.submit_demo(),
                DialogFocus::Field(DemoField::Message) => {
                    self.edit_field(DemoField::Message, |value| value.push('\n'))
                }
                DialogFocus::Field(_) => self.state.dialog_focus = focus.next(),
            },
            KeyCode::Char(c) if !key.modifiers.contains(KeyModifiers::CONTROL) => {
                if let Some(field) = focus.field() {
                    self.edit_field(field, |value| value.push(c));
                }
            }
            KeyCode::Backspace => {
                if let Some(field) = focus.field() {
                    self.edit_field(field, |value| {
                        value.pop();
                    });
                }
            }
            _ => {}
        }
    }

    fn edit_field(&mut self, field: DemoField, edit: impl FnOnce(&mut String)) {
        let Some(form) = self.workflow.form() else {
            return;
        };
        let mut value = form.value(field).to_string();
        edit(&mut value);
        self.workflow.update(field, value);

        if let Some(form) = self.workflow.form() {
            self.missing_fields.retain(|f| form.value(*f).is_empty());
        }
    }

    fn submit_demo(&mut self) {
        match self.workflow.submit() {
            SubmitAttempt::Started => {
                self.missing_fields.clear();
                self.state.status_message = None;
            }
            SubmitAttempt::Blocked(BlockReason::MissingFields(fields)) => {
                let labels: Vec<_> = fields.iter().map(|f| f.label()).collect();
                self.state.status_message =
                    Some(format!("Required: {}", labels.join(", ")));
                if let Some(first) = fields.first() {
                    self.state.dialog_focus = DialogFocus::Field(*first);
                }
                self.missing_fields = fields;
            }
            SubmitAttempt::Blocked(_) => {}
        }
    }

    fn cancel_demo(&mut self) {
        let command = self.workflow.cancel();
        self.apply(command);
    }
}
