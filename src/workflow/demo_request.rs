//! Demo request workflow state machine
//!
//! One [`DemoWorkflow`] lives for the whole app; each time the dialog opens it
//! starts a fresh session (form values + submission status). Network results
//! and the post-success reset timer come back as [`WorkflowEvent`]s tagged with
//! the session they belong to, so anything arriving after the session is gone
//! is dropped.

use super::notifier::Notifier;
use crate::intake::{IntakeClientTrait, IntakeError, IntakeOutcome};
use crate::state::{DemoField, DemoForm, FailureKind, SubmissionStatus};
use std::fmt;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc::UnboundedSender;
use tokio::task::JoinHandle;
use uuid::Uuid;

/// User-facing strings
pub mod messages {
    pub const SUBMITTED: &str = "Demo request submitted successfully! We'll be in touch soon.";
    pub const VALIDATION_FALLBACK: &str = "Please fill in all required fields correctly.";
    pub const SERVER_FAILURE: &str = "Something went wrong. Please try again.";
    pub const NETWORK_FAILURE: &str = "Network error. Please check your connection and try again.";
    pub const NETWORK_FAILURE_TOAST: &str = "Failed to submit demo request. Please try again.";
}

/// Identifies one open-dialog session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SessionId(Uuid);

impl SessionId {
    fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl fmt::Display for SessionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Asynchronous results fed back into the workflow by the event loop
#[derive(Debug)]
pub enum WorkflowEvent {
    /// The intake request finished (or failed to)
    SubmissionResolved {
        session: SessionId,
        result: Result<IntakeOutcome, IntakeError>,
    },
    /// The post-success display delay is over
    ResetElapsed { session: SessionId },
}

/// What the shell should do with the dialog after a workflow operation
#[must_use]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DialogCommand {
    Keep,
    Close,
}

/// Why a submit action did not start a request
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BlockReason {
    NotOpen,
    InFlight,
    AlreadySucceeded,
    MissingFields(Vec<DemoField>),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SubmitAttempt {
    Started,
    Blocked(BlockReason),
}

struct Session {
    id: SessionId,
    form: DemoForm,
    status: SubmissionStatus,
    reset_task: Option<JoinHandle<()>>,
}

impl Session {
    fn new() -> Self {
        Self {
            id: SessionId::new(),
            form: DemoForm::new(),
            status: SubmissionStatus::Editing,
            reset_task: None,
        }
    }

    fn cancel_reset(&mut self) {
        if let Some(task) = self.reset_task.take() {
            task.abort();
        }
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.cancel_reset();
    }
}

/// Drives the demo request dialog
pub struct DemoWorkflow {
    client: Arc<dyn IntakeClientTrait>,
    notifier: Arc<dyn Notifier>,
    events: UnboundedSender<WorkflowEvent>,
    reset_delay: Duration,
    session: Option<Session>,
}

impl DemoWorkflow {
    pub fn new(
        client: Arc<dyn IntakeClientTrait>,
        notifier: Arc<dyn Notifier>,
        events: UnboundedSender<WorkflowEvent>,
        reset_delay: Duration,
    ) -> Self {
        Self {
            client,
            notifier,
            events,
            reset_delay,
            session: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.session.is_some()
    }

    pub fn session_id(&self) -> Option<SessionId> {
        self.session.as_ref().map(|s| s.id)
    }

    pub fn form(&self) -> Option<&DemoForm> {
        self.session.as_ref().map(|s| &s.form)
    }

    pub fn status(&self) -> Option<&SubmissionStatus> {
        self.session.as_ref().map(|s| &s.status)
    }

    /// A request is outstanding; inputs, submit and cancel are disabled
    pub fn is_in_flight(&self) -> bool {
        self.status().is_some_and(SubmissionStatus::is_in_flight)
    }

    /// Whether the submit control should be enabled
    pub fn can_submit(&self) -> bool {
        self.session.as_ref().is_some_and(|s| {
            matches!(
                s.status,
                SubmissionStatus::Editing | SubmissionStatus::Failed { .. }
            ) && s.form.missing_required().is_empty()
        })
    }

    /// Start a new session with an empty form. No-op if one is already open.
    pub fn open(&mut self) {
        if self.session.is_some() {
            return;
        }
        let session = Session::new();
        tracing::info!(session = %session.id, "demo dialog opened");
        self.session = Some(session);
    }

    /// Tear down the current session. A pending reset timer is cancelled and
    /// late results for this session will be ignored.
    pub fn close(&mut self) {
        if let Some(session) = self.session.take() {
            tracing::debug!(session = %session.id, "demo dialog closed");
        }
    }

    /// Replace one field value. Ignored while a request is in flight or the
    /// success panel is showing; a failed status goes back to editing.
    pub fn update(&mut self, field: DemoField, value: impl Into<String>) {
        let Some(session) = self.session.as_mut() else {
            return;
        };
        match session.status {
            SubmissionStatus::Submitting | SubmissionStatus::Succeeded => return,
            SubmissionStatus::Failed { .. } => session.status = SubmissionStatus::Editing,
            SubmissionStatus::Editing => {}
        }
        session.form = std::mem::take(&mut session.form).with(field, value);
    }

    /// Validate the form and send exactly one request for it.
    ///
    /// The result arrives later as [`WorkflowEvent::SubmissionResolved`].
    pub fn submit(&mut self) -> SubmitAttempt {
        let Some(session) = self.session.as_mut() else {
            return SubmitAttempt::Blocked(BlockReason::NotOpen);
        };
        match session.status {
            SubmissionStatus::Submitting => {
                tracing::debug!(session = %session.id, "submit ignored while in flight");
                return SubmitAttempt::Blocked(BlockReason::InFlight);
            }
            SubmissionStatus::Succeeded => {
                return SubmitAttempt::Blocked(BlockReason::AlreadySucceeded);
            }
            SubmissionStatus::Editing | SubmissionStatus::Failed { .. } => {}
        }

        let missing = session.form.missing_required();
        if !missing.is_empty() {
            let names: Vec<_> = missing.iter().map(|f| f.name()).collect();
            tracing::debug!(session = %session.id, missing = ?names, "submit blocked");
            return SubmitAttempt::Blocked(BlockReason::MissingFields(missing));
        }

        let request = session.form.to_request();
        session.status = SubmissionStatus::Submitting;

        let id = session.id;
        let client = Arc::clone(&self.client);
        let events = self.events.clone();
        tracing::info!(
            session = %id,
            has_company = request.company.is_some(),
            "submitting demo request"
        );

        tokio::spawn(async move {
            let result = client.submit_demo_request(&request).await;
            // The receiver only goes away when the app is shutting down
            let _ = events.send(WorkflowEvent::SubmissionResolved {
                session: id,
                result,
            });
        });

        SubmitAttempt::Started
    }

    /// Clear the form and ask the shell to close the dialog.
    /// Does nothing while a request is in flight.
    pub fn cancel(&mut self) -> DialogCommand {
        let Some(session) = self.session.as_mut() else {
            return DialogCommand::Keep;
        };
        if session.status.is_in_flight() {
            tracing::debug!(session = %session.id, "cancel ignored while in flight");
            return DialogCommand::Keep;
        }

        session.cancel_reset();
        session.form = DemoForm::new();
        session.status = SubmissionStatus::Editing;
        DialogCommand::Close
    }

    /// Apply an asynchronous result. Events for another session, or that no
    /// longer match the current status, are ignored.
    pub fn handle_event(&mut self, event: WorkflowEvent) -> DialogCommand {
        match event {
            WorkflowEvent::SubmissionResolved { session, result } => {
                let Some(current) = self
                    .session
                    .as_mut()
                    .filter(|s| s.id == session && s.status.is_in_flight())
                else {
                    tracing::debug!(%session, "ignoring stale submission result");
                    return DialogCommand::Keep;
                };

                current.status = match result {
                    Ok(IntakeOutcome::Accepted) => {
                        tracing::info!(%session, "demo request accepted");
                        self.notifier.success(messages::SUBMITTED);
                        current.reset_task =
                            Some(schedule_reset(&self.events, session, self.reset_delay));
                        SubmissionStatus::Succeeded
                    }
                    Ok(IntakeOutcome::Rejected { reason }) => {
                        tracing::warn!(%session, "demo request rejected by intake endpoint");
                        SubmissionStatus::failed(
                            FailureKind::Validation,
                            reason.unwrap_or_else(|| messages::VALIDATION_FALLBACK.to_string()),
                        )
                    }
                    Ok(IntakeOutcome::ServerFailure { status }) => {
                        tracing::warn!(%session, status, "intake endpoint failed");
                        SubmissionStatus::failed(FailureKind::Server, messages::SERVER_FAILURE)
                    }
                    Err(err) => {
                        tracing::warn!(%session, error = %err, "demo request did not complete");
                        self.notifier.failure(messages::NETWORK_FAILURE_TOAST);
                        SubmissionStatus::failed(FailureKind::Network, messages::NETWORK_FAILURE)
                    }
                };
                DialogCommand::Keep
            }
            WorkflowEvent::ResetElapsed { session } => {
                let Some(current) = self
                    .session
                    .as_mut()
                    .filter(|s| s.id == session && s.status == SubmissionStatus::Succeeded)
                else {
                    tracing::debug!(%session, "ignoring stale reset");
                    return DialogCommand::Keep;
                };

                current.reset_task = None;
                current.form = DemoForm::new();
                current.status = SubmissionStatus::Editing;
                DialogCommand::Close
            }
        }
    }
}

/// Send `ResetElapsed` for `session` after `delay`
fn schedule_reset(
    events: &UnboundedSender<WorkflowEvent>,
    session: SessionId,
    delay: Duration,
) -> JoinHandle<()> {
    let events = events.clone();
    tokio::spawn(async move {
        tokio::time::sleep(delay).await;
        let _ = events.send(WorkflowEvent::ResetElapsed { session });
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::intake::{DemoRequest, MockIntakeClientTrait};
    use crate::workflow::MockNotifier;
    use pretty_assertions::assert_eq;
    use tokio::sync::mpsc::{self, UnboundedReceiver};

    const SHORT_DELAY: Duration = Duration::from_millis(20);

    fn workflow_with(
        client: MockIntakeClientTrait,
        notifier: MockNotifier,
    ) -> (DemoWorkflow, UnboundedReceiver<WorkflowEvent>) {
        let (tx, rx) = mpsc::unbounded_channel();
        let workflow = DemoWorkflow::new(Arc::new(client), Arc::new(notifier), tx, SHORT_DELAY);
        (workflow, rx)
    }

    /// Notifier that must never be called
    fn silent_notifier() -> MockNotifier {
        let mut notifier = MockNotifier::new();
        notifier.expect_success().never();
        notifier.expect_failure().never();
        notifier
    }

    fn client_returning(
        result: impl Fn() -> Result<IntakeOutcome, IntakeError> + Send + 'static,
    ) -> MockIntakeClientTrait {
        let mut client = MockIntakeClientTrait::new();
        client
            .expect_submit_demo_request()
            .times(1)
            .returning(move |_| result());
        client
    }

    fn idle_client() -> MockIntakeClientTrait {
        let mut client = MockIntakeClientTrait::new();
        client.expect_submit_demo_request().never();
        client
    }

    fn transport_error() -> IntakeError {
        // A request that cannot even be built stands in for a dropped connection
        let err = reqwest::Client::new()
            .get("not a url")
            .build()
            .unwrap_err();
        IntakeError::Transport(err)
    }

    /// {name:"Ada", email:"ada@x.com", company:"", timezone:"PST", message:"scaling"}
    fn fill_form(workflow: &mut DemoWorkflow) {
        workflow.update(DemoField::Name, "Ada");
        workflow.update(DemoField::Email, "ada@x.com");
        workflow.update(DemoField::Company, "");
        workflow.update(DemoField::Timezone, "PST");
        workflow.update(DemoField::Message, "scaling");
    }

    async fn next_event(rx: &mut UnboundedReceiver<WorkflowEvent>) -> WorkflowEvent {
        tokio::time::timeout(Duration::from_secs(5), rx.recv())
            .await
            .expect("timed out waiting for workflow event")
            .expect("event channel closed")
    }

    async fn submit_and_resolve(
        workflow: &mut DemoWorkflow,
        rx: &mut UnboundedReceiver<WorkflowEvent>,
    ) -> DialogCommand {
        assert_eq!(workflow.submit(), SubmitAttempt::Started);
        let event = next_event(rx).await;
        workflow.handle_event(event)
    }

    #[test]
    fn test_closed_workflow_has_no_session() {
        let (workflow, _rx) = workflow_with(idle_client(), silent_notifier());
        assert!(!workflow.is_open());
        assert!(workflow.form().is_none());
        assert!(!workflow.can_submit());
    }

    #[tokio::test]
    async fn test_open_starts_empty_editing_session() {
        let (mut workflow, _rx) = workflow_with(idle_client(), silent_notifier());
        workflow.open();
        assert!(workflow.is_open());
        assert!(workflow.form().unwrap().is_empty());
        assert_eq!(workflow.status(), Some(&SubmissionStatus::Editing));
    }

    #[tokio::test]
    async fn test_open_twice_keeps_session() {
        let (mut workflow, _rx) = workflow_with(idle_client(), silent_notifier());
        workflow.open();
        workflow.update(DemoField::Name, "Ada");
        let id = workflow.session_id();
        workflow.open();
        assert_eq!(workflow.session_id(), id);
        assert_eq!(workflow.form().unwrap().value(DemoField::Name), "Ada");
    }

    #[tokio::test]
    async fn test_each_open_gets_a_fresh_session() {
        let (mut workflow, _rx) = workflow_with(idle_client(), silent_notifier());
        workflow.open();
        workflow.update(DemoField::Name, "Ada");
        let first = workflow.session_id();
        workflow.close();
        workflow.open();
        assert_ne!(workflow.session_id(), first);
        assert!(workflow.form().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_submit_when_closed_is_blocked() {
        let (mut workflow, _rx) = workflow_with(idle_client(), silent_notifier());
        assert_eq!(
            workflow.submit(),
            SubmitAttempt::Blocked(BlockReason::NotOpen)
        );
    }

    #[tokio::test]
    async fn test_submit_with_missing_fields_sends_nothing() {
        let (mut workflow, mut rx) = workflow_with(idle_client(), silent_notifier());
        workflow.open();
        workflow.update(DemoField::Name, "Ada");
        workflow.update(DemoField::Company, "Acme");

        assert!(!workflow.can_submit());
        assert_eq!(
            workflow.submit(),
            SubmitAttempt::Blocked(BlockReason::MissingFields(vec![
                DemoField::Email,
                DemoField::Timezone,
                DemoField::Message,
            ]))
        );
        assert_eq!(workflow.status(), Some(&SubmissionStatus::Editing));
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_accepted_submission_resets_and_closes_after_delay() {
        let mut client = MockIntakeClientTrait::new();
        client
            .expect_submit_demo_request()
            .times(1)
            .withf(|request: &DemoRequest| {
                request.name == "Ada"
                    && request.email == "ada@x.com"
                    && request.company.is_none()
                    && request.timezone == "PST"
                    && request.message == "scaling"
            })
            .returning(|_| Ok(IntakeOutcome::Accepted));
        let mut notifier = MockNotifier::new();
        notifier
            .expect_success()
            .times(1)
            .withf(|message: &str| message == messages::SUBMITTED)
            .return_const(());
        notifier.expect_failure().never();

        let (mut workflow, mut rx) = workflow_with(client, notifier);
        workflow.open();
        fill_form(&mut workflow);
        assert!(workflow.can_submit());

        assert_eq!(workflow.submit(), SubmitAttempt::Started);
        assert!(workflow.is_in_flight());

        let resolved = next_event(&mut rx).await;
        assert_eq!(workflow.handle_event(resolved), DialogCommand::Keep);
        assert_eq!(workflow.status(), Some(&SubmissionStatus::Succeeded));
        assert!(!workflow.is_in_flight());

        let reset = next_event(&mut rx).await;
        assert!(matches!(reset, WorkflowEvent::ResetElapsed { .. }));
        assert_eq!(workflow.handle_event(reset), DialogCommand::Close);
        assert!(workflow.form().unwrap().is_empty());
        assert_eq!(workflow.status(), Some(&SubmissionStatus::Editing));

        // Close was requested once and nothing else is pending
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_rejection_shows_endpoint_reason_without_toast() {
        let client = client_returning(|| {
            Ok(IntakeOutcome::Rejected {
                reason: Some("email already booked".to_string()),
            })
        });
        let (mut workflow, mut rx) = workflow_with(client, silent_notifier());
        workflow.open();
        fill_form(&mut workflow);

        assert_eq!(
            submit_and_resolve(&mut workflow, &mut rx).await,
            DialogCommand::Keep
        );
        assert_eq!(
            workflow.status(),
            Some(&SubmissionStatus::failed(
                FailureKind::Validation,
                "email already booked"
            ))
        );
        assert!(!workflow.is_in_flight());
        assert!(workflow.can_submit());
    }

    #[tokio::test]
    async fn test_rejection_without_reason_uses_fallback() {
        let client = client_returning(|| Ok(IntakeOutcome::Rejected { reason: None }));
        let (mut workflow, mut rx) = workflow_with(client, silent_notifier());
        workflow.open();
        fill_form(&mut workflow);

        let _ = submit_and_resolve(&mut workflow, &mut rx).await;
        let status = workflow.status().unwrap();
        assert_eq!(status.failure_kind(), Some(FailureKind::Validation));
        assert_eq!(status.failure_message(), Some(messages::VALIDATION_FALLBACK));
    }

    #[tokio::test]
    async fn test_server_failure_uses_generic_message() {
        let client = client_returning(|| Ok(IntakeOutcome::ServerFailure { status: 500 }));
        let (mut workflow, mut rx) = workflow_with(client, silent_notifier());
        workflow.open();
        fill_form(&mut workflow);

        let _ = submit_and_resolve(&mut workflow, &mut rx).await;
        assert_eq!(
            workflow.status(),
            Some(&SubmissionStatus::failed(
                FailureKind::Server,
                messages::SERVER_FAILURE
            ))
        );
        assert!(!workflow.is_in_flight());
    }

    #[tokio::test]
    async fn test_transport_failure_notifies_once() {
        let client = client_returning(|| Err(transport_error()));
        let mut notifier = MockNotifier::new();
        notifier.expect_success().never();
        notifier
            .expect_failure()
            .times(1)
            .withf(|message: &str| message == messages::NETWORK_FAILURE_TOAST)
            .return_const(());

        let (mut workflow, mut rx) = workflow_with(client, notifier);
        workflow.open();
        fill_form(&mut workflow);

        let _ = submit_and_resolve(&mut workflow, &mut rx).await;
        assert_eq!(
            workflow.status(),
            Some(&SubmissionStatus::failed(
                FailureKind::Network,
                messages::NETWORK_FAILURE
            ))
        );
        assert!(!workflow.is_in_flight());
    }

    #[tokio::test]
    async fn test_malformed_reply_counts_as_network_failure() {
        let client = client_returning(|| {
            let source = serde_json::from_str::<serde_json::Value>("<html>").unwrap_err();
            Err(IntakeError::MalformedBody {
                status: 200,
                source,
            })
        });
        let mut notifier = MockNotifier::new();
        notifier.expect_success().never();
        notifier.expect_failure().times(1).return_const(());

        let (mut workflow, mut rx) = workflow_with(client, notifier);
        workflow.open();
        fill_form(&mut workflow);

        let _ = submit_and_resolve(&mut workflow, &mut rx).await;
        assert_eq!(
            workflow.status().and_then(SubmissionStatus::failure_kind),
            Some(FailureKind::Network)
        );
    }

    #[tokio::test]
    async fn test_second_submit_while_in_flight_is_blocked() {
        let client = client_returning(|| Ok(IntakeOutcome::ServerFailure { status: 503 }));
        let (mut workflow, mut rx) = workflow_with(client, silent_notifier());
        workflow.open();
        fill_form(&mut workflow);

        assert_eq!(workflow.submit(), SubmitAttempt::Started);
        assert!(!workflow.can_submit());
        assert_eq!(
            workflow.submit(),
            SubmitAttempt::Blocked(BlockReason::InFlight)
        );
        assert_eq!(workflow.status(), Some(&SubmissionStatus::Submitting));

        let event = next_event(&mut rx).await;
        let _ = workflow.handle_event(event);
        assert!(rx.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_cancel_and_edits_ignored_while_in_flight() {
        let client = client_returning(|| Ok(IntakeOutcome::ServerFailure { status: 500 }));
        let (mut workflow, mut rx) = workflow_with(client, silent_notifier());
        workflow.open();
        fill_form(&mut workflow);
        assert_eq!(workflow.submit(), SubmitAttempt::Started);

        assert_eq!(workflow.cancel(), DialogCommand::Keep);
        workflow.update(DemoField::Name, "Grace");
        assert_eq!(workflow.status(), Some(&SubmissionStatus::Submitting));
        assert_eq!(workflow.form().unwrap().value(DemoField::Name), "Ada");

        let event = next_event(&mut rx).await;
        let _ = workflow.handle_event(event);
    }

    #[tokio::test]
    async fn test_cancel_from_editing_clears_everything() {
        let (mut workflow, _rx) = workflow_with(idle_client(), silent_notifier());
        workflow.open();
        fill_form(&mut workflow);
        workflow.update(DemoField::Company, "Acme");

        assert_eq!(workflow.cancel(), DialogCommand::Close);
        assert!(workflow.form().unwrap().is_empty());
        assert_eq!(workflow.status(), Some(&SubmissionStatus::Editing));

        // Cancelling again gives the same result
        assert_eq!(workflow.cancel(), DialogCommand::Close);
        assert!(workflow.form().unwrap().is_empty());
        assert_eq!(workflow.status(), Some(&SubmissionStatus::Editing));
    }

    #[tokio::test]
    async fn test_cancel_after_failure_clears_message() {
        let client = client_returning(|| Ok(IntakeOutcome::Rejected { reason: None }));
        let (mut workflow, mut rx) = workflow_with(client, silent_notifier());
        workflow.open();
        fill_form(&mut workflow);
        let _ = submit_and_resolve(&mut workflow, &mut rx).await;
        assert!(workflow.status().unwrap().failure_message().is_some());

        assert_eq!(workflow.cancel(), DialogCommand::Close);
        assert_eq!(workflow.status(), Some(&SubmissionStatus::Editing));
        assert!(workflow.form().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_editing_after_failure_returns_to_editing() {
        let client = client_returning(|| Ok(IntakeOutcome::ServerFailure { status: 502 }));
        let (mut workflow, mut rx) = workflow_with(client, silent_notifier());
        workflow.open();
        fill_form(&mut workflow);
        let _ = submit_and_resolve(&mut workflow, &mut rx).await;

        workflow.update(DemoField::Message, "scaling agents");
        assert_eq!(workflow.status(), Some(&SubmissionStatus::Editing));
        assert_eq!(
            workflow.form().unwrap().value(DemoField::Message),
            "scaling agents"
        );
    }

    #[tokio::test]
    async fn test_resubmit_after_failure() {
        let mut client = MockIntakeClientTrait::new();
        let mut seq = mockall::Sequence::new();
        client
            .expect_submit_demo_request()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Err(transport_error()));
        client
            .expect_submit_demo_request()
            .times(1)
            .in_sequence(&mut seq)
            .returning(|_| Ok(IntakeOutcome::Accepted));
        let mut notifier = MockNotifier::new();
        notifier.expect_failure().times(1).return_const(());
        notifier.expect_success().times(1).return_const(());

        let (mut workflow, mut rx) = workflow_with(client, notifier);
        workflow.open();
        fill_form(&mut workflow);

        let _ = submit_and_resolve(&mut workflow, &mut rx).await;
        assert_eq!(
            workflow.status().and_then(SubmissionStatus::failure_kind),
            Some(FailureKind::Network)
        );

        let _ = submit_and_resolve(&mut workflow, &mut rx).await;
        assert_eq!(workflow.status(), Some(&SubmissionStatus::Succeeded));
    }

    #[tokio::test]
    async fn test_succeeded_blocks_submit_and_edits() {
        let client = client_returning(|| Ok(IntakeOutcome::Accepted));
        let mut notifier = MockNotifier::new();
        notifier.expect_success().times(1).return_const(());

        let (mut workflow, mut rx) = workflow_with(client, notifier);
        workflow.open();
        fill_form(&mut workflow);
        let _ = submit_and_resolve(&mut workflow, &mut rx).await;

        assert_eq!(
            workflow.submit(),
            SubmitAttempt::Blocked(BlockReason::AlreadySucceeded)
        );
        workflow.update(DemoField::Name, "Grace");
        assert_eq!(workflow.form().unwrap().value(DemoField::Name), "Ada");
    }

    #[tokio::test]
    async fn test_close_before_reset_drops_timer() {
        let client = client_returning(|| Ok(IntakeOutcome::Accepted));
        let mut notifier = MockNotifier::new();
        notifier.expect_success().times(1).return_const(());

        let (mut workflow, mut rx) = workflow_with(client, notifier);
        workflow.open();
        fill_form(&mut workflow);
        let _ = submit_and_resolve(&mut workflow, &mut rx).await;
        let stale = workflow.session_id().unwrap();

        workflow.close();
        workflow.open();
        workflow.update(DemoField::Name, "Grace");

        // The aborted timer never fires
        let waited = tokio::time::timeout(SHORT_DELAY * 5, rx.recv()).await;
        assert!(waited.is_err());

        // A reset for the old session leaves the new one alone
        let command = workflow.handle_event(WorkflowEvent::ResetElapsed { session: stale });
        assert_eq!(command, DialogCommand::Keep);
        assert_eq!(workflow.form().unwrap().value(DemoField::Name), "Grace");
    }

    #[tokio::test]
    async fn test_result_for_closed_session_is_ignored() {
        let client = client_returning(|| Ok(IntakeOutcome::Accepted));
        let (mut workflow, mut rx) = workflow_with(client, silent_notifier());
        workflow.open();
        fill_form(&mut workflow);
        assert_eq!(workflow.submit(), SubmitAttempt::Started);

        workflow.close();
        workflow.open();

        let event = next_event(&mut rx).await;
        assert_eq!(workflow.handle_event(event), DialogCommand::Keep);
        assert_eq!(workflow.status(), Some(&SubmissionStatus::Editing));
        assert!(workflow.form().unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_reset_ignored_unless_succeeded() {
        let (mut workflow, _rx) = workflow_with(idle_client(), silent_notifier());
        workflow.open();
        workflow.update(DemoField::Name, "Ada");
        let id = workflow.session_id().unwrap();

        let command = workflow.handle_event(WorkflowEvent::ResetElapsed { session: id });
        assert_eq!(command, DialogCommand::Keep);
        assert_eq!(workflow.form().unwrap().value(DemoField::Name), "Ada");
    }

    #[test]
    fn test_session_id_display_is_uuid() {
        let id = SessionId::new();
        let text = id.to_string();
        assert_eq!(text.len(), 36);
        assert!(Uuid::parse_str(&text).is_ok());
    }
}
