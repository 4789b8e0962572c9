use std::sync::Arc;

use futures::future::{AbortHandle, Abortable, Aborted};
use futures_signals::signal::{Mutable, Signal};

use crate::config::MockConfig;
use crate::field::{Field, FieldStore, ValidationErrors};
use crate::form::FormKind;
use crate::transport::{Clock, MockTransport, Transport};
use crate::validation::Validator;

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmissionState {
    #[default]
    Idle,
    Loading,
    Success(String),
    Error(String),
}

impl SubmissionState {
    pub fn is_loading(&self) -> bool {
        matches!(self, SubmissionState::Loading)
    }
}

/// What a call to [`FormSubmission::submit`] ended up doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Local validation failed; nothing was sent.
    Invalid,
    /// A submission was already in flight.
    Busy,
    Accepted,
    Rejected,
    Cancelled,
}

/// One form's submit lifecycle: values, inline errors, banner state and the shake cue.
pub struct FormSubmission {
    pub kind: FormKind,
    pub values: FieldStore,
    pub errors: Mutable<ValidationErrors>,
    pub state: Mutable<SubmissionState>,
    pub shake: Mutable<bool>,
    validator: Validator,
    transport: Box<dyn Transport>,
    clock: Arc<dyn Clock>,
    shake_ms: u32,
    in_flight: Mutable<Option<AbortHandle>>,
}

impl FormSubmission {
    pub fn new(
        kind: FormKind,
        validator: Validator,
        transport: Box<dyn Transport>,
        clock: Arc<dyn Clock>,
        shake_ms: u32,
    ) -> Arc<Self> {
        Arc::new(Self {
            kind,
            values: FieldStore::new(kind.fields()),
            errors: Mutable::new(ValidationErrors::default()),
            state: Mutable::new(SubmissionState::Idle),
            shake: Mutable::new(false),
            validator,
            transport,
            clock,
            shake_ms,
            in_flight: Mutable::new(None),
        })
    }

    /// A form backed by the simulated backend.
    pub fn mock(kind: FormKind, config: Arc<MockConfig>, clock: Arc<dyn Clock>) -> Arc<Self> {
        let shake_ms = config.shake_ms;
        let transport = MockTransport::new(kind, config, clock.clone());
        Self::new(kind, kind.validator(), Box::new(transport), clock, shake_ms)
    }

    pub fn field(&self, field: Field) -> Mutable<String> {
        self.values.field(field)
    }

    pub fn clear_error(&self, field: Field) {
        let mut errors = self.errors.lock_mut();
        if errors.contains(field) {
            errors.clear(field);
        }
    }

    pub fn is_loading(&self) -> bool {
        self.state.lock_ref().is_loading()
    }

    pub fn loading_signal(&self) -> impl Signal<Item = bool> {
        self.state.signal_ref(SubmissionState::is_loading)
    }

    pub fn error_signal(&self, field: Field) -> impl Signal<Item = Option<String>> {
        self.errors.signal_ref(move |errors| errors.get(field).map(str::to_string))
    }

    pub async fn submit(&self) -> SubmitOutcome {
        if self.is_loading() {
            log::debug!("Ignoring {} submit while a request is pending", self.kind);
            return SubmitOutcome::Busy;
        }

        let values = self.values.snapshot();
        let errors = (self.validator)(&values);
        if !errors.is_empty() {
            log::debug!("{} form has {} invalid field(s)", self.kind, errors.len());
            self.errors.set(errors);
            self.pulse_shake().await;
            return SubmitOutcome::Invalid;
        }

        self.errors.set(ValidationErrors::default());
        self.shake.set_neq(false);
        self.state.set(SubmissionState::Loading);

        let (handle, registration) = AbortHandle::new_pair();
        self.in_flight.set(Some(handle));

        let result = match Abortable::new(self.transport.send(&values), registration).await {
            Ok(result) => result,
            Err(Aborted) => {
                log::debug!("{} submission cancelled", self.kind);
                return SubmitOutcome::Cancelled;
            }
        };
        self.in_flight.set(None);

        match result {
            Ok(message) => {
                log::info!("{} submission succeeded", self.kind);
                self.state.set(SubmissionState::Success(message));
                SubmitOutcome::Accepted
            }
            Err(e) => {
                log::info!("{} submission failed: {}", self.kind, e);
                self.state.set(SubmissionState::Error(e.to_string()));
                self.pulse_shake().await;
                SubmitOutcome::Rejected
            }
        }
    }

    /// Aborts the pending request, if any. Its completion will never be published.
    pub fn cancel(&self) {
        if let Some(handle) = self.in_flight.replace(None) {
            handle.abort();
            self.state.set(SubmissionState::Idle);
        }
        self.shake.set_neq(false);
    }

    pub fn reset(&self) {
        self.cancel();
        self.errors.set(ValidationErrors::default());
        self.state.set(SubmissionState::Idle);
    }

    async fn pulse_shake(&self) {
        self.shake.set(true);
        self.clock.sleep(self.shake_ms).await;
        self.shake.set_neq(false);
    }
}
