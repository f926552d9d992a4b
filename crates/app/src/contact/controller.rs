//! Drives a [`ContactForm`] against its two collaborators: the client that
//! performs the network call and the sink that shows the result.

use std::future::Future;

use shared_types::{
    ContactField, ContactForm, ContactResponse, ContactValues, FormAction, FormEffect,
    ResponseType,
};

/// Sends submitted values to a backend endpoint.
///
/// Failures are reported as an error `ContactResponse`, never as a panic or
/// a dropped future.
pub trait SubmissionClient {
    fn submit(
        &self,
        endpoint: &str,
        values: ContactValues,
    ) -> impl Future<Output = ContactResponse>;
}

/// Shows a transient success or error message to the visitor.
pub trait NotificationSink {
    fn notify(&self, kind: ResponseType, message: &str);
}

/// What happened to a submit request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// Validation failed; errors are now visible and nothing was sent.
    Invalid,
    /// A submission was already in flight; the request was ignored.
    Busy,
    /// The client answered with this kind of response.
    Settled(ResponseType),
}

pub struct ContactController<C, N> {
    form: ContactForm,
    endpoint: String,
    client: C,
    sink: N,
}

impl<C: SubmissionClient, N: NotificationSink> ContactController<C, N> {
    /// `endpoint` is passed through to the client untouched; empty means the
    /// client's default.
    pub fn new(endpoint: impl Into<String>, client: C, sink: N) -> Self {
        Self {
            form: ContactForm::new(),
            endpoint: endpoint.into(),
            client,
            sink,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    pub fn client(&self) -> &C {
        &self.client
    }

    pub fn set_field(&mut self, field: ContactField, value: impl Into<String>) {
        self.dispatch(FormAction::SetField(field, value.into()));
    }

    pub fn touch_field(&mut self, field: ContactField) {
        self.dispatch(FormAction::Touch(field));
    }

    /// Validate, send, and settle in one step.
    pub async fn submit(&mut self) -> SubmitOutcome {
        let values = match self.begin_submit() {
            Ok(values) => values,
            Err(outcome) => return outcome,
        };
        let response = self.client.submit(&self.endpoint, values).await;
        let kind = response.kind;
        self.on_submission_settled(response);
        SubmitOutcome::Settled(kind)
    }

    /// First half of a submission: validate and mark the form busy.
    ///
    /// On success the caller owns the values and must eventually call
    /// [`on_submission_settled`](Self::on_submission_settled).
    pub fn begin_submit(&mut self) -> Result<ContactValues, SubmitOutcome> {
        if self.form.is_submitting() {
            tracing::debug!("submit ignored, already submitting");
            return Err(SubmitOutcome::Busy);
        }
        for effect in self.dispatch(FormAction::Submit) {
            if let FormEffect::Submit(values) = effect {
                return Ok(values);
            }
        }
        tracing::debug!(errors = self.form.errors().len(), "submit blocked by validation");
        Err(SubmitOutcome::Invalid)
    }

    /// Second half of a submission: report the response and reset on success.
    pub fn on_submission_settled(&mut self, response: ContactResponse) {
        let effects = self.dispatch(FormAction::Settled(response));
        notify_all(&self.sink, effects);
    }

    fn dispatch(&mut self, action: FormAction) -> Vec<FormEffect> {
        let (next, effects) = std::mem::take(&mut self.form).reduce(action);
        self.form = next;
        effects
    }
}

/// Forward every `Notify` effect to `sink`.
pub fn notify_all(sink: &impl NotificationSink, effects: Vec<FormEffect>) {
    for effect in effects {
        if let FormEffect::Notify(kind, message) = effect {
            sink.notify(kind, &message);
        }
    }
}
