//! Contact form state and the submission flow.
//!
//! Delivery goes through [`MessageTransport`]. The site ships with
//! [`SimulatedTransport`], which only waits and reports success.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use parking_lot::Mutex;
use serde::Serialize;

use crate::error::ContactError;
use crate::lifetime::ViewLifetime;

/// Default simulated network latency.
pub const DEFAULT_SUBMIT_DELAY: Duration = Duration::from_millis(1500);

/// Default time the success banner stays up.
pub const DEFAULT_BANNER_DURATION: Duration = Duration::from_millis(5000);

/// The message body a real backend would receive.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn get(&self, field: FormField) -> &str {
        match field {
            FormField::Name => &self.name,
            FormField::Email => &self.email,
            FormField::Subject => &self.subject,
            FormField::Message => &self.message,
        }
    }

    fn slot(&mut self, field: FormField) -> &mut String {
        match field {
            FormField::Name => &mut self.name,
            FormField::Email => &mut self.email,
            FormField::Subject => &mut self.subject,
            FormField::Message => &mut self.message,
        }
    }

    pub fn is_empty(&self) -> bool {
        FormField::all().iter().all(|f| self.get(*f).is_empty())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum FormField {
    Name,
    Email,
    Subject,
    Message,
}

impl FormField {
    pub fn all() -> &'static [FormField] {
        &[
            FormField::Name,
            FormField::Email,
            FormField::Subject,
            FormField::Message,
        ]
    }

    /// Input `name`/`id` attribute.
    pub fn name(&self) -> &'static str {
        match self {
            FormField::Name => "name",
            FormField::Email => "email",
            FormField::Subject => "subject",
            FormField::Message => "message",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            FormField::Name => "Your Name",
            FormField::Email => "Email Address",
            FormField::Subject => "Subject",
            FormField::Message => "Your Message",
        }
    }

    /// HTML input type; the message field renders as a textarea.
    pub fn input_type(&self) -> &'static str {
        match self {
            FormField::Email => "email",
            _ => "text",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactFormState {
    pub fields: ContactMessage,
    pub submitting: bool,
    /// Success banner flag. Cleared by [`ContactFormState::dismiss_banner`].
    pub submitted: bool,
    /// Last delivery failure, shown in place of the success banner.
    pub error: Option<String>,
    /// Bumped by every accepted submit; banner timers carry the value they
    /// started with.
    pub generation: u64,
}

/// A submission accepted by [`ContactFormState::begin_submit`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PendingSubmission {
    pub generation: u64,
    pub message: ContactMessage,
}

impl ContactFormState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn update_field(&mut self, field: FormField, value: impl Into<String>) {
        *self.fields.slot(field) = value.into();
    }

    /// Enters the submitting phase and returns the message to send.
    ///
    /// Hides any banner left over from an earlier submission.
    pub fn begin_submit(&mut self) -> Result<PendingSubmission, ContactError> {
        if self.submitting {
            return Err(ContactError::AlreadySubmitting);
        }
        self.submitting = true;
        self.submitted = false;
        self.error = None;
        self.generation = self.generation.wrapping_add(1);
        Ok(PendingSubmission {
            generation: self.generation,
            message: self.fields.clone(),
        })
    }

    pub fn complete_submit(&mut self) {
        self.submitting = false;
        self.submitted = true;
        self.fields = ContactMessage::default();
    }

    /// Leaves the fields in place so the visitor can retry.
    pub fn fail_submit(&mut self, err: &ContactError) {
        self.submitting = false;
        self.error = Some(err.to_string());
    }

    /// Hides the success banner if it still belongs to `generation`.
    /// Returns false when a newer submission owns the form.
    pub fn dismiss_banner(&mut self, generation: u64) -> bool {
        if generation != self.generation {
            return false;
        }
        self.submitted = false;
        true
    }

    pub fn submit_label(&self) -> &'static str {
        if self.submitting { "Sending..." } else { "Send Message" }
    }
}

/// Where the form state lives. Lets the submission flow drive either a UI
/// signal or a plain shared value.
pub trait FormStore {
    fn with_form<R>(&mut self, f: impl FnOnce(&mut ContactFormState) -> R) -> R;
}

impl FormStore for Arc<Mutex<ContactFormState>> {
    fn with_form<R>(&mut self, f: impl FnOnce(&mut ContactFormState) -> R) -> R {
        f(&mut self.lock())
    }
}

/// Delivers a contact message to whoever should read it.
#[async_trait]
pub trait MessageTransport: Send + Sync {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), ContactError>;
}

/// Transport that waits a fixed latency and always succeeds.
#[derive(Debug, Clone, Copy)]
pub struct SimulatedTransport {
    latency: Duration,
}

impl SimulatedTransport {
    pub fn new(latency: Duration) -> Self {
        Self { latency }
    }

    pub fn from_timings(timings: &FormTimings) -> Self {
        Self::new(timings.submit_delay)
    }
}

#[async_trait]
impl MessageTransport for SimulatedTransport {
    async fn deliver(&self, message: &ContactMessage) -> Result<(), ContactError> {
        tracing::debug!(
            subject = %message.subject,
            latency_ms = self.latency.as_millis() as u64,
            "Simulating contact delivery"
        );
        tokio::time::sleep(self.latency).await;
        Ok(())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FormTimings {
    pub submit_delay: Duration,
    pub banner_duration: Duration,
}

impl Default for FormTimings {
    fn default() -> Self {
        Self {
            submit_delay: DEFAULT_SUBMIT_DELAY,
            banner_duration: DEFAULT_BANNER_DURATION,
        }
    }
}

/// Runs one submission from click to banner expiry.
///
/// Checks `lifetime` after every wait and returns [`ContactError::Detached`]
/// without touching `store` once the view is gone.
pub async fn run_submission<S, T>(
    store: &mut S,
    transport: &T,
    timings: FormTimings,
    lifetime: &ViewLifetime,
) -> Result<(), ContactError>
where
    S: FormStore,
    T: MessageTransport + ?Sized,
{
    if !lifetime.is_mounted() {
        return Err(ContactError::Detached);
    }
    let pending = store.with_form(|form| form.begin_submit())?;

    let delivered = transport.deliver(&pending.message).await;
    if !lifetime.is_mounted() {
        tracing::debug!("Contact form unmounted during delivery");
        return Err(ContactError::Detached);
    }

    if let Err(err) = delivered {
        tracing::warn!(error = %err, "Contact delivery failed");
        store.with_form(|form| form.fail_submit(&err));
        return Err(err);
    }
    store.with_form(|form| form.complete_submit());
    tracing::info!("Contact message sent");

    tokio::time::sleep(timings.banner_duration).await;
    if !lifetime.is_mounted() {
        return Err(ContactError::Detached);
    }
    if !store.with_form(|form| form.dismiss_banner(pending.generation)) {
        tracing::debug!(generation = pending.generation, "Banner now owned by a newer submission");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactFormState {
        let mut form = ContactFormState::new();
        form.update_field(FormField::Name, "Ada");
        form.update_field(FormField::Email, "ada@example.com");
        form.update_field(FormField::Subject, "Hello");
        form.update_field(FormField::Message, "Let's build something.");
        form
    }

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    struct FailingTransport;

    #[async_trait]
    impl MessageTransport for FailingTransport {
        async fn deliver(&self, _message: &ContactMessage) -> Result<(), ContactError> {
            Err(ContactError::Transport("smtp unavailable".to_string()))
        }
    }

    #[test]
    fn test_fields_default_empty() {
        let form = ContactFormState::new();
        for field in FormField::all() {
            assert_eq!(form.fields.get(*field), "");
        }
        assert!(form.fields.is_empty());
    }

    #[test]
    fn test_update_field_merges_one_key() {
        let mut form = filled();
        form.update_field(FormField::Subject, "Changed");
        assert_eq!(form.fields.subject, "Changed");
        assert_eq!(form.fields.name, "Ada");
        assert_eq!(form.fields.message, "Let's build something.");
    }

    #[test]
    fn test_begin_submit_guards_reentry() {
        let mut form = filled();
        let pending = form.begin_submit().unwrap();
        assert_eq!(pending.message.name, "Ada");
        assert_eq!(pending.generation, 1);
        assert!(form.submitting);
        assert_eq!(form.submit_label(), "Sending...");
        assert_eq!(form.begin_submit(), Err(ContactError::AlreadySubmitting));
    }

    #[test]
    fn test_complete_submit_clears_fields() {
        let mut form = filled();
        let pending = form.begin_submit().unwrap();
        form.complete_submit();
        assert!(!form.submitting);
        assert!(form.submitted);
        assert!(form.fields.is_empty());
        assert!(form.dismiss_banner(pending.generation));
        assert!(!form.submitted);
    }

    #[test]
    fn test_stale_banner_dismissal_ignored() {
        let mut form = filled();
        let first = form.begin_submit().unwrap();
        form.complete_submit();

        form.fields = filled().fields;
        let second = form.begin_submit().unwrap();
        assert!(!form.submitted);
        form.complete_submit();

        assert!(!form.dismiss_banner(first.generation));
        assert!(form.submitted);
        assert!(form.dismiss_banner(second.generation));
        assert!(!form.submitted);
    }

    #[test]
    fn test_message_serializes_as_post_body() {
        let body = serde_json::to_value(&filled().fields).unwrap();
        assert_eq!(body["email"], "ada@example.com");
        assert_eq!(body.as_object().unwrap().len(), 4);
    }

    #[tokio::test(start_paused = true)]
    async fn test_submission_timeline() {
        let store = Arc::new(Mutex::new(filled()));
        let lifetime = ViewLifetime::new();

        let handle = tokio::spawn({
            let mut store = store.clone();
            let lifetime = lifetime.clone();
            async move {
                let transport = SimulatedTransport::new(ms(1500));
                let timings = FormTimings::default();
                run_submission(&mut store, &transport, timings, &lifetime).await
            }
        });

        tokio::time::sleep(ms(1)).await;
        {
            let form = store.lock();
            assert!(form.submitting);
            assert!(!form.submitted);
            assert_eq!(form.fields.name, "Ada");
        }

        tokio::time::sleep(ms(1500)).await;
        {
            let form = store.lock();
            assert!(!form.submitting);
            assert!(form.submitted);
            assert!(form.fields.is_empty());
        }

        tokio::time::sleep(ms(5000)).await;
        assert!(!store.lock().submitted);
        assert_eq!(handle.await.unwrap(), Ok(()));
    }

    #[tokio::test(start_paused = true)]
    async fn test_reentrant_submit_rejected() {
        let mut store = Arc::new(Mutex::new(filled()));
        store.lock().submitting = true;

        let transport = SimulatedTransport::new(ms(1500));
        let result =
            run_submission(&mut store, &transport, FormTimings::default(), &ViewLifetime::new())
                .await;

        assert_eq!(result, Err(ContactError::AlreadySubmitting));
        assert_eq!(store.lock().fields.name, "Ada");
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_during_delivery_leaves_store_alone() {
        let store = Arc::new(Mutex::new(filled()));
        let lifetime = ViewLifetime::new();

        let handle = tokio::spawn({
            let mut store = store.clone();
            let lifetime = lifetime.clone();
            async move {
                let transport = SimulatedTransport::new(ms(1500));
                run_submission(&mut store, &transport, FormTimings::default(), &lifetime).await
            }
        });

        tokio::time::sleep(ms(100)).await;
        lifetime.detach();

        assert_eq!(handle.await.unwrap(), Err(ContactError::Detached));
        let form = store.lock();
        assert!(form.submitting);
        assert!(!form.submitted);
        assert_eq!(form.fields.email, "ada@example.com");
    }

    #[tokio::test(start_paused = true)]
    async fn test_teardown_before_banner_expiry() {
        let store = Arc::new(Mutex::new(filled()));
        let lifetime = ViewLifetime::new();

        let handle = tokio::spawn({
            let mut store = store.clone();
            let lifetime = lifetime.clone();
            async move {
                let transport = SimulatedTransport::new(ms(1500));
                run_submission(&mut store, &transport, FormTimings::default(), &lifetime).await
            }
        });

        tokio::time::sleep(ms(2000)).await;
        assert!(store.lock().submitted);
        lifetime.detach();

        assert_eq!(handle.await.unwrap(), Err(ContactError::Detached));
        assert!(store.lock().submitted);
    }

    #[tokio::test]
    async fn test_failed_delivery_keeps_fields() {
        let mut store = Arc::new(Mutex::new(filled()));
        let result = run_submission(
            &mut store,
            &FailingTransport,
            FormTimings::default(),
            &ViewLifetime::new(),
        )
        .await;

        assert!(matches!(result, Err(ContactError::Transport(_))));
        let form = store.lock();
        assert!(!form.submitting);
        assert!(!form.submitted);
        assert_eq!(form.fields.subject, "Hello");
        assert_eq!(form.error.as_deref(), Some("delivery failed: smtp unavailable"));
    }

    #[tokio::test(start_paused = true)]
    async fn test_overlapping_submissions_keep_full_banner() {
        let store = Arc::new(Mutex::new(filled()));
        let lifetime = ViewLifetime::new();
        let spawn_submit = |store: &Arc<Mutex<ContactFormState>>| {
            let mut store = store.clone();
            let lifetime = lifetime.clone();
            tokio::spawn(async move {
                let transport = SimulatedTransport::new(ms(1500));
                run_submission(&mut store, &transport, FormTimings::default(), &lifetime).await
            })
        };

        let first = spawn_submit(&store);
        tokio::time::sleep(ms(2000)).await;
        assert!(store.lock().submitted);

        store.lock().fields = filled().fields;
        let second = spawn_submit(&store);
        tokio::time::sleep(ms(1)).await;
        {
            let form = store.lock();
            assert!(form.submitting);
            assert!(!form.submitted);
        }

        // Second delivery lands at 3500; the first banner timer fires at 6500
        tokio::time::sleep(ms(1600)).await;
        assert!(store.lock().submitted);
        tokio::time::sleep(ms(3000)).await;
        assert!(store.lock().submitted);
        assert_eq!(first.await.unwrap(), Ok(()));

        // Second banner expires at 8500
        tokio::time::sleep(ms(2000)).await;
        assert!(!store.lock().submitted);
        assert_eq!(second.await.unwrap(), Ok(()));
    }
}
