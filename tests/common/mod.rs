//! Shared helpers for integration tests.
//!
//! Provides notifier test doubles and builders for a workflow and an
//! axum-test server backed by an in-memory database.

#![allow(dead_code)]

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::http::header::AUTHORIZATION;
use axum_test::TestServer;
use serde_json::{json, Value};
use tokio::sync::Semaphore;

use inquirydesk::auth::{CredentialStore, SessionIssuer};
use inquirydesk::notify::{NotifyError, Templates};
use inquirydesk::web::create_router;
use inquirydesk::web::handlers::AppState;
use inquirydesk::{
    Database, InquiryId, InquiryRepository, InquiryWorkflow, NewInquiry, Notification, Notifier,
};
use tempfile::TempDir;

pub const JWT_SECRET: &str = "test-secret-key-for-testing-only";
pub const ADMIN_LOGIN: &str = "admin@x.com";
pub const ADMIN_PASSWORD: &str = "pw123456";
pub const ADMIN_RECIPIENT: &str = "owner@x.com";

/// Notifier that records every notification and succeeds.
#[derive(Default)]
pub struct RecordingNotifier {
    sent: Mutex<Vec<Notification>>,
}

impl RecordingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn sent(&self) -> Vec<Notification> {
        self.sent.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, notification: &Notification) -> Result<(), NotifyError> {
        self.sent.lock().unwrap().push(notification.clone());
        Ok(())
    }
}

/// Notifier that always fails and counts attempts.
#[derive(Default)]
pub struct FailingNotifier {
    attempts: AtomicUsize,
}

impl FailingNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Notifier for FailingNotifier {
    async fn send(&self, _notification: &Notification) -> Result<(), NotifyError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(NotifyError::Failed("mail provider unavailable".to_string()))
    }
}

/// Notifier that blocks every send until released.
pub struct GatedNotifier {
    gate: Semaphore,
    completed: AtomicUsize,
}

impl GatedNotifier {
    pub fn new() -> Arc<Self> {
        Arc::new(Self {
            gate: Semaphore::new(0),
            completed: AtomicUsize::new(0),
        })
    }

    /// Allow `n` more sends to complete.
    pub fn release(&self, n: usize) {
        self.gate.add_permits(n);
    }

    pub fn completed(&self) -> usize {
        self.completed.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl Notifier for GatedNotifier {
    async fn send(&self, _notification: &Notification) -> Result<(), NotifyError> {
        let permit = self
            .gate
            .acquire()
            .await
            .map_err(|e| NotifyError::Failed(e.to_string()))?;
        permit.forget();
        self.completed.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}

/// Notifier that records, for each send, whether a watched inquiry was
/// still present in the store at that moment.
pub struct StoreCheckingNotifier {
    db: Database,
    watched: Mutex<Option<InquiryId>>,
    present: Mutex<Vec<(String, bool)>>,
}

impl StoreCheckingNotifier {
    pub fn new(db: Database) -> Arc<Self> {
        Arc::new(Self {
            db,
            watched: Mutex::new(None),
            present: Mutex::new(Vec::new()),
        })
    }

    pub fn watch(&self, id: &InquiryId) {
        *self.watched.lock().unwrap() = Some(id.clone());
    }

    /// `(subject, inquiry present)` for every send made while watching.
    pub fn present(&self) -> Vec<(String, bool)> {
        self.present.lock().unwrap().clone()
    }
}

#[async_trait]
impl Notifier for StoreCheckingNotifier {
    async fn send(&self, notification: &Notification) -> Result<(), NotifyError> {
        let watched = self.watched.lock().unwrap().clone();
        if let Some(id) = watched {
            let exists = InquiryRepository::new(self.db.pool())
                .get_by_id(&id)
                .await
                .is_ok();
            self.present
                .lock()
                .unwrap()
                .push((notification.subject.clone(), exists));
        }
        Ok(())
    }
}

/// Build a workflow over a fresh in-memory database.
pub async fn create_workflow(notifier: Arc<dyn Notifier>) -> InquiryWorkflow {
    let db = Database::open_in_memory()
        .await
        .expect("Failed to create test database");
    workflow_over(db, notifier)
}

/// Build a workflow over a file-backed database with a multi-connection pool.
///
/// The returned directory must outlive the workflow.
pub async fn create_file_workflow(notifier: Arc<dyn Notifier>) -> (InquiryWorkflow, TempDir) {
    let dir = TempDir::new().expect("Failed to create temp dir");
    let db = Database::open(dir.path().join("inquiries.db"))
        .await
        .expect("Failed to open file database");
    (workflow_over(db, notifier), dir)
}

/// Build a workflow over an existing database.
pub fn workflow_over(db: Database, notifier: Arc<dyn Notifier>) -> InquiryWorkflow {
    InquiryWorkflow::new(
        db.clone(),
        CredentialStore::new(db),
        SessionIssuer::new(JWT_SECRET),
        notifier,
        Templates::new("VJ Events"),
        ADMIN_RECIPIENT,
    )
}

/// Build a test server around a fresh workflow.
pub async fn create_test_server(notifier: Arc<dyn Notifier>) -> (TestServer, InquiryWorkflow) {
    let workflow = create_workflow(notifier).await;
    let app_state = Arc::new(AppState::new(workflow.clone(), "VJ Events"));
    let router = create_router(app_state, &[]);
    let server = TestServer::new(router).expect("Failed to create test server");
    (server, workflow)
}

/// Register the administrator and return a session token.
pub async fn admin_token(workflow: &InquiryWorkflow) -> String {
    workflow
        .register(ADMIN_LOGIN, ADMIN_PASSWORD)
        .await
        .expect("register admin");
    workflow
        .login(ADMIN_LOGIN, ADMIN_PASSWORD)
        .await
        .expect("login admin")
        .token
}

/// Authorization header value for a token.
pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

/// The sample inquiry used across tests.
pub fn ann() -> NewInquiry {
    NewInquiry::new(
        "Ann",
        "ann@x.com",
        "9876543210",
        "+91",
        "Need lights for a 200-guest wedding",
    )
}

/// The sample inquiry as a request body.
pub fn ann_json() -> Value {
    json!({
        "name": "Ann",
        "email": "ann@x.com",
        "phone": "9876543210",
        "countryCode": "+91",
        "message": "Need lights for a 200-guest wedding"
    })
}

/// GET /api/admin/contacts with the given token.
pub async fn list_contacts(server: &TestServer, token: &str) -> Value {
    let response = server
        .get("/api/admin/contacts")
        .add_header(AUTHORIZATION, bearer(token))
        .await;
    response.assert_status_ok();
    response.json::<Value>()
}
