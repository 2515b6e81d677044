//! Shared test helpers
//!
//! Provides the scripted identity client used by flow tests and one-time test
//! environment setup.

use std::collections::VecDeque;
use std::sync::{Mutex, Once};

use async_trait::async_trait;

use crate::idx::{AuthContext, IdxClient, IdxError, InteractResponse, IntrospectParams};

/// Load test environment variables from `.env_test` (falling back to `.env`),
/// once per process.
pub(crate) fn init_test_environment() {
    static ENV_INIT: Once = Once::new();
    ENV_INIT.call_once(|| {
        if dotenvy::from_filename(".env_test").is_err() {
            dotenvy::dotenv().ok();
        }
    });
}

/// Scripted identity client recording every call it receives.
///
/// Queued results are consumed in order; an unqueued `introspect` call fails
/// loudly so tests catch unexpected extra network activity.
pub(crate) struct MockIdxClient {
    interaction_handle: String,
    interact_results: Mutex<VecDeque<Result<InteractResponse, IdxError>>>,
    introspect_results: Mutex<VecDeque<Result<AuthContext, IdxError>>>,
    interact_calls: Mutex<usize>,
    introspect_calls: Mutex<Vec<IntrospectParams>>,
}

impl MockIdxClient {
    pub(crate) fn new() -> Self {
        Self {
            interaction_handle: "fake_interaction_handle".to_string(),
            interact_results: Mutex::new(VecDeque::new()),
            introspect_results: Mutex::new(VecDeque::new()),
            interact_calls: Mutex::new(0),
            introspect_calls: Mutex::new(Vec::new()),
        }
    }

    /// Handle returned by `interact()` when no explicit result is queued.
    pub(crate) fn with_interaction_handle(mut self, handle: &str) -> Self {
        self.interaction_handle = handle.to_string();
        self
    }

    pub(crate) fn with_interact_result(
        self,
        result: Result<InteractResponse, IdxError>,
    ) -> Self {
        self.interact_results.lock().unwrap().push_back(result);
        self
    }

    pub(crate) fn with_introspect_result(
        self,
        result: Result<AuthContext, IdxError>,
    ) -> Self {
        self.introspect_results.lock().unwrap().push_back(result);
        self
    }

    pub(crate) fn interact_calls(&self) -> usize {
        *self.interact_calls.lock().unwrap()
    }

    pub(crate) fn introspect_calls(&self) -> Vec<IntrospectParams> {
        self.introspect_calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl IdxClient for MockIdxClient {
    async fn interact(&self) -> Result<InteractResponse, IdxError> {
        *self.interact_calls.lock().unwrap() += 1;
        match self.interact_results.lock().unwrap().pop_front() {
            Some(result) => result,
            None => Ok(InteractResponse {
                interaction_handle: self.interaction_handle.clone(),
            }),
        }
    }

    async fn introspect(&self, params: IntrospectParams) -> Result<AuthContext, IdxError> {
        self.introspect_calls.lock().unwrap().push(params);
        self.introspect_results
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| {
                Err(IdxError::Transport(
                    "no introspect result queued in mock".to_string(),
                ))
            })
    }
}
