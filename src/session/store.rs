use async_trait::async_trait;
use tokio::sync::Mutex;

use super::errors::SessionError;

/// Capability over the tab-scoped store holding the IDX state handle.
///
/// The login flow reads the handle once per invocation and never writes it;
/// persisting a handle after a successful introspection is the job of a
/// separately triggered success handler.
#[async_trait]
pub trait StateHandleStore: Send + Sync {
    /// Read the persisted state handle, if any.
    async fn get_state_handle(&self) -> Option<String>;

    /// Persist a state handle for the next flow invocation.
    async fn set_state_handle(&self, value: &str) -> Result<(), SessionError>;

    /// Clear the persisted state handle.
    async fn remove_state_handle(&self);
}

/// In-memory state-handle store, scoped to the lifetime of the process.
///
/// Stands in for browser session storage in tests and non-browser hosts.
pub struct InMemoryStateHandleStore {
    entry: Mutex<Option<String>>,
}

impl InMemoryStateHandleStore {
    pub fn new() -> Self {
        tracing::debug!("Creating new in-memory state handle store");
        Self {
            entry: Mutex::new(None),
        }
    }
}

impl Default for InMemoryStateHandleStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl StateHandleStore for InMemoryStateHandleStore {
    async fn get_state_handle(&self) -> Option<String> {
        self.entry.lock().await.clone()
    }

    async fn set_state_handle(&self, value: &str) -> Result<(), SessionError> {
        *self.entry.lock().await = Some(value.to_string());
        Ok(())
    }

    async fn remove_state_handle(&self) {
        *self.entry.lock().await = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_get_on_empty_store() {
        // Given a fresh store
        let store = InMemoryStateHandleStore::new();

        // When reading the handle
        let result = store.get_state_handle().await;

        // Then nothing is persisted yet
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_set_and_get() {
        // Given a fresh store
        let store = InMemoryStateHandleStore::new();

        // When persisting a handle
        let set_result = store.set_state_handle("02.abcd1234").await;
        assert!(set_result.is_ok());

        // Then the same handle is read back
        assert_eq!(
            store.get_state_handle().await,
            Some("02.abcd1234".to_string())
        );
    }

    #[tokio::test]
    async fn test_set_overwrites_existing_handle() {
        // Given a store with a persisted handle
        let store = InMemoryStateHandleStore::new();
        store.set_state_handle("first").await.unwrap();

        // When persisting a second handle
        store.set_state_handle("second").await.unwrap();

        // Then only the latest handle remains
        assert_eq!(store.get_state_handle().await, Some("second".to_string()));
    }

    #[tokio::test]
    async fn test_remove() {
        // Given a store with a persisted handle
        let store = InMemoryStateHandleStore::new();
        store.set_state_handle("to-be-removed").await.unwrap();

        // When removing it
        store.remove_state_handle().await;

        // Then the store is empty again
        assert!(store.get_state_handle().await.is_none());
    }

    #[tokio::test]
    async fn test_remove_on_empty_store() {
        // Removing from an empty store is a no-op
        let store = InMemoryStateHandleStore::new();
        store.remove_state_handle().await;
        assert!(store.get_state_handle().await.is_none());
    }
}
