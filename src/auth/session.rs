//! Session store: the single authority for "am I logged in, and as what".

use tokio::sync::watch;

use super::PrincipalKind;
use crate::db::LocalStorage;
use crate::errors::AppError;

/// Snapshot of the tokens currently held.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<String>,
    pub organization: Option<String>,
}

impl SessionState {
    pub fn get(&self, kind: PrincipalKind) -> Option<&str> {
        match kind {
            PrincipalKind::User => self.user.as_deref(),
            PrincipalKind::Organization => self.organization.as_deref(),
        }
    }

    fn slot(&mut self, kind: PrincipalKind) -> &mut Option<String> {
        match kind {
            PrincipalKind::User => &mut self.user,
            PrincipalKind::Organization => &mut self.organization,
        }
    }
}

/// In-memory tokens mirrored to durable storage.
///
/// Every assignment writes the durable entry first, then updates memory and wakes
/// subscribers, so memory never holds a token storage does not. Logout is the one
/// exception: it drops the in-memory token before touching storage.
pub struct SessionStore {
    storage: LocalStorage,
    state: watch::Sender<SessionState>,
}

impl SessionStore {
    /// Build the store, adopting whatever tokens durable storage holds.
    pub async fn restore(storage: LocalStorage) -> Result<Self, AppError> {
        let mut state = SessionState::default();
        for kind in PrincipalKind::ALL {
            if let Some(token) = storage.get_item(kind.token_key()).await? {
                tracing::info!("Restored {} session from storage", kind.as_str());
                *state.slot(kind) = Some(token);
            }
        }

        let (state, _) = watch::channel(state);
        Ok(Self { storage, state })
    }

    pub fn token(&self, kind: PrincipalKind) -> Option<String> {
        self.state.borrow().get(kind).map(str::to_string)
    }

    /// Replace the token for `kind`. `None` logs that kind out of memory and storage.
    pub async fn set_token(
        &self,
        kind: PrincipalKind,
        token: Option<String>,
    ) -> Result<(), AppError> {
        match &token {
            Some(t) => self.storage.set_item(kind.token_key(), t).await?,
            None => self.storage.remove_item(kind.token_key()).await?,
        }

        self.state.send_modify(|s| *s.slot(kind) = token);
        Ok(())
    }

    /// Re-read the durable entry for `kind` and adopt it if memory is empty.
    pub async fn reload_from_storage(
        &self,
        kind: PrincipalKind,
    ) -> Result<Option<String>, AppError> {
        if let Some(token) = self.token(kind) {
            return Ok(Some(token));
        }

        let stored = self.storage.get_item(kind.token_key()).await?;
        if let Some(token) = &stored {
            let token = token.clone();
            self.state.send_modify(|s| *s.slot(kind) = Some(token));
        }
        Ok(stored)
    }

    /// Clear the token and the profile mirror for `kind`.
    ///
    /// Memory is cleared first and stays cleared when storage cannot be written.
    pub async fn logout(&self, kind: PrincipalKind) -> Result<(), AppError> {
        self.state.send_modify(|s| *s.slot(kind) = None);
        self.storage.remove_item(kind.token_key()).await?;
        self.storage.remove_item(kind.profile_key()).await?;
        tracing::info!("Logged out {} session", kind.as_str());
        Ok(())
    }

    /// Receive every change to the session.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::init_database;
    use tempfile::TempDir;

    async fn storage() -> (LocalStorage, TempDir) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let pool = init_database(&temp_dir.path().join("storage.sqlite"))
            .await
            .expect("Failed to init storage");
        (LocalStorage::new(pool), temp_dir)
    }

    #[tokio::test]
    async fn test_set_token_mirrors_to_storage() {
        let (storage, _dir) = storage().await;
        let session = SessionStore::restore(storage.clone()).await.unwrap();

        for kind in PrincipalKind::ALL {
            session.set_token(kind, Some("X".into())).await.unwrap();
            assert_eq!(session.token(kind).as_deref(), Some("X"));
            assert_eq!(
                storage.get_item(kind.token_key()).await.unwrap().as_deref(),
                Some("X")
            );

            session.set_token(kind, None).await.unwrap();
            assert_eq!(session.token(kind), None);
            assert_eq!(storage.get_item(kind.token_key()).await.unwrap(), None);
        }
    }

    #[tokio::test]
    async fn test_restore_adopts_stored_tokens() {
        let (storage, _dir) = storage().await;
        storage.set_item("authOngToken", "ong-1").await.unwrap();

        let session = SessionStore::restore(storage).await.unwrap();

        assert_eq!(session.token(PrincipalKind::User), None);
        assert_eq!(
            session.token(PrincipalKind::Organization).as_deref(),
            Some("ong-1")
        );
    }

    #[tokio::test]
    async fn test_kinds_are_independent() {
        let (storage, _dir) = storage().await;
        let session = SessionStore::restore(storage).await.unwrap();

        session
            .set_token(PrincipalKind::User, Some("u".into()))
            .await
            .unwrap();
        session
            .set_token(PrincipalKind::Organization, Some("o".into()))
            .await
            .unwrap();
        session.logout(PrincipalKind::User).await.unwrap();

        assert_eq!(session.token(PrincipalKind::User), None);
        assert_eq!(
            session.token(PrincipalKind::Organization).as_deref(),
            Some("o")
        );
    }

    #[tokio::test]
    async fn test_logout_clears_profile_mirror() {
        let (storage, _dir) = storage().await;
        let session = SessionStore::restore(storage.clone()).await.unwrap();
        session
            .set_token(PrincipalKind::User, Some("u".into()))
            .await
            .unwrap();
        storage.set_item("userData", "{}").await.unwrap();

        session.logout(PrincipalKind::User).await.unwrap();

        assert_eq!(storage.get_item("authToken").await.unwrap(), None);
        assert_eq!(storage.get_item("userData").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_logout_clears_memory_when_storage_fails() {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let pool = init_database(&temp_dir.path().join("storage.sqlite"))
            .await
            .expect("Failed to init storage");
        let session = SessionStore::restore(LocalStorage::new(pool.clone()))
            .await
            .unwrap();
        session
            .set_token(PrincipalKind::Organization, Some("o".into()))
            .await
            .unwrap();

        pool.close().await;
        let result = session.logout(PrincipalKind::Organization).await;

        assert!(matches!(result, Err(AppError::Storage(_))));
        assert_eq!(session.token(PrincipalKind::Organization), None);
    }

    #[tokio::test]
    async fn test_subscribers_see_changes() {
        let (storage, _dir) = storage().await;
        let session = SessionStore::restore(storage).await.unwrap();
        let mut rx = session.subscribe();

        session
            .set_token(PrincipalKind::User, Some("tok".into()))
            .await
            .unwrap();

        rx.changed().await.unwrap();
        assert_eq!(rx.borrow().user.as_deref(), Some("tok"));
    }

    #[tokio::test]
    async fn test_reload_from_storage_adopts_late_entry() {
        let (storage, _dir) = storage().await;
        let session = SessionStore::restore(storage.clone()).await.unwrap();
        storage.set_item("authToken", "late").await.unwrap();

        let token = session.reload_from_storage(PrincipalKind::User).await.unwrap();

        assert_eq!(token.as_deref(), Some("late"));
        assert_eq!(session.token(PrincipalKind::User).as_deref(), Some("late"));
    }
}
