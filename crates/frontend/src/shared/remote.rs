//! Load state shared by every resource hook: `{ data, loading, error }`.

use crate::system::auth::context::AuthContext;
use contracts::shared::envelope::{ApiFailure, ApiResult};
use contracts::shared::messages::MessageDomain;
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::future::Future;

pub struct RemoteState<T: Send + Sync + 'static> {
    pub data: RwSignal<Option<T>>,
    pub loading: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl<T: Send + Sync + 'static> Clone for RemoteState<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T: Send + Sync + 'static> Copy for RemoteState<T> {}

impl<T: Send + Sync + 'static> RemoteState<T> {
    pub fn new() -> Self {
        Self {
            data: RwSignal::new(None),
            loading: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    /// Runs `fetch` and replaces the whole state with its outcome.
    ///
    /// A 401 also drops the session, which sends the user back to sign-in.
    pub fn load<F>(self, auth: AuthContext, domain: MessageDomain, fetch: F)
    where
        F: Future<Output = Result<T, ApiFailure>> + 'static,
    {
        self.loading.set(true);
        spawn_local(async move {
            match fetch.await {
                Ok(value) => {
                    self.data.set(Some(value));
                    self.error.set(None);
                }
                Err(failure) => {
                    log::warn!("load failed ({:?}): {}", domain, failure);
                    if failure.is_unauthorized() {
                        auth.expire();
                    }
                    self.data.set(None);
                    self.error.set(Some(failure.fetch_message(domain)));
                }
            }
            self.loading.set(false);
        });
    }

    /// Drops loaded data, e.g. when the owning page unmounts.
    pub fn clear(&self) {
        self.data.set(None);
        self.error.set(None);
        self.loading.set(false);
    }
}

impl<T: Send + Sync + 'static> Default for RemoteState<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Awaits a mutation and folds the outcome into an [`ApiResult`].
pub async fn settle<T, F>(auth: AuthContext, domain: MessageDomain, call: F) -> ApiResult<T>
where
    F: Future<Output = Result<T, ApiFailure>>,
{
    let result = call.await;
    if let Err(failure) = &result {
        log::warn!("mutation failed ({:?}): {}", domain, failure);
        if failure.is_unauthorized() {
            auth.expire();
        }
    }
    ApiResult::from_result(result, domain)
}
