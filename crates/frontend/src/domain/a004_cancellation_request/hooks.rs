use contracts::domain::a004_cancellation_request::aggregate::{
    CancellationRequest, CreateCancellationRequest, ResolveDispute, ReviewCancellation,
};
use contracts::shared::envelope::ApiResult;
use contracts::shared::messages::MessageDomain;
use leptos::prelude::*;

use super::api;
use crate::shared::remote::{settle, RemoteState};
use crate::system::auth::context::{use_auth, AuthContext};

const DOMAIN: MessageDomain = MessageDomain::Cancellation;

#[derive(Clone, Copy)]
pub struct CancellationRequests {
    auth: AuthContext,
    pub list: RemoteState<Vec<CancellationRequest>>,
    pub current: RemoteState<CancellationRequest>,
    current_id: RwSignal<Option<String>>,
    list_active: RwSignal<bool>,
}

impl CancellationRequests {
    fn new() -> Self {
        Self {
            auth: use_auth(),
            list: RemoteState::new(),
            current: RemoteState::new(),
            current_id: RwSignal::new(None),
            list_active: RwSignal::new(false),
        }
    }

    pub fn refetch(&self) {
        let auth = self.auth;
        if self.list_active.get_untracked() {
            self.list.load(auth, DOMAIN, async move {
                api::fetch_list(&auth.client()?).await
            });
        }
        if let Some(id) = self.current_id.get_untracked() {
            self.current.load(auth, DOMAIN, async move {
                api::fetch_by_id(&auth.client()?, &id).await
            });
        }
    }

    pub async fn create(
        &self,
        request: CreateCancellationRequest,
    ) -> ApiResult<CancellationRequest> {
        let auth = self.auth;
        let result = settle(auth, DOMAIN, async move {
            api::create(&auth.client()?, &request).await
        })
        .await;
        if result.success {
            self.refetch();
        }
        result
    }

    pub async fn review(&self, id: String, review: ReviewCancellation) -> ApiResult<CancellationRequest> {
        let auth = self.auth;
        let result = settle(auth, DOMAIN, async move {
            api::review(&auth.client()?, &id, &review).await
        })
        .await;
        if result.success {
            self.refetch();
        }
        result
    }

    pub async fn resolve(&self, id: String, resolution: ResolveDispute) -> ApiResult<CancellationRequest> {
        let auth = self.auth;
        let result = settle(auth, DOMAIN, async move {
            api::resolve(&auth.client()?, &id, &resolution).await
        })
        .await;
        if result.success {
            self.refetch();
        }
        result
    }

    pub async fn revoke(&self, id: String) -> ApiResult<()> {
        let auth = self.auth;
        let result = settle(auth, DOMAIN, async move {
            api::revoke(&auth.client()?, &id).await
        })
        .await;
        if result.success {
            self.refetch();
        }
        result
    }
}

pub fn use_cancellation_requests() -> CancellationRequests {
    let hook = CancellationRequests::new();
    hook.list_active.set(true);
    hook.refetch();
    hook
}

pub fn use_cancellation_request(id: String) -> CancellationRequests {
    let hook = CancellationRequests::new();
    hook.current_id.set(Some(id));
    hook.refetch();
    hook
}

/// Mutations only, for the create form.
pub fn use_cancellation_commands() -> CancellationRequests {
    CancellationRequests::new()
}
