use contracts::domain::a002_registered_policy::aggregate::{
    ApproveRequest, RegisteredPolicy, RejectRequest,
};
use contracts::shared::envelope::ApiResult;
use contracts::shared::messages::MessageDomain;
use leptos::prelude::*;

use super::api;
use crate::shared::remote::{settle, RemoteState};
use crate::system::auth::context::{use_auth, AuthContext};

const DOMAIN: MessageDomain = MessageDomain::Policy;

/// Policies submitted by farmers, reviewed by the partner.
#[derive(Clone, Copy)]
pub struct RegisteredPolicies {
    auth: AuthContext,
    pub list: RemoteState<Vec<RegisteredPolicy>>,
    pub current: RemoteState<RegisteredPolicy>,
    current_id: RwSignal<Option<String>>,
    list_active: RwSignal<bool>,
}

impl RegisteredPolicies {
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

    pub async fn approve(
        &self,
        id: String,
        request: ApproveRequest,
    ) -> ApiResult<RegisteredPolicy> {
        let auth = self.auth;
        let result = settle(auth, DOMAIN, async move {
            api::approve(&auth.client()?, &id, &request).await
        })
        .await;
        if result.success {
            self.refetch();
        }
        result
    }

    pub async fn reject(&self, id: String, request: RejectRequest) -> ApiResult<RegisteredPolicy> {
        let auth = self.auth;
        let result = settle(auth, DOMAIN, async move {
            api::reject(&auth.client()?, &id, &request).await
        })
        .await;
        if result.success {
            self.refetch();
        }
        result
    }
}

pub fn use_registered_policies() -> RegisteredPolicies {
    let hook = RegisteredPolicies::new();
    hook.list_active.set(true);
    hook.refetch();
    hook
}

pub fn use_registered_policy(id: String) -> RegisteredPolicies {
    let hook = RegisteredPolicies::new();
    hook.current_id.set(Some(id));
    hook.refetch();
    hook
}
