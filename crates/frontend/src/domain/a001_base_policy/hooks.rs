//! `use_base_policies()` / `use_base_policy(id)`: load state plus mutations.

use contracts::domain::a001_base_policy::aggregate::{BasePolicy, BasePolicyDto};
use contracts::shared::envelope::ApiResult;
use contracts::shared::messages::MessageDomain;
use leptos::prelude::*;

use super::api;
use crate::shared::remote::{settle, RemoteState};
use crate::system::auth::context::{use_auth, AuthContext};

const DOMAIN: MessageDomain = MessageDomain::BasePolicy;

#[derive(Clone, Copy)]
pub struct BasePolicies {
    auth: AuthContext,
    pub list: RemoteState<Vec<BasePolicy>>,
    pub current: RemoteState<BasePolicy>,
    current_id: RwSignal<Option<String>>,
    list_active: RwSignal<bool>,
}

impl BasePolicies {
    fn new() -> Self {
        Self {
            auth: use_auth(),
            list: RemoteState::new(),
            current: RemoteState::new(),
            current_id: RwSignal::new(None),
            list_active: RwSignal::new(false),
        }
    }

    /// Reloads whatever this hook was opened for.
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

    pub async fn create(&self, dto: BasePolicyDto) -> ApiResult<BasePolicy> {
        let auth = self.auth;
        let result = settle(auth, DOMAIN, async move {
            api::create(&auth.client()?, &dto).await
        })
        .await;
        if result.success {
            self.refetch();
        }
        result
    }

    pub async fn update(&self, id: String, dto: BasePolicyDto) -> ApiResult<BasePolicy> {
        let auth = self.auth;
        let result = settle(auth, DOMAIN, async move {
            api::update(&auth.client()?, &id, &dto).await
        })
        .await;
        if result.success {
            self.refetch();
        }
        result
    }

    pub async fn archive(&self, id: String) -> ApiResult<BasePolicy> {
        let auth = self.auth;
        let result = settle(auth, DOMAIN, async move {
            api::archive(&auth.client()?, &id).await
        })
        .await;
        if result.success {
            self.refetch();
        }
        result
    }
}

pub fn use_base_policies() -> BasePolicies {
    let hook = BasePolicies::new();
    hook.list_active.set(true);
    hook.refetch();
    hook
}

/// `None` opens an empty hook for the create form.
pub fn use_base_policy(id: Option<String>) -> BasePolicies {
    let hook = BasePolicies::new();
    hook.current_id.set(id);
    hook.refetch();
    hook
}
