use contracts::domain::a003_payout::aggregate::{MarkPaidRequest, Payout};
use contracts::shared::envelope::ApiResult;
use contracts::shared::messages::MessageDomain;
use leptos::prelude::*;

use super::api;
use crate::shared::remote::{settle, RemoteState};
use crate::system::auth::context::{use_auth, AuthContext};

const DOMAIN: MessageDomain = MessageDomain::Payout;

#[derive(Clone, Copy)]
pub struct Payouts {
    auth: AuthContext,
    pub list: RemoteState<Vec<Payout>>,
    pub current: RemoteState<Payout>,
    current_id: RwSignal<Option<String>>,
    list_active: RwSignal<bool>,
}

impl Payouts {
    fn new() -> Self {
        Self {
            auth: use_auth(),
            list: RemoteState::new(),
            current: RemoteState::new(),
            current_id: RwSignal::new(None),
            list_active: RwSignal::new(false),
        }
    }

    /// The list is assembled from every server page.
    pub fn refetch(&self) {
        let auth = self.auth;
        if self.list_active.get_untracked() {
            self.list.load(auth, DOMAIN, async move {
                api::fetch_all(&auth.client()?).await
            });
        }
        if let Some(id) = self.current_id.get_untracked() {
            self.current.load(auth, DOMAIN, async move {
                api::fetch_by_id(&auth.client()?, &id).await
            });
        }
    }

    pub async fn approve(&self, id: String) -> ApiResult<Payout> {
        let auth = self.auth;
        let result = settle(auth, DOMAIN, async move {
            api::approve(&auth.client()?, &id).await
        })
        .await;
        if result.success {
            self.refetch();
        }
        result
    }

    pub async fn mark_paid(&self, id: String, request: MarkPaidRequest) -> ApiResult<Payout> {
        let auth = self.auth;
        let result = settle(auth, DOMAIN, async move {
            api::mark_paid(&auth.client()?, &id, &request).await
        })
        .await;
        if result.success {
            self.refetch();
        }
        result
    }
}

pub fn use_payouts() -> Payouts {
    let hook = Payouts::new();
    hook.list_active.set(true);
    hook.refetch();
    hook
}

pub fn use_payout(id: String) -> Payouts {
    let hook = Payouts::new();
    hook.current_id.set(Some(id));
    hook.refetch();
    hook
}
