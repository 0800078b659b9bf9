use contracts::domain::a005_beneficiary::aggregate::{Beneficiary, BeneficiaryDto};
use contracts::shared::envelope::ApiResult;
use contracts::shared::messages::MessageDomain;
use leptos::prelude::*;

use super::api;
use crate::shared::remote::{settle, RemoteState};
use crate::system::auth::context::{use_auth, AuthContext};

const DOMAIN: MessageDomain = MessageDomain::Beneficiary;

/// Farmers enrolled through the partner.
#[derive(Clone, Copy)]
pub struct Beneficiaries {
    auth: AuthContext,
    pub list: RemoteState<Vec<Beneficiary>>,
    pub current: RemoteState<Beneficiary>,
    current_id: RwSignal<Option<String>>,
    list_active: RwSignal<bool>,
}

impl Beneficiaries {
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

    pub async fn create(&self, dto: BeneficiaryDto) -> ApiResult<Beneficiary> {
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

    pub async fn update(&self, id: String, dto: BeneficiaryDto) -> ApiResult<Beneficiary> {
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

    /// A deleted record is not refetched; the caller closes its view.
    pub async fn delete(&self, id: String) -> ApiResult<()> {
        let auth = self.auth;
        let result = settle(auth, DOMAIN, async move {
            api::delete(&auth.client()?, &id).await
        })
        .await;
        if result.success && self.list_active.get_untracked() {
            self.refetch();
        }
        result
    }
}

pub fn use_beneficiaries() -> Beneficiaries {
    let hook = Beneficiaries::new();
    hook.list_active.set(true);
    hook.refetch();
    hook
}

/// `None` opens an empty hook for the create form.
pub fn use_beneficiary(id: Option<String>) -> Beneficiaries {
    let hook = Beneficiaries::new();
    hook.current_id.set(id);
    hook.refetch();
    hook
}
