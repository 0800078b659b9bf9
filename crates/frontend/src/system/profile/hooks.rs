use contracts::shared::envelope::ApiResult;
use contracts::shared::messages::MessageDomain;
use contracts::system::profile::{
    CreateDeletionRequestDto, DeletionRequest, PartnerProfile, UpdateProfileDto,
};
use leptos::prelude::*;

use super::api;
use crate::shared::remote::{settle, RemoteState};
use crate::system::auth::context::{use_auth, AuthContext};

const DOMAIN: MessageDomain = MessageDomain::Profile;

#[derive(Clone, Copy)]
pub struct Profile {
    auth: AuthContext,
    pub current: RemoteState<PartnerProfile>,
}

impl Profile {
    pub fn refetch(&self) {
        let auth = self.auth;
        self.current.load(auth, DOMAIN, async move {
            api::fetch_profile(&auth.client()?).await
        });
    }

    pub async fn update(&self, dto: UpdateProfileDto) -> ApiResult<PartnerProfile> {
        let auth = self.auth;
        let result = settle(auth, DOMAIN, async move {
            api::update_profile(&auth.client()?, &dto).await
        })
        .await;
        if result.success {
            self.refetch();
        }
        result
    }

    pub async fn request_deletion(&self, reason: Option<String>) -> ApiResult<DeletionRequest> {
        let auth = self.auth;
        let dto = CreateDeletionRequestDto { reason };
        let result = settle(auth, DOMAIN, async move {
            api::request_deletion(&auth.client()?, &dto).await
        })
        .await;
        if result.success {
            self.refetch();
        }
        result
    }

    pub async fn revoke_deletion(&self) -> ApiResult<()> {
        let auth = self.auth;
        let result = settle(auth, DOMAIN, async move {
            api::revoke_deletion(&auth.client()?).await
        })
        .await;
        if result.success {
            self.refetch();
        }
        result
    }
}

pub fn use_profile() -> Profile {
    let hook = Profile {
        auth: use_auth(),
        current: RemoteState::new(),
    };
    hook.refetch();
    hook
}
