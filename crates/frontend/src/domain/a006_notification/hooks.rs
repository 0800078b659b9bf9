use contracts::domain::a006_notification::aggregate::{unread_count, Notification};
use contracts::shared::envelope::ApiResult;
use contracts::shared::messages::MessageDomain;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::api;
use crate::shared::remote::{settle, RemoteState};
use crate::system::auth::context::{use_auth, AuthContext};

const DOMAIN: MessageDomain = MessageDomain::Notification;

/// Polling period of the header bell, ms.
const POLL_INTERVAL_MS: u32 = 60_000;

#[derive(Clone, Copy)]
pub struct Notifications {
    auth: AuthContext,
    pub list: RemoteState<Vec<Notification>>,
}

impl Notifications {
    pub fn refetch(&self) {
        let auth = self.auth;
        self.list.load(auth, DOMAIN, async move {
            api::fetch_list(&auth.client()?).await
        });
    }

    pub fn unread(&self) -> usize {
        self.list
            .data
            .with(|items| items.as_deref().map(unread_count).unwrap_or(0))
    }

    pub async fn mark_read(&self, id: String) -> ApiResult<()> {
        let auth = self.auth;
        let target = id.clone();
        let result = settle(auth, DOMAIN, async move {
            api::mark_read(&auth.client()?, &target).await
        })
        .await;
        if result.success {
            // Flip locally so the badge updates before the refetch lands
            self.list.data.update(|items| {
                if let Some(n) = items.iter_mut().flatten().find(|n| n.id == id) {
                    n.read = true;
                }
            });
            self.refetch();
        }
        result
    }

    pub async fn mark_all_read(&self) -> ApiResult<()> {
        let auth = self.auth;
        let result = settle(auth, DOMAIN, async move {
            api::mark_all_read(&auth.client()?).await
        })
        .await;
        if result.success {
            self.refetch();
        }
        result
    }

    /// Refetches periodically while the owning view is alive and the user
    /// is signed in.
    pub fn poll(&self) {
        let this = *self;
        spawn_local(async move {
            loop {
                TimeoutFuture::new(POLL_INTERVAL_MS).await;
                if this.list.loading.try_get_untracked().is_none()
                    || !this.auth.is_signed_in_untracked()
                {
                    break;
                }
                this.refetch();
            }
        });
    }
}

pub fn use_notifications() -> Notifications {
    let hook = Notifications {
        auth: use_auth(),
        list: RemoteState::new(),
    };
    hook.refetch();
    hook
}
