use contracts::domain::a002_registered_policy::aggregate::{
    ApproveRequest, RegisteredPolicy, RejectRequest,
};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a002_registered_policy::hooks::{use_registered_policy, RegisteredPolicies};

/// Underwriting review of one submitted policy.
#[derive(Clone, Copy)]
pub struct RegisteredPolicyDetailsViewModel {
    id: StoredValue<String>,
    hooks: RegisteredPolicies,
    pub approve_note: RwSignal<String>,
    pub reject_reason: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub notice: RwSignal<Option<String>>,
    pub is_submitting: RwSignal<bool>,
}

impl RegisteredPolicyDetailsViewModel {
    pub fn new(id: String) -> Self {
        Self {
            id: StoredValue::new(id.clone()),
            hooks: use_registered_policy(id),
            approve_note: RwSignal::new(String::new()),
            reject_reason: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            notice: RwSignal::new(None),
            is_submitting: RwSignal::new(false),
        }
    }

    pub fn policy(&self) -> Option<RegisteredPolicy> {
        self.hooks.current.data.get()
    }

    pub fn is_loading(&self) -> bool {
        self.hooks.current.loading.get()
    }

    pub fn load_error(&self) -> Option<String> {
        self.hooks.current.error.get()
    }

    pub fn is_reviewable(&self) -> bool {
        self.hooks
            .current
            .data
            .with(|p| p.as_ref().map(|p| p.status.is_reviewable()).unwrap_or(false))
    }

    pub fn reload(&self) {
        self.hooks.refetch();
    }

    pub fn approve_command(&self) {
        let note = self.approve_note.get_untracked();
        let request = ApproveRequest {
            note: (!note.trim().is_empty()).then(|| note.trim().to_string()),
        };
        self.begin();
        let this = *self;
        spawn_local(async move {
            let result = this.hooks.approve(this.id.get_value(), request).await;
            this.finish(result.success, result.message, "Đã duyệt hợp đồng");
        });
    }

    pub fn reject_command(&self) {
        let request = RejectRequest {
            reason: self.reject_reason.get_untracked().trim().to_string(),
        };
        if let Some(msg) = request.validate().first() {
            self.error.set(Some(msg.to_string()));
            return;
        }
        self.begin();
        let this = *self;
        spawn_local(async move {
            let result = this.hooks.reject(this.id.get_value(), request).await;
            this.finish(result.success, result.message, "Đã từ chối hợp đồng");
        });
    }

    fn begin(&self) {
        self.error.set(None);
        self.notice.set(None);
        self.is_submitting.set(true);
    }

    fn finish(&self, success: bool, message: Option<String>, done: &str) {
        self.is_submitting.set(false);
        if success {
            self.approve_note.set(String::new());
            self.reject_reason.set(String::new());
            self.notice.set(Some(done.to_string()));
        } else {
            self.error.set(message);
        }
    }
}
