use contracts::domain::a003_payout::aggregate::{MarkPaidRequest, Payout};
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a003_payout::hooks::{use_payout, Payouts};

#[derive(Clone, Copy)]
pub struct PayoutDetailsViewModel {
    id: StoredValue<String>,
    hooks: Payouts,
    pub transaction_ref: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub is_submitting: RwSignal<bool>,
}

impl PayoutDetailsViewModel {
    pub fn new(id: String) -> Self {
        Self {
            id: StoredValue::new(id.clone()),
            hooks: use_payout(id),
            transaction_ref: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            is_submitting: RwSignal::new(false),
        }
    }

    pub fn payout(&self) -> Option<Payout> {
        self.hooks.current.data.get()
    }

    pub fn is_loading(&self) -> bool {
        self.hooks.current.loading.get()
    }

    pub fn load_error(&self) -> Option<String> {
        self.hooks.current.error.get()
    }

    pub fn can_approve(&self) -> bool {
        self.hooks.current.data.with(|p| p.as_ref().is_some_and(Payout::can_approve))
    }

    pub fn can_mark_paid(&self) -> bool {
        self.hooks.current.data.with(|p| p.as_ref().is_some_and(Payout::can_mark_paid))
    }

    pub fn approve_command(&self) {
        self.error.set(None);
        self.is_submitting.set(true);
        let this = *self;
        spawn_local(async move {
            let result = this.hooks.approve(this.id.get_value()).await;
            this.is_submitting.set(false);
            if !result.success {
                this.error.set(result.message);
            }
        });
    }

    /// Records the bank transfer reference of a completed disbursement.
    pub fn mark_paid_command(&self) {
        let request = MarkPaidRequest {
            transaction_ref: self.transaction_ref.get_untracked().trim().to_string(),
        };
        if let Some(msg) = request.validate().first() {
            self.error.set(Some(format!("Mã giao dịch: {}", msg)));
            return;
        }
        self.error.set(None);
        self.is_submitting.set(true);
        let this = *self;
        spawn_local(async move {
            let result = this.hooks.mark_paid(this.id.get_value(), request).await;
            this.is_submitting.set(false);
            if result.success {
                this.transaction_ref.set(String::new());
            } else {
                this.error.set(result.message);
            }
        });
    }
}
