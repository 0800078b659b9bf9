use chrono::Utc;
use contracts::domain::a004_cancellation_request::aggregate::{
    CancellationRequest, DisputeOutcome, ResolveDispute, ReviewCancellation,
};
use contracts::shared::envelope::ApiResult;
use leptos::prelude::*;
use leptos::task::spawn_local;

use crate::domain::a004_cancellation_request::hooks::{use_cancellation_request, CancellationRequests};

/// Review, dispute resolution and revocation of one cancellation request.
#[derive(Clone, Copy)]
pub struct CancellationDetailsViewModel {
    id: StoredValue<String>,
    hooks: CancellationRequests,
    pub compensation: RwSignal<String>,
    pub review_note: RwSignal<String>,
    pub deny_reason: RwSignal<String>,
    pub outcome: RwSignal<DisputeOutcome>,
    pub resolve_note: RwSignal<String>,
    pub error: RwSignal<Option<String>>,
    pub notice: RwSignal<Option<String>>,
    pub is_submitting: RwSignal<bool>,
}

impl CancellationDetailsViewModel {
    pub fn new(id: String) -> Self {
        Self {
            id: StoredValue::new(id.clone()),
            hooks: use_cancellation_request(id),
            compensation: RwSignal::new(String::new()),
            review_note: RwSignal::new(String::new()),
            deny_reason: RwSignal::new(String::new()),
            outcome: RwSignal::new(DisputeOutcome::UpholdCancellation),
            resolve_note: RwSignal::new(String::new()),
            error: RwSignal::new(None),
            notice: RwSignal::new(None),
            is_submitting: RwSignal::new(false),
        }
    }

    pub fn request(&self) -> Option<CancellationRequest> {
        self.hooks.current.data.get()
    }

    pub fn is_loading(&self) -> bool {
        self.hooks.current.loading.get()
    }

    pub fn load_error(&self) -> Option<String> {
        self.hooks.current.error.get()
    }

    fn check(&self, f: impl Fn(&CancellationRequest) -> bool) -> bool {
        self.hooks.current.data.with(|r| r.as_ref().is_some_and(&f))
    }

    pub fn can_review(&self) -> bool {
        self.check(CancellationRequest::can_review)
    }

    pub fn can_resolve(&self) -> bool {
        self.check(CancellationRequest::can_resolve)
    }

    pub fn can_revoke(&self) -> bool {
        self.check(|r| r.can_revoke(Utc::now()))
    }

    pub fn approve_command(&self) {
        let raw = self.compensation.get_untracked();
        let compensation = match parse_amount(&raw) {
            Ok(amount) => amount,
            Err(msg) => {
                self.error.set(Some(msg.to_string()));
                return;
            }
        };
        let note = self.review_note.get_untracked();
        let review = ReviewCancellation::approve(
            compensation,
            (!note.trim().is_empty()).then(|| note.trim().to_string()),
        );
        self.submit_review(review, "Đã chấp thuận yêu cầu hủy");
    }

    pub fn deny_command(&self) {
        let review = ReviewCancellation::deny(self.deny_reason.get_untracked().trim().to_string());
        self.submit_review(review, "Đã từ chối yêu cầu hủy");
    }

    fn submit_review(&self, review: ReviewCancellation, done: &'static str) {
        if let Some(msg) = review.validate().first() {
            self.error.set(Some(msg.to_string()));
            return;
        }
        self.begin();
        let this = *self;
        spawn_local(async move {
            let result = this.hooks.review(this.id.get_value(), review).await;
            this.finish(result, done);
        });
    }

    pub fn resolve_command(&self) {
        let note = self.resolve_note.get_untracked().trim().to_string();
        if note.is_empty() {
            self.error.set(Some("Vui lòng nhập ghi chú giải quyết".to_string()));
            return;
        }
        let resolution = ResolveDispute {
            outcome: self.outcome.get_untracked(),
            note,
        };
        self.begin();
        let this = *self;
        spawn_local(async move {
            let result = this.hooks.resolve(this.id.get_value(), resolution).await;
            this.finish(result, "Đã giải quyết tranh chấp");
        });
    }

    pub fn revoke_command(&self) {
        self.begin();
        let this = *self;
        spawn_local(async move {
            let result = this.hooks.revoke(this.id.get_value()).await;
            this.finish(result, "Đã thu hồi yêu cầu hủy");
        });
    }

    fn begin(&self) {
        self.error.set(None);
        self.notice.set(None);
        self.is_submitting.set(true);
    }

    fn finish<T>(&self, result: ApiResult<T>, done: &'static str) {
        self.is_submitting.set(false);
        if result.success {
            self.notice.set(Some(done.to_string()));
        } else {
            self.error.set(result.message);
        }
    }
}

/// Blank means no compensation; anything else must be a non-negative number.
pub fn parse_amount(raw: &str) -> Result<Option<f64>, &'static str> {
    let cleaned: String = raw.chars().filter(|c| !c.is_whitespace() && *c != '.').collect();
    if cleaned.is_empty() {
        return Ok(None);
    }
    match cleaned.replace(',', ".").parse::<f64>() {
        Ok(v) if v >= 0.0 => Ok(Some(v)),
        _ => Err("Số tiền hoàn trả không hợp lệ"),
    }
}

#[cfg(test)]
mod tests {
    use super::parse_amount;

    #[test]
    fn test_parse_amount() {
        assert_eq!(parse_amount(""), Ok(None));
        assert_eq!(parse_amount("1.500.000"), Ok(Some(1_500_000.0)));
        assert_eq!(parse_amount("2 000 000"), Ok(Some(2_000_000.0)));
        assert!(parse_amount("-5").is_err());
        assert!(parse_amount("abc").is_err());
    }
}
