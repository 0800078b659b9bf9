//! Query parameters the payment gateway appends when redirecting back to
//! the console. Nothing here is signed; values are display-only.

use serde::Deserialize;

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PaymentRedirect {
    #[serde(default)]
    pub order_id: Option<String>,
    #[serde(default)]
    pub amount: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub reason: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaymentOutcome {
    Success,
    Failure,
}

impl PaymentRedirect {
    /// Parses `?orderId=..&amount=..`; a malformed query yields empty fields.
    pub fn from_query(query: &str) -> Self {
        serde_qs::from_str(query.trim_start_matches('?')).unwrap_or_default()
    }

    pub fn outcome(&self) -> PaymentOutcome {
        let status_ok = matches!(
            self.status.as_deref().map(str::to_ascii_lowercase).as_deref(),
            Some("success" | "paid" | "completed" | "00")
        );
        if status_ok && self.error.is_none() {
            PaymentOutcome::Success
        } else {
            PaymentOutcome::Failure
        }
    }

    pub fn amount_value(&self) -> Option<f64> {
        self.amount.as_deref()?.trim().parse().ok()
    }

    /// Best explanation available for a failed payment.
    pub fn failure_text(&self) -> Option<&str> {
        self.reason
            .as_deref()
            .or(self.message.as_deref())
            .or(self.error.as_deref())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_redirect() {
        let r = PaymentRedirect::from_query("?orderId=ORD-7&amount=1500000&status=success");
        assert_eq!(r.order_id.as_deref(), Some("ORD-7"));
        assert_eq!(r.amount_value(), Some(1_500_000.0));
        assert_eq!(r.outcome(), PaymentOutcome::Success);
    }

    #[test]
    fn test_failure_redirect_prefers_reason() {
        let r = PaymentRedirect::from_query(
            "orderId=ORD-8&status=failed&error=DECLINED&message=Card%20declined&reason=Insufficient",
        );
        assert_eq!(r.outcome(), PaymentOutcome::Failure);
        assert_eq!(r.failure_text(), Some("Insufficient"));
    }

    #[test]
    fn test_empty_query() {
        let r = PaymentRedirect::from_query("");
        assert_eq!(r, PaymentRedirect::default());
        assert_eq!(r.outcome(), PaymentOutcome::Failure);
    }
}
