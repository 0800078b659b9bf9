//! Localized (Vietnamese) messages for backend failures.
//!
//! Resolution order: the domain's own code table, then the auth table (token
//! codes can come back from any endpoint), then the HTTP status default, then
//! the generic unknown-error text. A failure with no status at all never
//! reached the server and gets the connectivity message.

mod tables;

pub const NETWORK_ERROR: &str = "Không thể kết nối đến máy chủ, vui lòng kiểm tra kết nối mạng";
pub const UNKNOWN_ERROR: &str = "Đã xảy ra lỗi không xác định";
pub const FETCH_FAILED: &str = "Không thể tải dữ liệu";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MessageDomain {
    Auth,
    BasePolicy,
    Policy,
    Payout,
    Cancellation,
    Beneficiary,
    Notification,
    Profile,
    Upload,
}

impl MessageDomain {
    fn table(&self) -> &'static [(&'static str, &'static str)] {
        match self {
            MessageDomain::Auth => tables::AUTH,
            MessageDomain::BasePolicy => tables::BASE_POLICY,
            MessageDomain::Policy => tables::POLICY,
            MessageDomain::Payout => tables::PAYOUT,
            MessageDomain::Cancellation => tables::CANCELLATION,
            MessageDomain::Beneficiary => tables::BENEFICIARY,
            MessageDomain::Notification => tables::NOTIFICATION,
            MessageDomain::Profile => tables::PROFILE,
            MessageDomain::Upload => tables::UPLOAD,
        }
    }

    pub fn lookup(&self, code: &str) -> Option<&'static str> {
        find(self.table(), code)
    }
}

fn find(table: &'static [(&'static str, &'static str)], code: &str) -> Option<&'static str> {
    table
        .iter()
        .find(|(c, _)| c.eq_ignore_ascii_case(code))
        .map(|(_, m)| *m)
}

/// Default text for an HTTP status without a recognised code.
pub fn status_fallback(status: u16) -> Option<&'static str> {
    tables::STATUS
        .iter()
        .find(|(s, _)| *s == status)
        .map(|(_, m)| *m)
}

pub fn resolve(domain: MessageDomain, code: Option<&str>, status: Option<u16>) -> &'static str {
    if let Some(code) = code {
        if let Some(msg) = domain.lookup(code).or_else(|| find(tables::AUTH, code)) {
            return msg;
        }
    }
    match status {
        None => NETWORK_ERROR,
        Some(s) => status_fallback(s).unwrap_or(UNKNOWN_ERROR),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_domain_code_wins_over_status() {
        assert_eq!(
            resolve(MessageDomain::Cancellation, Some("CANCEL_REQUEST_EXISTS"), Some(409)),
            "Hợp đồng đã có yêu cầu hủy đang chờ xử lý"
        );
        assert_eq!(
            resolve(MessageDomain::Profile, Some("revoke_deletion_expired"), Some(422)),
            "Đã quá thời hạn thu hồi yêu cầu xóa tài khoản"
        );
    }

    #[test]
    fn test_auth_codes_resolve_from_any_domain() {
        assert_eq!(
            resolve(MessageDomain::Payout, Some("TOKEN_EXPIRED"), Some(401)),
            "Phiên đăng nhập đã hết hạn, vui lòng đăng nhập lại"
        );
    }

    #[test]
    fn test_code_from_other_domain_falls_back_to_status() {
        assert_eq!(
            resolve(MessageDomain::Payout, Some("CANCEL_REQUEST_EXISTS"), Some(409)),
            status_fallback(409).unwrap()
        );
    }

    #[rstest]
    #[case(400)]
    #[case(401)]
    #[case(403)]
    #[case(404)]
    #[case(409)]
    #[case(422)]
    #[case(500)]
    fn test_every_documented_status_has_its_own_default(#[case] status: u16) {
        let msg = resolve(MessageDomain::Policy, Some("SOMETHING_NEW"), Some(status));
        assert_ne!(msg, UNKNOWN_ERROR);
        let others = [400u16, 401, 403, 404, 409, 422, 500]
            .into_iter()
            .filter(|s| *s != status)
            .filter_map(status_fallback)
            .collect::<Vec<_>>();
        assert!(!others.contains(&msg));
    }

    #[test]
    fn test_unrecognised_status_and_missing_response() {
        assert_eq!(resolve(MessageDomain::Policy, None, Some(502)), UNKNOWN_ERROR);
        assert_eq!(resolve(MessageDomain::Policy, None, None), NETWORK_ERROR);
    }
}
