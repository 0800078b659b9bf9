//! Backend error code -> user-facing Vietnamese text.

pub(super) const AUTH: &[(&str, &str)] = &[
    ("INVALID_CREDENTIALS", "Email hoặc mật khẩu không đúng"),
    ("ACCOUNT_LOCKED", "Tài khoản đã bị khóa, vui lòng liên hệ quản trị viên"),
    ("ACCOUNT_NOT_VERIFIED", "Tài khoản chưa được xác minh"),
    ("PARTNER_ROLE_REQUIRED", "Tài khoản không có quyền truy cập cổng đối tác"),
    ("TOKEN_EXPIRED", "Phiên đăng nhập đã hết hạn, vui lòng đăng nhập lại"),
    ("TOKEN_INVALID", "Phiên đăng nhập không hợp lệ, vui lòng đăng nhập lại"),
];

pub(super) const BASE_POLICY: &[(&str, &str)] = &[
    ("BASE_POLICY_NOT_FOUND", "Không tìm thấy sản phẩm bảo hiểm"),
    ("PRODUCT_CODE_EXISTS", "Mã sản phẩm bảo hiểm đã tồn tại"),
    ("INVALID_TRIGGER_CONDITION", "Điều kiện kích hoạt không hợp lệ"),
    ("BASE_POLICY_IN_USE", "Sản phẩm đang có hợp đồng hiệu lực, không thể lưu trữ"),
    ("INVALID_PREMIUM_RATE", "Tỷ lệ phí bảo hiểm không hợp lệ"),
];

pub(super) const POLICY: &[(&str, &str)] = &[
    ("POLICY_NOT_FOUND", "Không tìm thấy hợp đồng bảo hiểm"),
    ("POLICY_ALREADY_REVIEWED", "Hồ sơ đã được thẩm định trước đó"),
    ("INVALID_POLICY_STATUS", "Trạng thái hợp đồng không cho phép thao tác này"),
    ("REJECTION_REASON_REQUIRED", "Vui lòng nhập lý do từ chối"),
    ("FARM_NOT_FOUND", "Không tìm thấy thông tin nông trại"),
];

pub(super) const PAYOUT: &[(&str, &str)] = &[
    ("PAYOUT_NOT_FOUND", "Không tìm thấy khoản chi trả"),
    ("PAYOUT_ALREADY_PROCESSED", "Khoản chi trả đã được xử lý"),
    ("INSUFFICIENT_BALANCE", "Số dư không đủ để thực hiện chi trả"),
    ("INVALID_BANK_ACCOUNT", "Tài khoản ngân hàng của người thụ hưởng không hợp lệ"),
    ("TRANSACTION_REF_REQUIRED", "Vui lòng nhập mã giao dịch"),
];

pub(super) const CANCELLATION: &[(&str, &str)] = &[
    ("CANCEL_REQUEST_NOT_FOUND", "Không tìm thấy yêu cầu hủy hợp đồng"),
    ("CANCEL_REQUEST_EXISTS", "Hợp đồng đã có yêu cầu hủy đang chờ xử lý"),
    ("REVOKE_WINDOW_EXPIRED", "Đã quá thời hạn thu hồi yêu cầu hủy"),
    ("DISPUTE_ALREADY_RESOLVED", "Tranh chấp đã được giải quyết"),
    ("INVALID_CANCEL_STATUS", "Trạng thái yêu cầu hủy không cho phép thao tác này"),
    ("POLICY_NOT_ACTIVE", "Chỉ có thể hủy hợp đồng đang có hiệu lực"),
];

pub(super) const BENEFICIARY: &[(&str, &str)] = &[
    ("BENEFICIARY_NOT_FOUND", "Không tìm thấy người thụ hưởng"),
    ("NATIONAL_ID_EXISTS", "Số CCCD đã được đăng ký"),
    ("PHONE_EXISTS", "Số điện thoại đã được đăng ký"),
    ("BENEFICIARY_HAS_ACTIVE_POLICY", "Người thụ hưởng đang có hợp đồng hiệu lực, không thể xóa"),
];

pub(super) const NOTIFICATION: &[(&str, &str)] = &[
    ("NOTIFICATION_NOT_FOUND", "Không tìm thấy thông báo"),
];

pub(super) const PROFILE: &[(&str, &str)] = &[
    ("PROFILE_NOT_FOUND", "Không tìm thấy hồ sơ đối tác"),
    ("DELETION_REQUEST_PENDING", "Đã có yêu cầu xóa tài khoản đang chờ xử lý"),
    ("DELETION_REQUEST_NOT_FOUND", "Không có yêu cầu xóa tài khoản nào để thu hồi"),
    ("REVOKE_DELETION_EXPIRED", "Đã quá thời hạn thu hồi yêu cầu xóa tài khoản"),
    ("INVALID_TAX_CODE", "Mã số thuế không hợp lệ"),
];

pub(super) const UPLOAD: &[(&str, &str)] = &[
    ("FILE_TOO_LARGE", "Ảnh vượt quá dung lượng cho phép (32MB)"),
    ("UNSUPPORTED_FILE_TYPE", "Chỉ hỗ trợ ảnh JPEG, PNG, GIF hoặc WebP"),
    ("UPLOAD_FAILED", "Tải ảnh lên thất bại, vui lòng thử lại"),
];

pub(super) const STATUS: &[(u16, &str)] = &[
    (400, "Dữ liệu không hợp lệ, vui lòng kiểm tra lại"),
    (401, "Bạn chưa đăng nhập hoặc phiên đăng nhập đã hết hạn"),
    (403, "Bạn không có quyền thực hiện thao tác này"),
    (404, "Không tìm thấy dữ liệu yêu cầu"),
    (409, "Dữ liệu xung đột với một yêu cầu đang tồn tại"),
    (422, "Yêu cầu không thể xử lý, có thể đã quá thời hạn cho phép"),
    (500, "Lỗi hệ thống, vui lòng thử lại sau"),
];
