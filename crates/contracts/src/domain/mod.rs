pub mod a001_base_policy;
pub mod a002_registered_policy;
pub mod a003_payout;
pub mod a004_cancellation_request;
pub mod a005_beneficiary;
pub mod a006_notification;
