pub mod login;
pub mod payment_result;
