pub mod config;
pub mod envelope;
pub mod image_upload;
pub mod list_query;
pub mod messages;
pub mod payment;
pub mod placeholders;
pub mod push;
pub mod validation;
