mod view;
mod view_model;

pub use view::BeneficiaryDetails;
