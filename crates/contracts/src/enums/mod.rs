pub mod crop_type;
