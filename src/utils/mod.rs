pub mod email_validator;
pub mod text;

pub use email_validator::is_valid_email;
