pub mod adaptors;
pub mod logo;
pub mod projection;
pub mod store;
