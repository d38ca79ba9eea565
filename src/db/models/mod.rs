//! Database models for grantscope.

pub mod grant;

pub use grant::ActiveModel as GrantActiveModel;
pub use grant::Entity as GrantEntity;
pub use grant::Model as Grant;
