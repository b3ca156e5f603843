pub mod admin;
pub mod identity;

pub use admin::AdminMiddleware;
pub use identity::{Identity, IdentityMiddleware};
