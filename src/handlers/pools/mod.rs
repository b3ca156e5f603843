pub mod member_handler;
pub mod pool_handler;
