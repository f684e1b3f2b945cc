// Profile registration, login lookup, and self-service updates.

pub mod handlers;
pub mod store;
