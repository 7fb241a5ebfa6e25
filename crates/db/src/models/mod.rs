pub mod category;
pub mod event;
pub mod profile;
pub mod role;
pub mod session;
pub mod user;
