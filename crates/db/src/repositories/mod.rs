mod category_repo;
mod event_repo;
mod favorite_repo;
mod profile_repo;
mod role_repo;
mod session_repo;
mod user_repo;

pub use category_repo::CategoryRepo;
pub use event_repo::EventRepo;
pub use favorite_repo::FavoriteRepo;
pub use profile_repo::ProfileRepo;
pub use role_repo::RoleRepo;
pub use session_repo::SessionRepo;
pub use user_repo::UserRepo;
