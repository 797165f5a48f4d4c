pub mod commands;
pub mod routes;
pub mod store;
pub mod types;

pub use commands::SaveProfileError;

pub use routes::profile_routes;

pub use store::ProfileStore;

pub use types::UserProfile;
