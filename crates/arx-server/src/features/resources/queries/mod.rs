pub mod list;

pub use list::ListResourcesError;
