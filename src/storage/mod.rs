mod cache;
mod schema;
mod types;

pub use schema::CacheDb;
pub use types::StorageError;
