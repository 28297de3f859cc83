pub mod model;
pub mod store;

pub use model::member::{Action, Member};
pub use store::postgres_store::MIGRATOR;
pub use store::{MemberStore, StorageKind, StoreOptions};
