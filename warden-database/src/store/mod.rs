mod memory_store;
pub mod postgres_store;
mod redis_store;

use std::fmt;
use std::str::FromStr;

use tracing::info;

use crate::model::member::Member;
use memory_store::MemoryMemberStore;
use postgres_store::PostgresMemberStore;
use redis_store::RedisMemberStore;

pub const DEFAULT_NAMESPACE: &str = "warden";
pub const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// Storage provider identifiers accepted at startup.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StorageKind {
    Memory,
    Postgres,
    Redis,
}

impl FromStr for StorageKind {
    type Err = anyhow::Error;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "memory" => Ok(Self::Memory),
            "postgres" | "postgresql" => Ok(Self::Postgres),
            "redis" => Ok(Self::Redis),
            other => anyhow::bail!("unknown storage backend `{other}`"),
        }
    }
}

impl fmt::Display for StorageKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Memory => "memory",
            Self::Postgres => "postgres",
            Self::Redis => "redis",
        };
        f.write_str(name)
    }
}

/// Provider-independent connection options.
#[derive(Clone, Debug)]
pub struct StoreOptions {
    /// Logical collection the members live in (postgres column, redis key prefix).
    pub namespace: String,
    pub max_connections: u32,
}

impl Default for StoreOptions {
    fn default() -> Self {
        Self {
            namespace: DEFAULT_NAMESPACE.to_owned(),
            max_connections: DEFAULT_MAX_CONNECTIONS,
        }
    }
}

#[derive(Clone, Debug)]
enum StoreBackend {
    Memory(MemoryMemberStore),
    Postgres(PostgresMemberStore),
    Redis(RedisMemberStore),
    /// Reads find nothing and every write fails.
    #[cfg(any(test, feature = "test-util"))]
    RejectingWrites,
}

/// Shared member ledger handle passed across crates.
///
/// Cloning is cheap; every clone talks to the same backend. Concurrent
/// `get`/`save` pairs on the same member id are not serialized, so the last
/// `save` wins.
#[derive(Clone, Debug)]
pub struct MemberStore {
    backend: StoreBackend,
}

impl MemberStore {
    /// Process-local store, used in tests and development.
    pub fn memory() -> Self {
        Self {
            backend: StoreBackend::Memory(MemoryMemberStore::default()),
        }
    }

    /// Store that never finds a member and refuses every `save`.
    #[cfg(any(test, feature = "test-util"))]
    pub fn rejecting_writes() -> Self {
        Self {
            backend: StoreBackend::RejectingWrites,
        }
    }

    /// Select a provider by its identifier and connect it.
    ///
    /// An unknown identifier is an error the caller is expected to treat as fatal.
    pub async fn connect(kind: &str, uri: &str, options: &StoreOptions) -> anyhow::Result<Self> {
        let kind: StorageKind = kind.parse()?;
        let backend = match kind {
            StorageKind::Memory => StoreBackend::Memory(MemoryMemberStore::default()),
            StorageKind::Postgres => {
                StoreBackend::Postgres(PostgresMemberStore::connect(uri, options).await?)
            }
            StorageKind::Redis => StoreBackend::Redis(RedisMemberStore::connect(uri, options).await?),
        };

        info!(backend = %kind, namespace = %options.namespace, "member store connected.");
        Ok(Self { backend })
    }

    pub fn kind(&self) -> StorageKind {
        match &self.backend {
            StoreBackend::Memory(_) => StorageKind::Memory,
            #[cfg(any(test, feature = "test-util"))]
            StoreBackend::RejectingWrites => StorageKind::Memory,
            StoreBackend::Postgres(_) => StorageKind::Postgres,
            StoreBackend::Redis(_) => StorageKind::Redis,
        }
    }

    /// Apply schema migrations. Only the postgres provider has a schema.
    pub async fn migrate(&self) -> anyhow::Result<()> {
        match &self.backend {
            StoreBackend::Postgres(store) => store.migrate().await,
            StoreBackend::Memory(_) | StoreBackend::Redis(_) => Ok(()),
            #[cfg(any(test, feature = "test-util"))]
            StoreBackend::RejectingWrites => Ok(()),
        }
    }

    /// Fetch a member's ledger, or a fresh empty member if none is stored yet.
    pub async fn get(&self, id: &str) -> anyhow::Result<Member> {
        let stored = match &self.backend {
            StoreBackend::Memory(store) => store.get(id).await,
            StoreBackend::Postgres(store) => store.get(id).await?,
            StoreBackend::Redis(store) => store.get(id).await?,
            #[cfg(any(test, feature = "test-util"))]
            StoreBackend::RejectingWrites => None,
        };

        Ok(stored.unwrap_or_else(|| Member::new(id)))
    }

    /// Upsert the member's full action sequence.
    pub async fn save(&self, member: &Member) -> anyhow::Result<Member> {
        match &self.backend {
            StoreBackend::Memory(store) => store.save(member).await,
            StoreBackend::Postgres(store) => store.save(member).await?,
            StoreBackend::Redis(store) => store.save(member).await?,
            #[cfg(any(test, feature = "test-util"))]
            StoreBackend::RejectingWrites => {
                anyhow::bail!("member store rejected write for `{}`", member.id())
            }
        }

        Ok(member.clone())
    }

    /// Release the backend. Pools drain outstanding connections; nothing is raised.
    pub async fn close(&self) {
        match &self.backend {
            StoreBackend::Memory(_) => {}
            #[cfg(any(test, feature = "test-util"))]
            StoreBackend::RejectingWrites => {}
            StoreBackend::Postgres(store) => store.close().await,
            StoreBackend::Redis(store) => store.close(),
        }

        info!(backend = %self.kind(), "member store closed.");
    }
}
