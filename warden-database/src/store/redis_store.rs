use deadpool_redis::{Config, Pool, PoolConfig, Runtime};
use redis::AsyncCommands;

use crate::model::member::Member;
use crate::store::StoreOptions;

#[derive(Clone, Debug)]
pub struct RedisMemberStore {
    pool: Pool,
    key_prefix: String,
}

impl RedisMemberStore {
    pub async fn connect(redis_url: &str, options: &StoreOptions) -> anyhow::Result<Self> {
        let mut config = Config::from_url(redis_url);
        config.pool = Some(PoolConfig::new(options.max_connections as usize));
        let pool = config
            .create_pool(Some(Runtime::Tokio1))
            .map_err(|e| anyhow::anyhow!("failed to create redis pool: {e}"))?;

        let store = Self {
            pool,
            key_prefix: options.namespace.clone(),
        };
        store.ping().await?;

        Ok(store)
    }

    fn key(&self, id: &str) -> String {
        format!("{}:member:{}", self.key_prefix, id)
    }

    async fn connection(&self) -> anyhow::Result<deadpool_redis::Connection> {
        self.pool
            .get()
            .await
            .map_err(|e| anyhow::anyhow!("failed to get redis connection: {e}"))
    }

    async fn ping(&self) -> anyhow::Result<()> {
        let mut conn = self.connection().await?;
        let _: String = redis::cmd("PING")
            .query_async(&mut conn)
            .await
            .map_err(|e| anyhow::anyhow!("redis PING failed: {e}"))?;

        Ok(())
    }

    pub async fn get(&self, id: &str) -> anyhow::Result<Option<Member>> {
        let key = self.key(id);
        let mut conn = self.connection().await?;

        let value = conn
            .get::<_, Option<Vec<u8>>>(key.as_str())
            .await
            .map_err(|e| anyhow::anyhow!("redis GET failed for key `{key}`: {e}"))?;

        match value {
            Some(bytes) => {
                let member = serde_json::from_slice(&bytes).map_err(|e| {
                    anyhow::anyhow!("failed to deserialize member for `{key}`: {e}")
                })?;
                Ok(Some(member))
            }
            None => Ok(None),
        }
    }

    pub async fn save(&self, member: &Member) -> anyhow::Result<()> {
        let key = self.key(member.id());
        let payload = serde_json::to_vec(member)
            .map_err(|e| anyhow::anyhow!("failed to serialize member for `{key}`: {e}"))?;
        let mut conn = self.connection().await?;

        conn.set::<_, _, ()>(key.as_str(), payload)
            .await
            .map_err(|e| anyhow::anyhow!("redis SET failed for key `{key}`: {e}"))?;

        Ok(())
    }

    pub fn close(&self) {
        self.pool.close();
    }
}
