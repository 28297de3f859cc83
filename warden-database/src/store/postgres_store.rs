use anyhow::Context as _;
use sqlx::postgres::PgPoolOptions;
use sqlx::types::Json;
use sqlx::{PgPool, migrate::Migrator};

use crate::model::member::{Action, Member};
use crate::store::StoreOptions;

/// Compile-time discovered SQLx migrations for the `warden-database` crate.
pub static MIGRATOR: Migrator = sqlx::migrate!();

#[derive(sqlx::FromRow)]
struct MemberRow {
    id: String,
    actions: Json<Vec<Action>>,
}

#[derive(Clone, Debug)]
pub struct PostgresMemberStore {
    pool: PgPool,
    namespace: String,
}

impl PostgresMemberStore {
    pub async fn connect(uri: &str, options: &StoreOptions) -> anyhow::Result<Self> {
        let pool = PgPoolOptions::new()
            .max_connections(options.max_connections)
            .connect(uri)
            .await
            .context("failed to connect to postgres")?;

        Ok(Self {
            pool,
            namespace: options.namespace.clone(),
        })
    }

    pub async fn migrate(&self) -> anyhow::Result<()> {
        MIGRATOR
            .run(&self.pool)
            .await
            .context("failed to apply member store migrations")
    }

    pub async fn get(&self, id: &str) -> anyhow::Result<Option<Member>> {
        let row: Option<MemberRow> =
            sqlx::query_as("SELECT id, actions FROM members WHERE namespace = $1 AND id = $2")
                .bind(&self.namespace)
                .bind(id)
                .fetch_optional(&self.pool)
                .await
                .with_context(|| format!("failed to load member `{id}`"))?;

        Ok(row.map(|row| Member::from_parts(row.id, row.actions.0)))
    }

    pub async fn save(&self, member: &Member) -> anyhow::Result<()> {
        sqlx::query(
            "INSERT INTO members (namespace, id, actions, updated_at)
             VALUES ($1, $2, $3, NOW())
             ON CONFLICT (namespace, id)
             DO UPDATE SET actions = EXCLUDED.actions, updated_at = NOW()",
        )
        .bind(&self.namespace)
        .bind(member.id())
        .bind(Json(member.actions()))
        .execute(&self.pool)
        .await
        .with_context(|| format!("failed to save member `{}`", member.id()))?;

        Ok(())
    }

    pub async fn close(&self) {
        self.pool.close().await;
    }
}
