pub mod models;

use sea_orm::{
    DatabaseConnection, DbErr, EntityTrait, Set, TransactionTrait,
};
use uuid::Uuid;

use crate::config::DatabaseConfig;
use models::{Grant, GrantActiveModel, GrantEntity};

/// A scraped listing row accepted for storage. Identity and timestamps are
/// assigned at insert time; the scraper and ingestion pipeline never see them.
#[derive(Debug, Clone, PartialEq)]
pub struct NewGrant {
    pub name: String,
    pub content: Option<String>,
    pub link: Option<String>,
}

#[derive(Clone)]
pub struct Repository {
    db: DatabaseConnection,
}

impl Repository {
    pub async fn new(config: &DatabaseConfig) -> Result<Self, DbErr> {
        let mut opt = sea_orm::ConnectOptions::new(&config.url);
        opt.max_connections(config.max_connections)
            .min_connections(config.min_connections)
            .connect_timeout(std::time::Duration::from_secs(config.connect_timeout))
            .sqlx_logging(true);

        let db = sea_orm::Database::connect(opt).await?;
        Ok(Self { db })
    }

    pub async fn ping(&self) -> Result<(), DbErr> {
        self.db.ping().await
    }

    /// Full corpus replace: delete everything, bulk-insert the new batch.
    ///
    /// Runs inside one transaction so concurrent readers either see the old
    /// corpus or the new one, never the empty window in between, and a failed
    /// insert cannot destroy the previous dataset.
    pub async fn replace_grants(&self, grants: Vec<NewGrant>) -> Result<usize, DbErr> {
        let count = grants.len();
        let txn = self.db.begin().await?;

        GrantEntity::delete_many().exec(&txn).await?;

        if !grants.is_empty() {
            let rows: Vec<GrantActiveModel> = grants
                .into_iter()
                .map(|g| GrantActiveModel {
                    id: Set(Uuid::new_v4()),
                    name: Set(g.name),
                    content: Set(g.content),
                    link: Set(g.link),
                    created_at: Set(chrono::Utc::now().into()),
                })
                .collect();
            GrantEntity::insert_many(rows).exec(&txn).await?;
        }

        txn.commit().await?;
        Ok(count)
    }

    /// Every stored listing row. The corpus is small by construction (a
    /// bounded number of scraped pages), so the matcher scans it in full.
    pub async fn all_grants(&self) -> Result<Vec<Grant>, DbErr> {
        GrantEntity::find().all(&self.db).await
    }
}
