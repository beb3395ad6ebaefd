//! `PostgreSQL` implementation of the `AssetRepository` trait.

use async_trait::async_trait;
use sqlx::PgPool;

use eveboard_core::constants::SHIP_CATEGORY_ID;
use eveboard_core::error::DomainError;
use eveboard_core::records::ShipRecord;
use eveboard_core::repository::AssetRepository;

use crate::infra;

/// PostgreSQL-backed asset store.
///
/// Both queries narrow to assembled ship-category assets located in a known
/// solar system; an asset outside a system never resolves here.
#[derive(Debug, Clone)]
pub struct PgAssetRepository {
    pool: PgPool,
}

impl PgAssetRepository {
    /// Creates a new `PgAssetRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[derive(sqlx::FromRow)]
struct ShipRow {
    asset_id: i64,
    name: Option<String>,
    character_id: i64,
    character_name: String,
    owner_id: Option<i64>,
    type_id: i64,
    type_name: String,
    group_id: i64,
    group_name: String,
    mass: f64,
    system_name: String,
    region_name: String,
}

impl From<ShipRow> for ShipRecord {
    fn from(row: ShipRow) -> Self {
        Self {
            asset_id: row.asset_id,
            name: row.name,
            character_id: row.character_id,
            character_name: row.character_name,
            owner_id: row.owner_id,
            type_id: row.type_id,
            type_name: row.type_name,
            group_id: row.group_id,
            group_name: row.group_name,
            mass: row.mass,
            system_name: row.system_name,
            region_name: row.region_name,
        }
    }
}

const SHIP_SELECT: &str = r"
    SELECT a.id    AS asset_id,
           a.name,
           a.character_id,
           c.name  AS character_name,
           c.owner_id,
           t.id    AS type_id,
           t.name  AS type_name,
           g.id    AS group_id,
           g.name  AS group_name,
           t.mass,
           sys.name AS system_name,
           r.name   AS region_name
    FROM assets a
    JOIN characters c ON c.id = a.character_id
    JOIN item_types t ON t.id = a.type_id
    JOIN item_groups g ON g.id = t.group_id
    JOIN systems sys ON sys.id = a.system_id
    JOIN regions r ON r.id = sys.region_id
    WHERE g.category_id = $1
      AND a.singleton
";

#[async_trait]
impl AssetRepository for PgAssetRepository {
    async fn ships_for_owner(&self, owner_id: i64) -> Result<Vec<ShipRecord>, DomainError> {
        let rows: Vec<ShipRow> = sqlx::query_as(&format!("{SHIP_SELECT} AND c.owner_id = $2"))
            .bind(SHIP_CATEGORY_ID)
            .bind(owner_id)
            .fetch_all(&self.pool)
            .await
            .map_err(infra)?;

        Ok(rows.into_iter().map(ShipRecord::from).collect())
    }

    async fn find_ship(&self, asset_id: i64) -> Result<Option<ShipRecord>, DomainError> {
        let row: Option<ShipRow> = sqlx::query_as(&format!("{SHIP_SELECT} AND a.id = $2"))
            .bind(SHIP_CATEGORY_ID)
            .bind(asset_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(infra)?;

        Ok(row.map(ShipRecord::from))
    }
}
