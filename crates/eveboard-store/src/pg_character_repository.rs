//! `PostgreSQL` implementation of the `CharacterRepository` trait.

use async_trait::async_trait;
use sqlx::PgPool;

use eveboard_core::error::DomainError;
use eveboard_core::records::{
    AffiliationRecord, CharacterRecord, CloneRecord, ImplantRecord, SkillRecord, StationRecord,
};
use eveboard_core::repository::CharacterRepository;

use crate::infra;

/// PostgreSQL-backed character store.
#[derive(Debug, Clone)]
pub struct PgCharacterRepository {
    pool: PgPool,
}

impl PgCharacterRepository {
    /// Creates a new `PgCharacterRepository`.
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

/// Flat row shape shared by `list_for_owner` and `find`; the affiliation
/// columns zip back into optional records.
#[derive(sqlx::FromRow)]
struct CharacterRow {
    id: i64,
    name: String,
    owner_id: Option<i64>,
    token_id: Option<i64>,
    corporation_id: Option<i64>,
    corporation_name: Option<String>,
    corporation_ticker: Option<String>,
    alliance_id: Option<i64>,
    alliance_name: Option<String>,
    alliance_ticker: Option<String>,
    home_station_id: Option<i64>,
    home_station_name: Option<String>,
    home_system_name: Option<String>,
    active_ship: Option<String>,
    total_skillpoints: i64,
}

fn affiliation(
    id: Option<i64>,
    name: Option<String>,
    ticker: Option<String>,
) -> Option<AffiliationRecord> {
    Some(AffiliationRecord {
        id: id?,
        name: name?,
        ticker: ticker?,
    })
}

impl From<CharacterRow> for CharacterRecord {
    fn from(row: CharacterRow) -> Self {
        let home = match (row.home_station_id, row.home_station_name, row.home_system_name) {
            (Some(id), Some(name), Some(system_name)) => Some(StationRecord {
                id,
                name,
                system_name,
            }),
            _ => None,
        };
        Self {
            id: row.id,
            name: row.name,
            owner_id: row.owner_id,
            token_id: row.token_id,
            corporation: affiliation(
                row.corporation_id,
                row.corporation_name,
                row.corporation_ticker,
            ),
            alliance: affiliation(row.alliance_id, row.alliance_name, row.alliance_ticker),
            home,
            active_ship: row.active_ship,
            total_skillpoints: row.total_skillpoints,
        }
    }
}

const CHARACTER_SELECT: &str = r"
    SELECT c.id, c.name, c.owner_id, c.token_id,
           corp.id   AS corporation_id,
           corp.name AS corporation_name,
           corp.ticker AS corporation_ticker,
           al.id     AS alliance_id,
           al.name   AS alliance_name,
           al.ticker AS alliance_ticker,
           st.id     AS home_station_id,
           st.name   AS home_station_name,
           sys.name  AS home_system_name,
           ship.name AS active_ship,
           CAST(COALESCE(sp.total, 0) AS BIGINT) AS total_skillpoints
    FROM characters c
    LEFT JOIN corporations corp ON corp.id = c.corporation_id
    LEFT JOIN alliances al ON al.id = c.alliance_id
    LEFT JOIN stations st ON st.id = c.home_station_id
    LEFT JOIN systems sys ON sys.id = st.system_id
    LEFT JOIN item_types ship ON ship.id = c.ship_type_id
    LEFT JOIN (
        SELECT character_id, SUM(skillpoints) AS total
        FROM skills
        GROUP BY character_id
    ) sp ON sp.character_id = c.id
";

#[async_trait]
impl CharacterRepository for PgCharacterRepository {
    async fn list_for_owner(&self, owner_id: i64) -> Result<Vec<CharacterRecord>, DomainError> {
        let rows: Vec<CharacterRow> =
            sqlx::query_as(&format!("{CHARACTER_SELECT} WHERE c.owner_id = $1"))
                .bind(owner_id)
                .fetch_all(&self.pool)
                .await
                .map_err(infra)?;

        Ok(rows.into_iter().map(CharacterRecord::from).collect())
    }

    async fn find(&self, character_id: i64) -> Result<Option<CharacterRecord>, DomainError> {
        let row: Option<CharacterRow> =
            sqlx::query_as(&format!("{CHARACTER_SELECT} WHERE c.id = $1"))
                .bind(character_id)
                .fetch_optional(&self.pool)
                .await
                .map_err(infra)?;

        Ok(row.map(CharacterRecord::from))
    }

    async fn skills_for_character(
        &self,
        character_id: i64,
    ) -> Result<Vec<SkillRecord>, DomainError> {
        let rows: Vec<(i64, String, String, i16, i64)> = sqlx::query_as(
            r"
            SELECT t.id, t.name, g.name, s.trained_level, s.skillpoints
            FROM skills s
            JOIN item_types t ON t.id = s.type_id
            JOIN item_groups g ON g.id = t.group_id
            WHERE s.character_id = $1
            ORDER BY g.name, t.name
            ",
        )
        .bind(character_id)
        .fetch_all(&self.pool)
        .await
        .map_err(infra)?;

        Ok(rows
            .into_iter()
            .map(
                |(type_id, type_name, group_name, trained_level, skillpoints)| SkillRecord {
                    type_id,
                    type_name,
                    group_name,
                    trained_level,
                    skillpoints,
                },
            )
            .collect())
    }

    async fn implants_for_character(
        &self,
        character_id: i64,
    ) -> Result<Vec<ImplantRecord>, DomainError> {
        let rows: Vec<(i64, String)> = sqlx::query_as(
            r"
            SELECT i.type_id, t.name
            FROM implants i
            JOIN item_types t ON t.id = i.type_id
            WHERE i.character_id = $1
            ORDER BY t.name
            ",
        )
        .bind(character_id)
        .fetch_all(&self.pool)
        .await
        .map_err(infra)?;

        Ok(rows
            .into_iter()
            .map(|(type_id, type_name)| ImplantRecord { type_id, type_name })
            .collect())
    }

    async fn clones_for_character(
        &self,
        character_id: i64,
    ) -> Result<Vec<CloneRecord>, DomainError> {
        let clone_rows: Vec<(i64, Option<String>, Option<String>)> = sqlx::query_as(
            r"
            SELECT cl.id, cl.name, st.name
            FROM clones cl
            LEFT JOIN stations st ON st.id = cl.station_id
            WHERE cl.character_id = $1
            ORDER BY cl.id
            ",
        )
        .bind(character_id)
        .fetch_all(&self.pool)
        .await
        .map_err(infra)?;

        let clone_ids: Vec<i64> = clone_rows.iter().map(|(id, _, _)| *id).collect();
        let implant_rows: Vec<(i64, i64, String)> = sqlx::query_as(
            r"
            SELECT ci.clone_id, ci.type_id, t.name
            FROM clone_implants ci
            JOIN item_types t ON t.id = ci.type_id
            WHERE ci.clone_id = ANY($1)
            ORDER BY t.name
            ",
        )
        .bind(&clone_ids)
        .fetch_all(&self.pool)
        .await
        .map_err(infra)?;

        Ok(clone_rows
            .into_iter()
            .map(|(id, name, location)| CloneRecord {
                id,
                name,
                location,
                implants: implant_rows
                    .iter()
                    .filter(|(clone_id, _, _)| *clone_id == id)
                    .map(|(_, type_id, type_name)| ImplantRecord {
                        type_id: *type_id,
                        type_name: type_name.clone(),
                    })
                    .collect(),
            })
            .collect())
    }

    async fn disconnect_token(&self, character_id: i64) -> Result<(), DomainError> {
        let mut tx = self.pool.begin().await.map_err(infra)?;

        // Lock the row so a concurrent disconnect cannot double-delete.
        let token_id: Option<Option<i64>> =
            sqlx::query_scalar("SELECT token_id FROM characters WHERE id = $1 FOR UPDATE")
                .bind(character_id)
                .fetch_optional(&mut *tx)
                .await
                .map_err(infra)?;

        sqlx::query("UPDATE characters SET owner_id = NULL, token_id = NULL WHERE id = $1")
            .bind(character_id)
            .execute(&mut *tx)
            .await
            .map_err(infra)?;

        if let Some(Some(token_id)) = token_id {
            sqlx::query("DELETE FROM auth_tokens WHERE id = $1")
                .bind(token_id)
                .execute(&mut *tx)
                .await
                .map_err(infra)?;
        }

        tx.commit().await.map_err(infra)?;
        tracing::debug!(character_id, "wiped character link and auth token");
        Ok(())
    }
}
