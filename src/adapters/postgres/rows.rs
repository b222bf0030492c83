//! Row mapping shared by the PostgreSQL repositories.

use sqlx::postgres::PgRow;
use sqlx::{Postgres, Row};

use crate::domain::ahp::{CriterionValues, FinalScore, Score, SubcriteriaSelection};
use crate::domain::collection::{Alternative, Collection};
use crate::domain::foundation::{
    AlternativeId, CollectionId, DomainError, FinalScoreId, ScoreId, Timestamp,
};

pub(super) const ALTERNATIVE_COLUMNS: &str = "id, collection_id, name, waste_volume, \
    disposal_site_distance, settlement_distance, river_distance, community_participation, \
    household_coverage, accessibility, created_at, updated_at";

pub(super) const SCORE_COLUMNS: &str = "id, alternative_id, collection_id, waste_volume, \
    disposal_site_distance, settlement_distance, river_distance, community_participation, \
    household_coverage, accessibility, created_at";

pub(super) const FINAL_SCORE_COLUMNS: &str =
    "id, alternative_id, collection_id, final_score, rank, created_at";

fn get<'r, T>(row: &'r PgRow, column: &str) -> Result<T, DomainError>
where
    T: sqlx::Decode<'r, Postgres> + sqlx::Type<Postgres>,
{
    row.try_get(column)
        .map_err(|e| DomainError::database(&format!("get {}", column), e))
}

fn timestamp(row: &PgRow, column: &str) -> Result<Timestamp, DomainError> {
    let value: chrono::DateTime<chrono::Utc> = get(row, column)?;
    Ok(Timestamp::from_datetime(value))
}

pub(super) fn row_to_collection(row: &PgRow) -> Result<Collection, DomainError> {
    Ok(Collection::reconstitute(
        CollectionId::from_uuid(get(row, "id")?),
        get(row, "name")?,
        get(row, "score_is_calculated")?,
        get(row, "final_score_is_calculated")?,
        timestamp(row, "created_at")?,
        timestamp(row, "updated_at")?,
    ))
}

pub(super) fn row_to_alternative(row: &PgRow) -> Result<Alternative, DomainError> {
    let selection = SubcriteriaSelection {
        waste_volume: get(row, "waste_volume")?,
        disposal_site_distance: get(row, "disposal_site_distance")?,
        settlement_distance: get(row, "settlement_distance")?,
        river_distance: get(row, "river_distance")?,
        community_participation: get(row, "community_participation")?,
        household_coverage: get(row, "household_coverage")?,
        accessibility: get(row, "accessibility")?,
    };

    Ok(Alternative::reconstitute(
        AlternativeId::from_uuid(get(row, "id")?),
        CollectionId::from_uuid(get(row, "collection_id")?),
        get(row, "name")?,
        selection,
        timestamp(row, "created_at")?,
        timestamp(row, "updated_at")?,
    ))
}

pub(super) fn row_to_score(row: &PgRow) -> Result<Score, DomainError> {
    let values = CriterionValues {
        waste_volume: get(row, "waste_volume")?,
        disposal_site_distance: get(row, "disposal_site_distance")?,
        settlement_distance: get(row, "settlement_distance")?,
        river_distance: get(row, "river_distance")?,
        community_participation: get(row, "community_participation")?,
        household_coverage: get(row, "household_coverage")?,
        accessibility: get(row, "accessibility")?,
    };

    Ok(Score {
        id: ScoreId::from_uuid(get(row, "id")?),
        alternative_id: AlternativeId::from_uuid(get(row, "alternative_id")?),
        collection_id: CollectionId::from_uuid(get(row, "collection_id")?),
        values,
        created_at: timestamp(row, "created_at")?,
    })
}

pub(super) fn row_to_final_score(row: &PgRow) -> Result<FinalScore, DomainError> {
    let rank: i32 = get(row, "rank")?;
    Ok(FinalScore {
        id: FinalScoreId::from_uuid(get(row, "id")?),
        alternative_id: AlternativeId::from_uuid(get(row, "alternative_id")?),
        collection_id: CollectionId::from_uuid(get(row, "collection_id")?),
        final_score: get(row, "final_score")?,
        rank: u32::try_from(rank).unwrap_or(FinalScore::UNRANKED),
        created_at: timestamp(row, "created_at")?,
    })
}
