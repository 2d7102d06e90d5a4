use serde::{Deserialize, Serialize};

use crate::analytics::StandingsRow;
use crate::error::{ReportError, ReportResult};

pub const STANDINGS_TABLE_JSON_SCHEMA_V1: u32 = 1;

/// Versioned standings payload handed to the page-building layer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StandingsTableJsonContractV1 {
    pub schema_version: u32,
    pub season: u32,
    #[serde(default)]
    pub through_week: Option<u32>,
    pub rows: Vec<StandingsRow>,
}

impl StandingsTableJsonContractV1 {
    #[must_use]
    pub fn new(season: u32, through_week: Option<u32>, rows: Vec<StandingsRow>) -> Self {
        Self {
            schema_version: STANDINGS_TABLE_JSON_SCHEMA_V1,
            season,
            through_week,
            rows,
        }
    }

    pub fn to_json_pretty(&self) -> ReportResult<String> {
        serde_json::to_string_pretty(self).map_err(|e| {
            ReportError::Serialization(format!("failed to serialize standings contract v1: {e}"))
        })
    }

    /// Parses either a versioned payload or a bare row list.
    ///
    /// A bare list carries no season, so `season` and `through_week` are
    /// taken from the first row and left unset respectively.
    pub fn from_json_compat_str(input: &str) -> ReportResult<Self> {
        if let Ok(rows) = serde_json::from_str::<Vec<StandingsRow>>(input) {
            let season = rows.first().map_or(0, |row| row.season);
            return Ok(Self::new(season, None, rows));
        }
        let payload: Self = serde_json::from_str(input).map_err(|e| {
            ReportError::Serialization(format!("failed to parse standings json payload: {e}"))
        })?;
        if payload.schema_version != STANDINGS_TABLE_JSON_SCHEMA_V1 {
            return Err(ReportError::Serialization(format!(
                "unsupported standings schema version: {}",
                payload.schema_version
            )));
        }
        Ok(payload)
    }
}
