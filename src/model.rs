use crate::commit::CommitPlan;
use crate::grid::Grid;
use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use serde::{Deserialize, Serialize};

pub const SCHEMA_VERSION: u32 = 1;

/// JSON document for `preview --json`: the grid itself, row-major with
/// Sunday first.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GridDocument {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub year: i32,
    pub start_date: NaiveDate,
    pub cells: Vec<Vec<u8>>,
}

impl GridDocument {
    pub fn new(grid: &Grid, year: i32, start_date: NaiveDate) -> Self {
        Self {
            version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            year,
            start_date,
            cells: grid.rows().map(|row| row.to_vec()).collect(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanEntryDocument {
    pub date: NaiveDateTime,
    pub count: u8,
}

/// JSON document for `plan --json`: the full commit schedule.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlanDocument {
    pub version: u32,
    pub generated_at: DateTime<Utc>,
    pub year: i32,
    pub start_date: NaiveDate,
    pub total_commits: u64,
    pub entries: Vec<PlanEntryDocument>,
}

impl PlanDocument {
    pub fn new(plan: &CommitPlan, year: i32, start_date: NaiveDate) -> Self {
        Self {
            version: SCHEMA_VERSION,
            generated_at: Utc::now(),
            year,
            start_date,
            total_commits: plan.total_commits(),
            entries: plan
                .entries
                .iter()
                .map(|entry| PlanEntryDocument {
                    date: entry.date,
                    count: entry.count,
                })
                .collect(),
        }
    }
}
