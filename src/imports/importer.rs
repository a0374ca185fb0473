use std::collections::{HashMap, HashSet};

use serde::{Deserialize, Serialize};
use sqlx::PgPool;
use uuid::Uuid;

use crate::db::{fixture_queries, prediction_queries, user_queries};
use crate::imports::sheet::{self, CellError, ImportError, ParsedSheet};

/// Aggregated result of one import attempt. A batch with any error is
/// rejected as a whole: nothing is written and `created` stays zero.
#[derive(Debug, Serialize, Deserialize)]
pub struct ImportOutcome {
    pub created: usize,
    /// Cells whose identical prediction already existed.
    pub duplicates: usize,
    /// Placeholder or empty cells.
    pub skipped_cells: usize,
    pub errors: Vec<CellError>,
}

impl ImportOutcome {
    pub fn accepted(&self) -> bool {
        self.errors.is_empty()
    }
}

/// Ingests uploaded prediction sheets. Resolution errors (unknown userid,
/// unmatched team pair) and parse errors are collected into one report; a
/// clean batch is written in a single transaction.
pub struct PredictionImporter {
    pool: PgPool,
}

impl PredictionImporter {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    pub async fn import_archive(&self, bytes: &[u8]) -> Result<ImportOutcome, ImportError> {
        let csv_text = sheet::read_archive_csv(bytes)?;
        let parsed = sheet::parse_sheet(&csv_text)?;
        self.apply(parsed).await
    }

    async fn apply(&self, sheet: ParsedSheet) -> Result<ImportOutcome, ImportError> {
        let mut errors = sheet.errors.clone();

        // Resolve header columns to fixtures
        let mut fixture_by_column: HashMap<usize, Uuid> = HashMap::new();
        for column in &sheet.fixtures {
            match fixture_queries::find_by_teams(&self.pool, &column.home_team, &column.away_team)
                .await?
            {
                Some(fixture) => {
                    fixture_by_column.insert(column.index, fixture.id);
                }
                None => errors.push(CellError {
                    line: 1,
                    column: column.index,
                    message: format!(
                        "unknown fixture: {} - {}",
                        column.home_team, column.away_team
                    ),
                }),
            }
        }

        // Resolve userids, each looked up once
        let mut user_by_userid: HashMap<String, Uuid> = HashMap::new();
        let mut unknown_userids: HashSet<String> = HashSet::new();
        for cell in &sheet.cells {
            if user_by_userid.contains_key(&cell.userid) || unknown_userids.contains(&cell.userid)
            {
                continue;
            }
            match user_queries::find_by_userid(&self.pool, &cell.userid).await? {
                Some(user) => {
                    user_by_userid.insert(cell.userid.clone(), user.id);
                }
                None => {
                    unknown_userids.insert(cell.userid.clone());
                    errors.push(CellError {
                        line: cell.line,
                        column: 1,
                        message: format!("unknown userid: {}", cell.userid),
                    });
                }
            }
        }
        for cell in &sheet.cells {
            if !fixture_by_column.contains_key(&cell.column)
                && !errors.iter().any(|e| e.line == 1 && e.column == cell.column)
            {
                errors.push(CellError {
                    line: cell.line,
                    column: cell.column,
                    message: "prediction cell has no matching fixture column".to_string(),
                });
            }
        }

        // All-or-nothing: any error rejects the whole batch before a single
        // row is written
        if !errors.is_empty() {
            tracing::info!("Rejecting prediction import with {} errors", errors.len());
            return Ok(ImportOutcome {
                created: 0,
                duplicates: 0,
                skipped_cells: sheet.skipped_cells,
                errors,
            });
        }

        let mut tx = self.pool.begin().await?;
        let mut created = 0;
        let mut duplicates = 0;
        for cell in &sheet.cells {
            let user_id = user_by_userid[&cell.userid];
            let fixture_id = fixture_by_column[&cell.column];
            let inserted = prediction_queries::insert_prediction_if_absent(
                &mut tx,
                user_id,
                fixture_id,
                cell.home_goals,
                cell.away_goals,
            )
            .await?;
            if inserted {
                created += 1;
            } else {
                duplicates += 1;
            }
        }
        tx.commit().await?;

        tracing::info!(
            "Imported prediction sheet: {} created, {} duplicates, {} skipped",
            created,
            duplicates,
            sheet.skipped_cells
        );

        Ok(ImportOutcome {
            created,
            duplicates,
            skipped_cells: sheet.skipped_cells,
            errors,
        })
    }
}
