//! Parsing of uploaded prediction sheets: a zip archive whose first entry is
//! a semicolon-delimited CSV.
//!
//! Sheet layout (positional): header columns 2..N each name one fixture as
//! `"<home_team> - <away_team>"`; data rows carry the userid in column 1 and
//! one `"<home_goals>:<away_goals>"` cell per fixture column. An empty cell
//! or the `-:-` placeholder means "no prediction submitted" and is skipped.

use std::io::{Cursor, Read};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sentinel for "no prediction submitted".
pub const NO_PREDICTION: &str = "-:-";

/// Number of leading metadata columns before the fixture columns start.
const FIXTURE_COLUMN_OFFSET: usize = 2;
/// Column carrying the userid in data rows.
const USERID_COLUMN: usize = 1;

#[derive(Debug, Error)]
pub enum ImportError {
    #[error("invalid zip archive: {0}")]
    BadArchive(#[from] zip::result::ZipError),
    #[error("archive contains no files")]
    EmptyArchive,
    #[error("failed to read archived file: {0}")]
    Read(#[from] std::io::Error),
    #[error("malformed csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("sheet has no header row")]
    MissingHeader,
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// One header column resolved to a team pair.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureColumn {
    pub index: usize,
    pub home_team: String,
    pub away_team: String,
}

/// One well-formed prediction cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PredictionCell {
    /// 1-based CSV line of the row the cell came from.
    pub line: usize,
    pub userid: String,
    /// Column index, matching a `FixtureColumn::index`.
    pub column: usize,
    pub home_goals: i32,
    pub away_goals: i32,
}

/// A cell or column the sheet parser or resolver rejected. Line 1 is the
/// header row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CellError {
    pub line: usize,
    pub column: usize,
    pub message: String,
}

#[derive(Debug, Default)]
pub struct ParsedSheet {
    pub fixtures: Vec<FixtureColumn>,
    pub cells: Vec<PredictionCell>,
    /// Cells holding the placeholder or nothing at all.
    pub skipped_cells: usize,
    pub errors: Vec<CellError>,
}

/// Pull the CSV text out of the archive. The file at index 0 is the sheet;
/// additional entries are ignored. An empty archive is fatal.
pub fn read_archive_csv(bytes: &[u8]) -> Result<String, ImportError> {
    let mut archive = zip::ZipArchive::new(Cursor::new(bytes))?;
    if archive.len() == 0 {
        return Err(ImportError::EmptyArchive);
    }
    let mut file = archive.by_index(0)?;
    let mut text = String::new();
    file.read_to_string(&mut text)?;
    Ok(text)
}

/// Parse the sheet, collecting every malformed header column and goal cell
/// instead of failing on the first one. Only a sheet without any header row
/// is fatal.
pub fn parse_sheet(csv_text: &str) -> Result<ParsedSheet, ImportError> {
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(b';')
        .has_headers(false)
        .flexible(true)
        .from_reader(csv_text.as_bytes());
    let mut records = reader.records();

    let header = match records.next() {
        Some(record) => record?,
        None => return Err(ImportError::MissingHeader),
    };

    let mut sheet = ParsedSheet::default();

    for index in FIXTURE_COLUMN_OFFSET..header.len() {
        let cell = header[index].trim();
        let parts: Vec<&str> = cell.split(" - ").collect();
        if parts.len() >= 2 {
            sheet.fixtures.push(FixtureColumn {
                index,
                home_team: parts[0].trim().to_string(),
                away_team: parts[1].trim().to_string(),
            });
        } else {
            sheet.errors.push(CellError {
                line: 1,
                column: index,
                message: format!("malformed fixture column: {:?}", cell),
            });
        }
    }

    for (row_number, record) in records.enumerate() {
        let record = record?;
        let line = row_number + 2;

        if record.len() <= USERID_COLUMN {
            sheet.errors.push(CellError {
                line,
                column: USERID_COLUMN,
                message: "row too short, no userid".to_string(),
            });
            continue;
        }
        let userid = record[USERID_COLUMN].trim().to_string();

        for column in FIXTURE_COLUMN_OFFSET..record.len() {
            let cell = record[column].trim();
            if cell.is_empty() || cell == NO_PREDICTION {
                sheet.skipped_cells += 1;
                continue;
            }
            match parse_goal_cell(cell) {
                Some((home_goals, away_goals)) => sheet.cells.push(PredictionCell {
                    line,
                    userid: userid.clone(),
                    column,
                    home_goals,
                    away_goals,
                }),
                None => sheet.errors.push(CellError {
                    line,
                    column,
                    message: format!("malformed prediction cell: {:?}", cell),
                }),
            }
        }
    }

    Ok(sheet)
}

fn parse_goal_cell(cell: &str) -> Option<(i32, i32)> {
    let (home, away) = cell.split_once(':')?;
    let home_goals = home.trim().parse::<i32>().ok()?;
    let away_goals = away.trim().parse::<i32>().ok()?;
    Some((home_goals, away_goals))
}
