use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;

use livescore_backend::imports::sheet::{
    parse_sheet, read_archive_csv, ImportError, NO_PREDICTION,
};

fn zip_with_csv(content: &str) -> Vec<u8> {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("predictions.csv", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(content.as_bytes()).unwrap();
    writer.finish().unwrap().into_inner()
}

#[test]
fn minimal_sheet_yields_one_prediction() {
    let csv = "timestamp;user;Arsenal - Chelsea;Leeds - Derby\n\
               2024-08-10;alice;2:1;-:-\n";
    let archive = zip_with_csv(csv);

    let text = read_archive_csv(&archive).unwrap();
    let sheet = parse_sheet(&text).unwrap();

    assert_eq!(sheet.fixtures.len(), 2);
    assert_eq!(sheet.fixtures[0].home_team, "Arsenal");
    assert_eq!(sheet.fixtures[0].away_team, "Chelsea");

    assert_eq!(sheet.cells.len(), 1);
    let cell = &sheet.cells[0];
    assert_eq!(cell.userid, "alice");
    assert_eq!(cell.column, 2);
    assert_eq!((cell.home_goals, cell.away_goals), (2, 1));

    assert_eq!(sheet.skipped_cells, 1);
    assert!(sheet.errors.is_empty());
}

#[test]
fn placeholder_and_empty_cells_are_skipped() {
    let csv = "ts;user;A - B;C - D;E - F\n\
               x;bob;-:-;;1:0\n";
    let sheet = parse_sheet(csv).unwrap();

    assert_eq!(sheet.cells.len(), 1);
    assert_eq!(sheet.cells[0].column, 4);
    assert_eq!(sheet.skipped_cells, 2);
    assert_eq!(sheet.cells[0].home_goals, 1);
    assert_eq!(sheet.cells[0].away_goals, 0);
}

#[test]
fn malformed_goal_cell_is_collected_not_fatal() {
    let csv = "ts;user;A - B;C - D\n\
               x;bob;two:one;3:2\n";
    let sheet = parse_sheet(csv).unwrap();

    assert_eq!(sheet.cells.len(), 1);
    assert_eq!((sheet.cells[0].home_goals, sheet.cells[0].away_goals), (3, 2));
    assert_eq!(sheet.errors.len(), 1);
    assert_eq!(sheet.errors[0].line, 2);
    assert_eq!(sheet.errors[0].column, 2);
}

#[test]
fn malformed_fixture_column_is_reported() {
    let csv = "ts;user;ArsenalChelsea\n\
               x;bob;2:1\n";
    let sheet = parse_sheet(csv).unwrap();

    assert!(sheet.fixtures.is_empty());
    assert_eq!(sheet.errors.len(), 1);
    assert_eq!(sheet.errors[0].line, 1);
    // The cell itself still parses; resolution decides its fate
    assert_eq!(sheet.cells.len(), 1);
}

#[test]
fn row_without_userid_is_an_error() {
    let csv = "ts;user;A - B\n\
               lonely\n";
    let sheet = parse_sheet(csv).unwrap();

    assert!(sheet.cells.is_empty());
    assert_eq!(sheet.errors.len(), 1);
    assert_eq!(sheet.errors[0].line, 2);
}

#[test]
fn several_users_and_rows_parse_fully() {
    let csv = "ts;user;A - B;C - D\n\
               x;alice;2:1;0:0\n\
               x;bob;-:-;1:3\n\
               x;carol;4:4;\n";
    let sheet = parse_sheet(csv).unwrap();

    assert_eq!(sheet.cells.len(), 4);
    assert_eq!(sheet.skipped_cells, 2);
    assert!(sheet.errors.is_empty());

    let bob: Vec<_> = sheet.cells.iter().filter(|c| c.userid == "bob").collect();
    assert_eq!(bob.len(), 1);
    assert_eq!((bob[0].home_goals, bob[0].away_goals), (1, 3));
}

#[test]
fn empty_archive_is_fatal() {
    let writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    let bytes = writer.finish().unwrap().into_inner();

    let result = read_archive_csv(&bytes);
    assert!(matches!(result, Err(ImportError::EmptyArchive)));
}

#[test]
fn garbage_bytes_are_not_an_archive() {
    let result = read_archive_csv(b"definitely not a zip file");
    assert!(matches!(result, Err(ImportError::BadArchive(_))));
}

#[test]
fn sheet_without_rows_is_missing_header() {
    let result = parse_sheet("");
    assert!(matches!(result, Err(ImportError::MissingHeader)));
}

#[test]
fn only_first_archive_entry_is_read() {
    let mut writer = zip::ZipWriter::new(Cursor::new(Vec::new()));
    writer
        .start_file("predictions.csv", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"ts;user;A - B\n").unwrap();
    writer
        .start_file("notes.txt", SimpleFileOptions::default())
        .unwrap();
    writer.write_all(b"ignore me").unwrap();
    let bytes = writer.finish().unwrap().into_inner();

    let text = read_archive_csv(&bytes).unwrap();
    assert!(text.starts_with("ts;user"));
}

#[test]
fn placeholder_constant_matches_sheet_sentinel() {
    assert_eq!(NO_PREDICTION, "-:-");
}
