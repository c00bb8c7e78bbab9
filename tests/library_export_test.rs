use physio_assist::core::library::{ExportFormat, LibraryQuery, LIBRARY_NOTICE};
use physio_assist::domain::model::Difficulty;
use physio_assist::domain::ports::Storage;
use physio_assist::{ExerciseLibrary, LocalStorage};
use tempfile::TempDir;

#[test]
fn test_csv_export_has_header_and_one_row_per_exercise() {
    let library = ExerciseLibrary::new();
    let exercises = library.query(&LibraryQuery::default());
    let csv_text = library.export(&exercises, ExportFormat::Csv).unwrap();

    let mut reader = csv::Reader::from_reader(csv_text.as_bytes());
    let headers = reader.headers().unwrap().clone();
    assert_eq!(headers.get(0), Some("id"));
    assert_eq!(headers.get(8), Some("body_parts"));

    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 6);
    assert_eq!(rows[1].get(1), Some("Wall Angels"));
    assert_eq!(rows[1].get(3), Some("Intermediate"));
    assert_eq!(rows[1].get(8), Some("Upper Back; Shoulders; Neck"));
    assert!(rows[0]
        .get(5)
        .unwrap()
        .starts_with("Stand and lean forward slightly"));
}

#[test]
fn test_json_export_of_filtered_query() {
    let library = ExerciseLibrary::new();
    let query = LibraryQuery {
        category: Some("Core".to_string()),
        ..Default::default()
    };
    let exercises = library.query(&query);
    let json = library.export(&exercises, ExportFormat::Json).unwrap();

    let parsed: serde_json::Value = serde_json::from_str(&json).unwrap();
    let items = parsed.as_array().unwrap();
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["name"], "Bird Dog");
    assert_eq!(items[0]["difficulty"], "Intermediate");
    assert_eq!(items[0]["instructions"].as_array().unwrap().len(), 5);
}

#[test]
fn test_text_export_of_empty_query_keeps_notice() {
    let library = ExerciseLibrary::new();
    let query = LibraryQuery {
        difficulty: Some(Difficulty::Advanced),
        ..Default::default()
    };
    let exercises = library.query(&query);
    assert!(exercises.is_empty());

    let text = library.export(&exercises, ExportFormat::Text).unwrap();
    assert!(text.contains(LIBRARY_NOTICE));
}

#[tokio::test]
async fn test_export_written_through_local_storage() {
    let temp_dir = TempDir::new().unwrap();
    let storage = LocalStorage::new(temp_dir.path());

    let library = ExerciseLibrary::new();
    let exercises = library.query(&LibraryQuery {
        body_part: Some("ankle".to_string()),
        ..Default::default()
    });
    let rendered = library.export(&exercises, ExportFormat::Csv).unwrap();
    storage
        .write_file("exports/ankles.csv", rendered.as_bytes())
        .await
        .unwrap();

    let written = std::fs::read_to_string(temp_dir.path().join("exports/ankles.csv")).unwrap();
    assert_eq!(written.lines().count(), 3);
    assert!(written.contains("Calf Raises"));
    assert!(written.contains("Ankle Pumps"));
}
