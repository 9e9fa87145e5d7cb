use chrono::TimeZone;

use reelscope_core::RawPost;

use super::*;

fn scratch_dir(label: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("reelscope-csv-{label}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn make_record(shortcode: &str, views: Option<u64>) -> VideoRecord {
    VideoRecord::from_raw(RawPost {
        shortcode: shortcode.to_owned(),
        taken_at: chrono::Utc.with_ymd_and_hms(2025, 3, 9, 15, 4, 0).unwrap(),
        caption: Some("Leg day #fitness #grind @coach_dan @gym.austin".to_owned()),
        likes: 1200,
        comments: 48,
        is_video: true,
        video_view_count: views,
        video_url: Some("https://cdn.example.com/v.mp4".to_owned()),
        video_duration: Some(31.5),
        typename: "GraphVideo".to_owned(),
        is_sponsored: false,
        tagged_users: vec!["coach_dan".to_owned(), "gym.austin".to_owned()],
        location: None,
        thumbnail_url: None,
    })
}

#[test]
fn csv_export_of_empty_list_is_a_no_op() {
    let dir = scratch_dir("empty");
    let path = dir.join("out.csv");

    export_csv(&[], &path).unwrap();

    assert!(!path.exists(), "empty export must not create a file");
    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn csv_has_fixed_header_and_preserves_order() {
    let dir = scratch_dir("order");
    let path = dir.join("out.csv");
    let records = vec![make_record("first", Some(100)), make_record("second", None)];

    export_csv(&records, &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let header: Vec<String> = reader
        .headers()
        .unwrap()
        .iter()
        .map(str::to_owned)
        .collect();
    assert_eq!(header, COLUMNS);

    let rows: Vec<csv::StringRecord> = reader.records().map(Result::unwrap).collect();
    assert_eq!(rows.len(), 2);
    assert_eq!(&rows[0][0], "first");
    assert_eq!(&rows[1][0], "second");

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn csv_flattens_lists_and_blanks_absent_fields() {
    let dir = scratch_dir("cells");
    let path = dir.join("out.csv");

    export_csv(&[make_record("a", None)], &path).unwrap();

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let row = reader.records().next().unwrap().unwrap();

    assert_eq!(&row[2], "2025-03-09T15:04:00Z");
    assert_eq!(&row[4], "1200");
    assert_eq!(&row[6], "", "absent view count renders as empty cell");
    assert_eq!(&row[7], "31.5");
    assert_eq!(&row[8], "fitness, grind");
    assert_eq!(&row[9], "coach_dan, gym.austin");
    assert_eq!(&row[10], "coach_dan, gym.austin");
    assert_eq!(&row[11], "", "absent location renders as empty cell");
    assert_eq!(&row[12], "https://cdn.example.com/v.mp4");

    std::fs::remove_dir_all(&dir).ok();
}
