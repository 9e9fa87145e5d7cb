use chrono::TimeZone;

use reelscope_core::RawPost;

use super::*;

fn scratch_dir(label: &str) -> std::path::PathBuf {
    let dir = std::env::temp_dir().join(format!("reelscope-json-{label}-{}", std::process::id()));
    std::fs::create_dir_all(&dir).unwrap();
    dir
}

fn make_record(shortcode: &str, views: Option<u64>) -> VideoRecord {
    VideoRecord::from_raw(RawPost {
        shortcode: shortcode.to_owned(),
        taken_at: chrono::Utc.with_ymd_and_hms(2025, 3, 9, 15, 4, 0).unwrap(),
        caption: Some("Leg day #fitness @coach_dan".to_owned()),
        likes: 1200,
        comments: 48,
        is_video: true,
        video_view_count: views,
        video_url: Some("https://cdn.example.com/v.mp4".to_owned()),
        video_duration: Some(31.5),
        typename: "GraphVideo".to_owned(),
        is_sponsored: false,
        tagged_users: vec!["coach_dan".to_owned()],
        location: None,
        thumbnail_url: None,
    })
}

#[test]
fn json_round_trips_every_record_and_field() {
    let dir = scratch_dir("roundtrip");
    let path = dir.join("out.json");
    let records = vec![
        make_record("first", Some(100)),
        make_record("second", None),
        make_record("third", Some(0)),
    ];
    let scraped_at = Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap();

    export_json(&records, scraped_at, &path).unwrap();

    let body = std::fs::read_to_string(&path).unwrap();
    let value: serde_json::Value = serde_json::from_str(&body).unwrap();

    assert_eq!(value["scraped_at"], "2025-03-10T00:00:00Z");
    assert_eq!(value["total_videos"], 3);
    assert_eq!(value["videos"].as_array().unwrap().len(), 3);

    // Collection order is preserved index-for-index.
    assert_eq!(value["videos"][0]["shortcode"], "first");
    assert_eq!(value["videos"][1]["shortcode"], "second");
    assert_eq!(value["videos"][2]["shortcode"], "third");

    // Absent view count is null, not zero and not dropped.
    assert!(value["videos"][1]
        .as_object()
        .unwrap()
        .contains_key("video_view_count"));
    assert_eq!(value["videos"][1]["video_view_count"], serde_json::Value::Null);
    assert_eq!(value["videos"][2]["video_view_count"], 0);

    // Parsed records equal the in-memory ones.
    let parsed: Vec<VideoRecord> = serde_json::from_value(value["videos"].clone()).unwrap();
    assert_eq!(parsed, records);

    std::fs::remove_dir_all(&dir).ok();
}

#[test]
fn json_export_of_empty_list_writes_empty_document() {
    let dir = scratch_dir("empty");
    let path = dir.join("out.json");
    let scraped_at = Utc.with_ymd_and_hms(2025, 3, 10, 0, 0, 0).unwrap();

    export_json(&[], scraped_at, &path).unwrap();

    let value: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["total_videos"], 0);
    assert!(value["videos"].as_array().unwrap().is_empty());

    std::fs::remove_dir_all(&dir).ok();
}
