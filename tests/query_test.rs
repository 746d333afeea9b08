//! End-to-end tests of the query interface over the storage layer.

use divboard::storage::{LeaderboardDb, PlayerRow};
use divboard::{api, PlayerFilter, Region};

fn row(rank: u32, name: &str, team_tag: Option<&str>, country: Option<&str>) -> PlayerRow {
    PlayerRow {
        rank,
        name: name.to_string(),
        team_id: team_tag.map(|_| 42),
        team_tag: team_tag.map(str::to_string),
        sponsor: None,
        country: country.map(str::to_string),
    }
}

fn seeded_db() -> LeaderboardDb {
    let mut db = LeaderboardDb::open_in_memory().unwrap();
    let rows = vec![
        row(1, "John", Some(""), Some("US")),
        row(2, "joanna", Some("ABC"), Some("se")),
        row(3, "Bjorn", Some("XYZ"), Some("US")),
        row(4, "Mei", None, Some("zz")),
    ];
    db.replace_region(Region::Europe, &rows).unwrap();
    db.upsert_metadata(divboard::storage::KEY_TIME_POSTED, 1_700_000_000)
        .unwrap();
    db.upsert_metadata(
        divboard::storage::KEY_NEXT_SCHEDULED_POST_TIME,
        1_700_003_600,
    )
    .unwrap();
    db
}

#[test]
fn test_view_returns_rows_metadata_and_country_index() {
    let db = seeded_db();

    let view = api::leaderboard_view(&db, Region::Europe, &PlayerFilter::default()).unwrap();

    assert_eq!(view.region, Region::Europe);
    assert_eq!(view.players.len(), 4);
    assert_eq!(view.metadata.time_posted, Some(1_700_000_000));
    assert_eq!(view.metadata.next_scheduled_post_time, Some(1_700_003_600));

    // Index is sorted by display name; the unrecognized code files under
    // "Unknown".
    let names: Vec<&str> = view.countries.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Sweden", "United States of America", "Unknown"]);
    let codes: Vec<&str> = view.countries.iter().map(|c| c.code.as_str()).collect();
    assert_eq!(codes, vec!["SE", "US", "ZZ"]);
}

#[test]
fn test_view_applies_composed_filters() {
    let db = seeded_db();

    let filter = PlayerFilter::from_params(None, None, Some("us"), Some("yes"), None);
    let view = api::leaderboard_view(&db, Region::Europe, &filter).unwrap();

    // Only Bjorn is from the US with a non-empty team tag.
    assert_eq!(view.players.len(), 1);
    assert_eq!(view.players[0].rank, 3);
    assert_eq!(view.players[0].name, "Bjorn");
}

#[test]
fn test_view_name_prefix_filter() {
    let db = seeded_db();

    let filter = PlayerFilter::from_params(None, None, None, None, Some("jo"));
    let view = api::leaderboard_view(&db, Region::Europe, &filter).unwrap();

    let names: Vec<&str> = view.players.iter().map(|p| p.name.as_str()).collect();
    assert_eq!(names, vec!["John", "joanna"]);
}

#[test]
fn test_view_of_empty_region() {
    let db = seeded_db();

    let view = api::leaderboard_view(&db, Region::China, &PlayerFilter::default()).unwrap();
    assert!(view.players.is_empty());
    assert!(view.countries.is_empty());
    // Metadata is global, not per region.
    assert_eq!(view.metadata.time_posted, Some(1_700_000_000));
}

#[test]
fn test_file_backed_db_shared_between_writer_and_reader() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leaderboard.db");

    let mut writer = LeaderboardDb::open(&path).unwrap();
    writer
        .replace_region(Region::Americas, &[row(1, "Alice", None, Some("US"))])
        .unwrap();

    // A second handle, as the presentation layer would hold, sees the
    // committed snapshot.
    let reader = LeaderboardDb::open(&path).unwrap();
    let players = reader
        .find_players(Region::Americas, &PlayerFilter::default())
        .unwrap();
    assert_eq!(players.len(), 1);
    assert_eq!(players[0].name, "Alice");
}

#[test]
fn test_reopen_preserves_data_across_restart() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("leaderboard.db");

    {
        let mut db = LeaderboardDb::open(&path).unwrap();
        db.replace_region(Region::SeAsia, &[row(1, "Mei", None, Some("CN"))])
            .unwrap();
        db.upsert_metadata(divboard::storage::KEY_TIME_POSTED, 123)
            .unwrap();
    }

    // Schema creation re-runs on startup without clobbering existing rows.
    let db = LeaderboardDb::open(&path).unwrap();
    let players = db
        .find_players(Region::SeAsia, &PlayerFilter::default())
        .unwrap();
    assert_eq!(players[0].name, "Mei");
    assert_eq!(db.read_metadata().unwrap().time_posted, Some(123));
}
