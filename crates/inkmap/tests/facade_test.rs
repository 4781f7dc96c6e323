#![cfg(feature = "layout")]

use inkmap::layout::layout_log;
use inkmap::{ReadingLog, RecordDraft};

#[test]
fn layout_log_places_recorded_countries() {
    let mut log = ReadingLog::new();
    let first = log.add(RecordDraft {
        title: "Kokoro".to_string(),
        author: "Natsume Sōseki".to_string(),
        country: "Japan".to_string(),
        country_code: "JP".to_string(),
        ..RecordDraft::default()
    });
    log.add(RecordDraft {
        title: "The Stranger".to_string(),
        author: "Albert Camus".to_string(),
        country: "France".to_string(),
        country_code: "FR".to_string(),
        ..RecordDraft::default()
    });

    let layout = layout_log(&log).expect("layout ok");
    assert_eq!(layout.clusters.len(), 2);
    assert_eq!(layout.clusters[0].code, "JP");
    assert_eq!(layout.clusters[1].code, "FR");
    // Item offsets are keyed by record id so consumers can join back to the
    // log without positional bookkeeping.
    assert_eq!(layout.clusters[0].items[0].id, first.id);
}

#[test]
fn layout_log_is_pure_with_respect_to_the_log() {
    let mut log = ReadingLog::new();
    log.add(RecordDraft {
        title: "Dom Casmurro".to_string(),
        country_code: "BR".to_string(),
        ..RecordDraft::default()
    });

    let before = log.to_json_string().expect("serialize");
    let _ = layout_log(&log).expect("layout ok");
    let after = log.to_json_string().expect("serialize");
    assert_eq!(before, after);
}
