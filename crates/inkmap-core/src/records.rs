//! Reading records and the in-memory record store.
//!
//! The JSON shape (camelCase, a flat array of records) is the persisted
//! format reading-log frontends already use; `ReadingLog` round-trips it
//! losslessly. Grouping order is part of the contract: countries appear in
//! first-seen record order, books within a country in record order, and that
//! order drives downstream cluster placement.

use crate::country::{self, Lang};
use crate::error::{Error, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookInfo {
    pub id: String,
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    /// Display name of the author's country, as matched by the metadata
    /// service or entered by hand.
    #[serde(default)]
    pub country: String,
    /// ISO 3166-1 alpha-2 code; the key used for grouping and placement.
    pub country_code: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingRecord {
    pub id: String,
    pub book: BookInfo,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

/// Input for [`ReadingLog::add`]: a record before ids and `createdAt` are
/// assigned.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RecordDraft {
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub genre: Option<String>,
    #[serde(default)]
    pub country: String,
    pub country_code: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub end_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub review: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReadingStats {
    pub total_books: usize,
    pub total_countries: usize,
    /// Visited country codes in first-seen order.
    pub countries: Vec<String>,
}

/// Ordered collection of reading records.
#[derive(Debug, Clone, Default)]
pub struct ReadingLog {
    records: Vec<ReadingRecord>,
}

impl ReadingLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<ReadingRecord>) -> Self {
        Self { records }
    }

    /// Parses the persisted JSON array and validates every record.
    pub fn from_json_str(s: &str) -> Result<Self> {
        let records: Vec<ReadingRecord> = serde_json::from_str(s)?;
        let log = Self { records };
        log.validate()?;
        Ok(log)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.records)?)
    }

    pub fn to_json_string_pretty(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(&self.records)?)
    }

    fn validate(&self) -> Result<()> {
        for (index, record) in self.records.iter().enumerate() {
            if record.book.title.trim().is_empty() {
                return Err(Error::InvalidRecord {
                    index,
                    message: "empty book title".to_string(),
                });
            }
            if record.book.country_code.trim().is_empty() {
                return Err(Error::InvalidRecord {
                    index,
                    message: "empty country code".to_string(),
                });
            }
        }
        Ok(())
    }

    pub fn records(&self) -> &[ReadingRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Appends a record, assigning fresh ids and a `createdAt` timestamp.
    pub fn add(&mut self, draft: RecordDraft) -> ReadingRecord {
        let record = ReadingRecord {
            id: Uuid::new_v4().to_string(),
            book: BookInfo {
                id: Uuid::new_v4().to_string(),
                title: draft.title,
                author: draft.author,
                cover_url: draft.cover_url,
                genre: draft.genre,
                country: draft.country,
                country_code: draft.country_code,
            },
            start_date: draft.start_date,
            end_date: draft.end_date,
            review: draft.review,
            created_at: now_iso8601(),
        };
        self.records.push(record.clone());
        record
    }

    /// Appends a batch (e.g. a whole imported sheet) in input order.
    pub fn add_many(&mut self, drafts: Vec<RecordDraft>) -> Vec<ReadingRecord> {
        drafts.into_iter().map(|d| self.add(d)).collect()
    }

    /// Applies `apply` to the record with the given id. Returns whether the
    /// id existed; unknown ids are a no-op.
    pub fn update(&mut self, id: &str, apply: impl FnOnce(&mut ReadingRecord)) -> bool {
        match self.records.iter_mut().find(|r| r.id == id) {
            Some(record) => {
                apply(record);
                true
            }
            None => false,
        }
    }

    /// Removes the record with the given id. Returns whether the id existed.
    pub fn delete(&mut self, id: &str) -> bool {
        let before = self.records.len();
        self.records.retain(|r| r.id != id);
        self.records.len() != before
    }

    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Groups records by uppercased country code.
    ///
    /// Key order is first appearance in the record list; values keep record
    /// order. Downstream placement iterates this order, so the grouping is
    /// deliberately an `IndexMap`, never an unordered map.
    pub fn books_by_country(&self) -> IndexMap<String, Vec<&ReadingRecord>> {
        let mut by_country: IndexMap<String, Vec<&ReadingRecord>> = IndexMap::new();
        for record in &self.records {
            let code = record.book.country_code.to_ascii_uppercase();
            by_country.entry(code).or_default().push(record);
        }
        by_country
    }

    /// Visited country codes, deduplicated, in first-seen order.
    pub fn visited_countries(&self) -> Vec<String> {
        self.books_by_country().into_keys().collect()
    }

    pub fn stats(&self) -> ReadingStats {
        let countries = self.visited_countries();
        ReadingStats {
            total_books: self.records.len(),
            total_countries: countries.len(),
            countries,
        }
    }

    /// Builds the semantic model consumed by the layout stage:
    /// `{ "countries": [ { "code", "name", "books": [...] }, ... ] }` with
    /// countries in grouping order and English display names.
    pub fn world_map_model(&self) -> Value {
        self.world_map_model_in(Lang::En)
    }

    /// [`Self::world_map_model`] with display names in the given language.
    pub fn world_map_model_in(&self, lang: Lang) -> Value {
        let countries: Vec<Value> = self
            .books_by_country()
            .into_iter()
            .map(|(code, books)| {
                let name = country::name_or_code(&code, lang).to_string();
                json!({
                    "code": code,
                    "name": name,
                    "books": books,
                })
            })
            .collect();
        json!({ "countries": countries })
    }
}

fn now_iso8601() -> String {
    chrono::Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(id: &str, title: &str, code: &str) -> ReadingRecord {
        ReadingRecord {
            id: id.to_string(),
            book: BookInfo {
                id: format!("book-{id}"),
                title: title.to_string(),
                author: String::new(),
                cover_url: None,
                genre: None,
                country: String::new(),
                country_code: code.to_string(),
            },
            start_date: None,
            end_date: None,
            review: None,
            created_at: "2024-01-01T00:00:00.000Z".to_string(),
        }
    }

    #[test]
    fn grouping_keeps_first_seen_country_order_and_record_order() {
        let log = ReadingLog::from_records(vec![
            record("1", "A", "jp"),
            record("2", "B", "FR"),
            record("3", "C", "JP"),
        ]);

        let grouped = log.books_by_country();
        let codes: Vec<&str> = grouped.keys().map(String::as_str).collect();
        assert_eq!(codes, ["JP", "FR"]);
        let jp: Vec<&str> = grouped["JP"].iter().map(|r| r.id.as_str()).collect();
        assert_eq!(jp, ["1", "3"]);
    }

    #[test]
    fn stats_count_books_and_countries() {
        let log = ReadingLog::from_records(vec![
            record("1", "A", "JP"),
            record("2", "B", "FR"),
            record("3", "C", "JP"),
        ]);
        let stats = log.stats();
        assert_eq!(stats.total_books, 3);
        assert_eq!(stats.total_countries, 2);
        assert_eq!(stats.countries, ["JP", "FR"]);
    }

    #[test]
    fn add_assigns_ids_and_timestamp() {
        let mut log = ReadingLog::new();
        let added = log.add(RecordDraft {
            title: "Kokoro".to_string(),
            author: "Natsume Sōseki".to_string(),
            country: "Japan".to_string(),
            country_code: "JP".to_string(),
            ..RecordDraft::default()
        });
        assert!(!added.id.is_empty());
        assert!(!added.book.id.is_empty());
        assert_ne!(added.id, added.book.id);
        assert!(!added.created_at.is_empty());
        assert_eq!(log.len(), 1);
    }

    #[test]
    fn update_and_delete_signal_unknown_ids() {
        let mut log = ReadingLog::from_records(vec![record("1", "A", "JP")]);
        assert!(log.update("1", |r| r.review = Some("good".to_string())));
        assert_eq!(log.records()[0].review.as_deref(), Some("good"));
        assert!(!log.update("nope", |_| {}));
        assert!(log.delete("1"));
        assert!(!log.delete("1"));
        assert!(log.is_empty());
    }

    #[test]
    fn json_round_trip_preserves_records() {
        let log = ReadingLog::from_records(vec![record("1", "A", "JP")]);
        let text = log.to_json_string_pretty().expect("serialize");
        let back = ReadingLog::from_json_str(&text).expect("parse");
        assert_eq!(back.len(), 1);
        assert_eq!(back.records()[0].id, "1");
        assert_eq!(back.records()[0].book.country_code, "JP");
    }

    #[test]
    fn parse_rejects_records_without_title_or_country() {
        let text = r#"[{"id":"1","book":{"id":"b1","title":" ","countryCode":"JP"}}]"#;
        let err = ReadingLog::from_json_str(text).expect_err("invalid");
        assert!(matches!(err, Error::InvalidRecord { index: 0, .. }));

        let text = r#"[{"id":"1","book":{"id":"b1","title":"A","countryCode":""}}]"#;
        assert!(ReadingLog::from_json_str(text).is_err());
    }

    #[test]
    fn world_map_model_lists_countries_in_grouping_order() {
        let log = ReadingLog::from_records(vec![
            record("1", "A", "JP"),
            record("2", "B", "FR"),
            record("3", "C", "JP"),
        ]);
        let model = log.world_map_model();
        let countries = model["countries"].as_array().expect("countries array");
        assert_eq!(countries.len(), 2);
        assert_eq!(countries[0]["code"], "JP");
        assert_eq!(countries[0]["name"], "Japan");
        assert_eq!(countries[0]["books"].as_array().map(Vec::len), Some(2));
        assert_eq!(countries[1]["code"], "FR");
    }
}
