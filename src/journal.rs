//! The private journal: entries kept newest-first and persisted as one JSON
//! array under [`JOURNAL_KEY`].

use crate::storage::{KeyValueStore, StorageResult};
use crate::types::{JournalEntry, Mood};
use serde_json::{Map, Value};
use time::format_description::FormatItem;
use time::format_description::well_known::Rfc3339;
use time::macros::format_description;
use time::{Duration, OffsetDateTime, UtcOffset};
use tracing::{info, warn};

pub const JOURNAL_KEY: &str = "journalEntries";
pub const DEFAULT_TITLE: &str = "No Title";

const ENTRY_DATE_FORMAT: &[FormatItem<'static>] = format_description!(
    "[year]-[month]-[day]T[hour]:[minute]:[second].[subsecond digits:3]Z"
);

const ENTRY_DISPLAY_FORMAT: &[FormatItem<'static>] = format_description!(
    "[month padding:none]/[day padding:none]/[year], [hour repr:12 padding:none]:[minute]:[second] [period case:upper]"
);

/// The editable fields of an entry that has not been saved yet.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct JournalDraft {
    pub title: String,
    pub mood: Mood,
    pub text: String,
}

impl JournalDraft {
    pub fn new(title: impl Into<String>, mood: Mood, text: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            mood,
            text: text.into(),
        }
    }

    pub fn is_savable(&self) -> bool {
        !self.title.trim().is_empty() && !self.text.trim().is_empty()
    }
}

/// A string field of a stored entry. Absent, empty and non-string values all
/// count as missing.
fn stored_str<'a>(entry: &'a Map<String, Value>, field: &str) -> Option<&'a str> {
    entry
        .get(field)
        .and_then(Value::as_str)
        .filter(|value| !value.is_empty())
}

/// Migrate one stored entry. Entries that are not objects or have no date are dropped.
fn migrate_entry(value: &Value) -> Option<JournalEntry> {
    let entry = value.as_object()?;
    let date = stored_str(entry, "date")?;
    let title = stored_str(entry, "title").unwrap_or(DEFAULT_TITLE);
    let mood = stored_str(entry, "mood")
        .and_then(Mood::from_label)
        .unwrap_or_default();
    let text = entry.get("text").and_then(Value::as_str).unwrap_or_default();
    Some(JournalEntry {
        date: date.to_string(),
        title: title.to_string(),
        mood,
        text: text.to_string(),
    })
}

/// Parse a persisted journal, filling in fields older entries may lack.
///
/// Only a journal that is not a JSON array is an error; a malformed entry is
/// repaired or dropped on its own so it cannot take its neighbours with it.
pub fn migrate_entries(raw: &str) -> serde_json::Result<Vec<JournalEntry>> {
    let stored: Vec<Value> = serde_json::from_str(raw)?;
    let entries: Vec<JournalEntry> = stored.iter().filter_map(migrate_entry).collect();
    if entries.len() < stored.len() {
        warn!(
            dropped = stored.len() - entries.len(),
            "dropped journal entries without a date"
        );
    }
    Ok(entries)
}

pub struct JournalStore<S> {
    store: S,
    entries: Vec<JournalEntry>,
}

impl<S: KeyValueStore> JournalStore<S> {
    pub fn open(store: S) -> Self {
        let entries = load(&store);
        Self { store, entries }
    }

    /// Like [`JournalStore::open`], but a store that cannot be read is an error
    /// instead of an empty journal.
    pub fn try_open(store: S) -> StorageResult<Self> {
        let entries = try_load(&store)?;
        Ok(Self { store, entries })
    }

    /// Entries, newest first.
    pub fn entries(&self) -> &[JournalEntry] {
        &self.entries
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Re-read the persisted journal, replacing the in-memory copy.
    pub fn reload(&mut self) -> &[JournalEntry] {
        self.entries = load(&self.store);
        &self.entries
    }

    pub fn save(&mut self, draft: &JournalDraft) -> StorageResult<Option<&JournalEntry>> {
        self.save_at(draft, OffsetDateTime::now_utc())
    }

    /// Prepend `draft` stamped at `now` and write the whole journal back.
    ///
    /// A draft with a blank title or blank text is ignored and nothing is
    /// written. On a write failure the entry stays in memory and the error is
    /// returned.
    pub fn save_at(
        &mut self,
        draft: &JournalDraft,
        now: OffsetDateTime,
    ) -> StorageResult<Option<&JournalEntry>> {
        if !draft.is_savable() {
            return Ok(None);
        }

        let entry = JournalEntry {
            date: self.unique_date(now),
            title: draft.title.clone(),
            mood: draft.mood,
            text: draft.text.clone(),
        };
        self.entries.insert(0, entry);

        let serialized = serde_json::to_string(&self.entries)?;
        self.store.set(JOURNAL_KEY, &serialized)?;
        info!(entries = self.entries.len(), "saved journal entry");
        Ok(self.entries.first())
    }

    fn unique_date(&self, now: OffsetDateTime) -> String {
        let mut stamp = now.to_offset(UtcOffset::UTC);
        loop {
            let date = format_entry_date(stamp);
            if !self.entries.iter().any(|entry| entry.date == date) {
                return date;
            }
            stamp += Duration::milliseconds(1);
        }
    }
}

/// Read the journal from `store`. Missing or unreadable data yields an empty journal.
pub fn load<S: KeyValueStore + ?Sized>(store: &S) -> Vec<JournalEntry> {
    try_load(store).unwrap_or_else(|err| {
        warn!(error = %err, "failed to read journal");
        Vec::new()
    })
}

/// Read the journal from `store`, failing only when the store itself fails.
/// Data that is not a JSON array still yields an empty journal.
pub fn try_load<S: KeyValueStore + ?Sized>(store: &S) -> StorageResult<Vec<JournalEntry>> {
    let Some(raw) = store.get(JOURNAL_KEY)? else {
        return Ok(Vec::new());
    };
    Ok(migrate_entries(&raw).unwrap_or_else(|err| {
        warn!(error = %err, "ignoring unreadable journal");
        Vec::new()
    }))
}

pub fn format_entry_date(stamp: OffsetDateTime) -> String {
    stamp
        .to_offset(UtcOffset::UTC)
        .format(ENTRY_DATE_FORMAT)
        .unwrap_or_else(|_| stamp.unix_timestamp().to_string())
}

/// Render an entry date in the local offset, falling back to the raw string.
pub fn display_entry_date(date: &str) -> String {
    let Ok(mut stamp) = OffsetDateTime::parse(date, &Rfc3339) else {
        return date.to_string();
    };
    if let Ok(offset) = UtcOffset::current_local_offset() {
        stamp = stamp.to_offset(offset);
    }
    stamp
        .format(ENTRY_DISPLAY_FORMAT)
        .unwrap_or_else(|_| date.to_string())
}
