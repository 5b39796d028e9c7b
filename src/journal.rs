use crate::catalog::ActivityKind;
use crate::errors::AppError;
use crate::models::{Activity, Entry, EntryDraft, MANUAL_SOURCE};
use chrono::{DateTime, Local, NaiveDate, NaiveDateTime, TimeZone, Utc};

/// The session's entries, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Journal {
    entries: Vec<Entry>,
}

impl Journal {
    pub fn from_entries(entries: Vec<Entry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[Entry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Epoch milliseconds, bumped past every id already in use.
    pub fn next_id(&self, now: DateTime<Utc>) -> u64 {
        let candidate = u64::try_from(now.timestamp_millis()).unwrap_or(0);
        match self.entries.iter().map(|entry| entry.id).max() {
            Some(max) if max >= candidate => max.saturating_add(1),
            _ => candidate,
        }
    }

    /// Turns a draft into an entry and puts it at the front.
    pub fn add(&mut self, draft: EntryDraft, now: DateTime<Utc>) -> Result<Entry, AppError> {
        let kind: ActivityKind = draft
            .kind
            .parse()
            .map_err(|err| AppError::bad_request(format!("{err}")))?;
        let timestamp = parse_timestamp(draft.date.as_deref(), now)?;

        let entry = Entry {
            id: self.next_id(now),
            timestamp,
            activity: Activity::from_draft(kind, &draft),
            notes: draft
                .notes
                .map(|notes| notes.trim().to_string())
                .filter(|notes| !notes.is_empty()),
            source: MANUAL_SOURCE.to_string(),
        };

        self.entries.insert(0, entry.clone());
        Ok(entry)
    }

    pub fn remove(&mut self, id: u64) -> Option<Entry> {
        let index = self.entries.iter().position(|entry| entry.id == id)?;
        Some(self.entries.remove(index))
    }

    /// Entries on `day` in local time, in collection order.
    pub fn entries_on(&self, day: NaiveDate) -> Vec<&Entry> {
        self.entries
            .iter()
            .filter(|entry| entry.timestamp.with_timezone(&Local).date_naive() == day)
            .collect()
    }
}

/// Reads an RFC 3339 instant or a local `YYYY-MM-DDTHH:MM[:SS]` form value.
/// Blank means `now`.
pub fn parse_timestamp(raw: Option<&str>, now: DateTime<Utc>) -> Result<DateTime<Utc>, AppError> {
    let raw = match raw.map(str::trim) {
        Some(raw) if !raw.is_empty() => raw,
        _ => return Ok(now),
    };

    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return Ok(parsed.with_timezone(&Utc));
    }

    let naive = NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M")
        .or_else(|_| NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S"))
        .map_err(|_| AppError::bad_request(format!("invalid date '{raw}'")))?;

    Local
        .from_local_datetime(&naive)
        .earliest()
        .map(|local| local.with_timezone(&Utc))
        .ok_or_else(|| AppError::bad_request(format!("'{raw}' does not exist in local time")))
}
