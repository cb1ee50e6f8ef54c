/// Record identifiers are positive integers assigned by the store.
pub type DbId = i64;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

/// Calendar dates (due dates, deadlines, maintenance dates).
pub type Date = chrono::NaiveDate;
