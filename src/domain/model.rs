use chrono::{Days, NaiveDate};
use serde::ser::SerializeMap;
use serde::{Serialize, Serializer};
use serde_json::Value;
use std::collections::BTreeMap;
use std::fmt;

/// Value reported in place of rates when a date's request fails in transport.
pub const ERROR_SENTINEL: &str = "Error fetching data";

/// A calendar date rendered as `DD.MM.YYYY`, the format the rates API expects.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct DateKey(NaiveDate);

impl DateKey {
    pub fn new(date: NaiveDate) -> Self {
        Self(date)
    }

    /// `today - offset` days; `None` only when the calendar underflows.
    pub fn days_before(today: NaiveDate, offset: u32) -> Option<Self> {
        today.checked_sub_days(Days::new(u64::from(offset))).map(Self)
    }

}

impl fmt::Display for DateKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format("%d.%m.%Y"))
    }
}

impl Serialize for DateKey {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One currency's rates for a day. `Empty` serializes as `{}`; quoted values
/// are whatever the API sent, `null` when the field was absent.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum RateRecord {
    Quoted { sale: Value, purchase: Value },
    Empty {},
}

impl RateRecord {
    pub fn quoted(sale: impl Into<Value>, purchase: impl Into<Value>) -> Self {
        RateRecord::Quoted {
            sale: sale.into(),
            purchase: purchase.into(),
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, RateRecord::Empty {})
    }
}

impl Default for RateRecord {
    fn default() -> Self {
        RateRecord::Empty {}
    }
}

/// Currency code to rate record, e.g. `{"EUR": {...}, "USD": {}}`.
pub type RateEntry = BTreeMap<String, RateRecord>;

#[derive(Debug, Clone, PartialEq)]
pub enum DailyOutcome {
    Rates(RateEntry),
    Failed,
}

/// Result for a single date, serialized as a one-key object
/// `{"DD.MM.YYYY": <rates or sentinel>}`.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyResult {
    pub date: DateKey,
    pub outcome: DailyOutcome,
}

impl DailyResult {
    pub fn rates(date: DateKey, entry: RateEntry) -> Self {
        Self {
            date,
            outcome: DailyOutcome::Rates(entry),
        }
    }

    pub fn failed(date: DateKey) -> Self {
        Self {
            date,
            outcome: DailyOutcome::Failed,
        }
    }

    pub fn entry(&self) -> Option<&RateEntry> {
        match &self.outcome {
            DailyOutcome::Rates(entry) => Some(entry),
            DailyOutcome::Failed => None,
        }
    }

    pub fn is_failed(&self) -> bool {
        matches!(self.outcome, DailyOutcome::Failed)
    }
}

impl Serialize for DailyResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(1))?;
        match &self.outcome {
            DailyOutcome::Rates(entry) => map.serialize_entry(&self.date, entry)?,
            DailyOutcome::Failed => map.serialize_entry(&self.date, ERROR_SENTINEL)?,
        }
        map.end()
    }
}

/// Results in day-offset order, most recent first.
pub type FetchResults = Vec<DailyResult>;
