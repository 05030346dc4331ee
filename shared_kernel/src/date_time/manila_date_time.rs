use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use chrono_tz::Asia::Manila;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Eq, Hash, PartialEq, Serialize, Deserialize)]
/// ManilaDateTime stores the instant as `DateTime<Utc>` for easier
/// serialization and deserialization; the Asia/Manila conversion happens
/// only when the value is displayed.
pub struct ManilaDateTime(DateTime<Utc>);

impl ManilaDateTime {
    pub fn date(&self) -> NaiveDate {
        self.to_date_time().date_naive()
    }

    pub fn to_date_time(&self) -> DateTime<Tz> {
        Manila.from_utc_datetime(&self.0.naive_utc())
    }

    /// Wall-clock rendering used by the console views, e.g.
    /// `Sep 02, 2025 04:51 PM`.
    pub fn to_display(&self) -> String {
        self.to_date_time().format("%b %d, %Y %I:%M %p").to_string()
    }
}

impl From<DateTime<Utc>> for ManilaDateTime {
    fn from(value: DateTime<Utc>) -> ManilaDateTime {
        ManilaDateTime(value)
    }
}
