use itertools::Itertools;
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use shared_kernel::date_time::manila_date_time::ManilaDateTime;
use shared_kernel::string_key;
use url::Url;

string_key!(NoticeId);

/// A scraped interruption notice as returned by the notices endpoint.
///
/// The `data` column is filled in by an extraction pipeline that is allowed
/// to fail or emit partial output, so everything past the notice envelope is
/// decoded leniently. A notice whose `data` cannot be interpreted is still a
/// valid notice, it just never matches any location.
#[derive(Clone, Debug, Deserialize, PartialEq)]
pub struct Notice {
    pub id: NoticeId,
    pub title: String,
    pub url: Url,
    pub created_at: ManilaDateTime,
    #[serde(default, deserialize_with = "lenient_payload")]
    pub data: Option<NoticePayload>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct NoticePayload {
    pub structured: Option<Vec<StructuredEntry>>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct StructuredEntry {
    pub dates: Option<Vec<String>>,
    pub times: Option<Vec<String>>,
    pub reason: Option<String>,
    pub locations: Option<Vec<AffectedLocation>>,
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AffectedLocation {
    pub municipality: Option<String>,
    pub barangays: Option<Vec<String>>,
}

fn lenient_payload<'de, D>(deserializer: D) -> Result<Option<NoticePayload>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(NoticePayload::from_value(&value))
}

impl NoticePayload {
    pub(crate) fn from_value(value: &Value) -> Option<NoticePayload> {
        let object = value.as_object()?;
        Some(NoticePayload {
            structured: object.get("structured").and_then(Value::as_array).map(|entries| {
                entries.iter().map(StructuredEntry::from_value).collect_vec()
            }),
        })
    }
}

impl StructuredEntry {
    fn from_value(value: &Value) -> StructuredEntry {
        value.as_object().map_or_else(Default::default, |object| StructuredEntry {
            dates: string_members(object.get("dates")),
            times: string_members(object.get("times")),
            reason: object.get("reason").and_then(Value::as_str).map(str::to_owned),
            locations: object.get("locations").and_then(Value::as_array).map(|entries| {
                entries.iter().map(AffectedLocation::from_value).collect_vec()
            }),
        })
    }
}

impl AffectedLocation {
    fn from_value(value: &Value) -> AffectedLocation {
        value.as_object().map_or_else(Default::default, |object| AffectedLocation {
            municipality: object.get("municipality").and_then(Value::as_str).map(str::to_owned),
            barangays: string_members(object.get("barangays")),
        })
    }
}

/// Keeps the string members of an array field; a field that is missing or
/// not an array at all comes back as `None`.
fn string_members(value: Option<&Value>) -> Option<Vec<String>> {
    value.and_then(Value::as_array).map(|members| {
        members.iter().filter_map(Value::as_str).map(str::to_owned).collect_vec()
    })
}
