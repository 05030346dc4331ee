use crate::data_transfer::{Barangay, City};
use itertools::Itertools;
use serde_json::Value;

/// Converts whatever the locations endpoint returned into the canonical
/// directory shape. Two shapes occur in the wild: an array that is already
/// the directory, and a plain object keyed by city name with barangay-name
/// arrays as values. Anything else yields an empty directory, and malformed
/// entries fall back to empty fields; display data is never worth failing
/// the view over.
pub(crate) fn normalize(response: &Value) -> Vec<City> {
    match response {
        Value::Array(cities) => cities.iter().map(city_from_entry).collect_vec(),
        Value::Object(barangay_names_by_city) => barangay_names_by_city
            .iter()
            .enumerate()
            .map(|(index, (name, barangay_names))| synthesized_city(index, name, barangay_names))
            .collect_vec(),
        _ => Vec::new(),
    }
}

fn city_from_entry(entry: &Value) -> City {
    City {
        code: string_field(entry, "code").into(),
        name: string_field(entry, "name"),
        barangays: entry
            .get("barangays")
            .and_then(Value::as_array)
            .map(|entries| entries.iter().map(barangay_from_entry).collect_vec())
            .unwrap_or_default(),
    }
}

fn barangay_from_entry(entry: &Value) -> Barangay {
    Barangay {
        code: string_field(entry, "code").into(),
        name: string_field(entry, "name"),
    }
}

fn string_field(entry: &Value, field: &str) -> String {
    entry
        .get(field)
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_owned()
}

/// Mapping entries carry no codes, so the i-th city becomes `CITY-<i>` and
/// its j-th barangay `BRGY-<i>-<j>`, both counted in document order.
fn synthesized_city(index: usize, name: &str, barangay_names: &Value) -> City {
    let barangays = barangay_names
        .as_array()
        .map(|names| {
            names
                .iter()
                .enumerate()
                .map(|(barangay_index, barangay_name)| Barangay {
                    code: format!("BRGY-{index}-{barangay_index}").into(),
                    name: barangay_name.as_str().unwrap_or_default().to_owned(),
                })
                .collect_vec()
        })
        .unwrap_or_default();

    City {
        code: format!("CITY-{index}").into(),
        name: name.to_owned(),
        barangays,
    }
}
