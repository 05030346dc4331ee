use interruption_notices::data_transfer::{AffectedLocation, Notice, StructuredEntry};
use itertools::Itertools;

pub const ALL_CLEAR_MESSAGE: &str = "Great! No scheduled brownout in your area";
pub const EMPTY_LISTING_MESSAGE: &str = "No notices found";

/// One notice as a small block of lines: the envelope first, then whatever
/// schedule details the extraction produced. Entries with nothing usable in
/// them contribute nothing.
pub fn notice_report(notice: &Notice) -> String {
    let mut lines = vec![
        notice.title.clone(),
        format!("  Published: {}", notice.created_at.to_display()),
        format!("  Link: {}", notice.url),
    ];
    for entry in structured_entries(notice) {
        lines.extend(entry_lines(entry));
    }
    lines.join("\n")
}

/// The report for a filtered selection: the matching notices, or the
/// all-clear line when nothing affects the selected area.
pub fn selection_report(visible: &[&Notice]) -> String {
    if visible.is_empty() {
        return ALL_CLEAR_MESSAGE.to_owned();
    }
    visible.iter().map(|notice| notice_report(notice)).join("\n\n")
}

/// The unfiltered listing used by the listing-only variant.
pub fn full_listing(notices: &[Notice]) -> String {
    if notices.is_empty() {
        return EMPTY_LISTING_MESSAGE.to_owned();
    }
    notices.iter().map(notice_report).join("\n\n")
}

fn structured_entries(notice: &Notice) -> &[StructuredEntry] {
    notice
        .data
        .as_ref()
        .and_then(|payload| payload.structured.as_deref())
        .unwrap_or_default()
}

fn entry_lines(entry: &StructuredEntry) -> Vec<String> {
    let mut lines = Vec::new();
    if let Some(dates) = non_empty(&entry.dates) {
        lines.push(format!("  Date: {}", dates.iter().join(", ")));
    }
    if let Some(times) = non_empty(&entry.times) {
        lines.push(format!("  Time: {}", times.iter().join(", ")));
    }
    if let Some(reason) = &entry.reason {
        lines.push(format!("  Reason: {reason}"));
    }
    for location in entry.locations.iter().flatten() {
        if let Some(area) = affected_area(location) {
            lines.push(format!("  Area: {area}"));
        }
    }
    lines
}

fn non_empty(values: &Option<Vec<String>>) -> Option<&Vec<String>> {
    values.as_ref().filter(|values| !values.is_empty())
}

fn affected_area(location: &AffectedLocation) -> Option<String> {
    let municipality = location.municipality.as_ref()?;
    let barangays = location.barangays.as_deref().unwrap_or_default();
    if barangays.is_empty() {
        return Some(municipality.clone());
    }
    Some(format!("{municipality} - {}", barangays.iter().join(", ")))
}
