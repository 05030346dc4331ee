use crate::data_transfer::{AffectedLocation, Notice, StructuredEntry};
use itertools::Itertools;

/// Returns the notices that affect the given barangay of the given city,
/// preserving the order of `notices`.
///
/// Matching is existential: a notice qualifies as soon as one affected
/// location in one of its structured entries names both the city and the
/// barangay. Names are compared case-insensitively. Until both a city and a
/// barangay have been picked there is nothing to compare against, so nothing
/// matches.
pub(crate) fn matching_notices<'a>(
    notices: &'a [Notice],
    city_name: &str,
    barangay_name: &str,
) -> Vec<&'a Notice> {
    if city_name.is_empty() || barangay_name.is_empty() {
        return Vec::new();
    }
    let city_name = city_name.to_lowercase();
    let barangay_name = barangay_name.to_lowercase();
    notices
        .iter()
        .filter(|notice| notice_matches(notice, &city_name, &barangay_name))
        .collect_vec()
}

fn notice_matches(notice: &Notice, city_name: &str, barangay_name: &str) -> bool {
    notice
        .data
        .as_ref()
        .and_then(|payload| payload.structured.as_ref())
        .map_or(false, |entries| {
            entries.iter().any(|entry| entry_matches(entry, city_name, barangay_name))
        })
}

fn entry_matches(entry: &StructuredEntry, city_name: &str, barangay_name: &str) -> bool {
    entry.locations.as_ref().map_or(false, |locations| {
        locations
            .iter()
            .any(|location| location_matches(location, city_name, barangay_name))
    })
}

fn location_matches(location: &AffectedLocation, city_name: &str, barangay_name: &str) -> bool {
    let municipality_matches = location
        .municipality
        .as_ref()
        .map_or(false, |municipality| municipality.to_lowercase() == city_name);
    municipality_matches
        && location.barangays.as_ref().map_or(false, |barangays| {
            barangays.iter().any(|barangay| barangay.to_lowercase() == barangay_name)
        })
}

#[cfg(test)]
mod tests {
    use crate::data_transfer::{AffectedLocation, Notice, NoticePayload, StructuredEntry};
    use crate::filter::matching_notices;
    use chrono::TimeZone;
    use chrono::Utc;
    use itertools::Itertools;
    use url::Url;

    fn notice(id: &str, data: Option<NoticePayload>) -> Notice {
        Notice {
            id: id.into(),
            title: format!("Scheduled Power Interruption #{id}"),
            url: Url::parse("https://zaneco.ph/power-interruption-update/")
                .expect("Expected a valid url"),
            created_at: Utc.with_ymd_and_hms(2025, 8, 27, 2, 15, 0).unwrap().into(),
            data,
        }
    }

    fn affected(municipality: &str, barangays: &[&str]) -> AffectedLocation {
        AffectedLocation {
            municipality: Some(municipality.to_owned()),
            barangays: Some(barangays.iter().map(|barangay| barangay.to_string()).collect_vec()),
        }
    }

    fn payload_with_locations(locations: Vec<AffectedLocation>) -> NoticePayload {
        NoticePayload {
            structured: Some(vec![StructuredEntry {
                locations: Some(locations),
                ..Default::default()
            }]),
        }
    }

    fn ids(notices: Vec<&Notice>) -> Vec<&str> {
        notices.iter().map(|notice| notice.id.inner()).collect_vec()
    }

    #[test]
    fn nothing_matches_until_both_names_are_provided() {
        let notices = vec![notice(
            "1",
            Some(payload_with_locations(vec![affected(
                "Zamboanga City",
                &["San Roque"],
            )])),
        )];

        assert!(matching_notices(&notices, "", "").is_empty());
        assert!(matching_notices(&notices, "Zamboanga City", "").is_empty());
        assert!(matching_notices(&notices, "", "San Roque").is_empty());
    }

    #[test]
    fn returns_only_notices_naming_both_the_city_and_the_barangay() {
        let notices = vec![
            notice(
                "1",
                Some(payload_with_locations(vec![affected(
                    "Zamboanga City",
                    &["San Roque"],
                )])),
            ),
            notice(
                "2",
                Some(payload_with_locations(vec![affected("Other City", &["X"])])),
            ),
        ];

        let matching = matching_notices(&notices, "Zamboanga City", "San Roque");
        assert_eq!(ids(matching), vec!["1"]);
    }

    #[test]
    fn name_comparison_ignores_case() {
        let notices = vec![notice(
            "1",
            Some(payload_with_locations(vec![affected(
                "ZAMBOANGA CITY",
                &["sta. catalina"],
            )])),
        )];

        let matching = matching_notices(&notices, "Zamboanga City", "Sta. Catalina");
        assert_eq!(ids(matching), vec!["1"]);
        assert_eq!(
            ids(matching_notices(&notices, "Zamboanga City", "Sta. Catalina")),
            ids(matching_notices(&notices, "zamboanga city", "STA. CATALINA"))
        );
    }

    #[test]
    fn both_names_must_come_from_the_same_affected_location() {
        // The city is named in one location and the barangay in another, so
        // neither location affects the selected pair.
        let notices = vec![notice(
            "1",
            Some(payload_with_locations(vec![
                affected("Dipolog City", &["Estaka"]),
                affected("Dapitan City", &["Bagting"]),
            ])),
        )];

        assert!(matching_notices(&notices, "Dipolog City", "Bagting").is_empty());
        assert_eq!(
            ids(matching_notices(&notices, "Dapitan City", "Bagting")),
            vec!["1"]
        );
    }

    #[test]
    fn a_match_buried_in_a_later_entry_still_counts() {
        let payload = NoticePayload {
            structured: Some(vec![
                StructuredEntry::default(),
                StructuredEntry {
                    locations: Some(vec![
                        affected("Polanco", &["Lapayan"]),
                        affected("Katipunan", &["Daanglungsod", "Seres"]),
                    ]),
                    ..Default::default()
                },
            ]),
        };
        let notices = vec![notice("1", Some(payload))];

        assert_eq!(ids(matching_notices(&notices, "Katipunan", "Seres")), vec!["1"]);
    }

    #[test]
    fn matching_keeps_the_original_notice_order_without_duplicates() {
        let covering = || {
            Some(payload_with_locations(vec![
                affected("Sindangan", &["Poblacion"]),
                affected("Sindangan", &["Poblacion", "Dapaon"]),
            ]))
        };
        let notices = vec![
            notice("first", covering()),
            notice("skipped", Some(payload_with_locations(vec![affected("Liloy", &["Baybay"])]))),
            notice("second", covering()),
        ];

        let matching = matching_notices(&notices, "Sindangan", "Poblacion");
        assert_eq!(ids(matching), vec!["first", "second"]);
    }

    #[test]
    fn notices_with_missing_or_partial_payloads_never_match() {
        let notices = vec![
            notice("no-data", None),
            notice("no-entries", Some(NoticePayload { structured: None })),
            notice("empty-entries", Some(NoticePayload { structured: Some(Vec::new()) })),
            notice(
                "no-locations",
                Some(NoticePayload { structured: Some(vec![StructuredEntry::default()]) }),
            ),
            notice(
                "no-barangays",
                Some(payload_with_locations(vec![AffectedLocation {
                    municipality: Some("Sindangan".to_owned()),
                    barangays: None,
                }])),
            ),
        ];

        assert!(matching_notices(&notices, "Sindangan", "Poblacion").is_empty());
    }
}
