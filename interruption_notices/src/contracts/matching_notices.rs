use crate::contracts::NoticeContracts;
use crate::data_transfer::Notice;
use crate::filter;

impl NoticeContracts {
    /// Filters `notices` down to the ones affecting the given barangay of the
    /// given city. An empty city or barangay name matches nothing.
    #[tracing::instrument(skip(notices), level = "debug")]
    pub fn matching_notices<'a>(
        notices: &'a [Notice],
        city_name: &str,
        barangay_name: &str,
    ) -> Vec<&'a Notice> {
        filter::matching_notices(notices, city_name, barangay_name)
    }
}
