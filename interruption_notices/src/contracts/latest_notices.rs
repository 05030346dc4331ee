use crate::contracts::NoticeContracts;
use crate::data_transfer::Notice;
use crate::fetch_latest;

impl NoticeContracts {
    /// Fetches the most recently published interruption notices.
    #[tracing::instrument(err, level = "info")]
    pub async fn latest_notices() -> anyhow::Result<Vec<Notice>> {
        let url = fetch_latest::generate_latest_notices_url()?;
        fetch_latest::execute(url).await
    }
}
