use crate::config::SETTINGS_CONFIG;
use crate::data_transfer::Notice;
use anyhow::Context;
use shared_kernel::http_client::HttpClient;
use url::Url;

pub(crate) fn generate_latest_notices_url() -> anyhow::Result<Url> {
    let url = format!("{}/api/notices/latest", SETTINGS_CONFIG.api.host);
    Url::parse(&url).context("Failed to parse latest notices url")
}

pub(crate) async fn execute(url: Url) -> anyhow::Result<Vec<Notice>> {
    let notices = HttpClient::get_json::<Vec<Notice>>(url)
        .await
        .context("Failed to fetch the latest interruption notices")?;
    Ok(notices)
}
