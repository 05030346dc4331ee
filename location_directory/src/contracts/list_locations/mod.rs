mod normalize;

use crate::config::SETTINGS_CONFIG;
use crate::contracts::DirectoryContracts;
use crate::data_transfer::City;
use anyhow::Context;
use url::Url;

impl DirectoryContracts {
    /// Loads the city/municipality directory from the backend. The endpoint
    /// is allowed to answer in either of its two known shapes; the result is
    /// always the canonical directory.
    #[tracing::instrument(err, level = "info")]
    pub async fn list_locations() -> anyhow::Result<Vec<City>> {
        let url = generate_locations_url()?;
        fetch::execute(url).await
    }
}

pub(crate) fn generate_locations_url() -> anyhow::Result<Url> {
    let host_with_path = format!("{}/api/locations", SETTINGS_CONFIG.api.host);
    Url::parse(&host_with_path).context("Failed to parse the locations endpoint url")
}

pub(crate) mod fetch {
    use super::normalize::normalize;
    use crate::data_transfer::City;
    use anyhow::Context;
    use shared_kernel::http_client::HttpClient;
    use url::Url;

    pub(crate) async fn execute(url: Url) -> anyhow::Result<Vec<City>> {
        let response = HttpClient::get_json::<serde_json::Value>(url.clone())
            .await
            .with_context(|| format!("Failed to load the location directory from {url}"))?;
        Ok(normalize(&response))
    }
}

#[cfg(test)]
mod tests {
    use super::fetch;
    use httpmock::prelude::*;
    use serde_json::json;
    use url::Url;

    #[tokio::test]
    async fn mapping_responses_are_normalized_into_the_directory() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/api/locations");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!({ "Zamboanga City": ["Barangay A", "Barangay B"] }));
            })
            .await;

        let url = Url::parse(&server.url("/api/locations")).unwrap();
        let cities = fetch::execute(url).await.unwrap();

        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].code.inner(), "CITY-0");
        assert_eq!(cities[0].barangays[1].code.inner(), "BRGY-0-1");
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn array_responses_pass_through() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/locations");
                then.status(200)
                    .header("content-type", "application/json")
                    .json_body(json!([
                        {
                            "code": "097203000",
                            "name": "DAPITAN CITY",
                            "barangays": [{ "code": "097203001", "name": "BAGTING" }]
                        }
                    ]));
            })
            .await;

        let url = Url::parse(&server.url("/api/locations")).unwrap();
        let cities = fetch::execute(url).await.unwrap();

        assert_eq!(cities.len(), 1);
        assert_eq!(cities[0].code.inner(), "097203000");
        assert_eq!(cities[0].barangays[0].name, "BAGTING");
    }

    #[tokio::test]
    async fn a_body_that_is_not_json_is_a_load_error() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(GET).path("/api/locations");
                then.status(200)
                    .header("content-type", "text/html")
                    .body("<html>maintenance window</html>");
            })
            .await;

        let url = Url::parse(&server.url("/api/locations")).unwrap();
        let result = fetch::execute(url).await;

        assert!(result.is_err());
    }

    #[test]
    fn the_endpoint_url_comes_from_the_configured_host() {
        let url = super::generate_locations_url().unwrap();

        assert_eq!(url.as_str(), "http://127.0.0.1:5000/api/locations");
    }
}
