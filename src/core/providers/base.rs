//! Shared HTTP plumbing for all adapters.

use once_cell::sync::Lazy;
use serde::Serialize;
use serde::de::DeserializeOwned;

use super::error::AdapterError;

/// One connection pool shared by every adapter.
static HTTP: Lazy<reqwest::Client> = Lazy::new(reqwest::Client::new);

/// Bearer authorization header used by all OpenAI-shaped vendors and Cohere.
pub(crate) fn bearer(credential: &str) -> (&'static str, String) {
    ("authorization", format!("Bearer {credential}"))
}

/// POST a JSON body and parse a JSON response.
///
/// Non-success statuses become [`AdapterError::Api`] with the raw body text,
/// so vendor-reported errors surface verbatim in soft results.
pub(crate) async fn post_json<B, R>(
    provider: &'static str,
    url: &str,
    headers: &[(&'static str, String)],
    body: &B,
) -> Result<R, AdapterError>
where
    B: Serialize + ?Sized,
    R: DeserializeOwned,
{
    let mut request = HTTP.post(url).json(body);
    for (name, value) in headers {
        request = request.header(*name, value);
    }

    let response = request
        .send()
        .await
        .map_err(|e| AdapterError::Network(e.to_string()))?;

    let status = response.status();
    if !status.is_success() {
        let message = response.text().await.unwrap_or_default();
        return Err(AdapterError::Api {
            provider,
            status: status.as_u16(),
            message,
        });
    }

    response
        .json::<R>()
        .await
        .map_err(|e| AdapterError::MalformedResponse {
            provider,
            detail: e.to_string(),
        })
}
