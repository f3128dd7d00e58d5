//! Response status and body helpers.

use recon_core::Section;
use serde::de::DeserializeOwned;

use crate::error::FetchError;

/// Longest response body quoted in an [`FetchError::Api`] message.
const MAX_ERROR_BODY: usize = 200;

/// Map a non-success status to [`FetchError::Api`], quoting the (truncated)
/// body. Successful responses pass through unchanged.
pub async fn check_response(
    section: Section,
    resp: reqwest::Response,
) -> Result<reqwest::Response, FetchError> {
    let status = resp.status();
    if status.is_success() {
        return Ok(resp);
    }

    tracing::warn!(%section, status = status.as_u16(), "data API returned non-success status");
    let body = resp.text().await.unwrap_or_default();
    Err(FetchError::Api {
        section,
        status: status.as_u16(),
        message: truncate(&body, MAX_ERROR_BODY),
    })
}

#[derive(serde::Deserialize)]
struct Envelope {
    data: Option<Vec<serde_json::Value>>,
}

/// Parse a `{ "data": [...] }` body. Missing or null `data` is an empty
/// collection.
///
/// Elements are read one by one: an element that is not a record (a bare
/// number, string, or `null`) becomes an all-absent `T::default()` and is
/// logged, so it is still counted without failing the section.
pub fn parse_collection<T: DeserializeOwned + Default>(
    section: Section,
    body: &str,
) -> Result<Vec<T>, FetchError> {
    let envelope: Envelope =
        serde_json::from_str(body).map_err(|source| FetchError::Parse { section, source })?;

    let records = envelope
        .data
        .unwrap_or_default()
        .into_iter()
        .enumerate()
        .map(|(position, value)| {
            serde_json::from_value(value).unwrap_or_else(|error| {
                tracing::warn!(
                    %section,
                    position,
                    %error,
                    "record is not an object; treating all fields as absent"
                );
                T::default()
            })
        })
        .collect();
    Ok(records)
}

fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((cut, _)) => format!("{}…", &text[..cut]),
        None => text.to_string(),
    }
}
