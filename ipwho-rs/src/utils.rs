use crate::errors::IpWhoError;
use crate::lookup::Lookup;
use reqwest::{Client, StatusCode, Url};
use serde_json::Value;

#[cfg(feature = "tracing")]
use tracing::{debug, error, instrument};

#[cfg_attr(feature = "tracing", instrument(skip(client), fields(url = %url)))]
pub async fn send_request(client: &Client, url: Url) -> Result<Lookup, IpWhoError> {
    #[cfg(feature = "tracing")]
    debug!(%url, "Sending request to ipwho.is");

    let res = client
        .get(url)
        .header("Accept", "application/json")
        .send()
        .await?;

    let status = res.status();
    let body = res.text().await?;

    let lookup = decode_lookup(status, &body);
    #[cfg(feature = "tracing")]
    log_outcome(status, &body, &lookup);
    lookup
}

#[cfg(feature = "tracing")]
fn log_outcome(status: StatusCode, body: &str, lookup: &Result<Lookup, IpWhoError>) {
    match lookup {
        Ok(Lookup::Found(result)) => {
            debug!(status = ?status, ip = %result.ip, "ipwho.is lookup successful")
        }
        Ok(Lookup::Rejected { message }) => {
            debug!(status = ?status, ?message, "ipwho.is rejected lookup")
        }
        Err(e) => error!(status = ?status, body = %body, "ipwho.is request failed: {}", e),
    }
}

/// The body is read regardless of status: the API reports bad input as a
/// JSON document with `success: false`, which takes precedence over the
/// HTTP status.
pub fn decode_lookup(status: StatusCode, body: &str) -> Result<Lookup, IpWhoError> {
    let value: Value = match serde_json::from_str(body) {
        Ok(value) => value,
        Err(_) if !status.is_success() => {
            return Err(IpWhoError::ApiError {
                status,
                body: body.to_string(),
            })
        }
        Err(e) => return Err(e.into()),
    };

    match value.get("success").and_then(Value::as_bool) {
        Some(true) => Ok(Lookup::Found(serde_json::from_value(value)?)),
        Some(false) => Ok(Lookup::Rejected {
            message: value
                .get("message")
                .and_then(Value::as_str)
                .map(str::to_owned),
        }),
        None if !status.is_success() => Err(IpWhoError::ApiError {
            status,
            body: body.to_string(),
        }),
        None => Err(IpWhoError::Other(
            "response is missing the `success` flag".to_string(),
        )),
    }
}
