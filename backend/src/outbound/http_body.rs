//! Helpers shared by the reqwest-backed adapters.

const PREVIEW_CHAR_LIMIT: usize = 160;

/// Upper bound on bytes read from any upstream response body.
pub(crate) const MAX_UPSTREAM_BODY_BYTES: usize = 64 * 1024;

/// Response body read up to a byte limit.
pub(crate) struct CappedBody {
    pub(crate) bytes: Vec<u8>,
    /// The upstream sent more than the limit; `bytes` holds the prefix.
    pub(crate) truncated: bool,
}

/// Read at most `limit` bytes of `response`, dropping the rest.
pub(crate) async fn read_capped(
    mut response: reqwest::Response,
    limit: usize,
) -> Result<CappedBody, reqwest::Error> {
    let mut bytes = Vec::new();
    while let Some(chunk) = response.chunk().await? {
        let room = limit.saturating_sub(bytes.len());
        if chunk.len() > room {
            bytes.extend_from_slice(chunk.get(..room).unwrap_or_default());
            return Ok(CappedBody {
                bytes,
                truncated: true,
            });
        }
        bytes.extend_from_slice(&chunk);
    }
    Ok(CappedBody {
        bytes,
        truncated: false,
    })
}

/// Best-effort read of an error body; unreadable bodies count as empty.
pub(crate) async fn read_error_body(response: reqwest::Response) -> Vec<u8> {
    let status = response.status();
    match read_capped(response, MAX_UPSTREAM_BODY_BYTES).await {
        Ok(body) => body.bytes,
        Err(error) => {
            tracing::debug!(%status, %error, "discarding unreadable upstream error body");
            Vec::new()
        }
    }
}

/// Collapse whitespace and truncate an upstream body for error messages.
pub(crate) fn body_preview(body: &[u8]) -> String {
    let compact = String::from_utf8_lossy(body)
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ");
    let preview = compact.chars().take(PREVIEW_CHAR_LIMIT).collect::<String>();
    if compact.chars().count() > PREVIEW_CHAR_LIMIT {
        format!("{preview}...")
    } else {
        preview
    }
}

/// Human-readable message for a non-success status.
pub(crate) fn status_message(status: reqwest::StatusCode, body: &[u8]) -> String {
    let preview = body_preview(body);
    if preview.is_empty() {
        format!("status {}", status.as_u16())
    } else {
        format!("status {}: {preview}", status.as_u16())
    }
}
