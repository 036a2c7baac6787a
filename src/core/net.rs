// src/core/net.rs
//
// Blocking HTTP GET. One request per call; no retry, no timeout beyond the
// client's defaults.

use crate::config::consts::USER_AGENT;
use crate::error::{Error, Result};

pub fn http_get(url: &str) -> Result<String> {
    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .build()?;

    logd!("Net: GET {}", url);
    let resp = client.get(url).send()?;

    let status = resp.status();
    if !status.is_success() {
        return Err(Error::HttpStatus { status: status.as_u16(), url: s!(url) });
    }

    let body = resp.text()?;
    logd!("Net: OK {} bytes={}", url, body.len());
    Ok(body)
}
