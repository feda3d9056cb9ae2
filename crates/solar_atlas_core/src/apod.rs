//! Client for the astronomy picture-of-the-day service.
//!
//! One unauthenticated GET, parameterized by an API key. The record is
//! strictly optional: every failure mode (transport error, non-success
//! status, undecodable JSON, unsupported media kind) collapses into
//! "no supplementary content" via [`supplementary`], and is only observable
//! in the log.

use anyhow::{Context, Result};
use reqwest::blocking::Client;
use serde::Deserialize;

pub const APOD_ENDPOINT: &str = "https://api.nasa.gov/planetary/apod";

/// Public demo key of api.nasa.gov; heavily rate-limited but keyless.
pub const DEMO_KEY: &str = "DEMO_KEY";

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum MediaKind {
    Image,
    Video,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Apod {
    pub media_type: String,
    pub url: String,
    pub title: String,
    pub date: String,

    #[serde(default)]
    pub explanation: String,
}

impl Apod {
    /// Media kind, or `None` for anything the detail view cannot render.
    pub fn kind(&self) -> Option<MediaKind> {
        match self.media_type.as_str() {
            "image" => Some(MediaKind::Image),
            "video" => Some(MediaKind::Video),
            _ => None,
        }
    }
}

/// Fetches one picture-of-the-day record. `base_url` is the service
/// endpoint ([`APOD_ENDPOINT`] in production; tests point it at a stub).
///
/// No timeout is configured: a slow response never blocks the UI because
/// callers run this on a worker thread, and it simply arrives late or never.
pub fn fetch(base_url: &str, api_key: &str) -> Result<Apod> {
    let apod: Apod = Client::new()
        .get(base_url)
        .query(&[("api_key", api_key)])
        .send()
        .context("Failed to reach the picture-of-the-day service")?
        .error_for_status()
        .context("Picture-of-the-day request returned error status")?
        .json()
        .context("Failed to parse picture-of-the-day JSON")?;

    Ok(apod)
}

/// Collapses a fetch result into the optional state the detail view renders:
/// `None` for any failure or unsupported media kind.
pub fn supplementary(result: Result<Apod>) -> Option<Apod> {
    match result {
        Ok(apod) if apod.kind().is_some() => Some(apod),
        Ok(apod) => {
            log::debug!(
                "picture of the day has unsupported media type {:?}; hiding section",
                apod.media_type
            );
            None
        }
        Err(err) => {
            log::debug!("picture of the day unavailable: {err:#}");
            None
        }
    }
}
