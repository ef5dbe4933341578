use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One shortened link, keyed in [`LinkTable`] by its short code.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LinkRecord {
    pub long_url: String,
    pub clicks: u64,
    pub created_at: String,
}

#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct LinkTable {
    pub links: BTreeMap<String, LinkRecord>,
}

#[derive(Debug, Deserialize)]
pub struct UrlRequest {
    pub url: String,
}

#[derive(Debug, Serialize)]
pub struct ShortenResponse {
    pub short_url: String,
    pub original_url: String,
    pub short_code: String,
}

#[derive(Debug, Serialize)]
pub struct QrResponse {
    pub original_url: String,
    pub qr_file: String,
}

#[derive(Debug, Serialize)]
pub struct StatsResponse {
    pub short_code: String,
    pub original_url: String,
    pub clicks: u64,
}
