//! Cursor extraction for `start`/`limit` paginated collections

use reqwest::Url;
use serde::{Deserialize, Serialize};

use crate::error::{DirectLinkError, Result};

/// Link to the first page of a collection
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PageFirst {
    pub href: String,
}

/// Link to the next page of a collection
#[derive(Deserialize, Serialize, Debug, Clone, PartialEq)]
pub struct PageNext {
    pub href: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub start: Option<String>,
}

/// Decoded value of query parameter `name` in an absolute or relative link
pub fn get_query_param(href: &str, name: &str) -> Result<Option<String>> {
    let parsed = match Url::parse(href) {
        Ok(url) => url,
        Err(_) => Url::parse("http://localhost/")
            .and_then(|base| base.join(href))
            .map_err(|e| {
                DirectLinkError::Json(format!("malformed pagination link '{}': {}", href, e))
            })?,
    };

    Ok(parsed
        .query_pairs()
        .find(|(key, _)| key == name)
        .map(|(_, value)| value.into_owned()))
}

/// The `start` cursor for the page after this one, or `None` on the last page
pub fn next_start(next: Option<&PageNext>) -> Result<Option<String>> {
    match next {
        None => Ok(None),
        Some(link) => match &link.start {
            Some(start) if !start.is_empty() => Ok(Some(start.clone())),
            _ => get_query_param(&link.href, "start"),
        },
    }
}
