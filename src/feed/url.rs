//! Feed request URL.

use reqwest::Url;

use crate::error::{Error, Result};

/// `{api_base}/api/{api_key}/alerts/q/{state}/{city}.json`, with every
/// path segment percent-encoded.
pub fn alerts_url(api_base: &str, api_key: &str, state: &str, city: &str) -> Result<Url> {
    let mut url = Url::parse(api_base)
        .map_err(|e| Error::Config(format!("invalid api base '{api_base}': {e}")))?;
    let city_file = format!("{city}.json");
    url.path_segments_mut()
        .map_err(|()| Error::Config(format!("api base '{api_base}' cannot take a path")))?
        .pop_if_empty()
        .extend(["api", api_key, "alerts", "q", state, city_file.as_str()]);
    Ok(url)
}
