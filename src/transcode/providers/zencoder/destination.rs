//! Per-job output locations.
//!
//! The configured destination is a URL template that may carry storage
//! credentials in its userinfo, e.g. `s3://key:secret@bucket/prefix/`.
//! Secrets are re-escaped so that anything outside the unreserved set is
//! percent-encoded; `pass!word` is sent as `pass%21word`.

use std::borrow::Cow;

use encodeforge_common::{Error, Result};
use reqwest::Url;

/// Build the base URL outputs of job `job_id` are written under.
///
/// The job id becomes the last path segment, always followed by a slash so
/// Zencoder joins the output filename below it. An empty job id is
/// [`Error::InvalidInput`].
pub fn build_base_url(destination: &str, job_id: &str) -> Result<Url> {
    if job_id.is_empty() {
        return Err(Error::invalid_input("job id is empty"));
    }
    if destination.trim().is_empty() {
        return Err(Error::invalid_destination("destination is not configured"));
    }

    let mut url = Url::parse(destination)
        .map_err(|e| Error::invalid_destination(format!("{destination:?}: {e}")))?;

    if url.cannot_be_a_base() {
        return Err(Error::invalid_destination(format!(
            "{destination:?}: not a hierarchical URL"
        )));
    }

    let username = escape_userinfo(url.username());
    let password = url.password().map(escape_userinfo);
    if !username.is_empty() {
        url.set_username(&username)
            .map_err(|_| Error::invalid_destination("destination cannot carry a username"))?;
    }
    if password.is_some() {
        url.set_password(password.as_deref())
            .map_err(|_| Error::invalid_destination("destination cannot carry a password"))?;
    }

    url.path_segments_mut()
        .map_err(|_| Error::invalid_destination("destination has no path"))?
        .pop_if_empty()
        .push(job_id)
        .push("");

    Ok(url)
}

/// Decode whatever escaping the template already had, then encode again
/// with the strict unreserved set.
fn escape_userinfo(raw: &str) -> String {
    let decoded = urlencoding::decode(raw).unwrap_or(Cow::Borrowed(raw));
    urlencoding::encode(&decoded).into_owned()
}
