use std::io::Read;

use crate::error::FetchError;

/// Download the log at `url` and return its lines in input order.
///
/// One blocking GET, no retry: a transport failure, a non-success status,
/// or a body that is not UTF-8 text all abort the run. The body is decoded
/// strictly rather than lossily. A trailing newline does not produce a
/// trailing empty line.
pub fn fetch_lines(url: &str) -> Result<Vec<String>, FetchError> {
    let response = ureq::get(url)
        .call()
        .map_err(|e| FetchError::Transport(Box::new(e)))?;
    let mut buf = Vec::new();
    response.into_reader().read_to_end(&mut buf)?;
    let body = String::from_utf8(buf)?;
    Ok(body.lines().map(str::to_owned).collect())
}
