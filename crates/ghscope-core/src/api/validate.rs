//! Response validation.

use crate::ports::{RawResponse, TransportError};

use super::error::{RequestFailure, RequestResult};

/// Classify a raw transport outcome.
///
/// Rules apply in order: a transport error wins, then an empty body, then a
/// status outside 200..=299. Anything else is a decodable body.
pub fn validate_response(outcome: Result<RawResponse, TransportError>) -> RequestResult<Vec<u8>> {
    let response = outcome?;

    if response.body.is_empty() {
        return Err(RequestFailure::NoData);
    }

    if !(200..=299).contains(&response.status) {
        return Err(RequestFailure::BadStatus {
            status: response.status,
        });
    }

    Ok(response.body)
}
