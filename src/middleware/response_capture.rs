//! Outbound status observation.

use axum::http::StatusCode;
use axum::response::Response;

/// Records the status code a response was ultimately sent with.
///
/// The status is observed from the final response once the downstream
/// handler returns; nothing is intercepted while the handler runs. Each
/// [`set_status`](Self::set_status) overwrites the previous one, and without
/// any the recorded status is `200 OK`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResponseCapture {
    status: StatusCode,
}

impl Default for ResponseCapture {
    fn default() -> Self {
        Self {
            status: StatusCode::OK,
        }
    }
}

impl ResponseCapture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, status: StatusCode) {
        self.status = status;
    }

    /// Records the status carried by a downstream response.
    pub fn observe(&mut self, response: &Response) {
        self.set_status(response.status());
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::response::IntoResponse;

    #[test]
    fn test_defaults_to_ok() {
        assert_eq!(ResponseCapture::new().status(), StatusCode::OK);
    }

    #[test]
    fn test_last_explicit_set_wins() {
        let mut capture = ResponseCapture::new();

        capture.set_status(StatusCode::NOT_FOUND);
        capture.set_status(StatusCode::OK);

        assert_eq!(capture.status(), StatusCode::OK);
    }

    #[test]
    fn test_observe_response() {
        let mut capture = ResponseCapture::new();
        let response = (StatusCode::IM_A_TEAPOT, "short and stout").into_response();

        capture.observe(&response);

        assert_eq!(capture.status(), StatusCode::IM_A_TEAPOT);
    }
}
