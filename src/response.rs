use bytes::Bytes;
use http::{HeaderValue, Response, header::CONTENT_TYPE};
use http_body_util::Full;

use crate::HttpError;

impl HttpError {
    /// Builds the response a service should send for this error.
    ///
    /// The body is the public message. The cause chain is left out; log it
    /// with [`HttpError::report`] instead.
    pub fn to_response(&self) -> Response<Full<Bytes>> {
        let mut response = Response::new(Full::new(Bytes::from(self.public_msg().to_owned())));
        *response.status_mut() = self.status();
        response.headers_mut().insert(
            CONTENT_TYPE,
            HeaderValue::from_static("text/plain; charset=utf-8"),
        );
        response
    }
}

impl From<HttpError> for Response<Full<Bytes>> {
    fn from(err: HttpError) -> Self {
        err.to_response()
    }
}
