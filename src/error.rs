//! The HTTP-facing error value and its factories.

use http::StatusCode;

/// Boxed error used for every cause carried by this crate.
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Public message used by [`HttpError::not_found`].
pub const NOT_FOUND_MESSAGE: &str = "No such resource";

/// Public message used by [`HttpError::bug`] and [`HttpError::bug_caused_by`].
pub const BUG_MESSAGE: &str = "Internal service error";

/// An error raised by an HTTP service.
///
/// Carries a 4xx or 5xx status, a message that is safe to return to the
/// caller, and an optional cause kept for diagnostics. `Display` renders the
/// public message only; the cause is reachable through
/// [`std::error::Error::source`].
#[derive(Debug, thiserror::Error)]
#[error("{public_msg}")]
pub struct HttpError {
    status: StatusCode,
    public_msg: String,
    #[source]
    cause: Option<BoxError>,
}

/// Internal detail attached to a [`HttpError::bug`].
///
/// Never shown to the caller. It sits on the cause chain so that logs can
/// still see what went wrong.
#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct InternalError {
    message: String,
    #[source]
    source: Option<BoxError>,
}

impl InternalError {
    pub fn message(&self) -> &str {
        &self.message
    }
}

impl HttpError {
    /// Creates an error with the given status and public message.
    ///
    /// Fails with a 500 [`HttpError::bug`] when `status` is not in `400..600`.
    pub fn new(status: u16, public_msg: impl Into<String>) -> Result<Self, Self> {
        Self::validated(status, public_msg.into(), None)
    }

    /// Same as [`HttpError::new`], attaching `cause` as the direct source.
    pub fn caused_by(
        status: u16,
        public_msg: impl Into<String>,
        cause: impl Into<BoxError>,
    ) -> Result<Self, Self> {
        Self::validated(status, public_msg.into(), Some(cause.into()))
    }

    fn validated(status: u16, public_msg: String, cause: Option<BoxError>) -> Result<Self, Self> {
        if status < 400 {
            return Err(Self::bug("HTTP error status codes must be 400 or greater"));
        }
        if status >= 600 {
            return Err(Self::bug("HTTP error status codes must be less than 600"));
        }

        let status = StatusCode::from_u16(status)
            .map_err(|e| Self::bug_caused_by("HTTP error status code rejected", e))?;

        Ok(Self::from_parts(status, public_msg, cause))
    }

    // Only called with statuses already known to be in range.
    fn from_parts(status: StatusCode, public_msg: String, cause: Option<BoxError>) -> Self {
        Self {
            status,
            public_msg,
            cause,
        }
    }

    /// 400: a client supplied parameter is missing or invalid.
    pub fn bad_request(public_msg: impl Into<String>) -> Self {
        Self::from_parts(StatusCode::BAD_REQUEST, public_msg.into(), None)
    }

    /// 401: the client is not authenticated, or its credentials are invalid.
    pub fn bad_login(public_msg: impl Into<String>) -> Self {
        Self::from_parts(StatusCode::UNAUTHORIZED, public_msg.into(), None)
    }

    /// 403: the client may not access the resource.
    pub fn not_allowed(public_msg: impl Into<String>) -> Self {
        Self::from_parts(StatusCode::FORBIDDEN, public_msg.into(), None)
    }

    /// 404 with the stock [`NOT_FOUND_MESSAGE`].
    pub fn not_found() -> Self {
        Self::not_found_with(NOT_FOUND_MESSAGE)
    }

    /// 404 with a custom public message.
    pub fn not_found_with(public_msg: impl Into<String>) -> Self {
        Self::from_parts(StatusCode::NOT_FOUND, public_msg.into(), None)
    }

    /// 500 for an unexpected internal failure.
    ///
    /// The public message is always [`BUG_MESSAGE`]. `internal_msg` is kept
    /// on the cause chain as an [`InternalError`] and never reaches the
    /// caller.
    pub fn bug(internal_msg: impl Into<String>) -> Self {
        Self::internal(internal_msg.into(), None)
    }

    /// Same as [`HttpError::bug`], with `cause` placed beneath the internal
    /// message.
    pub fn bug_caused_by(internal_msg: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        Self::internal(internal_msg.into(), Some(cause.into()))
    }

    fn internal(message: String, source: Option<BoxError>) -> Self {
        let detail = InternalError { message, source };
        Self::from_parts(
            StatusCode::INTERNAL_SERVER_ERROR,
            BUG_MESSAGE.to_owned(),
            Some(Box::new(detail)),
        )
    }

    /// 500: the service is misconfigured.
    pub fn bad_config(public_msg: impl Into<String>) -> Self {
        Self::from_parts(StatusCode::INTERNAL_SERVER_ERROR, public_msg.into(), None)
    }

    pub fn bad_config_caused_by(public_msg: impl Into<String>, cause: impl Into<BoxError>) -> Self {
        Self::from_parts(
            StatusCode::INTERNAL_SERVER_ERROR,
            public_msg.into(),
            Some(cause.into()),
        )
    }

    /// 501: the feature is declared but not implemented.
    pub fn not_implemented(public_msg: impl Into<String>) -> Self {
        Self::from_parts(StatusCode::NOT_IMPLEMENTED, public_msg.into(), None)
    }

    pub fn not_implemented_caused_by(
        public_msg: impl Into<String>,
        cause: impl Into<BoxError>,
    ) -> Self {
        Self::from_parts(StatusCode::NOT_IMPLEMENTED, public_msg.into(), Some(cause.into()))
    }

    /// 503: the feature is down for a known issue or maintenance.
    pub fn feature_unavailable(public_msg: impl Into<String>) -> Self {
        Self::from_parts(StatusCode::SERVICE_UNAVAILABLE, public_msg.into(), None)
    }

    pub fn feature_unavailable_caused_by(
        public_msg: impl Into<String>,
        cause: impl Into<BoxError>,
    ) -> Self {
        Self::from_parts(
            StatusCode::SERVICE_UNAVAILABLE,
            public_msg.into(),
            Some(cause.into()),
        )
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }

    /// Message safe to return to the caller.
    pub fn public_msg(&self) -> &str {
        &self.public_msg
    }

    /// Direct cause, for logging only.
    pub fn cause(&self) -> Option<&(dyn std::error::Error + Send + Sync + 'static)> {
        self.cause.as_deref()
    }

    pub fn is_client_error(&self) -> bool {
        self.status.is_client_error()
    }

    pub fn is_server_error(&self) -> bool {
        self.status.is_server_error()
    }
}

#[cfg(test)]
mod tests {
    use std::error::Error;

    use super::*;

    #[derive(Debug, PartialEq, thiserror::Error)]
    #[error("key `{0}` missing")]
    struct MissingKey(&'static str);

    #[test]
    fn new_accepts_every_error_status() {
        for status in 400..600u16 {
            let err = HttpError::new(status, "boom").unwrap();
            assert_eq!(err.status().as_u16(), status);
            assert_eq!(err.public_msg(), "boom");
            assert!(err.cause().is_none());
        }
    }

    #[test]
    fn caused_by_keeps_cause() {
        let err = HttpError::caused_by(418, "teapot", MissingKey("brew")).unwrap();
        assert_eq!(err.status().as_u16(), 418);
        let cause = err.cause().unwrap().downcast_ref::<MissingKey>();
        assert_eq!(cause, Some(&MissingKey("brew")));
    }

    #[test]
    fn new_rejects_status_below_400() {
        for status in [0u16, 100, 200, 204, 302, 399] {
            let err = HttpError::new(status, "ok?").unwrap_err();
            assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(err.public_msg(), BUG_MESSAGE);
            assert_eq!(
                err.source().unwrap().to_string(),
                "HTTP error status codes must be 400 or greater"
            );
        }
    }

    #[test]
    fn new_rejects_status_from_600() {
        for status in [600u16, 700, 999, 1000, u16::MAX] {
            let err = HttpError::new(status, "huh").unwrap_err();
            assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
            assert_eq!(
                err.source().unwrap().to_string(),
                "HTTP error status codes must be less than 600"
            );
        }
    }

    #[test]
    fn client_factories() {
        let err = HttpError::bad_request("x");
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
        assert_eq!(err.public_msg(), "x");

        let err = HttpError::bad_login("who are you");
        assert_eq!(err.status(), StatusCode::UNAUTHORIZED);
        assert_eq!(err.public_msg(), "who are you");

        let err = HttpError::not_allowed("nope");
        assert_eq!(err.status(), StatusCode::FORBIDDEN);
        assert_eq!(err.public_msg(), "nope");
        assert!(err.is_client_error());
        assert!(!err.is_server_error());
    }

    #[test]
    fn not_found_default_and_custom() {
        let err = HttpError::not_found();
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.public_msg(), "No such resource");

        let err = HttpError::not_found_with("gone");
        assert_eq!(err.status(), StatusCode::NOT_FOUND);
        assert_eq!(err.public_msg(), "gone");
    }

    #[test]
    fn bug_hides_internal_message() {
        let err = HttpError::bug("db timeout");
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_msg(), "Internal service error");
        assert_eq!(err.to_string(), "Internal service error");

        let detail = err.cause().unwrap().downcast_ref::<InternalError>().unwrap();
        assert_eq!(detail.message(), "db timeout");
        assert!(detail.source().is_none());
    }

    #[test]
    fn bug_caused_by_nests_cause_under_internal_message() {
        let err = HttpError::bug_caused_by("loading settings", MissingKey("port"));
        let detail = err.source().unwrap();
        assert_eq!(detail.to_string(), "loading settings");
        let root = detail.source().unwrap().downcast_ref::<MissingKey>();
        assert_eq!(root, Some(&MissingKey("port")));
    }

    #[test]
    fn bad_config_passes_cause_through() {
        let err = HttpError::bad_config_caused_by("bad key", MissingKey("token"));
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(err.public_msg(), "bad key");
        let cause = err.cause().unwrap().downcast_ref::<MissingKey>();
        assert_eq!(cause, Some(&MissingKey("token")));

        assert!(HttpError::bad_config("bad key").cause().is_none());
    }

    #[test]
    fn service_factories() {
        let err = HttpError::not_implemented("x");
        assert_eq!(err.status(), StatusCode::NOT_IMPLEMENTED);
        assert_eq!(err.public_msg(), "x");

        let err = HttpError::feature_unavailable("x");
        assert_eq!(err.status(), StatusCode::SERVICE_UNAVAILABLE);
        assert!(err.is_server_error());

        let err = HttpError::not_implemented_caused_by("later", MissingKey("v2"));
        assert!(err.cause().unwrap().is::<MissingKey>());

        let err = HttpError::feature_unavailable_caused_by("maintenance", "disk full");
        assert_eq!(err.cause().unwrap().to_string(), "disk full");
    }

    #[test]
    fn is_send_and_sync() {
        fn assert_send_sync<T: Send + Sync + 'static>() {}
        assert_send_sync::<HttpError>();
        assert_send_sync::<InternalError>();
    }
}
