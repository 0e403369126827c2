//! An error type for HTTP services.
//!
//! [`HttpError`] pairs a 4xx/5xx status with a message that is safe to show
//! to the caller, and keeps the underlying cause for logs only.
//!
//! ```
//! use http_fault::HttpError;
//!
//! fn load(id: u32) -> Result<String, HttpError> {
//!     match id {
//!         0 => Err(HttpError::bad_request("id must be positive")),
//!         1 => Ok("first".to_owned()),
//!         _ => Err(HttpError::not_found()),
//!     }
//! }
//!
//! let err = load(7).unwrap_err();
//! assert_eq!(err.status(), http::StatusCode::NOT_FOUND);
//! assert_eq!(err.public_msg(), "No such resource");
//! ```

pub mod chain;
pub mod error;
mod report;
mod response;

pub use chain::{CauseChain, Causes};
pub use error::{BUG_MESSAGE, BoxError, HttpError, InternalError, NOT_FOUND_MESSAGE};
