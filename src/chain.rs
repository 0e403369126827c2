//! Walking the cause chain of an [`HttpError`].

use std::{error::Error, fmt};

use crate::HttpError;

/// Iterator over the causes of an [`HttpError`], nearest first.
///
/// The error itself is not yielded.
#[derive(Clone)]
pub struct Causes<'a> {
    next: Option<&'a (dyn Error + 'static)>,
}

impl<'a> Iterator for Causes<'a> {
    type Item = &'a (dyn Error + 'static);

    fn next(&mut self) -> Option<Self::Item> {
        let current = self.next?;
        self.next = current.source();
        Some(current)
    }
}

/// Renders every cause of an [`HttpError`] joined by `": "`.
///
/// Empty when the error has no cause.
pub struct CauseChain<'a>(&'a HttpError);

impl fmt::Display for CauseChain<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, cause) in self.0.causes().enumerate() {
            if i > 0 {
                f.write_str(": ")?;
            }
            write!(f, "{cause}")?;
        }
        Ok(())
    }
}

impl HttpError {
    pub fn causes(&self) -> Causes<'_> {
        Causes {
            next: self.source(),
        }
    }

    /// Internal detail for logs. Never send this to the caller.
    pub fn cause_chain(&self) -> CauseChain<'_> {
        CauseChain(self)
    }
}
