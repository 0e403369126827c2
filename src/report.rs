use crate::HttpError;

impl HttpError {
    /// Logs this error with its full cause chain.
    ///
    /// Server errors go out at `ERROR`, client errors at `DEBUG`.
    pub fn report(&self) {
        let status = self.status().as_u16();
        let public_msg = self.public_msg();
        let causes = self.cause_chain();

        if self.is_server_error() {
            tracing::error!(status, public_msg, %causes, "http request failed");
        } else {
            tracing::debug!(status, public_msg, %causes, "http request rejected");
        }
    }
}
