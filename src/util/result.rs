use std::error::Error;

pub(crate) trait ResultExtension<T, E: Error> {
    /// A method similar to [`Result::unwrap`], except that it applies only to types which implement
    /// [`Error`] and panics with the message of the error itself.
    ///
    /// # Panics
    /// Panics if the [`Result`] is an [`Err`].
    fn throw(self) -> T;

    /// Reports an [`Err`] through the `log` facade at debug level, then hands the result back
    /// unchanged. Used for recoverable failures that the caller is expected to handle.
    fn logged(self, context: &str) -> Self;
}

impl<T, E: Error> ResultExtension<T, E> for Result<T, E> {
    fn throw(self) -> T {
        match self {
            Ok(val) => val,
            Err(error) => panic!("{}", error),
        }
    }

    fn logged(self, context: &str) -> Self {
        if let Err(error) = &self {
            log::debug!("{context}: {error}");
        }
        self
    }
}
