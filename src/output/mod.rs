//! Where finished text goes. The logger hands each output a fully rendered block
//! (gutter, wrapping and all), so backends only deal with bytes and failures.
//!
//! Custom backends implement [`Output`] and are added with
//! [`LoggerBuilder::output`](crate::LoggerBuilder::output).

mod console;
mod file;

pub use console::{ConsoleOutput, Stream};
pub use file::{DEFAULT_FILE_NAME, FileOutput, SESSION_SEPARATOR};

/// `Send + Sync` so one logger can be shared across threads behind an `Arc`.
pub trait Output: Send + Sync {
    /// Appends `text` followed by a newline.
    ///
    /// # Errors
    /// I/O errors from the underlying sink that could not be recovered locally.
    fn write(&self, text: &str) -> Result<(), crate::Error>;

    /// Pushes buffered bytes out.
    ///
    /// # Errors
    /// I/O errors from the underlying sink.
    fn flush(&self) -> Result<(), crate::Error>;
}
