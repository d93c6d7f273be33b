mod fetch_error;
pub use fetch_error::{FetchCause, FetchError};

mod reader_error;
pub use reader_error::{ReaderError, ReaderResult};
