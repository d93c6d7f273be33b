mod http_client;
pub use http_client::build_client;

pub mod logging;

mod url_utils;
pub use url_utils::{resolve_url, resolve_with_base};
