mod page_retriever;
pub use page_retriever::{HttpFetcher, PageFetcher, PageRetriever};

mod reader_service;
pub use reader_service::ReaderService;

mod validation;
pub use validation::Validate;
