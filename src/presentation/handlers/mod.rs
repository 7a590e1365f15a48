mod status;

pub use langchain_test::{
    ErrorResponse, LangchainTestResponse, TEST_QUERY, langchain_test_handler,
};
pub use status::{StatusResponse, status_handler};
