mod config_error;
mod recall_error;
mod request_error;
mod retrieval_error;
mod trace_error;

pub use config_error::ConfigError;
pub use recall_error::{RecallError, RecallResult};
pub use request_error::RequestError;
pub use retrieval_error::RetrievalError;
pub use trace_error::TraceError;
