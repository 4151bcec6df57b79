pub mod error;
pub mod mapper;
pub mod traits;
pub mod types;
pub mod validate;
pub mod workflow;

pub use error::{Result, TextraError};
pub use mapper::map_blocks;
pub use traits::{ObjectStore, OcrService};
pub use types::{
    Block, BlockType, ExtractedLine, JobId, JobSnapshot, JobStatus, StoredObject, UploadRequest,
};
pub use validate::{is_allowed_file, validate_upload, ALLOWED_EXTENSIONS};
pub use workflow::{submit_document, wait_for_terminal, WaitPolicy, DEFAULT_POLL_INTERVAL};
