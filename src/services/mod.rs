// Service exports
pub mod bio_assist;
pub mod bio_requests;
pub mod preferences;
pub mod storage;

pub use bio_assist::{GeminiClient, BioAssistError, BioOutcome};
pub use bio_requests::{BioRequests, BioRequestState};
pub use preferences::{PreferenceStore, PreferenceKeys};
pub use storage::{KeyValueStore, FileKeyValueStore, MemoryKeyValueStore, StorageError};
