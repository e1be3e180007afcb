//! The call surface of the scheduler service. The service owns the durable
//! task store; everything here deals in its native wire types and live
//! numeric handles that the caller must release.

use std::fmt::Display;
use task_model::wire::NativeTaskDefinition;

pub mod memory;

pub type SessionId = u64;
pub type HandleId = u64;

/// Where and as whom to open the scheduler session. Empty fields mean the
/// local machine and the calling user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ConnectConfig {
    pub server: String,
    pub domain: String,
    pub user: String,
}

#[derive(Debug)]
pub enum BackendError {
    NoSession,
    NotFound(String),
    EmptyDefinition(String),
    Failure(String, String),
}

impl Display for BackendError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BackendError::NoSession => write!(f, "no live session"),
            BackendError::NotFound(path) => write!(f, "no task or folder at {}", path),
            BackendError::EmptyDefinition(path) => {
                write!(f, "definition for {} has no actions", path)
            }
            BackendError::Failure(op, detail) => write!(f, "{} failed: {}", op, detail),
        }
    }
}

impl std::error::Error for BackendError {}

pub type BackendResult<T> = std::result::Result<T, BackendError>;

/// A registered task as the service reports it. The embedded handle stays
/// live until released.
#[derive(Debug, Clone, PartialEq)]
pub struct NativeTask {
    pub handle: HandleId,
    pub name: String,
    pub path: String,
    pub state: u32,
    pub definition: NativeTaskDefinition,
}

#[derive(Debug, Clone, PartialEq)]
pub struct NativeFolder {
    pub handle: HandleId,
    pub name: String,
    pub path: String,
}

/// The scheduler service boundary. One synchronous call per operation, no
/// retries; paths are folder-qualified names the orchestrator has already
/// validated.
pub trait ScheduleBackend {
    fn connect(&self, config: &ConnectConfig) -> BackendResult<SessionId>;

    fn disconnect(&self, session: SessionId);

    /// Register a definition at `path`. An existing task is replaced only
    /// when `overwrite` is set; otherwise it is left untouched and the call
    /// reports `(None, false)` without error.
    fn register_task(
        &self,
        session: SessionId,
        path: &str,
        definition: &NativeTaskDefinition,
        overwrite: bool,
    ) -> BackendResult<(Option<NativeTask>, bool)>;

    fn update_task(
        &self,
        session: SessionId,
        path: &str,
        definition: &NativeTaskDefinition,
    ) -> BackendResult<NativeTask>;

    fn get_task(&self, session: SessionId, path: &str) -> BackendResult<NativeTask>;

    /// Every task under the root folder, recursively, plus a collection
    /// handle owning the enumeration. Order is service-defined.
    fn list_tasks(&self, session: SessionId) -> BackendResult<(HandleId, Vec<NativeTask>)>;

    fn get_folder(&self, session: SessionId, path: &str) -> BackendResult<NativeFolder>;

    fn list_folders(&self, session: SessionId) -> BackendResult<(HandleId, Vec<NativeFolder>)>;

    fn delete_task(&self, session: SessionId, path: &str) -> BackendResult<()>;

    /// Delete a folder. A non-empty folder is refused unless `recursive`,
    /// reported as `Ok(false)` rather than an error.
    fn delete_folder(&self, session: SessionId, path: &str, recursive: bool)
    -> BackendResult<bool>;

    fn release(&self, handle: HandleId);
}
