//! Client-facing orchestration over the scheduler service: validate, encode
//! through the wire layer, forward to the backend, decode results back into
//! model types.

pub mod path;
pub mod resources;

use crate::backend::{BackendError, ConnectConfig, ScheduleBackend, SessionId};
use crate::err::{Result, TaskServiceError};
use crate::service::resources::{
    RegisteredTask, RegisteredTaskCollection, TaskFolder, TaskFolderCollection,
};
use std::rc::Rc;
use task_model::TaskDefinition;
use task_model::wire;

fn map_backend(err: BackendError) -> TaskServiceError {
    match err {
        BackendError::NoSession => {
            TaskServiceError::ConnectionError(String::from("the scheduler session is gone"))
        }
        BackendError::NotFound(what) => TaskServiceError::NotFoundError(what),
        BackendError::EmptyDefinition(path) => TaskServiceError::ValidationError(format!(
            "task {} must define at least one action",
            path
        )),
        BackendError::Failure(what, detail) => TaskServiceError::ServiceError(what, detail),
    }
}

/// One live session against a scheduler backend. All calls are synchronous
/// and the session is single-threaded; drop or `disconnect` closes it.
pub struct TaskService {
    backend: Rc<dyn ScheduleBackend>,
    session: Option<SessionId>,
}

impl TaskService {
    /// Open a session against the scheduler selected by `config`.
    pub fn connect(backend: Rc<dyn ScheduleBackend>, config: &ConnectConfig) -> Result<Self> {
        let session = backend
            .connect(config)
            .map_err(map_backend)?;
        tracing::debug!("scheduler session {} established", session);
        Ok(Self {
            backend,
            session: Some(session),
        })
    }

    /// Open a session against the local scheduler as the calling user.
    pub fn connect_local(backend: Rc<dyn ScheduleBackend>) -> Result<Self> {
        Self::connect(backend, &ConnectConfig::default())
    }

    /// Close the session. Idempotent; later calls on this service fail with
    /// a connection error.
    pub fn disconnect(&mut self) {
        if let Some(session) = self.session.take() {
            self.backend.disconnect(session);
            tracing::debug!("scheduler session {} disconnected", session);
        }
    }

    fn session(&self) -> Result<SessionId> {
        self.session.ok_or_else(|| {
            TaskServiceError::ConnectionError(String::from(
                "not connected to the scheduler; connect first",
            ))
        })
    }

    /// Register `definition` at `path`. Returns the registered task and
    /// whether anything was created. An existing task with `overwrite`
    /// unset is left untouched and reported as `(None, false)`; that is an
    /// expected outcome, not an error.
    pub fn create_task(
        &self,
        path: &str,
        definition: &TaskDefinition,
        overwrite: bool,
    ) -> Result<(Option<RegisteredTask>, bool)> {
        let session = self.session()?;
        path::validate_task_path(path)?;
        let native = wire::encode_definition(definition)?;
        let (task, created) = self
            .backend
            .register_task(session, path, &native, overwrite)
            .map_err(map_backend)?;
        match task {
            Some(native_task) => {
                tracing::debug!("created task {}", path);
                Ok((
                    Some(RegisteredTask::from_native(&self.backend, native_task)?),
                    created,
                ))
            }
            None => {
                tracing::debug!("task {} already exists, left untouched", path);
                Ok((None, false))
            }
        }
    }

    /// Replace the definition of an existing task.
    pub fn update_task(&self, path: &str, definition: &TaskDefinition) -> Result<RegisteredTask> {
        let session = self.session()?;
        path::validate_task_path(path)?;
        let native = wire::encode_definition(definition)?;
        let native_task = self
            .backend
            .update_task(session, path, &native)
            .map_err(map_backend)?;
        tracing::debug!("updated task {}", path);
        RegisteredTask::from_native(&self.backend, native_task)
    }

    pub fn get_registered_task(&self, path: &str) -> Result<RegisteredTask> {
        let session = self.session()?;
        path::validate_task_path(path)?;
        let native_task = self
            .backend
            .get_task(session, path)
            .map_err(map_backend)?;
        RegisteredTask::from_native(&self.backend, native_task)
    }

    /// Every task registered under the root folder, recursively.
    pub fn get_registered_tasks(&self) -> Result<RegisteredTaskCollection> {
        let session = self.session()?;
        let (collection, natives) = self
            .backend
            .list_tasks(session)
            .map_err(map_backend)?;
        RegisteredTaskCollection::from_natives(&self.backend, collection, natives)
    }

    pub fn get_task_folder(&self, path: &str) -> Result<TaskFolder> {
        let session = self.session()?;
        path::validate_folder_path(path)?;
        let native = self
            .backend
            .get_folder(session, path)
            .map_err(map_backend)?;
        Ok(TaskFolder::from_native(&self.backend, native))
    }

    pub fn get_task_folders(&self) -> Result<TaskFolderCollection> {
        let session = self.session()?;
        let (collection, natives) = self
            .backend
            .list_folders(session)
            .map_err(map_backend)?;
        Ok(TaskFolderCollection::from_natives(
            &self.backend,
            collection,
            natives,
        ))
    }

    pub fn delete_task(&self, path: &str) -> Result<()> {
        let session = self.session()?;
        path::validate_task_path(path)?;
        self.backend
            .delete_task(session, path)
            .map_err(map_backend)?;
        tracing::debug!("deleted task {}", path);
        Ok(())
    }

    /// Delete a folder. A non-empty folder is only removed when `recursive`
    /// is set; a refused delete reports `Ok(false)` and leaves everything
    /// in place.
    pub fn delete_folder(&self, path: &str, recursive: bool) -> Result<bool> {
        let session = self.session()?;
        path::validate_folder_path(path)?;
        let deleted = self
            .backend
            .delete_folder(session, path, recursive)
            .map_err(map_backend)?;
        if deleted {
            tracing::debug!("deleted folder {} (recursive: {})", path, recursive);
        } else {
            tracing::warn!("folder {} is not empty, delete refused", path);
        }
        Ok(deleted)
    }
}

impl Drop for TaskService {
    fn drop(&mut self) {
        self.disconnect();
    }
}
