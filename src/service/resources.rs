//! Caller-owned views of live scheduler objects. Every one of these wraps a
//! backend handle; the guard releases it when the owner drops the value,
//! on every exit path.

use crate::backend::{HandleId, NativeFolder, NativeTask, ScheduleBackend};
use crate::err::{Result, TaskServiceError};
use std::fmt::{self, Debug, Display, Formatter};
use std::rc::Rc;
use task_model::TaskDefinition;
use task_model::wire;

/// Run state as the scheduler reports it. Codes the model does not know
/// collapse to `Unknown` rather than failing a read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskState {
    Unknown,
    Disabled,
    Queued,
    Ready,
    Running,
}

impl TaskState {
    pub fn from_code(code: u32) -> Self {
        match code {
            1 => TaskState::Disabled,
            2 => TaskState::Queued,
            3 => TaskState::Ready,
            4 => TaskState::Running,
            _ => TaskState::Unknown,
        }
    }

    pub fn code(self) -> u32 {
        match self {
            TaskState::Unknown => 0,
            TaskState::Disabled => 1,
            TaskState::Queued => 2,
            TaskState::Ready => 3,
            TaskState::Running => 4,
        }
    }
}

impl Display for TaskState {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let s = match self {
            TaskState::Unknown => "unknown",
            TaskState::Disabled => "disabled",
            TaskState::Queued => "queued",
            TaskState::Ready => "ready",
            TaskState::Running => "running",
        };
        write!(f, "{}", s)
    }
}

/// Releases one backend handle when dropped.
struct HandleGuard {
    backend: Rc<dyn ScheduleBackend>,
    handle: HandleId,
}

impl HandleGuard {
    fn new(backend: Rc<dyn ScheduleBackend>, handle: HandleId) -> Self {
        Self { backend, handle }
    }
}

impl Drop for HandleGuard {
    fn drop(&mut self) {
        self.backend.release(self.handle);
    }
}

impl Debug for HandleGuard {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "HandleGuard({})", self.handle)
    }
}

/// A task as registered with the scheduler, decoded back into model types.
#[derive(Debug)]
pub struct RegisteredTask {
    pub name: String,
    pub path: String,
    pub state: TaskState,
    pub definition: TaskDefinition,
    _guard: HandleGuard,
}

impl RegisteredTask {
    pub(crate) fn from_native(
        backend: &Rc<dyn ScheduleBackend>,
        native: NativeTask,
    ) -> Result<Self> {
        // Guard first: if the definition fails to decode, the handle is
        // still released on the way out.
        let guard = HandleGuard::new(backend.clone(), native.handle);
        let definition = wire::decode_definition(&native.definition).map_err(|e| {
            TaskServiceError::ServiceError(String::from("decode task"), format!("{:?}", e))
        })?;
        Ok(Self {
            name: native.name,
            path: native.path,
            state: TaskState::from_code(native.state),
            definition,
            _guard: guard,
        })
    }

    /// Release the underlying scheduler handle now instead of at drop.
    pub fn release(self) {}
}

/// A folder in the scheduler's namespace.
#[derive(Debug)]
pub struct TaskFolder {
    pub name: String,
    pub path: String,
    _guard: HandleGuard,
}

impl TaskFolder {
    pub(crate) fn from_native(backend: &Rc<dyn ScheduleBackend>, native: NativeFolder) -> Self {
        Self {
            name: native.name,
            path: native.path,
            _guard: HandleGuard::new(backend.clone(), native.handle),
        }
    }

    pub fn release(self) {}
}

/// An enumeration of registered tasks. Owns its members and one collection
/// handle; dropping (or `release`) frees all of them.
#[derive(Debug)]
pub struct RegisteredTaskCollection {
    tasks: Vec<RegisteredTask>,
    _guard: HandleGuard,
}

impl RegisteredTaskCollection {
    pub(crate) fn from_natives(
        backend: &Rc<dyn ScheduleBackend>,
        collection: HandleId,
        natives: Vec<NativeTask>,
    ) -> Result<Self> {
        let guard = HandleGuard::new(backend.clone(), collection);
        let mut tasks = Vec::with_capacity(natives.len());
        for native in natives {
            tasks.push(RegisteredTask::from_native(backend, native)?);
        }
        Ok(Self {
            tasks,
            _guard: guard,
        })
    }

    pub fn tasks(&self) -> &[RegisteredTask] {
        &self.tasks
    }

    pub fn iter(&self) -> std::slice::Iter<'_, RegisteredTask> {
        self.tasks.iter()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    pub fn release(self) {}
}

impl<'a> IntoIterator for &'a RegisteredTaskCollection {
    type Item = &'a RegisteredTask;
    type IntoIter = std::slice::Iter<'a, RegisteredTask>;

    fn into_iter(self) -> Self::IntoIter {
        self.tasks.iter()
    }
}

/// An enumeration of task folders.
#[derive(Debug)]
pub struct TaskFolderCollection {
    folders: Vec<TaskFolder>,
    _guard: HandleGuard,
}

impl TaskFolderCollection {
    pub(crate) fn from_natives(
        backend: &Rc<dyn ScheduleBackend>,
        collection: HandleId,
        natives: Vec<NativeFolder>,
    ) -> Self {
        let guard = HandleGuard::new(backend.clone(), collection);
        let folders = natives
            .into_iter()
            .map(|native| TaskFolder::from_native(backend, native))
            .collect();
        Self {
            folders,
            _guard: guard,
        }
    }

    pub fn folders(&self) -> &[TaskFolder] {
        &self.folders
    }

    pub fn iter(&self) -> std::slice::Iter<'_, TaskFolder> {
        self.folders.iter()
    }

    pub fn len(&self) -> usize {
        self.folders.len()
    }

    pub fn is_empty(&self) -> bool {
        self.folders.is_empty()
    }

    pub fn release(self) {}
}

impl<'a> IntoIterator for &'a TaskFolderCollection {
    type Item = &'a TaskFolder;
    type IntoIter = std::slice::Iter<'a, TaskFolder>;

    fn into_iter(self) -> Self::IntoIter {
        self.folders.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unknown_state_codes_collapse_to_unknown() {
        assert_eq!(TaskState::from_code(3), TaskState::Ready);
        assert_eq!(TaskState::from_code(99), TaskState::Unknown);
        for code in 0..=4 {
            assert_eq!(TaskState::from_code(code).code(), code);
        }
    }

    #[test]
    fn state_display_is_lowercase() {
        assert_eq!(TaskState::Running.to_string(), "running");
        assert_eq!(TaskState::Disabled.to_string(), "disabled");
    }
}
