//! An in-memory scheduler service. Registered definitions are held as
//! encoded byte payloads and decoded again on every read; nothing is shared
//! with the caller except through the wire form.

use crate::backend::{
    BackendError, BackendResult, ConnectConfig, HandleId, NativeFolder, NativeTask,
    ScheduleBackend, SessionId,
};
use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashSet};
use task_model::wire::NativeTaskDefinition;

pub const ROOT_FOLDER: &str = "\\";

const TASK_STATE_READY: u32 = 3;

struct StoredTask {
    name: String,
    payload: Vec<u8>,
    state: u32,
}

#[derive(Default)]
struct SchedulerState {
    next_id: u64,
    sessions: HashSet<SessionId>,
    handles: HashSet<HandleId>,
    folders: BTreeSet<String>,
    tasks: BTreeMap<String, StoredTask>,
}

impl SchedulerState {
    fn next_id(&mut self) -> u64 {
        self.next_id += 1;
        self.next_id
    }

    fn ensure_session(&self, session: SessionId) -> BackendResult<()> {
        if !self.sessions.contains(&session) {
            return Err(BackendError::NoSession);
        }
        Ok(())
    }

    fn new_handle(&mut self) -> HandleId {
        let handle = self.next_id();
        self.handles.insert(handle);
        handle
    }

    /// Materialize the folder chain above a task or folder path.
    fn create_parent_folders(&mut self, path: &str) {
        let mut current = parent_of(path);
        while current != ROOT_FOLDER {
            self.folders.insert(current.to_string());
            current = parent_of(current);
        }
    }

    fn task_view(&mut self, path: &str) -> BackendResult<NativeTask> {
        let stored = match self.tasks.get(path) {
            Some(stored) => stored,
            None => return Err(BackendError::NotFound(path.to_string())),
        };
        let definition = NativeTaskDefinition::from_bytes(&stored.payload)
            .map_err(|e| BackendError::Failure(String::from("read task"), format!("{:?}", e)))?;
        let view = NativeTask {
            handle: 0,
            name: stored.name.clone(),
            path: path.to_string(),
            state: stored.state,
            definition,
        };
        Ok(NativeTask {
            handle: self.new_handle(),
            ..view
        })
    }
}

/// Reference backend standing in for the OS scheduler. Deliberately not
/// thread-safe; a session must stay on the thread that opened it.
pub struct MemoryScheduler {
    state: RefCell<SchedulerState>,
}

impl MemoryScheduler {
    pub fn new() -> Self {
        let mut state = SchedulerState::default();
        state.folders.insert(ROOT_FOLDER.to_string());
        Self {
            state: RefCell::new(state),
        }
    }

    /// Live handles not yet released. Test hook for leak assertions.
    pub fn open_handles(&self) -> usize {
        self.state.borrow().handles.len()
    }

    /// Sessions not yet disconnected. Test hook for leak assertions.
    pub fn open_sessions(&self) -> usize {
        self.state.borrow().sessions.len()
    }
}

impl Default for MemoryScheduler {
    fn default() -> Self {
        Self::new()
    }
}

fn parent_of(path: &str) -> &str {
    match path.rfind('\\') {
        Some(0) | None => ROOT_FOLDER,
        Some(idx) => &path[..idx],
    }
}

fn name_of(path: &str) -> &str {
    if path == ROOT_FOLDER {
        return ROOT_FOLDER;
    }
    match path.rfind('\\') {
        Some(idx) => &path[idx + 1..],
        None => path,
    }
}

fn subtree_prefix(path: &str) -> String {
    if path == ROOT_FOLDER {
        path.to_string()
    } else {
        format!("{}\\", path)
    }
}

impl ScheduleBackend for MemoryScheduler {
    fn connect(&self, config: &ConnectConfig) -> BackendResult<SessionId> {
        if !config.server.is_empty() {
            return Err(BackendError::Failure(
                String::from("connect"),
                format!("remote scheduler '{}' is not reachable", config.server),
            ));
        }
        let mut state = self.state.borrow_mut();
        let session = state.next_id();
        state.sessions.insert(session);
        tracing::debug!("scheduler session {} opened", session);
        Ok(session)
    }

    fn disconnect(&self, session: SessionId) {
        self.state.borrow_mut().sessions.remove(&session);
        tracing::debug!("scheduler session {} closed", session);
    }

    fn register_task(
        &self,
        session: SessionId,
        path: &str,
        definition: &NativeTaskDefinition,
        overwrite: bool,
    ) -> BackendResult<(Option<NativeTask>, bool)> {
        let mut state = self.state.borrow_mut();
        state.ensure_session(session)?;
        if definition.actions.is_empty() {
            return Err(BackendError::EmptyDefinition(path.to_string()));
        }
        if state.tasks.contains_key(path) && !overwrite {
            return Ok((None, false));
        }

        let payload = definition
            .to_bytes()
            .map_err(|e| BackendError::Failure(String::from("register task"), format!("{:?}", e)))?;
        state.create_parent_folders(path);
        state.tasks.insert(
            path.to_string(),
            StoredTask {
                name: name_of(path).to_string(),
                payload,
                state: TASK_STATE_READY,
            },
        );
        tracing::debug!("registered task at {}", path);
        let task = state.task_view(path)?;
        Ok((Some(task), true))
    }

    fn update_task(
        &self,
        session: SessionId,
        path: &str,
        definition: &NativeTaskDefinition,
    ) -> BackendResult<NativeTask> {
        let mut state = self.state.borrow_mut();
        state.ensure_session(session)?;
        if !state.tasks.contains_key(path) {
            return Err(BackendError::NotFound(path.to_string()));
        }
        if definition.actions.is_empty() {
            return Err(BackendError::EmptyDefinition(path.to_string()));
        }
        let payload = definition
            .to_bytes()
            .map_err(|e| BackendError::Failure(String::from("update task"), format!("{:?}", e)))?;
        if let Some(stored) = state.tasks.get_mut(path) {
            stored.payload = payload;
        }
        tracing::debug!("updated task at {}", path);
        state.task_view(path)
    }

    fn get_task(&self, session: SessionId, path: &str) -> BackendResult<NativeTask> {
        let mut state = self.state.borrow_mut();
        state.ensure_session(session)?;
        state.task_view(path)
    }

    fn list_tasks(&self, session: SessionId) -> BackendResult<(HandleId, Vec<NativeTask>)> {
        let mut state = self.state.borrow_mut();
        state.ensure_session(session)?;
        let paths: Vec<String> = state.tasks.keys().cloned().collect();
        let mut tasks = Vec::with_capacity(paths.len());
        for path in paths {
            tasks.push(state.task_view(&path)?);
        }
        let collection = state.new_handle();
        Ok((collection, tasks))
    }

    fn get_folder(&self, session: SessionId, path: &str) -> BackendResult<NativeFolder> {
        let mut state = self.state.borrow_mut();
        state.ensure_session(session)?;
        if !state.folders.contains(path) {
            return Err(BackendError::NotFound(path.to_string()));
        }
        Ok(NativeFolder {
            handle: state.new_handle(),
            name: name_of(path).to_string(),
            path: path.to_string(),
        })
    }

    fn list_folders(&self, session: SessionId) -> BackendResult<(HandleId, Vec<NativeFolder>)> {
        let mut state = self.state.borrow_mut();
        state.ensure_session(session)?;
        let paths: Vec<String> = state.folders.iter().cloned().collect();
        let folders = paths
            .into_iter()
            .map(|path| NativeFolder {
                handle: state.new_handle(),
                name: name_of(&path).to_string(),
                path,
            })
            .collect();
        let collection = state.new_handle();
        Ok((collection, folders))
    }

    fn delete_task(&self, session: SessionId, path: &str) -> BackendResult<()> {
        let mut state = self.state.borrow_mut();
        state.ensure_session(session)?;
        if state.tasks.remove(path).is_none() {
            return Err(BackendError::NotFound(path.to_string()));
        }
        tracing::debug!("deleted task at {}", path);
        Ok(())
    }

    fn delete_folder(
        &self,
        session: SessionId,
        path: &str,
        recursive: bool,
    ) -> BackendResult<bool> {
        let mut state = self.state.borrow_mut();
        state.ensure_session(session)?;
        if path == ROOT_FOLDER {
            return Err(BackendError::Failure(
                String::from("delete folder"),
                String::from("the root folder cannot be deleted"),
            ));
        }
        if !state.folders.contains(path) {
            return Err(BackendError::NotFound(path.to_string()));
        }

        let prefix = subtree_prefix(path);
        let occupied = state.tasks.keys().any(|p| p.starts_with(&prefix))
            || state.folders.iter().any(|f| f.starts_with(&prefix));
        if occupied && !recursive {
            return Ok(false);
        }

        state.folders.remove(path);
        state.folders.retain(|f| !f.starts_with(&prefix));
        state.tasks.retain(|p, _| !p.starts_with(&prefix));
        tracing::debug!("deleted folder {} (recursive: {})", path, recursive);
        Ok(true)
    }

    fn release(&self, handle: HandleId) {
        self.state.borrow_mut().handles.remove(&handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use task_model::task::{ExecAction, TaskDefinition};
    use task_model::wire::encode_definition;

    fn native_definition() -> NativeTaskDefinition {
        let mut def = TaskDefinition::new();
        def.add_action(ExecAction {
            path: String::from("calc.exe"),
            ..ExecAction::default()
        });
        encode_definition(&def).unwrap()
    }

    fn connected() -> (MemoryScheduler, SessionId) {
        let backend = MemoryScheduler::new();
        let session = backend.connect(&ConnectConfig::default()).unwrap();
        (backend, session)
    }

    #[test]
    fn calls_without_a_session_are_refused() {
        let backend = MemoryScheduler::new();
        let res = backend.get_task(77, "\\Nope");
        assert!(matches!(res, Err(BackendError::NoSession)));
    }

    #[test]
    fn remote_servers_are_unreachable() {
        let backend = MemoryScheduler::new();
        let res = backend.connect(&ConnectConfig {
            server: String::from("sched01"),
            ..ConnectConfig::default()
        });
        assert!(matches!(res, Err(BackendError::Failure(_, _))));
    }

    #[test]
    fn registration_creates_parent_folders() {
        let (backend, session) = connected();
        backend
            .register_task(session, "\\A\\B\\Job", &native_definition(), true)
            .unwrap();
        assert!(backend.get_folder(session, "\\A").is_ok());
        assert!(backend.get_folder(session, "\\A\\B").is_ok());
    }

    #[test]
    fn empty_definitions_are_rejected_at_registration() {
        let (backend, session) = connected();
        let empty = NativeTaskDefinition::default();
        let res = backend.register_task(session, "\\Job", &empty, true);
        assert!(matches!(res, Err(BackendError::EmptyDefinition(_))));
    }

    #[test]
    fn stored_payload_roundtrips_on_read() {
        let (backend, session) = connected();
        let native = native_definition();
        backend
            .register_task(session, "\\Job", &native, true)
            .unwrap();
        let fetched = backend.get_task(session, "\\Job").unwrap();
        assert_eq!(fetched.definition, native);
        assert_eq!(fetched.name, "Job");
        assert_eq!(fetched.state, TASK_STATE_READY);
    }

    #[test]
    fn release_retires_handles() {
        let (backend, session) = connected();
        backend
            .register_task(session, "\\Job", &native_definition(), true)
            .unwrap();
        let task = backend.get_task(session, "\\Job").unwrap();
        let before = backend.open_handles();
        backend.release(task.handle);
        assert_eq!(backend.open_handles(), before - 1);
    }

    #[test]
    fn sibling_folders_sharing_a_name_prefix_survive_recursive_delete() {
        let (backend, session) = connected();
        backend
            .register_task(session, "\\Group\\Job", &native_definition(), true)
            .unwrap();
        backend
            .register_task(session, "\\GroupX\\Job", &native_definition(), true)
            .unwrap();
        assert!(backend.delete_folder(session, "\\Group", true).unwrap());
        assert!(backend.get_task(session, "\\GroupX\\Job").is_ok());
    }

    #[test]
    fn the_root_folder_is_not_deletable() {
        let (backend, session) = connected();
        let res = backend.delete_folder(session, ROOT_FOLDER, true);
        assert!(matches!(res, Err(BackendError::Failure(_, _))));
    }
}
