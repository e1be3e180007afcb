pub mod backend;
pub mod err;
pub mod service;

// Re-export the entry point and the caller-owned resource types.
pub use service::TaskService;
pub use service::resources::{
    RegisteredTask, RegisteredTaskCollection, TaskFolder, TaskFolderCollection, TaskState,
};
