use crate::err::{Result, TaskServiceError};
use regex::Regex;
use std::sync::LazyLock;

// Absolute folder-qualified name: leading backslash, then backslash-joined
// segments free of the characters the scheduler reserves.
static TASK_PATH_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"^\\(?:[^\\/:*?"<>|]+(?:\\[^\\/:*?"<>|]+)*)?$"#)
        .expect("task path pattern must compile")
});

pub const ROOT: &str = "\\";

/// A task path names a task inside a folder chain; the bare root is not a
/// task name.
pub fn validate_task_path(path: &str) -> Result<()> {
    if path == ROOT || !TASK_PATH_RE.is_match(path) {
        return Err(TaskServiceError::ValidationError(format!(
            "'{}' is not an absolute task path",
            path
        )));
    }
    Ok(())
}

/// A folder path is shaped like a task path, except the bare root is
/// allowed.
pub fn validate_folder_path(path: &str) -> Result<()> {
    if !TASK_PATH_RE.is_match(path) {
        return Err(TaskServiceError::ValidationError(format!(
            "'{}' is not an absolute folder path",
            path
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_paths_are_accepted() {
        for good in ["\\Job", "\\Group\\Job", "\\a\\b\\c", "\\with spaces\\ok"] {
            assert!(validate_task_path(good).is_ok(), "expected ok for {}", good);
        }
    }

    #[test]
    fn relative_and_malformed_paths_are_rejected() {
        for bad in [
            "",
            "Job",
            "Group\\Job",
            "\\Group\\",
            "\\\\Job",
            "\\Gro:up\\Job",
            "\\que?",
            "/Group/Job",
        ] {
            let res = validate_task_path(bad);
            assert!(res.is_err(), "expected rejection for {:?}", bad);
            assert!(matches!(
                res.err().unwrap(),
                TaskServiceError::ValidationError(_)
            ));
        }
    }

    #[test]
    fn the_root_is_a_folder_not_a_task() {
        assert!(validate_task_path(ROOT).is_err());
        assert!(validate_folder_path(ROOT).is_ok());
        assert!(validate_folder_path("\\Group").is_ok());
        assert!(validate_folder_path("Group").is_err());
    }
}
