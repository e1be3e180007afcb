/// Work performed when a task fires. Insertion order on the definition is
/// execution order.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Exec(ExecAction),
    ComHandler(ComHandlerAction),
}

/// Run an executable. `args` and `working_dir` are optional; the empty
/// string is the unset value, matching the wire form.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExecAction {
    pub path: String,
    pub args: String,
    pub working_dir: String,
}

/// Invoke a COM handler. `class_id` is a GUID-shaped string; its shape is
/// checked by the scheduler at registration time, not by the model.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ComHandlerAction {
    pub class_id: String,
    pub data: String,
}

impl From<ExecAction> for Action {
    fn from(action: ExecAction) -> Self {
        Action::Exec(action)
    }
}

impl From<ComHandlerAction> for Action {
    fn from(action: ComHandlerAction) -> Self {
        Action::ComHandler(action)
    }
}
