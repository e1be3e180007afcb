pub mod actions;
pub mod settings;
pub mod triggers;

pub use actions::{Action, ComHandlerAction, ExecAction};
pub use settings::{IdleSettings, InstancesPolicy, TaskSettings};
pub use triggers::{
    BootTrigger, DailyTrigger, EventTrigger, IdleTrigger, LogonTrigger, MonthlyDowTrigger,
    MonthlyTrigger, RegistrationTrigger, RepetitionPattern, SessionStateChange,
    SessionStateChangeTrigger, TaskTrigger, TimeTrigger, Trigger, WeeklyTrigger,
};

use chrono::NaiveDateTime;

/// Who registered a task and why. Purely descriptive; the scheduler stores
/// it verbatim.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationInfo {
    pub author: String,
    pub date: Option<NaiveDateTime>,
    pub description: String,
    pub documentation: String,
    pub source: String,
    pub uri: String,
    pub version: String,
}

/// One schedulable unit: what to run, when to run it, and under which
/// policy. A pure data carrier; all structural validation happens at the
/// scheduler boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskDefinition {
    pub registration_info: RegistrationInfo,
    pub actions: Vec<Action>,
    pub triggers: Vec<Trigger>,
    pub settings: TaskSettings,
}

impl TaskDefinition {
    /// A blank definition with default settings, no actions, no triggers.
    pub fn new() -> Self {
        Self {
            registration_info: RegistrationInfo::default(),
            actions: Vec::new(),
            triggers: Vec::new(),
            settings: TaskSettings::default(),
        }
    }

    /// Append an action. Actions execute in insertion order.
    pub fn add_action(&mut self, action: impl Into<Action>) {
        self.actions.push(action.into());
    }

    /// Append a trigger. Any firing trigger runs the actions.
    pub fn add_trigger(&mut self, trigger: impl Into<Trigger>) {
        self.triggers.push(trigger.into());
    }
}

impl Default for TaskDefinition {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_definition_is_blank_with_default_settings() {
        let def = TaskDefinition::new();
        assert!(def.actions.is_empty());
        assert!(def.triggers.is_empty());
        assert_eq!(def.settings, TaskSettings::default());
        assert_eq!(def.registration_info, RegistrationInfo::default());
    }

    #[test]
    fn actions_keep_insertion_order() {
        let mut def = TaskDefinition::new();
        def.add_action(ExecAction {
            path: String::from("first.exe"),
            ..ExecAction::default()
        });
        def.add_action(ComHandlerAction {
            class_id: String::from("{F0001111-0000-0000-0000-0000FEEDACDC}"),
            ..ComHandlerAction::default()
        });
        def.add_action(ExecAction {
            path: String::from("third.exe"),
            ..ExecAction::default()
        });

        match (&def.actions[0], &def.actions[1], &def.actions[2]) {
            (Action::Exec(a), Action::ComHandler(_), Action::Exec(c)) => {
                assert_eq!(a.path, "first.exe");
                assert_eq!(c.path, "third.exe");
            }
            other => panic!("insertion order lost: {:?}", other),
        }
    }

    #[test]
    fn triggers_keep_insertion_order() {
        let mut def = TaskDefinition::new();
        def.add_trigger(IdleTrigger::default());
        def.add_trigger(RegistrationTrigger::default());
        assert!(matches!(def.triggers[0], Trigger::Idle(_)));
        assert!(matches!(def.triggers[1], Trigger::Registration(_)));
    }
}
