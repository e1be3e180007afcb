use crate::convert::Period;
use crate::err::{ModelError, Result};
use crate::flags::{DaysOfMonth, DaysOfWeek, MonthsOfYear, WeeksOfMonth};
use chrono::NaiveDateTime;

pub const EVERY_DAY: u16 = 1;
pub const EVERY_OTHER_DAY: u16 = 2;
pub const EVERY_WEEK: u16 = 1;
pub const EVERY_OTHER_WEEK: u16 = 2;

/// A condition that causes a task's actions to execute. Any firing trigger
/// runs the actions; the order triggers were added in carries no meaning but
/// is preserved for round-trip fidelity.
#[derive(Debug, Clone, PartialEq)]
pub enum Trigger {
    Event(EventTrigger),
    Time(TimeTrigger),
    Daily(DailyTrigger),
    Weekly(WeeklyTrigger),
    Monthly(MonthlyTrigger),
    MonthlyDow(MonthlyDowTrigger),
    Idle(IdleTrigger),
    Registration(RegistrationTrigger),
    Boot(BootTrigger),
    Logon(LogonTrigger),
    SessionStateChange(SessionStateChangeTrigger),
}

impl Trigger {
    /// The scheduling fields shared by every trigger variant.
    pub fn common(&self) -> &TaskTrigger {
        match self {
            Trigger::Event(t) => &t.trigger,
            Trigger::Time(t) => &t.trigger,
            Trigger::Daily(t) => &t.trigger,
            Trigger::Weekly(t) => &t.trigger,
            Trigger::Monthly(t) => &t.trigger,
            Trigger::MonthlyDow(t) => &t.trigger,
            Trigger::Idle(t) => &t.trigger,
            Trigger::Registration(t) => &t.trigger,
            Trigger::Boot(t) => &t.trigger,
            Trigger::Logon(t) => &t.trigger,
            Trigger::SessionStateChange(t) => &t.trigger,
        }
    }
}

/// Fields common to every trigger variant, carried by composition.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskTrigger {
    pub enabled: bool,
    pub start_boundary: Option<NaiveDateTime>,
    pub end_boundary: Option<NaiveDateTime>,
    pub execution_time_limit: Period,
    pub random_delay: Period,
    pub repetition: RepetitionPattern,
}

impl Default for TaskTrigger {
    fn default() -> Self {
        Self {
            enabled: true,
            start_boundary: None,
            end_boundary: None,
            execution_time_limit: Period::default(),
            random_delay: Period::default(),
            repetition: RepetitionPattern::default(),
        }
    }
}

impl TaskTrigger {
    pub fn starting_at(start_boundary: NaiveDateTime) -> Self {
        Self {
            start_boundary: Some(start_boundary),
            ..Self::default()
        }
    }
}

/// How a fired trigger repeats until its duration runs out.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RepetitionPattern {
    pub interval: Period,
    pub duration: Period,
    pub stop_at_duration_end: bool,
}

/// Fires once at the start boundary.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TimeTrigger {
    pub trigger: TaskTrigger,
}

/// Fires every `day_interval` days from the start boundary.
#[derive(Debug, Clone, PartialEq)]
pub struct DailyTrigger {
    pub trigger: TaskTrigger,
    pub day_interval: u16,
}

impl Default for DailyTrigger {
    fn default() -> Self {
        Self {
            trigger: TaskTrigger::default(),
            day_interval: EVERY_DAY,
        }
    }
}

/// Fires on a weekday set every `week_interval` weeks.
#[derive(Debug, Clone, PartialEq)]
pub struct WeeklyTrigger {
    pub trigger: TaskTrigger,
    pub days_of_week: DaysOfWeek,
    pub week_interval: u16,
}

impl Default for WeeklyTrigger {
    fn default() -> Self {
        Self {
            trigger: TaskTrigger::default(),
            days_of_week: DaysOfWeek::default(),
            week_interval: EVERY_WEEK,
        }
    }
}

/// Fires on a calendar-day set within a month set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyTrigger {
    pub trigger: TaskTrigger,
    pub days_of_month: DaysOfMonth,
    pub months_of_year: MonthsOfYear,
    pub run_on_last_day: bool,
}

/// Fires on a weekday set within a week-of-month set within a month set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MonthlyDowTrigger {
    pub trigger: TaskTrigger,
    pub days_of_week: DaysOfWeek,
    pub weeks_of_month: WeeksOfMonth,
    pub months_of_year: MonthsOfYear,
}

/// Fires when the system goes idle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct IdleTrigger {
    pub trigger: TaskTrigger,
}

/// Fires when the task is registered.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RegistrationTrigger {
    pub trigger: TaskTrigger,
}

/// Fires when the system boots, after an optional delay.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct BootTrigger {
    pub trigger: TaskTrigger,
    pub delay: Period,
}

/// Fires when a user logs on. An empty `user_id` means any user.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LogonTrigger {
    pub trigger: TaskTrigger,
    pub user_id: String,
    pub delay: Period,
}

/// Fires on a log-event subscription query.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventTrigger {
    pub trigger: TaskTrigger,
    pub subscription: String,
}

/// Fires on a session state change, optionally scoped to one user.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionStateChangeTrigger {
    pub trigger: TaskTrigger,
    pub state_change: SessionStateChange,
    pub user_id: String,
}

impl Default for SessionStateChangeTrigger {
    fn default() -> Self {
        Self {
            trigger: TaskTrigger::default(),
            state_change: SessionStateChange::SessionLock,
            user_id: String::new(),
        }
    }
}

/// Session transition kinds, with the scheduler's numeric codes. The code
/// space has holes; 5 and 6 are not assigned.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStateChange {
    ConsoleConnect,
    ConsoleDisconnect,
    RemoteConnect,
    RemoteDisconnect,
    SessionLock,
    SessionUnlock,
}

impl SessionStateChange {
    pub fn code(self) -> u32 {
        match self {
            SessionStateChange::ConsoleConnect => 1,
            SessionStateChange::ConsoleDisconnect => 2,
            SessionStateChange::RemoteConnect => 3,
            SessionStateChange::RemoteDisconnect => 4,
            SessionStateChange::SessionLock => 7,
            SessionStateChange::SessionUnlock => 8,
        }
    }

    pub fn from_code(code: u32) -> Result<Self> {
        match code {
            1 => Ok(SessionStateChange::ConsoleConnect),
            2 => Ok(SessionStateChange::ConsoleDisconnect),
            3 => Ok(SessionStateChange::RemoteConnect),
            4 => Ok(SessionStateChange::RemoteDisconnect),
            7 => Ok(SessionStateChange::SessionLock),
            8 => Ok(SessionStateChange::SessionUnlock),
            other => Err(ModelError::InvalidFieldValue(
                String::from("session state change"),
                format!("unknown code {}", other),
            )),
        }
    }
}

impl From<EventTrigger> for Trigger {
    fn from(t: EventTrigger) -> Self {
        Trigger::Event(t)
    }
}

impl From<TimeTrigger> for Trigger {
    fn from(t: TimeTrigger) -> Self {
        Trigger::Time(t)
    }
}

impl From<DailyTrigger> for Trigger {
    fn from(t: DailyTrigger) -> Self {
        Trigger::Daily(t)
    }
}

impl From<WeeklyTrigger> for Trigger {
    fn from(t: WeeklyTrigger) -> Self {
        Trigger::Weekly(t)
    }
}

impl From<MonthlyTrigger> for Trigger {
    fn from(t: MonthlyTrigger) -> Self {
        Trigger::Monthly(t)
    }
}

impl From<MonthlyDowTrigger> for Trigger {
    fn from(t: MonthlyDowTrigger) -> Self {
        Trigger::MonthlyDow(t)
    }
}

impl From<IdleTrigger> for Trigger {
    fn from(t: IdleTrigger) -> Self {
        Trigger::Idle(t)
    }
}

impl From<RegistrationTrigger> for Trigger {
    fn from(t: RegistrationTrigger) -> Self {
        Trigger::Registration(t)
    }
}

impl From<BootTrigger> for Trigger {
    fn from(t: BootTrigger) -> Self {
        Trigger::Boot(t)
    }
}

impl From<LogonTrigger> for Trigger {
    fn from(t: LogonTrigger) -> Self {
        Trigger::Logon(t)
    }
}

impl From<SessionStateChangeTrigger> for Trigger {
    fn from(t: SessionStateChangeTrigger) -> Self {
        Trigger::SessionStateChange(t)
    }
}
