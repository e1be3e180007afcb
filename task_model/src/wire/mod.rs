//! The scheduler-native rendition of a task definition: every timestamp a
//! task-date string, every span a duration string, every set its bitmask
//! integer, every enum its numeric code. The scheduler parses these fields
//! without semantic normalization, so the encodings must match byte for
//! byte.

use crate::convert::{
    datetime_to_task_date, period_to_string, string_to_period, task_date_to_datetime,
};
use crate::err::{ModelError, Result};
use crate::flags::{DaysOfMonth, DaysOfWeek, MonthsOfYear, WeeksOfMonth};
use crate::task::{
    Action, BootTrigger, ComHandlerAction, DailyTrigger, EventTrigger, ExecAction, IdleSettings,
    IdleTrigger, InstancesPolicy, LogonTrigger, MonthlyDowTrigger, MonthlyTrigger,
    RegistrationInfo, RegistrationTrigger, RepetitionPattern, SessionStateChange,
    SessionStateChangeTrigger, TaskDefinition, TaskSettings, TaskTrigger, TimeTrigger, Trigger,
    WeeklyTrigger,
};
use serde::{Deserialize, Serialize};

pub const ACTION_EXEC: u32 = 0;
pub const ACTION_COM_HANDLER: u32 = 5;

pub const TRIGGER_EVENT: u32 = 0;
pub const TRIGGER_TIME: u32 = 1;
pub const TRIGGER_DAILY: u32 = 2;
pub const TRIGGER_WEEKLY: u32 = 3;
pub const TRIGGER_MONTHLY: u32 = 4;
pub const TRIGGER_MONTHLY_DOW: u32 = 5;
pub const TRIGGER_IDLE: u32 = 6;
pub const TRIGGER_REGISTRATION: u32 = 7;
pub const TRIGGER_BOOT: u32 = 8;
pub const TRIGGER_LOGON: u32 = 9;
pub const TRIGGER_SESSION_STATE_CHANGE: u32 = 11;

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct NativeTaskDefinition {
    pub registration_info: NativeRegistrationInfo,
    pub actions: Vec<NativeAction>,
    pub triggers: Vec<NativeTrigger>,
    pub settings: NativeSettings,
}

impl NativeTaskDefinition {
    /// Frame the definition for transport or storage.
    pub fn to_bytes(&self) -> Result<Vec<u8>> {
        bincode::serialize(self).map_err(|e| ModelError::InvalidPayload(e.to_string()))
    }

    pub fn from_bytes(bytes: &[u8]) -> Result<Self> {
        bincode::deserialize(bytes).map_err(|e| ModelError::InvalidPayload(e.to_string()))
    }
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct NativeRegistrationInfo {
    pub author: String,
    pub date: String,
    pub description: String,
    pub documentation: String,
    pub source: String,
    pub uri: String,
    pub version: String,
}

/// One action record. `kind` selects which of the remaining fields carry
/// data; the rest stay empty, the way the scheduler's own records do.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct NativeAction {
    pub kind: u32,
    pub path: String,
    pub args: String,
    pub working_dir: String,
    pub class_id: String,
    pub data: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct NativeRepetition {
    pub interval: String,
    pub duration: String,
    pub stop_at_duration_end: bool,
}

/// One trigger record: the common fields plus the superset of per-kind
/// fields, selected by `kind`.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct NativeTrigger {
    pub kind: u32,
    pub enabled: bool,
    pub start_boundary: String,
    pub end_boundary: String,
    pub execution_time_limit: String,
    pub random_delay: String,
    pub repetition: NativeRepetition,

    pub day_interval: u16,
    pub week_interval: u16,
    pub days_of_week: u16,
    pub days_of_month: u32,
    pub weeks_of_month: u16,
    pub months_of_year: u16,
    pub run_on_last_day: bool,
    pub subscription: String,
    pub state_change: u32,
    pub user_id: String,
    pub delay: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct NativeIdleSettings {
    pub idle_duration: String,
    pub restart_on_idle: bool,
    pub stop_on_idle_end: bool,
    pub wait_timeout: String,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq)]
pub struct NativeSettings {
    pub allow_demand_start: bool,
    pub allow_hard_terminate: bool,
    pub dont_start_on_batteries: bool,
    pub enabled: bool,
    pub hidden: bool,
    pub idle_settings: NativeIdleSettings,
    pub multiple_instances: u32,
    pub priority: u32,
    pub restart_count: u32,
    pub restart_interval: String,
    pub run_only_if_idle: bool,
    pub run_only_if_network_available: bool,
    pub start_when_available: bool,
    pub stop_if_going_on_batteries: bool,
    pub time_limit: String,
    pub wake_to_run: bool,
}

pub fn encode_definition(def: &TaskDefinition) -> Result<NativeTaskDefinition> {
    let mut triggers = Vec::with_capacity(def.triggers.len());
    for trigger in &def.triggers {
        triggers.push(encode_trigger(trigger)?);
    }
    Ok(NativeTaskDefinition {
        registration_info: encode_registration_info(&def.registration_info),
        actions: def.actions.iter().map(encode_action).collect(),
        triggers,
        settings: encode_settings(&def.settings),
    })
}

pub fn decode_definition(native: &NativeTaskDefinition) -> Result<TaskDefinition> {
    let mut actions = Vec::with_capacity(native.actions.len());
    for action in &native.actions {
        actions.push(decode_action(action)?);
    }
    let mut triggers = Vec::with_capacity(native.triggers.len());
    for trigger in &native.triggers {
        triggers.push(decode_trigger(trigger)?);
    }
    Ok(TaskDefinition {
        registration_info: decode_registration_info(&native.registration_info)?,
        actions,
        triggers,
        settings: decode_settings(&native.settings)?,
    })
}

fn encode_registration_info(info: &RegistrationInfo) -> NativeRegistrationInfo {
    NativeRegistrationInfo {
        author: info.author.clone(),
        date: datetime_to_task_date(info.date),
        description: info.description.clone(),
        documentation: info.documentation.clone(),
        source: info.source.clone(),
        uri: info.uri.clone(),
        version: info.version.clone(),
    }
}

fn decode_registration_info(native: &NativeRegistrationInfo) -> Result<RegistrationInfo> {
    Ok(RegistrationInfo {
        author: native.author.clone(),
        date: task_date_to_datetime(&native.date)?,
        description: native.description.clone(),
        documentation: native.documentation.clone(),
        source: native.source.clone(),
        uri: native.uri.clone(),
        version: native.version.clone(),
    })
}

fn encode_action(action: &Action) -> NativeAction {
    match action {
        Action::Exec(a) => NativeAction {
            kind: ACTION_EXEC,
            path: a.path.clone(),
            args: a.args.clone(),
            working_dir: a.working_dir.clone(),
            ..NativeAction::default()
        },
        Action::ComHandler(a) => NativeAction {
            kind: ACTION_COM_HANDLER,
            class_id: a.class_id.clone(),
            data: a.data.clone(),
            ..NativeAction::default()
        },
    }
}

fn decode_action(native: &NativeAction) -> Result<Action> {
    match native.kind {
        ACTION_EXEC => Ok(Action::Exec(ExecAction {
            path: native.path.clone(),
            args: native.args.clone(),
            working_dir: native.working_dir.clone(),
        })),
        ACTION_COM_HANDLER => Ok(Action::ComHandler(ComHandlerAction {
            class_id: native.class_id.clone(),
            data: native.data.clone(),
        })),
        other => Err(ModelError::InvalidFieldValue(
            String::from("action kind"),
            format!("unknown discriminant {}", other),
        )),
    }
}

fn encode_trigger_common(common: &TaskTrigger) -> NativeTrigger {
    NativeTrigger {
        enabled: common.enabled,
        start_boundary: datetime_to_task_date(common.start_boundary),
        end_boundary: datetime_to_task_date(common.end_boundary),
        execution_time_limit: period_to_string(&common.execution_time_limit),
        random_delay: period_to_string(&common.random_delay),
        repetition: NativeRepetition {
            interval: period_to_string(&common.repetition.interval),
            duration: period_to_string(&common.repetition.duration),
            stop_at_duration_end: common.repetition.stop_at_duration_end,
        },
        ..NativeTrigger::default()
    }
}

fn decode_trigger_common(native: &NativeTrigger) -> Result<TaskTrigger> {
    Ok(TaskTrigger {
        enabled: native.enabled,
        start_boundary: task_date_to_datetime(&native.start_boundary)?,
        end_boundary: task_date_to_datetime(&native.end_boundary)?,
        execution_time_limit: string_to_period(&native.execution_time_limit)?,
        random_delay: string_to_period(&native.random_delay)?,
        repetition: RepetitionPattern {
            interval: string_to_period(&native.repetition.interval)?,
            duration: string_to_period(&native.repetition.duration)?,
            stop_at_duration_end: native.repetition.stop_at_duration_end,
        },
    })
}

fn check_day_interval(interval: u16) -> Result<u16> {
    if !(1..=32767).contains(&interval) {
        return Err(ModelError::InvalidDayInterval(interval));
    }
    Ok(interval)
}

fn check_week_interval(interval: u16) -> Result<u16> {
    if !(1..=52).contains(&interval) {
        return Err(ModelError::InvalidWeekInterval(interval));
    }
    Ok(interval)
}

fn encode_trigger(trigger: &Trigger) -> Result<NativeTrigger> {
    let mut native = encode_trigger_common(trigger.common());
    match trigger {
        Trigger::Event(t) => {
            native.kind = TRIGGER_EVENT;
            native.subscription = t.subscription.clone();
        }
        Trigger::Time(_) => {
            native.kind = TRIGGER_TIME;
        }
        Trigger::Daily(t) => {
            native.kind = TRIGGER_DAILY;
            native.day_interval = check_day_interval(t.day_interval)?;
        }
        Trigger::Weekly(t) => {
            native.kind = TRIGGER_WEEKLY;
            native.days_of_week = t.days_of_week.bits();
            native.week_interval = check_week_interval(t.week_interval)?;
        }
        Trigger::Monthly(t) => {
            native.kind = TRIGGER_MONTHLY;
            native.days_of_month = t.days_of_month.bits();
            native.months_of_year = t.months_of_year.bits();
            native.run_on_last_day = t.run_on_last_day;
        }
        Trigger::MonthlyDow(t) => {
            native.kind = TRIGGER_MONTHLY_DOW;
            native.days_of_week = t.days_of_week.bits();
            native.weeks_of_month = t.weeks_of_month.bits();
            native.months_of_year = t.months_of_year.bits();
        }
        Trigger::Idle(_) => {
            native.kind = TRIGGER_IDLE;
        }
        Trigger::Registration(_) => {
            native.kind = TRIGGER_REGISTRATION;
        }
        Trigger::Boot(t) => {
            native.kind = TRIGGER_BOOT;
            native.delay = period_to_string(&t.delay);
        }
        Trigger::Logon(t) => {
            native.kind = TRIGGER_LOGON;
            native.user_id = t.user_id.clone();
            native.delay = period_to_string(&t.delay);
        }
        Trigger::SessionStateChange(t) => {
            native.kind = TRIGGER_SESSION_STATE_CHANGE;
            native.state_change = t.state_change.code();
            native.user_id = t.user_id.clone();
        }
    }
    Ok(native)
}

fn decode_trigger(native: &NativeTrigger) -> Result<Trigger> {
    let trigger = decode_trigger_common(native)?;
    match native.kind {
        TRIGGER_EVENT => Ok(Trigger::Event(EventTrigger {
            trigger,
            subscription: native.subscription.clone(),
        })),
        TRIGGER_TIME => Ok(Trigger::Time(TimeTrigger { trigger })),
        TRIGGER_DAILY => Ok(Trigger::Daily(DailyTrigger {
            trigger,
            day_interval: check_day_interval(native.day_interval)?,
        })),
        TRIGGER_WEEKLY => Ok(Trigger::Weekly(WeeklyTrigger {
            trigger,
            days_of_week: decode_days_of_week(native.days_of_week)?,
            week_interval: check_week_interval(native.week_interval)?,
        })),
        TRIGGER_MONTHLY => Ok(Trigger::Monthly(MonthlyTrigger {
            trigger,
            days_of_month: DaysOfMonth::from_bits_truncate(native.days_of_month),
            months_of_year: decode_months(native.months_of_year)?,
            run_on_last_day: native.run_on_last_day,
        })),
        TRIGGER_MONTHLY_DOW => Ok(Trigger::MonthlyDow(MonthlyDowTrigger {
            trigger,
            days_of_week: decode_days_of_week(native.days_of_week)?,
            weeks_of_month: WeeksOfMonth::from_bits(native.weeks_of_month).ok_or_else(|| {
                ModelError::InvalidFieldValue(
                    String::from("weeks of month"),
                    format!("unknown bits 0x{:x}", native.weeks_of_month),
                )
            })?,
            months_of_year: decode_months(native.months_of_year)?,
        })),
        TRIGGER_IDLE => Ok(Trigger::Idle(IdleTrigger { trigger })),
        TRIGGER_REGISTRATION => Ok(Trigger::Registration(RegistrationTrigger { trigger })),
        TRIGGER_BOOT => Ok(Trigger::Boot(BootTrigger {
            trigger,
            delay: string_to_period(&native.delay)?,
        })),
        TRIGGER_LOGON => Ok(Trigger::Logon(LogonTrigger {
            trigger,
            user_id: native.user_id.clone(),
            delay: string_to_period(&native.delay)?,
        })),
        TRIGGER_SESSION_STATE_CHANGE => {
            Ok(Trigger::SessionStateChange(SessionStateChangeTrigger {
                trigger,
                state_change: SessionStateChange::from_code(native.state_change)?,
                user_id: native.user_id.clone(),
            }))
        }
        other => Err(ModelError::InvalidFieldValue(
            String::from("trigger kind"),
            format!("unknown discriminant {}", other),
        )),
    }
}

fn decode_days_of_week(bits: u16) -> Result<DaysOfWeek> {
    DaysOfWeek::from_bits(bits).ok_or_else(|| {
        ModelError::InvalidFieldValue(
            String::from("days of week"),
            format!("unknown bits 0x{:x}", bits),
        )
    })
}

fn decode_months(bits: u16) -> Result<MonthsOfYear> {
    MonthsOfYear::from_bits(bits).ok_or_else(|| {
        ModelError::InvalidFieldValue(
            String::from("months of year"),
            format!("unknown bits 0x{:x}", bits),
        )
    })
}

fn encode_settings(settings: &TaskSettings) -> NativeSettings {
    NativeSettings {
        allow_demand_start: settings.allow_demand_start,
        allow_hard_terminate: settings.allow_hard_terminate,
        dont_start_on_batteries: settings.dont_start_on_batteries,
        enabled: settings.enabled,
        hidden: settings.hidden,
        idle_settings: NativeIdleSettings {
            idle_duration: period_to_string(&settings.idle_settings.idle_duration),
            restart_on_idle: settings.idle_settings.restart_on_idle,
            stop_on_idle_end: settings.idle_settings.stop_on_idle_end,
            wait_timeout: period_to_string(&settings.idle_settings.wait_timeout),
        },
        multiple_instances: settings.multiple_instances.code(),
        priority: settings.priority,
        restart_count: settings.restart_count,
        restart_interval: period_to_string(&settings.restart_interval),
        run_only_if_idle: settings.run_only_if_idle,
        run_only_if_network_available: settings.run_only_if_network_available,
        start_when_available: settings.start_when_available,
        stop_if_going_on_batteries: settings.stop_if_going_on_batteries,
        time_limit: period_to_string(&settings.time_limit),
        wake_to_run: settings.wake_to_run,
    }
}

fn decode_settings(native: &NativeSettings) -> Result<TaskSettings> {
    Ok(TaskSettings {
        allow_demand_start: native.allow_demand_start,
        allow_hard_terminate: native.allow_hard_terminate,
        dont_start_on_batteries: native.dont_start_on_batteries,
        enabled: native.enabled,
        hidden: native.hidden,
        idle_settings: IdleSettings {
            idle_duration: string_to_period(&native.idle_settings.idle_duration)?,
            restart_on_idle: native.idle_settings.restart_on_idle,
            stop_on_idle_end: native.idle_settings.stop_on_idle_end,
            wait_timeout: string_to_period(&native.idle_settings.wait_timeout)?,
        },
        multiple_instances: InstancesPolicy::from_code(native.multiple_instances)?,
        priority: native.priority,
        restart_count: native.restart_count,
        restart_interval: string_to_period(&native.restart_interval)?,
        run_only_if_idle: native.run_only_if_idle,
        run_only_if_network_available: native.run_only_if_network_available,
        start_when_available: native.start_when_available,
        stop_if_going_on_batteries: native.stop_if_going_on_batteries,
        time_limit: string_to_period(&native.time_limit)?,
        wake_to_run: native.wake_to_run,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::convert::{Period, int_to_day_of_month};
    use chrono::NaiveDate;

    fn start() -> chrono::NaiveDateTime {
        NaiveDate::from_ymd_opt(2025, 4, 7)
            .unwrap()
            .and_hms_opt(9, 30, 0)
            .unwrap()
    }

    fn definition_with(trigger: impl Into<Trigger>) -> TaskDefinition {
        let mut def = TaskDefinition::new();
        def.add_action(ExecAction {
            path: String::from("cmd.exe"),
            args: String::from("/c echo hi"),
            ..ExecAction::default()
        });
        def.add_trigger(trigger);
        def
    }

    #[test]
    fn exec_action_encodes_with_the_exec_discriminant() {
        let native = encode_definition(&definition_with(TimeTrigger::default())).unwrap();
        assert_eq!(native.actions[0].kind, ACTION_EXEC);
        assert_eq!(native.actions[0].path, "cmd.exe");
        assert_eq!(native.actions[0].class_id, "");
    }

    #[test]
    fn unset_boundaries_encode_to_empty_strings() {
        let native = encode_definition(&definition_with(TimeTrigger::default())).unwrap();
        assert_eq!(native.triggers[0].start_boundary, "");
        assert_eq!(native.triggers[0].end_boundary, "");
        assert_eq!(native.triggers[0].execution_time_limit, "");
    }

    #[test]
    fn start_boundary_encodes_in_the_bare_local_form() {
        let def = definition_with(TimeTrigger {
            trigger: TaskTrigger::starting_at(start()),
        });
        let native = encode_definition(&def).unwrap();
        assert_eq!(native.triggers[0].start_boundary, "2025-04-07T09:30:00");
    }

    #[test]
    fn monthly_trigger_carries_the_day_bit_not_the_ordinal() {
        let def = definition_with(MonthlyTrigger {
            days_of_month: int_to_day_of_month(3).unwrap(),
            months_of_year: MonthsOfYear::FEBRUARY | MonthsOfYear::MARCH,
            ..MonthlyTrigger::default()
        });
        let native = encode_definition(&def).unwrap();
        assert_eq!(native.triggers[0].kind, TRIGGER_MONTHLY);
        assert_eq!(native.triggers[0].days_of_month, 0b100);
        assert_eq!(native.triggers[0].months_of_year, 0x006);
    }

    #[test]
    fn weekly_trigger_carries_weekday_mask_and_interval() {
        let def = definition_with(WeeklyTrigger {
            days_of_week: DaysOfWeek::TUESDAY | DaysOfWeek::THURSDAY,
            week_interval: crate::task::triggers::EVERY_OTHER_WEEK,
            ..WeeklyTrigger::default()
        });
        let native = encode_definition(&def).unwrap();
        assert_eq!(native.triggers[0].days_of_week, 0b10100);
        assert_eq!(native.triggers[0].week_interval, 2);
    }

    #[test]
    fn session_state_change_encodes_its_numeric_code() {
        let def = definition_with(SessionStateChangeTrigger {
            state_change: SessionStateChange::SessionLock,
            ..SessionStateChangeTrigger::default()
        });
        let native = encode_definition(&def).unwrap();
        assert_eq!(native.triggers[0].kind, TRIGGER_SESSION_STATE_CHANGE);
        assert_eq!(native.triggers[0].state_change, 7);
    }

    #[test]
    fn out_of_range_intervals_are_rejected_on_encode() {
        let def = definition_with(DailyTrigger {
            day_interval: 0,
            ..DailyTrigger::default()
        });
        assert!(matches!(
            encode_definition(&def),
            Err(ModelError::InvalidDayInterval(0))
        ));

        let def = definition_with(WeeklyTrigger {
            days_of_week: DaysOfWeek::MONDAY,
            week_interval: 53,
            ..WeeklyTrigger::default()
        });
        assert!(matches!(
            encode_definition(&def),
            Err(ModelError::InvalidWeekInterval(53))
        ));
    }

    #[test]
    fn decode_rejects_unknown_discriminants() {
        let mut native = encode_definition(&definition_with(TimeTrigger::default())).unwrap();
        native.triggers[0].kind = 10;
        let res = decode_definition(&native);
        assert!(res.is_err());
        let msg = format!("{:?}", res.err().unwrap());
        assert!(msg.contains("trigger kind"), "{msg}");

        let mut native = encode_definition(&definition_with(TimeTrigger::default())).unwrap();
        native.actions[0].kind = 6;
        let res = decode_definition(&native);
        assert!(res.is_err());
        let msg = format!("{:?}", res.err().unwrap());
        assert!(msg.contains("action kind"), "{msg}");
    }

    #[test]
    fn decode_rejects_unknown_weekday_bits() {
        let def = definition_with(WeeklyTrigger {
            days_of_week: DaysOfWeek::MONDAY,
            ..WeeklyTrigger::default()
        });
        let mut native = encode_definition(&def).unwrap();
        native.triggers[0].days_of_week = 0x8000;
        let res = decode_definition(&native);
        assert!(res.is_err());
        let msg = format!("{:?}", res.err().unwrap());
        assert!(msg.contains("days of week"), "{msg}");
    }

    #[test]
    fn decode_rejects_malformed_dates_and_periods() {
        let mut native = encode_definition(&definition_with(TimeTrigger::default())).unwrap();
        native.triggers[0].start_boundary = String::from("next tuesday");
        assert!(decode_definition(&native).is_err());

        let mut native = encode_definition(&definition_with(TimeTrigger::default())).unwrap();
        native.settings.time_limit = String::from("72 hours");
        assert!(decode_definition(&native).is_err());
    }

    #[test]
    fn full_definition_roundtrips_through_the_wire_form() {
        let mut def = TaskDefinition::new();
        def.registration_info.author = String::from("ops");
        def.registration_info.date = Some(start());
        def.registration_info.description = String::from("nightly maintenance");
        def.add_action(ExecAction {
            path: String::from("cleanup.exe"),
            args: String::from("--all"),
            working_dir: String::from("C:\\ops"),
        });
        def.add_action(ComHandlerAction {
            class_id: String::from("{F0001111-0000-0000-0000-0000FEEDACDC}"),
            data: String::from("payload"),
        });
        def.add_trigger(DailyTrigger {
            trigger: TaskTrigger {
                start_boundary: Some(start()),
                execution_time_limit: Period::hours(2),
                repetition: RepetitionPattern {
                    interval: Period::minutes(15),
                    duration: Period::hours(1),
                    stop_at_duration_end: true,
                },
                ..TaskTrigger::default()
            },
            day_interval: 3,
        });
        def.add_trigger(MonthlyDowTrigger {
            days_of_week: DaysOfWeek::MONDAY | DaysOfWeek::FRIDAY,
            weeks_of_month: WeeksOfMonth::FIRST | WeeksOfMonth::LAST,
            months_of_year: MonthsOfYear::ALL_MONTHS,
            ..MonthlyDowTrigger::default()
        });
        def.add_trigger(LogonTrigger {
            user_id: String::from("DOMAIN\\svc"),
            delay: Period::seconds(30),
            ..LogonTrigger::default()
        });
        def.settings.start_when_available = true;
        def.settings.multiple_instances = InstancesPolicy::Queue;

        let native = encode_definition(&def).unwrap();
        let back = decode_definition(&native).unwrap();
        assert_eq!(back, def);
    }

    #[test]
    fn bincode_framing_roundtrips() {
        let def = definition_with(BootTrigger {
            delay: Period::minutes(5),
            ..BootTrigger::default()
        });
        let native = encode_definition(&def).unwrap();
        let bytes = native.to_bytes().unwrap();
        let back = NativeTaskDefinition::from_bytes(&bytes).unwrap();
        assert_eq!(back, native);

        assert!(NativeTaskDefinition::from_bytes(b"not a definition").is_err());
    }
}
