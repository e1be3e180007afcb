use bitflags::bitflags;
use std::fmt::{Display, Formatter};

bitflags! {
    /// Weekday set in the scheduler's wire layout, Sunday in the low bit.
    #[derive(Default)]
    pub struct DaysOfWeek: u16 {
        const SUNDAY = 1 << 0;
        const MONDAY = 1 << 1;
        const TUESDAY = 1 << 2;
        const WEDNESDAY = 1 << 3;
        const THURSDAY = 1 << 4;
        const FRIDAY = 1 << 5;
        const SATURDAY = 1 << 6;
        const ALL_DAYS = 0x7f;
    }
}

bitflags! {
    /// Month set, January in the low bit.
    #[derive(Default)]
    pub struct MonthsOfYear: u16 {
        const JANUARY = 1 << 0;
        const FEBRUARY = 1 << 1;
        const MARCH = 1 << 2;
        const APRIL = 1 << 3;
        const MAY = 1 << 4;
        const JUNE = 1 << 5;
        const JULY = 1 << 6;
        const AUGUST = 1 << 7;
        const SEPTEMBER = 1 << 8;
        const OCTOBER = 1 << 9;
        const NOVEMBER = 1 << 10;
        const DECEMBER = 1 << 11;
        const ALL_MONTHS = 0xfff;
    }
}

bitflags! {
    /// Which weeks of the month a monthly day-of-week schedule fires on.
    #[derive(Default)]
    pub struct WeeksOfMonth: u16 {
        const FIRST = 1 << 0;
        const SECOND = 1 << 1;
        const THIRD = 1 << 2;
        const FOURTH = 1 << 3;
        const LAST = 1 << 4;
    }
}

bitflags! {
    /// Calendar-day set. Bit i encodes day i+1; the top bit is the
    /// "last day of month" sentinel, not day 32.
    #[derive(Default)]
    pub struct DaysOfMonth: u32 {
        const LAST_DAY = 1 << 31;
        const ALL_CALENDAR_DAYS = 0x7fff_ffff;
    }
}

fn write_members(f: &mut Formatter<'_>, members: &[(bool, &str)]) -> std::fmt::Result {
    let names: Vec<&str> = members
        .iter()
        .filter(|(present, _)| *present)
        .map(|(_, name)| *name)
        .collect();
    write!(f, "[{}]", names.join("|"))
}

impl Display for DaysOfWeek {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_members(
            f,
            &[
                (self.contains(DaysOfWeek::SUNDAY), "Sunday"),
                (self.contains(DaysOfWeek::MONDAY), "Monday"),
                (self.contains(DaysOfWeek::TUESDAY), "Tuesday"),
                (self.contains(DaysOfWeek::WEDNESDAY), "Wednesday"),
                (self.contains(DaysOfWeek::THURSDAY), "Thursday"),
                (self.contains(DaysOfWeek::FRIDAY), "Friday"),
                (self.contains(DaysOfWeek::SATURDAY), "Saturday"),
            ],
        )
    }
}

impl Display for MonthsOfYear {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_members(
            f,
            &[
                (self.contains(MonthsOfYear::JANUARY), "January"),
                (self.contains(MonthsOfYear::FEBRUARY), "February"),
                (self.contains(MonthsOfYear::MARCH), "March"),
                (self.contains(MonthsOfYear::APRIL), "April"),
                (self.contains(MonthsOfYear::MAY), "May"),
                (self.contains(MonthsOfYear::JUNE), "June"),
                (self.contains(MonthsOfYear::JULY), "July"),
                (self.contains(MonthsOfYear::AUGUST), "August"),
                (self.contains(MonthsOfYear::SEPTEMBER), "September"),
                (self.contains(MonthsOfYear::OCTOBER), "October"),
                (self.contains(MonthsOfYear::NOVEMBER), "November"),
                (self.contains(MonthsOfYear::DECEMBER), "December"),
            ],
        )
    }
}

impl Display for WeeksOfMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write_members(
            f,
            &[
                (self.contains(WeeksOfMonth::FIRST), "First"),
                (self.contains(WeeksOfMonth::SECOND), "Second"),
                (self.contains(WeeksOfMonth::THIRD), "Third"),
                (self.contains(WeeksOfMonth::FOURTH), "Fourth"),
                (self.contains(WeeksOfMonth::LAST), "Last"),
            ],
        )
    }
}

impl DaysOfMonth {
    pub fn includes_last_day(self) -> bool {
        self.contains(DaysOfMonth::LAST_DAY)
    }

    /// The 1-based calendar days in this set, in ascending order.
    /// The last-day sentinel reports as day 32.
    pub fn calendar_days(self) -> Vec<u32> {
        (1..=32).filter(|d| self.bits() & (1 << (d - 1)) != 0).collect()
    }
}

impl Display for DaysOfMonth {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let names: Vec<String> = self
            .calendar_days()
            .into_iter()
            .map(|d| {
                if d == 32 {
                    String::from("Last")
                } else {
                    d.to_string()
                }
            })
            .collect();
        write!(f, "[{}]", names.join("|"))
    }
}
