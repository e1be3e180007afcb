use crate::err::{ModelError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display, Formatter};

/// A calendar-aware span in the scheduler's duration grammar
/// `[-]P[nY][nM][nW][nD][T[nH][nM][nS]]`.
///
/// Components are kept separate rather than collapsed to seconds because the
/// scheduler treats e.g. P1M as "one calendar month", not a fixed number of
/// seconds. The all-zero value is the unset span.
#[derive(Serialize, Deserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Period {
    pub negative: bool,
    pub years: u32,
    pub months: u32,
    pub weeks: u32,
    pub days: u32,
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Period {
    pub fn days(days: u32) -> Self {
        Self {
            days,
            ..Self::default()
        }
    }

    pub fn hours(hours: u32) -> Self {
        Self {
            hours,
            ..Self::default()
        }
    }

    pub fn minutes(minutes: u32) -> Self {
        Self {
            minutes,
            ..Self::default()
        }
    }

    pub fn seconds(seconds: u32) -> Self {
        Self {
            seconds,
            ..Self::default()
        }
    }

    pub fn is_zero(&self) -> bool {
        self.years == 0
            && self.months == 0
            && self.weeks == 0
            && self.days == 0
            && self.hours == 0
            && self.minutes == 0
            && self.seconds == 0
    }

    /// Parse the duration grammar. Designators must appear in grammar order,
    /// each at most once; time designators require the `T` separator.
    pub fn parse(input: &str) -> Result<Self> {
        let fail =
            |detail: &str| ModelError::InvalidPeriod(input.to_string(), detail.to_string());

        let mut rest = input;
        let mut negative = false;
        if let Some(r) = rest.strip_prefix('-') {
            negative = true;
            rest = r;
        }
        let mut rest = match rest.strip_prefix('P') {
            Some(r) => r,
            None => return Err(fail("missing 'P' designator")),
        };
        if rest.is_empty() {
            return Err(fail("no components after 'P'"));
        }

        let mut period = Period::default();
        let mut in_time = false;
        // Designator rank enforces grammar order and uniqueness.
        let mut last_rank = 0u8;
        while !rest.is_empty() {
            if !in_time && rest.starts_with('T') {
                in_time = true;
                rest = &rest[1..];
                if rest.is_empty() {
                    return Err(fail("no components after 'T'"));
                }
                continue;
            }

            let digits_end = match rest.find(|c: char| !c.is_ascii_digit()) {
                Some(0) => {
                    let got = rest.chars().next().unwrap_or('?');
                    return Err(fail(&format!("expected digits, got '{}'", got)));
                }
                Some(end) => end,
                None => return Err(fail("missing designator after number")),
            };
            let value: u32 = rest[..digits_end]
                .parse()
                .map_err(|e| fail(&format!("bad component value: {}", e)))?;
            let designator = rest[digits_end..]
                .chars()
                .next()
                .expect("designator position is inside the input");
            rest = &rest[digits_end + designator.len_utf8()..];

            let rank = match (in_time, designator) {
                (false, 'Y') => {
                    period.years = value;
                    1
                }
                (false, 'M') => {
                    period.months = value;
                    2
                }
                (false, 'W') => {
                    period.weeks = value;
                    3
                }
                (false, 'D') => {
                    period.days = value;
                    4
                }
                (true, 'H') => {
                    period.hours = value;
                    5
                }
                (true, 'M') => {
                    period.minutes = value;
                    6
                }
                (true, 'S') => {
                    period.seconds = value;
                    7
                }
                (_, d) => {
                    return Err(fail(&format!("unexpected designator '{}'", d)));
                }
            };
            if rank <= last_rank {
                return Err(fail("components out of order"));
            }
            last_rank = rank;
        }

        // Canonical zero carries no sign.
        period.negative = negative && !period.is_zero();
        Ok(period)
    }
}

impl Display for Period {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.is_zero() {
            return write!(f, "P0D");
        }
        if self.negative {
            write!(f, "-")?;
        }
        write!(f, "P")?;
        if self.years > 0 {
            write!(f, "{}Y", self.years)?;
        }
        if self.months > 0 {
            write!(f, "{}M", self.months)?;
        }
        if self.weeks > 0 {
            write!(f, "{}W", self.weeks)?;
        }
        if self.days > 0 {
            write!(f, "{}D", self.days)?;
        }
        if self.hours > 0 || self.minutes > 0 || self.seconds > 0 {
            write!(f, "T")?;
            if self.hours > 0 {
                write!(f, "{}H", self.hours)?;
            }
            if self.minutes > 0 {
                write!(f, "{}M", self.minutes)?;
            }
            if self.seconds > 0 {
                write!(f, "{}S", self.seconds)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_renders_canonical_grammar() {
        let p = Period {
            years: 1,
            months: 2,
            days: 3,
            hours: 4,
            minutes: 5,
            seconds: 6,
            ..Period::default()
        };
        assert_eq!(p.to_string(), "P1Y2M3DT4H5M6S");
        assert_eq!(Period::minutes(30).to_string(), "PT30M");
        assert_eq!(Period::days(14).to_string(), "P14D");
    }

    #[test]
    fn zero_displays_p0d() {
        assert_eq!(Period::default().to_string(), "P0D");
    }

    #[test]
    fn parse_roundtrips_display() {
        for s in ["P1Y2M3DT4H5M6S", "PT30M", "P14D", "P2W", "PT72H", "-PT5M"] {
            let p = Period::parse(s).unwrap();
            assert_eq!(p.to_string(), s, "roundtrip for {}", s);
        }
    }

    #[test]
    fn parse_p0d_is_the_zero_period() {
        let p = Period::parse("P0D").unwrap();
        assert!(p.is_zero());
        assert_eq!(p, Period::default());
    }

    #[test]
    fn negative_sign_applies_to_whole_period() {
        let p = Period::parse("-P1DT2H").unwrap();
        assert!(p.negative);
        assert_eq!(p.days, 1);
        assert_eq!(p.hours, 2);
        // A signed zero normalizes to the canonical zero.
        assert_eq!(Period::parse("-PT0S").unwrap(), Period::default());
    }

    #[test]
    fn time_designators_require_t_separator() {
        let res = Period::parse("P1H");
        assert!(res.is_err());
        let msg = format!("{:?}", res.err().unwrap());
        assert!(msg.contains("unexpected designator 'H'"), "{msg}");
    }

    #[test]
    fn month_and_minute_share_a_designator_across_sections() {
        let p = Period::parse("P1MT1M").unwrap();
        assert_eq!(p.months, 1);
        assert_eq!(p.minutes, 1);
    }

    #[test]
    fn out_of_order_components_are_rejected() {
        for bad in ["P1D1Y", "PT1M1H", "P1D2D"] {
            let res = Period::parse(bad);
            assert!(res.is_err(), "expected rejection for {}", bad);
            let msg = format!("{:?}", res.err().unwrap());
            assert!(msg.contains("out of order"), "{msg}");
        }
    }

    #[test]
    fn malformed_input_is_rejected() {
        for bad in ["", "P", "PT", "1D", "PD", "P1", "P-1D", "Pot of gold"] {
            assert!(Period::parse(bad).is_err(), "expected rejection for {}", bad);
        }
    }
}
