use chrono::TimeDelta;

const NANOS_PER_SEC: i64 = 1_000_000_000;
const SECS_PER_MINUTE: i64 = 60;
const SECS_PER_HOUR: i64 = 60 * SECS_PER_MINUTE;

/// Format a remaining duration as a clock: "MM:SS" below one hour, "HH:MM:SS" above.
///
/// The duration is rounded to the nearest whole second first (halves away from zero).
/// Hours are not capped. Negative inputs, which only appear once the clock has
/// overrun, render each component with its own sign.
pub fn format_clock(d: TimeDelta) -> String {
    let mut secs = round_to_seconds(d);

    let h = secs / SECS_PER_HOUR;
    secs -= h * SECS_PER_HOUR;
    let m = secs / SECS_PER_MINUTE;
    secs -= m * SECS_PER_MINUTE;
    let s = secs;

    if h < 1 {
        format!("{:02}:{:02}", m, s)
    } else {
        format!("{:02}:{:02}:{:02}", h, m, s)
    }
}

fn round_to_seconds(d: TimeDelta) -> i64 {
    let Some(nanos) = d.num_nanoseconds() else {
        return d.num_seconds();
    };

    let whole = nanos / NANOS_PER_SEC;
    let rest = nanos % NANOS_PER_SEC;
    if rest.abs() * 2 >= NANOS_PER_SEC {
        whole + rest.signum()
    } else {
        whole
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn secs(s: i64) -> TimeDelta {
        TimeDelta::seconds(s)
    }

    #[test]
    fn test_format_under_a_minute() {
        assert_eq!(format_clock(secs(0)), "00:00");
        assert_eq!(format_clock(secs(59)), "00:59");
    }

    #[test]
    fn test_format_minute_boundary() {
        assert_eq!(format_clock(secs(60)), "01:00");
        assert_eq!(format_clock(secs(3599)), "59:59");
    }

    #[test]
    fn test_format_with_hours() {
        assert_eq!(format_clock(secs(3600)), "01:00:00");
        assert_eq!(format_clock(secs(3661)), "01:01:01");
        assert_eq!(format_clock(secs(2 * 3600 + 45 * 60 + 50)), "02:45:50");
    }

    #[test]
    fn test_format_hours_do_not_cap_at_two_digits() {
        assert_eq!(format_clock(secs(100 * 3600)), "100:00:00");
    }

    #[test]
    fn test_format_rounds_to_nearest_second() {
        assert_eq!(format_clock(TimeDelta::milliseconds(1_499)), "00:01");
        assert_eq!(format_clock(TimeDelta::milliseconds(1_500)), "00:02");
        assert_eq!(format_clock(TimeDelta::milliseconds(59_600)), "01:00");
        assert_eq!(format_clock(TimeDelta::milliseconds(400)), "00:00");
    }

    #[test]
    fn test_format_negative_after_overrun() {
        assert_eq!(format_clock(secs(-1)), "00:-1");
        assert_eq!(format_clock(secs(-61)), "-1:-1");
        assert_eq!(format_clock(TimeDelta::milliseconds(-1_500)), "00:-2");
    }

    #[test]
    fn test_format_components_reconstruct_rounded_seconds() {
        for total in [0, 1, 59, 60, 61, 599, 3599, 3600, 3601, 86_399, 90_061] {
            for extra_ms in [0, 250, 499, 500, 999] {
                let d = TimeDelta::seconds(total) + TimeDelta::milliseconds(extra_ms);
                let expected = if extra_ms >= 500 { total + 1 } else { total };

                let parts: Vec<i64> = format_clock(d)
                    .split(':')
                    .map(|p| p.parse().unwrap())
                    .collect();
                let rebuilt = parts.iter().fold(0, |acc, p| acc * 60 + p);

                assert_eq!(rebuilt, expected, "d = {:?}", d);
            }
        }
    }
}
