use std::fmt;

const MIN_HOUR: i64 = 0;
const MAX_HOUR: i64 = 23;
const DAYLIGHT_START: i64 = 7;
const DAYLIGHT_END: i64 = 17;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PartOfDay {
    Daylight,
    Night,
    Undetermined,
}

impl fmt::Display for PartOfDay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            PartOfDay::Daylight => "Daylight",
            PartOfDay::Night => "Night",
            PartOfDay::Undetermined => "Undetermined",
        };
        f.write_str(label)
    }
}

pub fn is_valid_hour(hour: i64) -> bool {
    (MIN_HOUR..=MAX_HOUR).contains(&hour)
}

/// Daylight runs from 07:00 through the 17:00 hour, inclusive.
pub fn part_of_day(hour: i64) -> PartOfDay {
    if !is_valid_hour(hour) {
        return PartOfDay::Undetermined;
    }

    if (DAYLIGHT_START..=DAYLIGHT_END).contains(&hour) {
        PartOfDay::Daylight
    } else {
        PartOfDay::Night
    }
}
