/// Maximum valid month (December)
pub const MAX_MONTH: u8 = 12;

/// Longest month length, the bound for a day without month context
pub const MAX_DAY: u8 = 31;

/// Month number for February
pub const FEBRUARY: u8 = 2;

/// Days in February for leap years
pub const FEBRUARY_DAYS_LEAP: u8 = 29;

/// Maximum days in each month (index 0 is unused, months are 1-indexed)
/// February shows 28 days (non-leap year default)
pub const DAYS_IN_MONTH: [u8; 13] = [
    0,  // index 0 unused (months are 1-indexed)
    31, // January
    28, // February (non-leap, adjusted by is_leap_year check)
    31, // March
    30, // April
    31, // May
    30, // June
    31, // July
    31, // August
    30, // September
    31, // October
    30, // November
    31, // December
];

/// Number of weekday columns in a grid row
pub const DAYS_IN_WEEK: usize = 7;

/// Largest number of rows a month grid can need
pub const MAX_WEEKS: usize = 6;

/// Leap year occurs every 4 years
pub(crate) const LEAP_YEAR_CYCLE: i32 = 4;
/// Century years are not leap years unless...
pub(crate) const CENTURY_CYCLE: i32 = 100;
/// ...they are divisible by 400 (Gregorian calendar correction)
pub(crate) const GREGORIAN_CYCLE: i32 = 400;

/// Days in one 400-year Gregorian cycle
pub(crate) const DAYS_PER_GREGORIAN_CYCLE: i64 = 146_097;
/// Days from 0000-03-01 to 1970-01-01
pub(crate) const UNIX_EPOCH_OFFSET: i64 = 719_468;
/// 1970-01-01 was a Thursday (Monday = 0)
pub(crate) const UNIX_EPOCH_WEEKDAY: i64 = 3;

/// Narrowest text column a day number is rendered in
pub const MIN_COLUMN_WIDTH: usize = 2;

/// Months placed side by side in a year view unless configured otherwise
pub const DEFAULT_MONTHS_PER_ROW: usize = 3;

/// Gap between month blocks in the text year view
pub const MONTH_COLUMN_SEPARATOR: &str = "   ";

/// Date component separator (ISO 8601 format)
pub const DATE_SEPARATOR: char = '-';
