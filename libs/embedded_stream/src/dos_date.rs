//! The packed MS-DOS date/time used in archive headers.
//!
//! ```text
//! bits 31..25  year - 1980     bits 15..11  hour
//! bits 24..21  month (1-12)    bits 10..5   minute
//! bits 20..16  day (1-31)      bits 4..0    second / 2
//! ```
//!
//! Only 1980 through 2107 can be stored.

use crate::InvalidDate;

/// A broken-down calendar time laid out like C's `struct tm`.
///
/// `month` is zero-based and `year` counts from 1900 when decoded.
/// The default value is the all-zero calendar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CalendarTime {
    pub second: i32,
    pub minute: i32,
    pub hour: i32,
    pub day: i32,
    pub month: i32,
    pub year: i32,
    /// Daylight saving flag, `None` when unknown.
    pub dst: Option<bool>,
}

impl CalendarTime {
    /// Checks every field against the packed format's ranges, with `year`
    /// counted from 1900.
    pub fn is_valid(&self) -> bool {
        (0..=207).contains(&self.year) && self.fields_in_range()
    }

    fn fields_in_range(&self) -> bool {
        (0..=11).contains(&self.month)
            && (1..=31).contains(&self.day)
            && (0..=23).contains(&self.hour)
            && (0..=59).contains(&self.minute)
            && (0..=59).contains(&self.second)
    }
}

/// The ways a year may be written on the encoding side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum YearForm {
    /// 1980 and later, taken as is.
    Absolute,
    /// 80 through 1979: a year counted from 1900, as produced by
    /// `tm_year` or by two digit years in the 1980s and 1990s.
    From1900,
    /// 0 through 79: a two digit year meaning 2000 through 2079.
    From2000,
}

impl YearForm {
    pub fn classify(year: i32) -> Option<Self> {
        match year {
            1980.. => Some(YearForm::Absolute),
            80..=1979 => Some(YearForm::From1900),
            0..=79 => Some(YearForm::From2000),
            _ => None,
        }
    }

    /// Years since 1980 for a year written in this form.
    pub fn offset(self, year: i32) -> i32 {
        match self {
            YearForm::Absolute => year - 1980,
            YearForm::From1900 => year - 80,
            YearForm::From2000 => year + 20,
        }
    }
}

const MAX_YEAR_OFFSET: i32 = 127;

/// Splits a packed date into its fields without any validation.
pub fn decode_raw(packed: u32) -> CalendarTime {
    let date = packed >> 16;
    CalendarTime {
        day: (date & 0x1f) as i32,
        month: ((date & 0x1e0) >> 5) as i32 - 1,
        year: ((date & 0xfe00) >> 9) as i32 + 80,
        hour: ((packed & 0xf800) >> 11) as i32,
        minute: ((packed & 0x7e0) >> 5) as i32,
        second: 2 * (packed & 0x1f) as i32,
        dst: None,
    }
}

/// Decodes a packed date, rejecting any field out of range.
pub fn decode(packed: u32) -> Result<CalendarTime, InvalidDate> {
    let tm = decode_raw(packed);
    if !tm.is_valid() {
        trace!("invalid dos date {packed:#010x}");
        return Err(InvalidDate);
    }
    Ok(tm)
}

/// Converts a packed date to a Unix timestamp, reading the fields as local
/// time. Fields are not validated; out of range values carry over into the
/// next unit the way `mktime` does. `None` when the result has no single
/// local time.
#[cfg(feature = "clock")]
pub fn decode_to_epoch(packed: u32) -> Option<i64> {
    use chrono::{Local, NaiveDate, TimeDelta, TimeZone};

    let tm = decode_raw(packed);
    let year = 1900 + tm.year + tm.month.div_euclid(12);
    let month = tm.month.rem_euclid(12) as u32 + 1;
    let seconds = i64::from(tm.day - 1) * 86_400
        + i64::from(tm.hour) * 3_600
        + i64::from(tm.minute) * 60
        + i64::from(tm.second);
    let local = NaiveDate::from_ymd_opt(year, month, 1)?
        .and_hms_opt(0, 0, 0)?
        .checked_add_signed(TimeDelta::seconds(seconds))?;
    Local
        .from_local_datetime(&local)
        .earliest()
        .map(|time| time.timestamp())
}

/// Packs a calendar time. The year may be absolute, counted from 1900 or a
/// two digit year, see [`YearForm`]. Returns 0 when the value cannot be
/// represented.
pub fn encode(tm: &CalendarTime) -> u32 {
    let Some(form) = YearForm::classify(tm.year) else {
        trace!("year {} cannot be packed", tm.year);
        return 0;
    };
    let year = form.offset(tm.year);
    if !(0..=MAX_YEAR_OFFSET).contains(&year) || !tm.fields_in_range() {
        trace!("calendar time {tm:?} cannot be packed");
        return 0;
    }

    let date = tm.day as u32 + 32 * (tm.month as u32 + 1) + 512 * year as u32;
    let time = (tm.second / 2) as u32 + 32 * tm.minute as u32 + 2048 * tm.hour as u32;
    (date << 16) | time
}
