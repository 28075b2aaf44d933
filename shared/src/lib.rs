//! Framework-free value logic behind the NovyUI form controls.
//!
//! Everything here is plain data plus pure operations, so it runs (and is
//! tested) outside the browser. The `moonzoon-novyui` components wrap these
//! types in `Mutable`s and render them.

pub mod age_window;
pub mod calendar;
pub mod config;
pub mod date_editor;
pub mod date_time;
pub mod date_value;
pub mod disabled_dates;
pub mod error;
pub mod file_rules;
pub mod quick_action;
pub mod segment;
pub mod time_editor;
pub mod time_value;
pub mod toast;

pub use age_window::{AgeConstraint, AgeWindow};
pub use calendar::{shift_month, DayCell, MonthGrid, WEEKDAY_LABELS};
pub use config::{DateFieldConfig, FormConfig};
pub use date_editor::{DateChange, DateEditor};
pub use date_time::{combine, DateTimeValue};
pub use date_value::DateValue;
pub use disabled_dates::{parse_iso_date, DisabledDateSet};
pub use error::{Result, ValueError, AGE_WINDOW_MESSAGE, DISABLED_DATE_MESSAGE};
pub use file_rules::{CandidateFile, FileRules, FileSelection};
pub use quick_action::{QuickAction, TomorrowMode};
pub use segment::{pad_segment, sanitize_field, sanitize_segment, Field, SegmentController, SegmentKey};
pub use time_editor::{TimeChange, TimeEditor};
pub use time_value::{HourCycle, Meridiem, TimeValue};
pub use toast::{remaining_percent, Toast, ToastKind, ToastQueue};

pub use chrono;
