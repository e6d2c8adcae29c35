//! Date and time types.

use super::DefaultValue;
use crate::util::simple_name;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DateTimeKind {
    Date,
    Time,
    DateTime,
}

/// Qualified names are checked first: `java.util.Date` and `java.sql.Date`
/// share a simple name but not a column kind.
static QUALIFIED_DATE_TIME: &[(&str, DateTimeKind)] = &[
    ("java.util.Date", DateTimeKind::DateTime),
    ("java.sql.Date", DateTimeKind::Date),
    ("java.sql.Time", DateTimeKind::Time),
    ("java.sql.Timestamp", DateTimeKind::DateTime),
    ("java.time.LocalDate", DateTimeKind::Date),
    ("java.time.LocalTime", DateTimeKind::Time),
    ("java.time.LocalDateTime", DateTimeKind::DateTime),
    ("java.time.ZonedDateTime", DateTimeKind::DateTime),
    ("java.time.OffsetDateTime", DateTimeKind::DateTime),
    ("java.time.Instant", DateTimeKind::DateTime),
    ("kotlinx.datetime.LocalDate", DateTimeKind::Date),
    ("kotlinx.datetime.LocalDateTime", DateTimeKind::DateTime),
];

static SIMPLE_DATE_TIME: &[(&str, DateTimeKind)] = &[
    ("date", DateTimeKind::DateTime),
    ("time", DateTimeKind::Time),
    ("timestamp", DateTimeKind::DateTime),
    ("localdate", DateTimeKind::Date),
    ("localtime", DateTimeKind::Time),
    ("localdatetime", DateTimeKind::DateTime),
    ("zoneddatetime", DateTimeKind::DateTime),
    ("offsetdatetime", DateTimeKind::DateTime),
    ("instant", DateTimeKind::DateTime),
];

impl DateTimeKind {
    /// `base` is the type name without generics or nullable suffix.
    pub fn find(base: &str) -> Option<Self> {
        if let Some((_, kind)) = QUALIFIED_DATE_TIME.iter().find(|(name, _)| *name == base) {
            return Some(*kind);
        }
        let normalized = simple_name(base).to_ascii_lowercase();
        SIMPLE_DATE_TIME
            .iter()
            .find(|(name, _)| *name == normalized)
            .map(|(_, kind)| *kind)
    }

    pub fn default_value(self) -> DefaultValue {
        let text = match self {
            DateTimeKind::Date => "2024-03-22",
            DateTimeKind::Time => "12:00:00",
            DateTimeKind::DateTime => "2024-03-22 12:00:00",
        };
        DefaultValue::Text(text.to_string())
    }
}
