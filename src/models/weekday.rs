//! Days of the roster week.

use serde::{Deserialize, Serialize};
use std::fmt;

/// A day of the week. Rosters always run Monday to Sunday.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Weekday {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl Weekday {
    /// All seven days in roster order.
    pub const ALL: [Weekday; 7] = [
        Weekday::Monday,
        Weekday::Tuesday,
        Weekday::Wednesday,
        Weekday::Thursday,
        Weekday::Friday,
        Weekday::Saturday,
        Weekday::Sunday,
    ];

    /// English day name.
    pub fn name(&self) -> &'static str {
        match self {
            Weekday::Monday => "Monday",
            Weekday::Tuesday => "Tuesday",
            Weekday::Wednesday => "Wednesday",
            Weekday::Thursday => "Thursday",
            Weekday::Friday => "Friday",
            Weekday::Saturday => "Saturday",
            Weekday::Sunday => "Sunday",
        }
    }

    /// Saturday or Sunday.
    #[inline]
    pub fn is_weekend(&self) -> bool {
        matches!(self, Weekday::Saturday | Weekday::Sunday)
    }
}

impl fmt::Display for Weekday {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_and_names() {
        let names: Vec<_> = Weekday::ALL.iter().map(Weekday::name).collect();
        assert_eq!(
            names,
            vec!["Monday", "Tuesday", "Wednesday", "Thursday", "Friday", "Saturday", "Sunday"]
        );
        assert!(Weekday::Monday < Weekday::Sunday);
    }

    #[test]
    fn test_weekend() {
        let weekend: Vec<_> = Weekday::ALL.into_iter().filter(Weekday::is_weekend).collect();
        assert_eq!(weekend, vec![Weekday::Saturday, Weekday::Sunday]);
    }

    #[test]
    fn test_serde_uses_day_name() {
        assert_eq!(serde_json::to_string(&Weekday::Friday).unwrap(), r#""Friday""#);
        assert_eq!(Weekday::Thursday.to_string(), "Thursday");
    }
}
