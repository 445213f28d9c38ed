//! Static advice catalog.
//!
//! # Invariants
//! - Catalog entries are read-only and never persisted.
//! - Hour buckets split at 12 and 18 (local time).

/// Part of the day an advice entry is meant for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimeOfDay {
    Morning,
    Day,
    Evening,
}

impl TimeOfDay {
    /// Maps a local hour (0..=23) to its bucket.
    ///
    /// Hours past 23 are treated as evening.
    pub fn from_hour(hour: u32) -> Self {
        if hour < 12 {
            Self::Morning
        } else if hour < 18 {
            Self::Day
        } else {
            Self::Evening
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Morning => "morning",
            Self::Day => "day",
            Self::Evening => "evening",
        }
    }
}

/// One suggestion in the static catalog.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AdviceEntry {
    pub id: u32,
    pub text: &'static str,
    pub category: &'static str,
    pub time_of_day: TimeOfDay,
}

/// Built-in advice catalog.
pub const ADVICE_CATALOG: &[AdviceEntry] = &[
    AdviceEntry {
        id: 1,
        text: "Напиши маленькую заметку о сегодняшнем дне",
        category: "творчество",
        time_of_day: TimeOfDay::Evening,
    },
    AdviceEntry {
        id: 2,
        text: "Послушай любимую музыку и расслабься",
        category: "отдых",
        time_of_day: TimeOfDay::Evening,
    },
    AdviceEntry {
        id: 3,
        text: "Сыграй в игру \"Угадай эмоцию\" — зарядись позитивом!",
        category: "развлечение",
        time_of_day: TimeOfDay::Day,
    },
    AdviceEntry {
        id: 4,
        text: "Прогуляйся 15 минут и подыши свежим воздухом",
        category: "здоровье",
        time_of_day: TimeOfDay::Day,
    },
    AdviceEntry {
        id: 5,
        text: "Почитай несколько страниц интересной книги",
        category: "творчество",
        time_of_day: TimeOfDay::Evening,
    },
    AdviceEntry {
        id: 6,
        text: "Выпей чашку любимого чая и подумай о приятном",
        category: "отдых",
        time_of_day: TimeOfDay::Morning,
    },
    AdviceEntry {
        id: 7,
        text: "Сделай небольшую зарядку или растяжку",
        category: "здоровье",
        time_of_day: TimeOfDay::Morning,
    },
];

#[cfg(test)]
mod tests {
    use super::{TimeOfDay, ADVICE_CATALOG};
    use std::collections::HashSet;

    #[test]
    fn hour_thresholds_are_12_and_18() {
        assert_eq!(TimeOfDay::from_hour(0), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(11), TimeOfDay::Morning);
        assert_eq!(TimeOfDay::from_hour(12), TimeOfDay::Day);
        assert_eq!(TimeOfDay::from_hour(17), TimeOfDay::Day);
        assert_eq!(TimeOfDay::from_hour(18), TimeOfDay::Evening);
        assert_eq!(TimeOfDay::from_hour(23), TimeOfDay::Evening);
    }

    #[test]
    fn catalog_covers_every_bucket_with_unique_ids() {
        let ids: HashSet<u32> = ADVICE_CATALOG.iter().map(|entry| entry.id).collect();
        assert_eq!(ids.len(), ADVICE_CATALOG.len());
        for bucket in [TimeOfDay::Morning, TimeOfDay::Day, TimeOfDay::Evening] {
            assert!(ADVICE_CATALOG
                .iter()
                .any(|entry| entry.time_of_day == bucket));
        }
    }
}
