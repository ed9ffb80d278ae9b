//! Fixed campus catalog: buildings and their floors, departments, weekdays and
//! the half-hour booking slots. These mirror the values the backend accepts.

use std::{fmt, str::FromStr};

/// A selectable value with its display label.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Choice {
    pub value: &'static str,
    pub label: &'static str,
}

const fn choice(value: &'static str, label: &'static str) -> Choice {
    Choice { value, label }
}

/// Campus buildings that contain bookable halls.
pub const BUILDINGS: [Choice; 4] = [
    choice("Auditorium", "Auditorium"),
    choice("Guesthouse", "Guesthouse"),
    choice("LectureComplex", "Lecture Complex"),
    choice("LabBuilding", "Lab Building"),
];

const GROUND_ONLY: [Choice; 1] = [choice("Ground", "Ground Floor")];

const LECTURE_COMPLEX_FLOORS: [Choice; 4] = [
    choice("LGF", "Lower Ground Floor (LGF)"),
    choice("GF", "Ground Floor (GF)"),
    choice("FF", "First Floor (FF)"),
    choice("SF", "Second Floor (SF)"),
];

const LAB_BUILDING_FLOORS: [Choice; 5] = [
    choice("Ground", "Ground Floor"),
    choice("1st", "1st Floor"),
    choice("2nd", "2nd Floor"),
    choice("3rd", "3rd Floor"),
    choice("4th", "4th Floor"),
];

/// Floors of a building; unknown buildings have none.
pub fn floors_for(building: &str) -> &'static [Choice] {
    match building {
        "Auditorium" | "Guesthouse" => &GROUND_ONLY,
        "LectureComplex" => &LECTURE_COMPLEX_FLOORS,
        "LabBuilding" => &LAB_BUILDING_FLOORS,
        _ => &[],
    }
}

/// Display label for a building value, falling back to the raw value.
pub fn building_label(building: &str) -> &str {
    BUILDINGS
        .iter()
        .find(|choice| choice.value == building)
        .map(|choice| choice.label)
        .unwrap_or(building)
}

/// Floor shown in cards; the backend uses `N/A` for halls without floors.
pub fn floor_label(floor: Option<&str>) -> String {
    match floor.map(str::trim) {
        Some(value) if !value.is_empty() && value != "N/A" => value.to_string(),
        _ => "—".to_string(),
    }
}

pub const DEPARTMENTS: [Choice; 4] = [
    choice("ICT", "ICT"),
    choice("ET", "ET"),
    choice("BST", "BST"),
    choice("Common", "Common"),
];

/// Departments that own section timetables (everything but `Common`).
pub fn section_departments() -> impl Iterator<Item = &'static Choice> {
    DEPARTMENTS.iter().filter(|dept| dept.value != "Common")
}

/// Half-hour slots from 08:00 to 18:00 inclusive.
pub const TIME_SLOTS: [&str; 21] = [
    "08:00", "08:30", "09:00", "09:30", "10:00", "10:30", "11:00", "11:30", "12:00", "12:30",
    "13:00", "13:30", "14:00", "14:30", "15:00", "15:30", "16:00", "16:30", "17:00", "17:30",
    "18:00",
];

/// Position of a time in [`TIME_SLOTS`].
pub fn slot_index(time: &str) -> Option<usize> {
    TIME_SLOTS.iter().position(|slot| *slot == time.trim())
}

/// True when `start` comes strictly before `end`. Both must be `HH:MM`.
pub fn is_before(start: &str, end: &str) -> bool {
    match (slot_index(start), slot_index(end)) {
        (Some(start), Some(end)) => start < end,
        // Off-grid times still compare correctly as zero-padded strings.
        _ => start.trim() < end.trim(),
    }
}

/// Academic years and semesters offered by the faculty.
pub const ACADEMIC_YEARS: [u8; 4] = [1, 2, 3, 4];
pub const SEMESTERS: [u8; 2] = [1, 2];

/// Number of section timetables the faculty maintains when the sections
/// endpoint has nothing to report.
pub const EXPECTED_SECTION_COUNT: usize = 37;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum DayOfWeek {
    Monday,
    Tuesday,
    Wednesday,
    Thursday,
    Friday,
    Saturday,
    Sunday,
}

impl DayOfWeek {
    pub const ALL: [DayOfWeek; 7] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
        DayOfWeek::Saturday,
        DayOfWeek::Sunday,
    ];

    /// Days every timetable grid shows, regardless of entries.
    pub const WORKWEEK: [DayOfWeek; 5] = [
        DayOfWeek::Monday,
        DayOfWeek::Tuesday,
        DayOfWeek::Wednesday,
        DayOfWeek::Thursday,
        DayOfWeek::Friday,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            DayOfWeek::Monday => "Monday",
            DayOfWeek::Tuesday => "Tuesday",
            DayOfWeek::Wednesday => "Wednesday",
            DayOfWeek::Thursday => "Thursday",
            DayOfWeek::Friday => "Friday",
            DayOfWeek::Saturday => "Saturday",
            DayOfWeek::Sunday => "Sunday",
        }
    }
}

impl fmt::Display for DayOfWeek {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter.write_str(self.as_str())
    }
}

impl FromStr for DayOfWeek {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        DayOfWeek::ALL
            .into_iter()
            .find(|day| day.as_str().eq_ignore_ascii_case(value.trim()))
            .ok_or(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn floors_follow_building() {
        assert_eq!(floors_for("Auditorium").len(), 1);
        assert_eq!(floors_for("LectureComplex")[0].value, "LGF");
        assert_eq!(floors_for("LabBuilding").len(), 5);
        assert!(floors_for("Library").is_empty());
    }

    #[test]
    fn slots_cover_eight_to_six() {
        assert_eq!(TIME_SLOTS.first(), Some(&"08:00"));
        assert_eq!(TIME_SLOTS.last(), Some(&"18:00"));
        assert_eq!(slot_index("09:30"), Some(3));
        assert_eq!(slot_index("07:00"), None);
    }

    #[test]
    fn is_before_orders_slots() {
        assert!(is_before("08:00", "09:00"));
        assert!(!is_before("09:00", "09:00"));
        assert!(!is_before("10:00", "09:30"));
        assert!(is_before("07:45", "08:00"));
    }

    #[test]
    fn day_parsing_is_case_insensitive() {
        assert_eq!("monday".parse::<DayOfWeek>(), Ok(DayOfWeek::Monday));
        assert_eq!(" Saturday ".parse::<DayOfWeek>(), Ok(DayOfWeek::Saturday));
        assert!("Funday".parse::<DayOfWeek>().is_err());
    }

    #[test]
    fn labels_fall_back_to_values() {
        assert_eq!(building_label("LectureComplex"), "Lecture Complex");
        assert_eq!(building_label("Annex"), "Annex");
        assert_eq!(floor_label(Some("N/A")), "—");
        assert_eq!(floor_label(Some("GF")), "GF");
        assert_eq!(floor_label(None), "—");
    }

    #[test]
    fn common_is_not_a_section_department() {
        let values: Vec<_> = section_departments().map(|dept| dept.value).collect();
        assert_eq!(values, vec!["ICT", "ET", "BST"]);
    }
}
