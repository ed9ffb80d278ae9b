//! Section timetables: documents, list filters and the admin editing draft.

use crate::{
    app_lib::{AppError, QueryParams},
    features::{
        catalog::{self, DayOfWeek},
        halls::types::{Hall, hall_name},
        refs::{Identified, Ref},
    },
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableEntry {
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub hall: Option<Ref<Hall>>,
    #[serde(default)]
    pub hall_name: Option<String>,
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
    /// Free-text lecturer name.
    #[serde(default)]
    pub lecturer: Option<String>,
}

impl TimetableEntry {
    pub fn subject_label(&self) -> &str {
        let subject = self.subject.trim();
        if subject.is_empty() {
            "Untitled"
        } else {
            subject
        }
    }

    /// Populated hall name, then the denormalized name, then a placeholder.
    pub fn hall_label(&self) -> &str {
        hall_name(self.hall.as_ref())
            .or(self.hall_name.as_deref().map(str::trim))
            .filter(|name| !name.is_empty())
            .unwrap_or("Hall")
    }

    pub fn lecturer_label(&self) -> Option<&str> {
        self.lecturer
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    pub fn day(&self) -> Option<DayOfWeek> {
        self.day_of_week.parse().ok()
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Timetable {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    pub academic_year: u8,
    pub semester: u8,
    pub department: String,
    pub section_code: String,
    #[serde(default)]
    pub section_name: Option<String>,
    #[serde(default)]
    pub entries: Vec<TimetableEntry>,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
}

fn active_by_default() -> bool {
    true
}

impl Identified for Timetable {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Timetable {
    fn section_label(&self) -> Option<&str> {
        self.section_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
    }

    /// `Year 2 · ICT · ICT-A · Semester 1`
    pub fn label(&self) -> String {
        let mut label = format!("Year {} · {}", self.academic_year, self.department);
        if let Some(section) = self.section_label() {
            label.push_str(&format!(" · {section}"));
        }
        label.push_str(&format!(" · Semester {}", self.semester));
        label
    }

    /// Compact variant for pickers: `Year 2 · ICT · ICT-A · S1`.
    pub fn option_label(&self) -> String {
        let mut label = format!("Year {} · {}", self.academic_year, self.department);
        if let Some(section) = self.section_label() {
            label.push_str(&format!(" · {section}"));
        }
        label.push_str(&format!(" · S{}", self.semester));
        label
    }

    pub fn title(&self) -> &str {
        self.section_label().unwrap_or("Timetable")
    }
}

/// A cohort that owns one timetable per semester.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Section {
    pub academic_year: u8,
    pub department: String,
    pub section_code: String,
    #[serde(default)]
    pub section_name: String,
}

impl Section {
    pub fn label(&self) -> &str {
        if self.section_name.trim().is_empty() {
            &self.section_code
        } else {
            &self.section_name
        }
    }
}

/// Sections matching the chosen year and department; unset filters match all.
pub fn available_sections<'a>(
    sections: &'a [Section],
    academic_year: Option<u8>,
    department: &str,
) -> Vec<&'a Section> {
    sections
        .iter()
        .filter(|section| academic_year.is_none_or(|year| section.academic_year == year))
        .filter(|section| department.is_empty() || section.department == department)
        .collect()
}

/// How many timetables the faculty expects, for the "N of M configured" line.
pub fn expected_timetables(sections: &[Section]) -> usize {
    if sections.is_empty() {
        catalog::EXPECTED_SECTION_COUNT
    } else {
        sections.len()
    }
}

/// Filters for `GET /timetables` and `GET /timetables/sections`.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TimetableQuery {
    pub academic_year: Option<u8>,
    pub department: String,
    pub section_code: String,
    pub semester: Option<u8>,
}

impl TimetableQuery {
    pub fn set_academic_year(&mut self, year: Option<u8>) {
        self.academic_year = year;
        self.section_code.clear();
    }

    pub fn set_department(&mut self, department: &str) {
        self.department = department.to_string();
        self.section_code.clear();
    }

    /// The section picker needs both a year and a department first.
    pub fn section_enabled(&self) -> bool {
        self.academic_year.is_some() && !self.department.is_empty()
    }

    pub fn params(&self) -> QueryParams {
        QueryParams::new()
            .push_opt("academicYear", self.academic_year)
            .push("department", &self.department)
            .push("sectionCode", &self.section_code)
            .push_opt("semester", self.semester)
    }
}

/// One editable row of the timetable form. `hall` is always a hall id.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EntryDraft {
    pub subject: String,
    pub hall: String,
    pub day_of_week: String,
    pub start_time: String,
    pub end_time: String,
    pub lecturer: String,
}

impl Default for EntryDraft {
    fn default() -> Self {
        Self {
            subject: String::new(),
            hall: String::new(),
            day_of_week: DayOfWeek::Monday.as_str().to_string(),
            start_time: "08:00".to_string(),
            end_time: "09:00".to_string(),
            lecturer: String::new(),
        }
    }
}

impl From<&TimetableEntry> for EntryDraft {
    fn from(entry: &TimetableEntry) -> Self {
        Self {
            subject: entry.subject.clone(),
            hall: entry
                .hall
                .as_ref()
                .map(|hall| hall.id().to_string())
                .unwrap_or_default(),
            day_of_week: entry.day_of_week.clone(),
            start_time: entry.start_time.clone(),
            end_time: entry.end_time.clone(),
            lecturer: entry.lecturer.clone().unwrap_or_default(),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum EntryField {
    Subject,
    Hall,
    Day,
    StartTime,
    EndTime,
    Lecturer,
}

/// Create/update form state. Serializes directly as the request body.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimetableDraft {
    pub academic_year: u8,
    pub semester: u8,
    pub department: String,
    pub section_code: String,
    pub entries: Vec<EntryDraft>,
}

impl Default for TimetableDraft {
    fn default() -> Self {
        Self {
            academic_year: 1,
            semester: 1,
            department: String::new(),
            section_code: String::new(),
            entries: Vec::new(),
        }
    }
}

impl TimetableDraft {
    /// Loads an existing timetable for editing, reducing hall refs to ids.
    pub fn from_timetable(timetable: &Timetable) -> Self {
        Self {
            academic_year: timetable.academic_year,
            semester: timetable.semester,
            department: timetable.department.clone(),
            section_code: timetable.section_code.clone(),
            entries: timetable.entries.iter().map(EntryDraft::from).collect(),
        }
    }

    pub fn set_academic_year(&mut self, year: u8) {
        self.academic_year = year;
        self.section_code.clear();
    }

    pub fn set_department(&mut self, department: &str) {
        self.department = department.to_string();
        self.section_code.clear();
    }

    pub fn add_entry(&mut self) {
        self.entries.push(EntryDraft::default());
    }

    pub fn remove_entry(&mut self, index: usize) {
        if index < self.entries.len() {
            self.entries.remove(index);
        }
    }

    pub fn update_entry(&mut self, index: usize, field: EntryField, value: &str) {
        let Some(entry) = self.entries.get_mut(index) else {
            return;
        };
        let slot = match field {
            EntryField::Subject => &mut entry.subject,
            EntryField::Hall => &mut entry.hall,
            EntryField::Day => &mut entry.day_of_week,
            EntryField::StartTime => &mut entry.start_time,
            EntryField::EndTime => &mut entry.end_time,
            EntryField::Lecturer => &mut entry.lecturer,
        };
        *slot = value.to_string();
    }

    pub fn validate(&self) -> Result<(), AppError> {
        if self.entries.is_empty() {
            return Err(AppError::validation("Please add at least one timetable entry"));
        }
        if self.section_code.trim().is_empty() {
            return Err(AppError::validation("Please select a section"));
        }
        for (index, entry) in self.entries.iter().enumerate() {
            let row = index + 1;
            if entry.subject.trim().is_empty() {
                return Err(AppError::validation(format!("Entry {row}: subject is required.")));
            }
            if entry.hall.trim().is_empty() {
                return Err(AppError::validation(format!("Entry {row}: select a hall.")));
            }
            if entry.day_of_week.parse::<DayOfWeek>().is_err() {
                return Err(AppError::validation(format!("Entry {row}: select a day.")));
            }
            if !catalog::is_before(&entry.start_time, &entry.end_time) {
                return Err(AppError::validation(format!(
                    "Entry {row}: end time must be after start time."
                )));
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn section(year: u8, department: &str, code: &str) -> Section {
        Section {
            academic_year: year,
            department: department.to_string(),
            section_code: code.to_string(),
            section_name: format!("{department} {code}"),
        }
    }

    fn timetable_json() -> &'static str {
        r#"{
            "_id":"t1","academicYear":2,"semester":1,"department":"ICT",
            "sectionCode":"ICT-2A","sectionName":"ICT Group A",
            "entries":[
                {"subject":"Networks","hall":{"_id":"h1","name":"LC-101","building":"LectureComplex","floor":"GF","capacity":80},
                 "dayOfWeek":"Monday","startTime":"08:00","endTime":"10:00","lecturer":"Dr. Silva"},
                {"subject":"","hall":"h2","hallName":"Lab 3","dayOfWeek":"Saturday","startTime":"13:00","endTime":"14:00"}
            ]
        }"#
    }

    #[test]
    fn timetable_labels() {
        let timetable: Timetable = serde_json::from_str(timetable_json()).expect("timetable");
        assert!(timetable.is_active);
        assert_eq!(timetable.label(), "Year 2 · ICT · ICT Group A · Semester 1");
        assert_eq!(timetable.option_label(), "Year 2 · ICT · ICT Group A · S1");
        assert_eq!(timetable.title(), "ICT Group A");

        let first = &timetable.entries[0];
        assert_eq!(first.hall_label(), "LC-101");
        assert_eq!(first.lecturer_label(), Some("Dr. Silva"));
        let second = &timetable.entries[1];
        assert_eq!(second.subject_label(), "Untitled");
        assert_eq!(second.hall_label(), "Lab 3");
        assert_eq!(second.day(), Some(DayOfWeek::Saturday));
    }

    #[test]
    fn draft_normalizes_hall_refs_to_ids() {
        let timetable: Timetable = serde_json::from_str(timetable_json()).expect("timetable");
        let draft = TimetableDraft::from_timetable(&timetable);
        assert_eq!(draft.entries[0].hall, "h1");
        assert_eq!(draft.entries[1].hall, "h2");
        assert_eq!(draft.entries[1].lecturer, "");

        let json = serde_json::to_value(&draft).expect("encode");
        assert_eq!(json["academicYear"], 2);
        assert_eq!(json["sectionCode"], "ICT-2A");
        assert_eq!(json["entries"][0]["dayOfWeek"], "Monday");
        assert_eq!(json["entries"][0]["hall"], "h1");
    }

    #[test]
    fn entries_survive_missing_or_partial_halls() {
        let json = r#"{
            "_id":"t2","academicYear":1,"semester":2,"department":"ICT",
            "sectionCode":"ICT-1B","sectionName":"ICT Group B",
            "entries":[
                {"subject":"Maths","hall":{"_id":"h1","name":"LC-101"},
                 "dayOfWeek":"Monday","startTime":"08:00","endTime":"09:00"},
                {"subject":"Physics","hall":null,"hallName":"Old Lab",
                 "dayOfWeek":"Tuesday","startTime":"09:00","endTime":"10:00"},
                {"subject":"Chemistry","dayOfWeek":"Friday","startTime":"10:00","endTime":"11:00"}
            ]
        }"#;
        let timetable: Timetable = serde_json::from_str(json).expect("timetable");
        let labels: Vec<_> = timetable
            .entries
            .iter()
            .map(TimetableEntry::hall_label)
            .collect();
        assert_eq!(labels, vec!["LC-101", "Old Lab", "Hall"]);

        // A deleted hall leaves the draft entry blank so validation asks for one.
        let draft = TimetableDraft::from_timetable(&timetable);
        assert_eq!(draft.entries[0].hall, "h1");
        assert_eq!(draft.entries[1].hall, "");
    }

    #[test]
    fn draft_editing() {
        let mut draft = TimetableDraft::default();
        draft.add_entry();
        draft.add_entry();
        assert_eq!(draft.entries[0], EntryDraft::default());
        assert_eq!(draft.entries[0].day_of_week, "Monday");

        draft.update_entry(1, EntryField::Subject, "Databases");
        draft.update_entry(1, EntryField::EndTime, "11:00");
        draft.update_entry(7, EntryField::Subject, "ignored");
        assert_eq!(draft.entries[1].subject, "Databases");
        assert_eq!(draft.entries[1].end_time, "11:00");

        draft.remove_entry(0);
        draft.remove_entry(9);
        assert_eq!(draft.entries.len(), 1);
        assert_eq!(draft.entries[0].subject, "Databases");
    }

    #[test]
    fn draft_validation_order() {
        let mut draft = TimetableDraft::default();
        assert_eq!(
            draft.validate(),
            Err(AppError::validation("Please add at least one timetable entry"))
        );
        draft.add_entry();
        assert_eq!(draft.validate(), Err(AppError::validation("Please select a section")));

        draft.section_code = "ICT-1A".to_string();
        assert!(draft.validate().is_err());

        draft.update_entry(0, EntryField::Subject, "Maths");
        draft.update_entry(0, EntryField::Hall, "h1");
        assert_eq!(draft.validate(), Ok(()));

        draft.update_entry(0, EntryField::StartTime, "09:00");
        assert_eq!(
            draft.validate(),
            Err(AppError::validation("Entry 1: end time must be after start time."))
        );
    }

    #[test]
    fn changing_year_or_department_clears_section() {
        let mut draft = TimetableDraft {
            section_code: "ET-1A".to_string(),
            ..TimetableDraft::default()
        };
        draft.set_academic_year(2);
        assert!(draft.section_code.is_empty());

        let mut query = TimetableQuery {
            academic_year: Some(1),
            section_code: "BST-1A".to_string(),
            ..TimetableQuery::default()
        };
        assert!(!query.section_enabled());
        query.set_department("BST");
        assert!(query.section_code.is_empty());
        assert!(query.section_enabled());
        assert_eq!(query.params().encode(), "academicYear=1&department=BST");
    }

    #[test]
    fn sections_filter_by_year_and_department() {
        let sections = vec![
            section(1, "ICT", "A"),
            section(1, "ET", "A"),
            section(2, "ICT", "B"),
        ];
        assert_eq!(available_sections(&sections, Some(1), "ICT").len(), 1);
        assert_eq!(available_sections(&sections, None, "ICT").len(), 2);
        assert_eq!(available_sections(&sections, Some(1), "").len(), 2);
        assert_eq!(available_sections(&sections, None, "").len(), 3);
        assert_eq!(expected_timetables(&sections), 3);
        assert_eq!(expected_timetables(&[]), 37);
    }
}
