//! `<select>` option lists built from the campus catalog and fetched records.

use crate::{
    components::SelectOption,
    features::{
        catalog::{self, ACADEMIC_YEARS, BUILDINGS, DEPARTMENTS, DayOfWeek, SEMESTERS, TIME_SLOTS},
        halls::types::Hall,
        refs::Person,
    },
};

pub fn buildings() -> Vec<SelectOption> {
    BUILDINGS
        .iter()
        .map(|building| SelectOption::new(building.value, building.label))
        .collect()
}

pub fn floors(building: &str) -> Vec<SelectOption> {
    catalog::floors_for(building)
        .iter()
        .map(|floor| SelectOption::new(floor.value, floor.label))
        .collect()
}

pub fn departments() -> Vec<SelectOption> {
    DEPARTMENTS
        .iter()
        .map(|dept| SelectOption::new(dept.value, dept.label))
        .collect()
}

pub fn section_departments() -> Vec<SelectOption> {
    catalog::section_departments()
        .map(|dept| SelectOption::new(dept.value, dept.label))
        .collect()
}

pub fn time_slots() -> Vec<SelectOption> {
    TIME_SLOTS
        .iter()
        .map(|slot| SelectOption::new(*slot, *slot))
        .collect()
}

pub fn days() -> Vec<SelectOption> {
    DayOfWeek::ALL
        .iter()
        .map(|day| SelectOption::new(day.as_str(), day.as_str()))
        .collect()
}

pub fn academic_years() -> Vec<SelectOption> {
    ACADEMIC_YEARS
        .iter()
        .map(|year| SelectOption::new(year.to_string(), format!("Year {year}")))
        .collect()
}

pub fn semesters() -> Vec<SelectOption> {
    SEMESTERS
        .iter()
        .map(|semester| SelectOption::new(semester.to_string(), format!("Semester {semester}")))
        .collect()
}

pub fn halls(halls: &[Hall]) -> Vec<SelectOption> {
    halls
        .iter()
        .map(|hall| SelectOption::new(hall.id.clone(), hall.option_label()))
        .collect()
}

pub fn lecturers(people: &[Person]) -> Vec<SelectOption> {
    people
        .iter()
        .map(|person| {
            let label = match person.department.as_deref() {
                Some(dept) if !dept.trim().is_empty() => format!("{} ({dept})", person.name),
                _ => person.name.clone(),
            };
            SelectOption::new(person.id.clone(), label)
        })
        .collect()
}
