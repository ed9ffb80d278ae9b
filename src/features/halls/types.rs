//! Hall documents, list filters and the admin hall form.

use crate::{
    app_lib::{AppError, QueryParams},
    features::{
        catalog,
        refs::{Identified, Ref},
    },
};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Hall {
    #[serde(rename = "_id", alias = "id")]
    pub id: String,
    // Embedded refs are sometimes populated with only a few fields.
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub building: String,
    #[serde(default)]
    pub floor: String,
    #[serde(default)]
    pub capacity: u32,
    #[serde(default)]
    pub facilities: Vec<String>,
    #[serde(default = "active_by_default")]
    pub is_active: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

fn active_by_default() -> bool {
    true
}

impl Identified for Hall {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Hall {
    /// `Building - Floor`, as shown under hall names.
    pub fn location(&self) -> String {
        format!(
            "{} - {}",
            catalog::building_label(&self.building),
            catalog::floor_label(Some(&self.floor))
        )
    }

    /// Option label for hall pickers.
    pub fn option_label(&self) -> String {
        format!("{} ({}) - Capacity: {}", self.name, self.location(), self.capacity)
    }
}

/// Name of an embedded hall reference. A deleted hall comes back as `null`
/// and a bare id carries no name; both render as a placeholder.
pub fn hall_name(hall: Option<&Ref<Hall>>) -> Option<&str> {
    hall.and_then(Ref::populated)
        .map(|hall| hall.name.trim())
        .filter(|name| !name.is_empty())
}

/// Filters for `GET /halls`. Blank fields are left out of the query.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct HallQuery {
    pub building: String,
    pub floor: String,
    pub is_active: Option<bool>,
}

impl HallQuery {
    pub fn active() -> Self {
        Self {
            is_active: Some(true),
            ..Self::default()
        }
    }

    /// Picking another building invalidates the floor.
    pub fn set_building(&mut self, building: &str) {
        self.building = building.to_string();
        self.floor.clear();
    }

    pub fn params(&self) -> QueryParams {
        QueryParams::new()
            .push("building", &self.building)
            .push("floor", &self.floor)
            .push_opt("isActive", self.is_active)
    }
}

/// Client-side narrowing of an already fetched hall list.
pub fn filter_halls<'a>(halls: &'a [Hall], building: &str, floor: &str) -> Vec<&'a Hall> {
    halls
        .iter()
        .filter(|hall| building.is_empty() || hall.building == building)
        .filter(|hall| floor.is_empty() || hall.floor == floor)
        .collect()
}

/// Body for `POST /halls` and `PUT /halls/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HallPayload {
    pub name: String,
    pub building: String,
    pub floor: String,
    pub capacity: u32,
    pub facilities: Vec<String>,
    pub is_active: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

/// Editable hall fields as typed into the form.
#[derive(Clone, Debug, PartialEq)]
pub struct HallForm {
    pub name: String,
    pub building: String,
    pub floor: String,
    pub capacity: String,
    /// Comma separated.
    pub facilities: String,
    pub description: String,
    pub is_active: bool,
}

impl Default for HallForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            building: String::new(),
            floor: String::new(),
            capacity: String::new(),
            facilities: String::new(),
            description: String::new(),
            is_active: true,
        }
    }
}

impl HallForm {
    pub fn from_hall(hall: &Hall) -> Self {
        Self {
            name: hall.name.clone(),
            building: hall.building.clone(),
            floor: hall.floor.clone(),
            capacity: hall.capacity.to_string(),
            facilities: hall.facilities.join(", "),
            description: hall.description.clone().unwrap_or_default(),
            is_active: hall.is_active,
        }
    }

    pub fn set_building(&mut self, building: &str) {
        self.building = building.to_string();
        // Single-floor buildings have nothing to choose.
        self.floor = match catalog::floors_for(building) {
            [only] => only.value.to_string(),
            _ => String::new(),
        };
    }

    pub fn validate(&self) -> Result<HallPayload, AppError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(AppError::validation("Hall name is required."));
        }
        if self.building.is_empty() {
            return Err(AppError::validation("Select a building."));
        }
        let floors = catalog::floors_for(&self.building);
        if floors.is_empty() {
            return Err(AppError::validation("Unknown building."));
        }
        if !floors.iter().any(|floor| floor.value == self.floor) {
            return Err(AppError::validation("Select a floor for this building."));
        }
        let capacity = self
            .capacity
            .trim()
            .parse::<u32>()
            .ok()
            .filter(|capacity| *capacity > 0)
            .ok_or_else(|| AppError::validation("Capacity must be a positive number."))?;
        let facilities = self
            .facilities
            .split(',')
            .map(str::trim)
            .filter(|facility| !facility.is_empty())
            .map(str::to_string)
            .collect();
        let description = self.description.trim();

        Ok(HallPayload {
            name: name.to_string(),
            building: self.building.clone(),
            floor: self.floor.clone(),
            capacity,
            facilities,
            is_active: self.is_active,
            description: (!description.is_empty()).then(|| description.to_string()),
        })
    }
}

/// Response of `POST /halls/initialize`.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct InitializeResponse {
    #[serde(default)]
    pub message: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn hall(id: &str, building: &str, floor: &str) -> Hall {
        Hall {
            id: id.to_string(),
            name: format!("Hall {id}"),
            building: building.to_string(),
            floor: floor.to_string(),
            capacity: 60,
            facilities: Vec::new(),
            is_active: true,
            description: None,
        }
    }

    #[test]
    fn hall_decodes_with_defaults() {
        let json = r#"{"_id":"h1","name":"LC-101","building":"LectureComplex","floor":"GF","capacity":120}"#;
        let hall: Hall = serde_json::from_str(json).expect("hall");
        assert!(hall.is_active);
        assert!(hall.facilities.is_empty());
        assert_eq!(hall.location(), "Lecture Complex - GF");
    }

    #[test]
    fn embedded_hall_refs_tolerate_partial_documents() {
        let partial: Option<Ref<Hall>> =
            serde_json::from_str(r#"{"_id":"h1","name":"LC-101"}"#).expect("name only");
        assert_eq!(hall_name(partial.as_ref()), Some("LC-101"));
        assert_eq!(partial.as_ref().map(Ref::id), Some("h1"));

        let deleted: Option<Ref<Hall>> = serde_json::from_str("null").expect("null");
        assert_eq!(hall_name(deleted.as_ref()), None);

        let bare: Option<Ref<Hall>> = serde_json::from_str(r#""h2""#).expect("id");
        assert_eq!(hall_name(bare.as_ref()), None);
    }

    #[test]
    fn query_skips_blank_filters() {
        let mut query = HallQuery::active();
        assert_eq!(query.params().encode(), "isActive=true");

        query.set_building("LabBuilding");
        query.floor = "2nd".to_string();
        assert_eq!(
            query.params().encode(),
            "building=LabBuilding&floor=2nd&isActive=true"
        );

        query.set_building("Auditorium");
        assert!(query.floor.is_empty());
    }

    #[test]
    fn filter_halls_matches_building_and_floor() {
        let halls = vec![
            hall("1", "LectureComplex", "GF"),
            hall("2", "LectureComplex", "FF"),
            hall("3", "LabBuilding", "GF"),
        ];
        assert_eq!(filter_halls(&halls, "", "").len(), 3);
        assert_eq!(filter_halls(&halls, "LectureComplex", "").len(), 2);
        let ids: Vec<_> = filter_halls(&halls, "LectureComplex", "FF")
            .into_iter()
            .map(|hall| hall.id.as_str())
            .collect();
        assert_eq!(ids, vec!["2"]);
    }

    #[test]
    fn form_requires_floor_from_building() {
        let mut form = HallForm {
            name: "Main Auditorium".to_string(),
            capacity: "500".to_string(),
            facilities: "Projector, , AC".to_string(),
            ..HallForm::default()
        };
        assert!(form.validate().is_err());

        form.set_building("Auditorium");
        assert_eq!(form.floor, "Ground");
        let payload = form.validate().expect("valid");
        assert_eq!(payload.facilities, vec!["Projector", "AC"]);
        assert_eq!(payload.description, None);

        form.set_building("LectureComplex");
        assert!(form.floor.is_empty());
        form.floor = "4th".to_string();
        assert!(form.validate().is_err());
    }

    #[test]
    fn form_rejects_zero_capacity() {
        let mut form = HallForm {
            name: "Lab 1".to_string(),
            capacity: "0".to_string(),
            ..HallForm::default()
        };
        form.set_building("Guesthouse");
        assert_eq!(
            form.validate(),
            Err(AppError::validation("Capacity must be a positive number."))
        );
    }

    #[test]
    fn form_round_trips_existing_hall() {
        let mut existing = hall("9", "LabBuilding", "3rd");
        existing.facilities = vec!["Computers".to_string(), "AC".to_string()];
        let form = HallForm::from_hall(&existing);
        assert_eq!(form.facilities, "Computers, AC");
        assert_eq!(form.validate().expect("valid").floor, "3rd");
    }
}
