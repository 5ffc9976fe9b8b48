//! Filter criterion coercion.
//!
//! Callers hand over raw text values straight from the request. Each one is
//! independently coerced into a typed criterion; anything that fails to
//! coerce is dropped silently and the query runs with whatever survived.
//! A malformed filter value never produces a user-visible error.

use serde::Deserialize;

/// Raw, untyped filter values as received from the request
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawVehicleFilters {
    pub manufacturer: Option<String>,
    pub vehicle_type: Option<String>,
    pub model_year: Option<String>,
    pub fuel_type: Option<String>,
    pub color: Option<String>,
}

/// Color criterion: a positive id wins, otherwise the value is a name
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ColorFilter {
    Id(i32),
    Name(String),
}

/// Validated filter set; absent fields mean "no constraint"
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VehicleFilters {
    pub manufacturer_id: Option<i32>,
    pub vehicle_type_id: Option<i32>,
    pub model_year: Option<i32>,
    pub fuel_type: Option<String>,
    pub color: Option<ColorFilter>,
}

impl VehicleFilters {
    pub fn is_empty(&self) -> bool {
        self.manufacturer_id.is_none()
            && self.vehicle_type_id.is_none()
            && self.model_year.is_none()
            && self.fuel_type.is_none()
            && self.color.is_none()
    }
}

impl From<RawVehicleFilters> for VehicleFilters {
    fn from(raw: RawVehicleFilters) -> Self {
        VehicleFilters {
            manufacturer_id: raw.manufacturer.as_deref().and_then(coerce_positive_id),
            vehicle_type_id: raw.vehicle_type.as_deref().and_then(coerce_positive_id),
            model_year: raw.model_year.as_deref().and_then(coerce_integer),
            fuel_type: raw.fuel_type.as_deref().and_then(coerce_text),
            color: raw.color.as_deref().and_then(coerce_color),
        }
    }
}

/// Positive integer or nothing
fn coerce_positive_id(value: &str) -> Option<i32> {
    match value.trim().parse::<i32>() {
        Ok(id) if id > 0 => Some(id),
        _ => None,
    }
}

/// Any integer or nothing
fn coerce_integer(value: &str) -> Option<i32> {
    value.trim().parse::<i32>().ok()
}

/// Non-empty trimmed text or nothing
fn coerce_text(value: &str) -> Option<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

/// Integer values must be positive ids; non-integer text is a color name.
/// A non-positive integer is neither, so it is dropped.
fn coerce_color(value: &str) -> Option<ColorFilter> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    match trimmed.parse::<i32>() {
        Ok(id) if id > 0 => Some(ColorFilter::Id(id)),
        Ok(_) => None,
        Err(_) => Some(ColorFilter::Name(trimmed.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(
        manufacturer: Option<&str>,
        vehicle_type: Option<&str>,
        model_year: Option<&str>,
        fuel_type: Option<&str>,
        color: Option<&str>,
    ) -> RawVehicleFilters {
        RawVehicleFilters {
            manufacturer: manufacturer.map(str::to_string),
            vehicle_type: vehicle_type.map(str::to_string),
            model_year: model_year.map(str::to_string),
            fuel_type: fuel_type.map(str::to_string),
            color: color.map(str::to_string),
        }
    }

    #[test]
    fn absent_values_mean_no_constraint() {
        let filters = VehicleFilters::from(RawVehicleFilters::default());
        assert!(filters.is_empty());
    }

    #[test]
    fn valid_values_coerce() {
        let filters = VehicleFilters::from(raw(
            Some("3"),
            Some("2"),
            Some("2019"),
            Some("Electric"),
            Some("5"),
        ));
        assert_eq!(filters.manufacturer_id, Some(3));
        assert_eq!(filters.vehicle_type_id, Some(2));
        assert_eq!(filters.model_year, Some(2019));
        assert_eq!(filters.fuel_type.as_deref(), Some("Electric"));
        assert_eq!(filters.color, Some(ColorFilter::Id(5)));
    }

    #[test]
    fn malformed_values_drop_silently_and_keep_the_rest() {
        let filters = VehicleFilters::from(raw(
            Some("abc"),
            Some("2"),
            Some("abc"),
            Some("Diesel"),
            None,
        ));
        assert_eq!(filters.manufacturer_id, None);
        assert_eq!(filters.vehicle_type_id, Some(2));
        assert_eq!(filters.model_year, None);
        assert_eq!(filters.fuel_type.as_deref(), Some("Diesel"));
    }

    #[test]
    fn ids_must_be_positive() {
        assert_eq!(coerce_positive_id("0"), None);
        assert_eq!(coerce_positive_id("-4"), None);
        assert_eq!(coerce_positive_id("12"), Some(12));
    }

    #[test]
    fn model_year_accepts_any_integer() {
        assert_eq!(coerce_integer("1999"), Some(1999));
        assert_eq!(coerce_integer(" 2021 "), Some(2021));
        assert_eq!(coerce_integer("20.5"), None);
    }

    #[test]
    fn blank_fuel_type_is_dropped() {
        assert_eq!(coerce_text("   "), None);
        assert_eq!(coerce_text(""), None);
        assert_eq!(coerce_text(" Hybrid "), Some("Hybrid".to_string()));
    }

    #[test]
    fn color_prefers_id_over_name() {
        assert_eq!(coerce_color("3"), Some(ColorFilter::Id(3)));
        assert_eq!(coerce_color("Red"), Some(ColorFilter::Name("Red".to_string())));
        assert_eq!(coerce_color(""), None);
        // An integer that cannot be an id is not a name either
        assert_eq!(coerce_color("-1"), None);
    }
}
