//! # Nearest Facility Lookup
//!
//! Filters the catalog down to records with usable coordinates and picks the
//! one closest to the query point by Haversine distance.

use super::distance::haversine_distance;
use crate::{
    consts,
    models::facility::{Coordinate, FacilityRecord, RawCoordinate},
};

/// A catalog record whose coordinates passed validation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ValidFacility<'a> {
    pub record: &'a FacilityRecord,
    pub coordinate: Coordinate,
    raw_latitude: &'a RawCoordinate,
    raw_longitude: &'a RawCoordinate,
}

impl<'a> ValidFacility<'a> {
    fn from_record(record: &'a FacilityRecord) -> Option<Self> {
        Some(Self {
            record,
            coordinate: record.coordinate()?,
            raw_latitude: record.latitude.as_ref()?,
            raw_longitude: record.longitude.as_ref()?,
        })
    }

    /// Driving directions link built from the coordinate text as stored in
    /// the dataset.
    pub fn navigation_url(&self) -> String {
        format!(
            "{base}/dir/?api=1&destination={lat},{lon}",
            base = consts::MAP_SERVICE_BASE_URL,
            lat = self.raw_latitude,
            lon = self.raw_longitude
        )
    }
}

/// Outcome of a nearest-facility search.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum NearestResult<'a> {
    Found {
        facility: ValidFacility<'a>,
        distance_km: f64,
    },
    /// The catalog had no record with valid coordinates.
    NotFound,
}

/// Keeps the records with both coordinates present, finite and in range,
/// preserving their catalog order.
pub fn valid_facilities(records: &[FacilityRecord]) -> Vec<ValidFacility<'_>> {
    records
        .iter()
        .filter_map(ValidFacility::from_record)
        .collect()
}

/// Finds the valid record closest to `query`.
///
/// Records at the same distance resolve to the one appearing first in the
/// catalog.
pub fn find_nearest(records: &[FacilityRecord], query: Coordinate) -> NearestResult<'_> {
    let mut nearest: Option<(ValidFacility<'_>, f64)> = None;

    for facility in valid_facilities(records) {
        let distance_km = haversine_distance(&query, &facility.coordinate);
        match nearest {
            Some((_, best)) if distance_km >= best => {}
            _ => nearest = Some((facility, distance_km)),
        }
    }

    match nearest {
        Some((facility, distance_km)) => NearestResult::Found {
            facility,
            distance_km,
        },
        None => NearestResult::NotFound,
    }
}
