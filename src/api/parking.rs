//! # Parking API Module
//!
//! Entry point of the lookup: turns an inbound event into the reply that
//! should be sent back to the user.

use super::{errors::LookupError, nearest, reply::Reply};
use crate::{
    metric,
    models::{event::InboundEvent, facility::Coordinate},
    repo,
};

/// Finds the parking lot nearest to the given location.
///
/// # Arguments
/// * `catalog` - Source of the parking dataset
/// * `latitude` - Query latitude in decimal degrees
/// * `longitude` - Query longitude in decimal degrees
///
/// # Returns
/// * `Ok(Reply::Nearest)` with the winning facility
/// * `Ok(Reply::NoValidData)` when no record has usable coordinates
///
/// # Errors
/// * [`LookupError::InvalidQuery`] if the location is out of range, checked
///   before touching the dataset
/// * [`LookupError::DataUnavailable`] if the dataset cannot be loaded
pub async fn locate_nearest(
    catalog: &repo::ImplCatalogSource,
    latitude: f64,
    longitude: f64,
) -> Result<Reply, LookupError> {
    let query = Coordinate::try_new(latitude, longitude).ok_or(LookupError::InvalidQuery {
        latitude,
        longitude,
    })?;

    let records = catalog.load().await?;

    let result = nearest::find_nearest(&records, query);
    match result {
        nearest::NearestResult::Found {
            facility,
            distance_km,
        } => {
            metric::incr_lookup_statds("found");
            tracing::info!(
                "nearest parking lot is {distance_km:.3}km away at {lat},{lon}",
                lat = facility.coordinate.latitude(),
                lon = facility.coordinate.longitude()
            );
        }
        nearest::NearestResult::NotFound => {
            metric::incr_lookup_statds("no_valid_data");
            tracing::warn!("parking catalog has no records with valid coordinates");
        }
    }

    Ok(result.into())
}

/// Maps an inbound event to its reply. Lookup failures are logged and
/// answered with the generic failure text.
pub async fn dispatch(event: InboundEvent, catalog: &repo::ImplCatalogSource) -> Reply {
    match event {
        InboundEvent::Location {
            latitude,
            longitude,
        } => match locate_nearest(catalog, latitude, longitude).await {
            Ok(reply) => reply,
            Err(e) => {
                metric::incr_lookup_statds("error");
                tracing::error!("Error handling location message: {e}");
                Reply::Failure
            }
        },
        InboundEvent::NonLocation => Reply::AskForLocation,
    }
}
