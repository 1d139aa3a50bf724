//! Text replies sent back to the chat user.

use super::nearest::{NearestResult, ValidFacility};
use crate::consts;

/// Every reply the bot can produce.
#[derive(Debug, Clone, PartialEq)]
pub enum Reply {
    Nearest {
        name: String,
        address: String,
        navigation_url: String,
    },
    NoValidData,
    Failure,
    AskForLocation,
}

impl Reply {
    /// Fills in the defaults for a facility missing its name or address.
    pub fn nearest(facility: &ValidFacility<'_>) -> Self {
        Reply::Nearest {
            name: facility
                .record
                .name
                .clone()
                .unwrap_or_else(|| consts::DEFAULT_FACILITY_NAME.into()),
            address: facility
                .record
                .address
                .clone()
                .unwrap_or_else(|| consts::DEFAULT_FACILITY_ADDRESS.into()),
            navigation_url: facility.navigation_url(),
        }
    }

    pub fn text(&self) -> String {
        match self {
            Reply::Nearest {
                name,
                address,
                navigation_url,
            } => format!(
                "Closest parking lot:\nName: {name}\nAddress: {address}\nNavigation: {navigation_url}"
            ),
            Reply::NoValidData => consts::REPLY_NO_VALID_DATA.into(),
            Reply::Failure => consts::REPLY_LOOKUP_FAILURE.into(),
            Reply::AskForLocation => consts::REPLY_ASK_FOR_LOCATION.into(),
        }
    }
}

impl From<NearestResult<'_>> for Reply {
    fn from(result: NearestResult<'_>) -> Self {
        match result {
            NearestResult::Found { facility, .. } => Reply::nearest(&facility),
            NearestResult::NotFound => Reply::NoValidData,
        }
    }
}
