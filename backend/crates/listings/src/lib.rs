//! Listings Crate
//!
//! Housing catalogue offered to applicants, with search filters by state,
//! unit type and price band, and the neighbourhoods open in each state.

pub mod domain;
pub mod error;

pub use domain::{
    LOCATIONS_PENDING, PriceRange, Property, PropertyFilter, PropertyStatus, PropertyType,
    catalog, find, format_naira, locations_for_state, search,
};
pub use error::{ListingsError, ListingsResult};
