pub mod catalog;
pub mod filter;
pub mod locations;
pub mod property;

pub use catalog::{catalog, find, search};
pub use filter::{PriceRange, PropertyFilter};
pub use locations::{LOCATIONS_PENDING, locations_for_state};
pub use property::{Property, PropertyStatus, PropertyType, format_naira};
