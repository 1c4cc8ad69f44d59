pub mod criteria;
pub mod inquiry;
pub mod property;
pub mod search;

pub use criteria::{Criteria, Mode, PriceRange, SearchScope};
pub use property::{Property, PropertyStatus, PropertyType};
pub use search::SearchState;
