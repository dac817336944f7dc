pub mod lookup;

pub use lookup::{ErrorBody, LookupRequest, LookupResult};
