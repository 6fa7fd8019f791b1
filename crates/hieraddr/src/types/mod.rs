mod address;

pub use address::{AddressSegment, ResourceAddress};
