use serde::{Deserialize, Serialize};

/// One fully-resolved `key=value` pair of a resource address.
///
/// # Example
///
/// ```
/// use hieraddr::AddressSegment;
///
/// let segment = AddressSegment::new("subsystem", "datasources");
/// assert_eq!(segment.to_string(), "subsystem=datasources");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AddressSegment {
    pub key: String,
    pub value: String,
}

impl AddressSegment {
    /// Create a segment from any string-like key and value.
    pub fn new(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }
}

impl From<(String, String)> for AddressSegment {
    fn from((key, value): (String, String)) -> Self {
        Self { key, value }
    }
}

impl std::fmt::Display for AddressSegment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// A concrete hierarchical resource address: an ordered sequence of
/// resolved key/value segments.
///
/// Addresses are append-only. Resolution extends a caller-supplied base
/// address, so segment order always equals template segment order.
///
/// # Example
///
/// ```
/// use hieraddr::{AddressSegment, ResourceAddress};
///
/// let mut addr = ResourceAddress::new();
/// assert_eq!(addr.to_string(), "/");
///
/// addr.push(AddressSegment::new("profile", "default"));
/// addr.push(AddressSegment::new("subsystem", "datasources"));
/// assert_eq!(addr.to_string(), "/profile=default/subsystem=datasources");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceAddress {
    segments: Vec<AddressSegment>,
}

impl ResourceAddress {
    /// Create an empty (root) address.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a segment at the end of the address.
    pub fn push(&mut self, segment: AddressSegment) {
        self.segments.push(segment);
    }

    /// The resolved segments in order.
    pub fn segments(&self) -> &[AddressSegment] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AddressSegment> {
        self.segments.iter()
    }
}

impl FromIterator<AddressSegment> for ResourceAddress {
    fn from_iter<I: IntoIterator<Item = AddressSegment>>(iter: I) -> Self {
        Self {
            segments: iter.into_iter().collect(),
        }
    }
}

impl IntoIterator for ResourceAddress {
    type Item = AddressSegment;
    type IntoIter = std::vec::IntoIter<AddressSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.into_iter()
    }
}

impl<'a> IntoIterator for &'a ResourceAddress {
    type Item = &'a AddressSegment;
    type IntoIter = std::slice::Iter<'a, AddressSegment>;

    fn into_iter(self) -> Self::IntoIter {
        self.segments.iter()
    }
}

impl std::fmt::Display for ResourceAddress {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        if self.segments.is_empty() {
            return write!(f, "/");
        }
        for segment in &self.segments {
            write!(f, "/{segment}")?;
        }
        Ok(())
    }
}
