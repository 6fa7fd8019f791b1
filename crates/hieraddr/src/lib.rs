pub mod parser;
pub mod resolver;
pub mod types;

pub use parser::{AddressTemplate, Token, parse_template};
pub use resolver::{
    MapContext, Memory, ResolutionContext, ResolveError, resolve_template, suggest_names,
};
pub use types::{AddressSegment, ResourceAddress};

/// Creates a [`ResourceAddress`] from `(key, value)` pairs.
///
/// # Example
///
/// ```
/// use hieraddr::address;
///
/// let addr = address![("profile", "default"), ("subsystem", "datasources")];
/// assert_eq!(addr.len(), 2);
/// assert_eq!(addr.to_string(), "/profile=default/subsystem=datasources");
///
/// let root = address![];
/// assert_eq!(root.to_string(), "/");
/// ```
#[macro_export]
macro_rules! address {
    [] => {
        $crate::ResourceAddress::new()
    };
    [ $(($key:expr, $value:expr)),+ $(,)? ] => {
        {
            let mut addr = $crate::ResourceAddress::new();
            $(
                addr.push($crate::AddressSegment::new($key, $value));
            )+
            addr
        }
    };
}
