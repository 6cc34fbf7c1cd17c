// Reimplementation of the C++ optional family (std::optional in the
// boost::optional mould): a value-holding optional over a manually managed
// slot, an optional reference, and the degenerate optional<void>.

mod base;

pub mod error;
pub mod nullopt;
pub mod optional;
pub mod optional_ref;
pub mod optional_void;

pub use error::BadOptionalAccess;
pub use nullopt::{ InPlace, InPlaceIf, Nullopt, IN_PLACE, IN_PLACE_IF, NULLOPT };
pub use optional::{ get, get_mut, get_pointer, make_optional, make_optional_if, make_optional_with, swap, Optional };
pub use optional_ref::OptionalRef;
pub use optional_void::OptionalVoid;
