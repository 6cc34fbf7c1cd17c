// https://en.cppreference.com/w/cpp/utility/optional/nullopt_t
// Marker values consumed by the optional constructors. They carry no state and
// are never compared by identity; they only select which construction or
// assignment path runs.

// The disengaged sentinel, usable in construction, assignment and comparison.
#[derive(Clone, Copy, Debug)]
pub struct Nullopt;

pub const NULLOPT: Nullopt = Nullopt;

// Selects unconditional in-place construction of the contained value.
#[derive(Clone, Copy, Debug)]
pub struct InPlace;

pub const IN_PLACE: InPlace = InPlace;

// Selects in-place construction gated on a bool.
#[derive(Clone, Copy, Debug)]
pub struct InPlaceIf;

pub const IN_PLACE_IF: InPlaceIf = InPlaceIf;
