use std::{
    error::Error,
    fmt::Display
};

// https://en.cppreference.com/w/cpp/utility/optional/bad_optional_access
// The one domain error: checked access on a disengaged optional. Construction,
// assignment and comparison never produce it.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BadOptionalAccess;

impl Display for BadOptionalAccess {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Attempted to access the value of an uninitialized optional object.")
    }
}

impl Error for BadOptionalAccess {}
