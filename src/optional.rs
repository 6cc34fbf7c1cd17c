// https://en.cppreference.com/w/cpp/utility/optional.html
// C++17 std::optional in the boost::optional mould, rebuilt over a manually
// managed slot. Moving out of an engaged optional leaves it engaged with a
// taken-from value; only the sentinel, reset or destruction disengage it.

use crate::{
    base::OptionalBase,
    error::BadOptionalAccess,
    nullopt::{ InPlace, InPlaceIf, Nullopt, IN_PLACE }
};
use std::{
    cmp::Ordering,
    fmt::{ Debug, Display },
    hash::{ Hash, Hasher }
};

#[repr(C)]
pub struct Optional<T> {
    base: OptionalBase<T>
}

impl<T> Optional<T> {
    pub const fn new() -> Self {
        Self { base: OptionalBase::new() }
    }

    pub fn from_value(value: T) -> Self {
        let mut opt = Self::new();
        opt.base.construct(value);
        opt
    }

    // Engaged only when cond holds.
    pub fn from_value_if(cond: bool, value: T) -> Self {
        match cond {
            true => Self::from_value(value),
            false => Self::new()
        }
    }

    // Constructs the contained value straight from the initializer, with no
    // temporary optional in between.
    pub fn in_place<F>(_: InPlace, init: F) -> Self
    where F: FnOnce() -> T
    {
        let mut opt = Self::new();
        opt.base.construct_with(init);
        opt
    }

    // The initializer never runs when cond is false.
    pub fn in_place_if<F>(_: InPlaceIf, cond: bool, init: F) -> Self
    where F: FnOnce() -> T
    {
        let mut opt = Self::new();
        opt.base.construct_with_if(cond, init);
        opt
    }

    // Move construction: an engaged source stays engaged, its value left at
    // T::default() as the taken-from state.
    pub fn from_take(src: &mut Optional<T>) -> Self
    where T: Default
    {
        let mut opt = Self::new();
        opt.base.assign_take(&mut src.base);
        opt
    }

    // Converting construction from an optional of a compatible element type.
    pub fn converting<U>(src: Optional<U>) -> Self
    where T: From<U>
    {
        let mut src = src;
        match src.base.take() {
            Some(value) => Self::from_value(T::from(value)),
            None => Self::new()
        }
    }

    pub fn converting_from<U>(src: &Optional<U>) -> Self
    where U: Clone,
          T: From<U>
    {
        match src.has_value() {
            true => Self::from_value(T::from(unsafe { src.base.get() }.clone())),
            false => Self::new()
        }
    }

    pub fn has_value(&self) -> bool { self.base.is_initialized() }

    // Trusted access. Calling either on a disengaged optional is undefined
    // behavior; a debug build trips an assertion, a release build checks
    // nothing.
    pub unsafe fn get_unchecked(&self) -> &T { self.base.get() }
    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T { self.base.get_mut() }

    // Null while disengaged.
    pub fn get_ptr(&self) -> *const T { self.base.get_ptr() }
    pub fn get_ptr_mut(&mut self) -> *mut T { self.base.get_ptr_mut() }

    pub fn value(&self) -> Result<&T, BadOptionalAccess> {
        match self.has_value() {
            true => Ok(unsafe { self.base.get() }),
            false => Err(BadOptionalAccess)
        }
    }

    pub fn value_mut(&mut self) -> Result<&mut T, BadOptionalAccess> {
        match self.has_value() {
            true => Ok(unsafe { self.base.get_mut() }),
            false => Err(BadOptionalAccess)
        }
    }

    pub fn value_or(&self, default: T) -> T
    where T: Clone
    {
        match self.has_value() {
            true => unsafe { self.base.get() }.clone(),
            false => default
        }
    }

    // Destroys any current value first, then constructs the new one in place.
    pub fn emplace(&mut self, value: T) -> &mut T {
        self.base.destroy();
        self.base.construct(value);
        unsafe { self.base.get_mut() }
    }

    pub fn emplace_with<F>(&mut self, init: F) -> &mut T
    where F: FnOnce() -> T
    {
        self.base.destroy();
        self.base.construct_with(init);
        unsafe { self.base.get_mut() }
    }

    pub fn reset(&mut self) {
        self.base.destroy();
    }

    pub fn assign(&mut self, rhs: &Optional<T>)
    where T: Clone
    {
        self.base.assign_from(&rhs.base);
    }

    // Move assignment: rhs stays engaged holding T::default() when it had a
    // value.
    pub fn assign_take(&mut self, rhs: &mut Optional<T>)
    where T: Default
    {
        self.base.assign_take(&mut rhs.base);
    }

    pub fn assign_value(&mut self, value: T) {
        self.base.assign_value(value);
    }

    // Converting assignment; the usual four-way split, converting rhs's value
    // at the U -> T boundary.
    pub fn assign_converting<U>(&mut self, rhs: &Optional<U>)
    where U: Clone,
          T: From<U>
    {
        match (self.has_value(), rhs.has_value()) {
            (true, true) => unsafe { *self.base.get_mut() = T::from(rhs.base.get().clone()) },
            (true, false) => self.base.destroy(),
            (false, true) => {
                let value = T::from(unsafe { rhs.base.get() }.clone());
                self.base.construct(value);
            }
            (false, false) => {}
        }
    }

    pub fn assign_none(&mut self, _: Nullopt) {
        self.base.assign_none();
    }

    // Comparison against a raw value of a comparable type. Disengaged compares
    // less than (and unequal to) every value.
    pub fn eq_value<U>(&self, rhs: &U) -> bool
    where T: PartialEq<U>
    {
        match self.has_value() {
            true => (unsafe { self.base.get() }) == rhs,
            false => false
        }
    }

    pub fn partial_cmp_value<U>(&self, rhs: &U) -> Option<Ordering>
    where T: PartialOrd<U>
    {
        match self.has_value() {
            true => unsafe { self.base.get() }.partial_cmp(rhs),
            false => Some(Ordering::Less)
        }
    }
}

impl<T> Default for Optional<T> {
    fn default() -> Self { Self::new() }
}

impl<T> Clone for Optional<T>
where T: Clone
{
    fn clone(&self) -> Self {
        match self.has_value() {
            true => Self::from_value(unsafe { self.base.get() }.clone()),
            false => Self::new()
        }
    }

    // Copy assignment: reuses the engaged value when both sides hold one.
    fn clone_from(&mut self, source: &Self) {
        self.base.assign_from(&source.base);
    }
}

impl<T> From<Nullopt> for Optional<T> {
    fn from(_: Nullopt) -> Self { Self::new() }
}

impl<T> From<Option<T>> for Optional<T> {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(v) => Self::from_value(v),
            None => Self::new()
        }
    }
}

impl<T> From<Optional<T>> for Option<T> {
    fn from(value: Optional<T>) -> Self {
        let mut value = value;
        value.base.take()
    }
}

// One ordering rule drives every operator: disengaged is equal only to
// disengaged (or the sentinel) and less than any engaged value; engaged pairs
// compare their contained values.
impl<T, U> PartialEq<Optional<U>> for Optional<T>
where T: PartialEq<U>
{
    fn eq(&self, other: &Optional<U>) -> bool {
        match (self.has_value(), other.has_value()) {
            (true, true) => unsafe { self.base.get() == other.base.get() },
            (lhs, rhs) => lhs == rhs
        }
    }
}

impl<T> Eq for Optional<T> where T: Eq {}

impl<T, U> PartialOrd<Optional<U>> for Optional<T>
where T: PartialOrd<U>
{
    fn partial_cmp(&self, other: &Optional<U>) -> Option<Ordering> {
        match (self.has_value(), other.has_value()) {
            (true, true) => unsafe { self.base.get().partial_cmp(other.base.get()) },
            (false, false) => Some(Ordering::Equal),
            (false, true) => Some(Ordering::Less),
            (true, false) => Some(Ordering::Greater)
        }
    }
}

impl<T> Ord for Optional<T>
where T: Ord
{
    fn cmp(&self, other: &Self) -> Ordering {
        match (self.has_value(), other.has_value()) {
            (true, true) => unsafe { self.base.get().cmp(other.base.get()) },
            (false, false) => Ordering::Equal,
            (false, true) => Ordering::Less,
            (true, false) => Ordering::Greater
        }
    }
}

impl<T> PartialEq<Nullopt> for Optional<T> {
    fn eq(&self, _: &Nullopt) -> bool { !self.has_value() }
}

impl<T> PartialOrd<Nullopt> for Optional<T> {
    fn partial_cmp(&self, _: &Nullopt) -> Option<Ordering> {
        match self.has_value() {
            true => Some(Ordering::Greater),
            false => Some(Ordering::Equal)
        }
    }
}

impl<T> PartialEq<Optional<T>> for Nullopt {
    fn eq(&self, other: &Optional<T>) -> bool { !other.has_value() }
}

impl<T> PartialOrd<Optional<T>> for Nullopt {
    fn partial_cmp(&self, other: &Optional<T>) -> Option<Ordering> {
        match other.has_value() {
            true => Some(Ordering::Less),
            false => Some(Ordering::Equal)
        }
    }
}

impl<T> Hash for Optional<T>
where T: Hash
{
    fn hash<H>(&self, state: &mut H)
    where H: Hasher
    {
        self.has_value().hash(state);
        if self.has_value() {
            unsafe { self.base.get() }.hash(state);
        }
    }
}

impl<T> Debug for Optional<T>
where T: Debug
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.has_value() {
            true => write!(f, "Some({:?})", unsafe { self.base.get() }),
            false => write!(f, "None")
        }
    }
}

impl<T> Display for Optional<T>
where T: Display
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.has_value() {
            true => write!(f, "Some({})", unsafe { self.base.get() }),
            false => write!(f, "None")
        }
    }
}

// Factory construction.
pub fn make_optional<T>(value: T) -> Optional<T> {
    Optional::from_value(value)
}

pub fn make_optional_if<T>(cond: bool, value: T) -> Optional<T> {
    Optional::from_value_if(cond, value)
}

pub fn make_optional_with<T, F>(init: F) -> Optional<T>
where F: FnOnce() -> T
{
    Optional::in_place(IN_PLACE, init)
}

// Generic unchecked access; same contract as the member accessors.
pub unsafe fn get<T>(opt: &Optional<T>) -> &T {
    opt.get_unchecked()
}

pub unsafe fn get_mut<T>(opt: &mut Optional<T>) -> &mut T {
    opt.get_unchecked_mut()
}

pub fn get_pointer<T>(opt: &Optional<T>) -> *const T {
    opt.get_ptr()
}

// Exchanges state and contents. A displaced value moves between the raw slots
// directly, so mixed engagement never clones and never passes through a state
// where the value exists in both (or neither) side.
pub fn swap<T>(a: &mut Optional<T>, b: &mut Optional<T>) {
    match (a.has_value(), b.has_value()) {
        (true, true) => unsafe { std::mem::swap(a.base.get_mut(), b.base.get_mut()) },
        (true, false) => {
            if let Some(value) = a.base.take() {
                b.base.construct(value);
            }
        }
        (false, true) => {
            if let Some(value) = b.base.take() {
                a.base.construct(value);
            }
        }
        (false, false) => {}
    }
}
