// optional<T&>: stores the referent's address instead of a value slot, so
// there is nothing to destroy. Copies alias the same referent, assignment
// reseats the address, and only the dereference path can mutate the referent.

use crate::{
    error::BadOptionalAccess,
    nullopt::Nullopt
};
use std::{
    cmp::Ordering,
    fmt::Debug,
    marker::PhantomData
};

#[repr(C)]
pub struct OptionalRef<'a, T> {
    ptr: *mut T,
    _referent: PhantomData<&'a mut T>
}

impl<'a, T> OptionalRef<'a, T> {
    pub const fn new() -> Self {
        Self {
            ptr: std::ptr::null_mut(),
            _referent: PhantomData
        }
    }

    pub fn from_ref(referent: &'a mut T) -> Self {
        Self {
            ptr: referent,
            _referent: PhantomData
        }
    }

    pub fn has_value(&self) -> bool { !self.ptr.is_null() }

    // Trusted access; undefined behavior while disengaged.
    pub unsafe fn get_unchecked(&self) -> &T {
        debug_assert!(!self.ptr.is_null(), "Tried to access the value of an uninitialized optional");
        &*self.ptr
    }

    pub unsafe fn get_unchecked_mut(&mut self) -> &mut T {
        debug_assert!(!self.ptr.is_null(), "Tried to access the value of an uninitialized optional");
        &mut *self.ptr
    }

    pub fn get_ptr(&self) -> *mut T { self.ptr }

    pub fn value(&self) -> Result<&T, BadOptionalAccess> {
        match self.has_value() {
            true => Ok(unsafe { &*self.ptr }),
            false => Err(BadOptionalAccess)
        }
    }

    // The only path that can write through to the referent.
    pub fn value_mut(&mut self) -> Result<&mut T, BadOptionalAccess> {
        match self.has_value() {
            true => Ok(unsafe { &mut *self.ptr }),
            false => Err(BadOptionalAccess)
        }
    }

    pub fn value_or(&self, default: T) -> T
    where T: Clone
    {
        match self.has_value() {
            true => unsafe { &*self.ptr }.clone(),
            false => default
        }
    }

    // Reseats to a new referent; neither the old nor the new referent's value
    // is touched.
    pub fn bind(&mut self, referent: &'a mut T) {
        self.ptr = referent;
    }

    // Same effect as bind, kept for symmetry with the value-holding emplace.
    pub fn emplace(&mut self, referent: &'a mut T) -> &mut T {
        self.ptr = referent;
        unsafe { &mut *self.ptr }
    }

    // Copies the address; the referents themselves never change.
    pub fn assign(&mut self, rhs: &OptionalRef<'a, T>) {
        self.ptr = rhs.ptr;
    }

    pub fn assign_none(&mut self, _: Nullopt) {
        self.ptr = std::ptr::null_mut();
    }

    pub fn reset(&mut self) {
        self.ptr = std::ptr::null_mut();
    }

    // Comparison against a raw value; the referent's value is compared, never
    // its address.
    pub fn eq_value<U>(&self, rhs: &U) -> bool
    where T: PartialEq<U>
    {
        match self.has_value() {
            true => (unsafe { &*self.ptr }) == rhs,
            false => false
        }
    }

    pub fn partial_cmp_value<U>(&self, rhs: &U) -> Option<Ordering>
    where T: PartialOrd<U>
    {
        match self.has_value() {
            true => unsafe { &*self.ptr }.partial_cmp(rhs),
            false => Some(Ordering::Less)
        }
    }
}

impl<'a, T> Clone for OptionalRef<'a, T> {
    fn clone(&self) -> Self { *self }
}

impl<'a, T> Copy for OptionalRef<'a, T> {}

impl<'a, T> Default for OptionalRef<'a, T> {
    fn default() -> Self { Self::new() }
}

impl<'a, T> From<&'a mut T> for OptionalRef<'a, T> {
    fn from(referent: &'a mut T) -> Self { Self::from_ref(referent) }
}

impl<'a, T> From<Nullopt> for OptionalRef<'a, T> {
    fn from(_: Nullopt) -> Self { Self::new() }
}

impl<'a, 'b, T, U> PartialEq<OptionalRef<'b, U>> for OptionalRef<'a, T>
where T: PartialEq<U>
{
    fn eq(&self, other: &OptionalRef<'b, U>) -> bool {
        match (self.has_value(), other.has_value()) {
            (true, true) => unsafe { *self.ptr == *other.ptr },
            (lhs, rhs) => lhs == rhs
        }
    }
}

impl<'a, 'b, T, U> PartialOrd<OptionalRef<'b, U>> for OptionalRef<'a, T>
where T: PartialOrd<U>
{
    fn partial_cmp(&self, other: &OptionalRef<'b, U>) -> Option<Ordering> {
        match (self.has_value(), other.has_value()) {
            (true, true) => unsafe { (*self.ptr).partial_cmp(&*other.ptr) },
            (false, false) => Some(Ordering::Equal),
            (false, true) => Some(Ordering::Less),
            (true, false) => Some(Ordering::Greater)
        }
    }
}

impl<'a, T> PartialEq<Nullopt> for OptionalRef<'a, T> {
    fn eq(&self, _: &Nullopt) -> bool { !self.has_value() }
}

impl<'a, T> PartialOrd<Nullopt> for OptionalRef<'a, T> {
    fn partial_cmp(&self, _: &Nullopt) -> Option<Ordering> {
        match self.has_value() {
            true => Some(Ordering::Greater),
            false => Some(Ordering::Equal)
        }
    }
}

impl<'a, T> PartialEq<OptionalRef<'a, T>> for Nullopt {
    fn eq(&self, other: &OptionalRef<'a, T>) -> bool { !other.has_value() }
}

impl<'a, T> PartialOrd<OptionalRef<'a, T>> for Nullopt {
    fn partial_cmp(&self, other: &OptionalRef<'a, T>) -> Option<Ordering> {
        match other.has_value() {
            true => Some(Ordering::Less),
            false => Some(Ordering::Equal)
        }
    }
}

impl<'a, T> Debug for OptionalRef<'a, T>
where T: Debug
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.has_value() {
            true => write!(f, "Some({:?})", unsafe { &*self.ptr }),
            false => write!(f, "None")
        }
    }
}

// Exchanges which referents the two sides are bound to.
pub fn swap<'a, T>(a: &mut OptionalRef<'a, T>, b: &mut OptionalRef<'a, T>) {
    std::mem::swap(&mut a.ptr, &mut b.ptr);
}

#[cfg(test)]
pub mod tests {
    use super::{ swap, OptionalRef };
    use crate::nullopt::NULLOPT;
    use std::error::Error;

    type TestReturn = Result<(), Box<dyn Error>>;

    #[test]
    pub fn default_constructed_is_disengaged() -> TestReturn {
        let oi: OptionalRef<i32> = OptionalRef::new();
        assert!(!oi.has_value(), "Default-constructed reference optional should be disengaged");
        assert!(oi == NULLOPT, "Disengaged reference optional should equal the sentinel");
        assert!(oi.get_ptr().is_null(), "Disengaged reference optional should hold a null address");
        assert_eq!(oi.value_or(9), 9, "value_or on disengaged should return the default");
        Ok(())
    }

    #[test]
    pub fn binds_and_mutates_referent() -> TestReturn {
        let mut j = 2;
        let mut oj = OptionalRef::from_ref(&mut j);
        assert!(oj.has_value(), "Binding a referent should engage");
        assert!(oj.eq_value(&2), "Reference optional should observe the referent's value");

        *oj.value_mut()? = 3;
        assert!(oj.eq_value(&3), "Mutation through the reference should be observable");
        assert_eq!(oj.value_or(0), 3, "value_or on engaged should copy the referent");
        assert_eq!(j, 3, "Mutation through the reference should reach the referent");
        Ok(())
    }

    #[test]
    pub fn copies_alias_and_reseat_independently() -> TestReturn {
        let mut j = 2;
        let mut k = 10;
        let r = OptionalRef::from_ref(&mut j);
        let mut r2 = r;
        assert!(r2 == r, "Copied reference optional should observe the same referent");

        r2.bind(&mut k);
        assert!(r.eq_value(&2), "Reseating the copy should leave the original bound");
        assert!(r2.eq_value(&10), "Reseated copy should observe the new referent");
        Ok(())
    }

    #[test]
    pub fn assignment_reseats_without_touching_referents() -> TestReturn {
        let mut i = 1;
        let mut j = 2;
        let mut oi: OptionalRef<i32> = OptionalRef::new();
        let oj = OptionalRef::from_ref(&mut j);

        oi.assign(&oj);
        assert!(oi.has_value(), "Assignment from an engaged reference optional should engage");
        assert!(oi == oj, "Assigned reference optional should observe the same referent");
        assert!(oi.eq_value(&2), "Old referent's value should be unchanged by the reseat");

        oi.emplace(&mut i);
        assert!(oi.eq_value(&1), "Emplace should reseat to the new referent");

        oi.assign_none(NULLOPT);
        assert!(!oi.has_value(), "Sentinel assignment should disengage");
        assert!(oj.eq_value(&2), "Disengaging one alias should not affect another");
        Ok(())
    }

    #[test]
    pub fn checked_access() -> TestReturn {
        let empty: OptionalRef<i32> = OptionalRef::new();
        let err = empty.value().expect_err("Checked access on disengaged should fail");
        assert_eq!(err.to_string(), "Attempted to access the value of an uninitialized optional object.",
                   "Error message doesn't match");

        let mut v = 5;
        let or = OptionalRef::from_ref(&mut v);
        assert_eq!(*or.value()?, 5, "Checked access on engaged should reach the referent");
        Ok(())
    }

    #[test]
    pub fn relational_operators_compare_referent_values() -> TestReturn {
        let mut i0 = 0u32;
        let mut i1 = 1u32;
        let oi0 = OptionalRef::from_ref(&mut i0);
        let oi1 = OptionalRef::from_ref(&mut i1);

        assert!(oi0 == oi0, "A reference optional should equal itself");
        assert!(oi0 != oi1, "Different referent values should differ");
        assert!(oi0 < oi1, "Referent values should drive the ordering");
        assert!(oi1 > oi0, "Referent values should drive the ordering");
        assert!(oi0 >= oi0, "Equal referent values should be greater-or-equal");

        assert!(oi0.eq_value(&0), "Reference optional should equal its referent's value");
        assert!(!oi0.eq_value(&1), "Reference optional should differ from another value");

        let empty: OptionalRef<u32> = OptionalRef::new();
        assert!(empty < oi0, "Disengaged should be less than any engaged reference");
        assert!(empty == NULLOPT, "Disengaged should equal the sentinel");
        assert!(NULLOPT < oi0, "Sentinel should be less than any engaged reference");
        assert!(!empty.eq_value(&0), "Disengaged reference optional should equal no value");
        Ok(())
    }

    #[test]
    pub fn swap_exchanges_bindings() -> TestReturn {
        let mut x = 1;
        let mut y = 2;
        let mut ox = OptionalRef::from_ref(&mut x);
        let mut oy = OptionalRef::from_ref(&mut y);
        swap(&mut ox, &mut oy);
        assert!(ox.eq_value(&2), "Swap should exchange the bindings");
        assert!(oy.eq_value(&1), "Swap should exchange the bindings");

        let mut empty: OptionalRef<i32> = OptionalRef::new();
        swap(&mut ox, &mut empty);
        assert!(!ox.has_value(), "Swap with disengaged should disengage the engaged side");
        assert!(empty.eq_value(&2), "Swap should carry the binding over");
        Ok(())
    }
}
