use std::mem::MaybeUninit;

// Storage core shared by the optional family: a raw slot sized and aligned for
// one T, plus the engaged flag. Every construct/destroy/assign path funnels
// through here, so the flag can never disagree with the slot. The element type
// needs no default constructor; the slot starts uninitialized.
#[repr(C)]
pub(crate) struct OptionalBase<T> {
    value: MaybeUninit<T>,
    on: bool
}

impl<T> OptionalBase<T> {
    pub const fn new() -> Self {
        Self {
            value: MaybeUninit::uninit(),
            on: false
        }
    }

    pub fn is_initialized(&self) -> bool { self.on }

    // The flag is set only once the value is fully in the slot.
    pub fn construct(&mut self, value: T) {
        debug_assert!(!self.on, "Tried to construct into an engaged optional");
        self.value.write(value);
        self.on = true;
    }

    // In-place construction: the initializer runs before the slot is touched,
    // so a panicking initializer unwinds with the core still disengaged.
    pub fn construct_with<F>(&mut self, init: F)
    where F: FnOnce() -> T
    {
        debug_assert!(!self.on, "Tried to construct into an engaged optional");
        let value = init();
        self.value.write(value);
        self.on = true;
    }

    // Runs the initializer only when cond holds; a false cond costs nothing.
    pub fn construct_with_if<F>(&mut self, cond: bool, init: F)
    where F: FnOnce() -> T
    {
        if cond {
            self.construct_with(init);
        }
    }

    // Drops the live value, if any. Never fails; idempotent.
    pub fn destroy(&mut self) {
        if self.on {
            self.on = false;
            unsafe { std::ptr::drop_in_place(self.value.as_mut_ptr()) };
        }
    }

    // Assignment from another core. (on, on) assigns at the value level,
    // (on, off) destroys, (off, on) constructs, (off, off) is a no-op.
    pub fn assign_from(&mut self, rhs: &Self)
    where T: Clone
    {
        match (self.on, rhs.on) {
            (true, true) => unsafe { *self.get_mut() = rhs.get().clone() },
            (true, false) => self.destroy(),
            (false, true) => self.construct(unsafe { rhs.get() }.clone()),
            (false, false) => {}
        }
    }

    // Move flavor of the table above: the value is pulled out of rhs, which
    // stays engaged holding T::default() as its taken-from state.
    pub fn assign_take(&mut self, rhs: &mut Self)
    where T: Default
    {
        match (self.on, rhs.on) {
            (true, true) => unsafe { *self.get_mut() = std::mem::take(rhs.get_mut()) },
            (true, false) => self.destroy(),
            (false, true) => {
                let value = std::mem::take(unsafe { rhs.get_mut() });
                self.construct(value);
            }
            (false, false) => {}
        }
    }

    pub fn assign_value(&mut self, value: T) {
        match self.on {
            true => unsafe { *self.get_mut() = value },
            false => self.construct(value)
        }
    }

    pub fn assign_none(&mut self) {
        self.destroy();
    }

    // Reads the value out, leaving the core disengaged.
    pub fn take(&mut self) -> Option<T> {
        match self.on {
            true => {
                self.on = false;
                Some(unsafe { self.value.assume_init_read() })
            }
            false => None
        }
    }

    pub unsafe fn get(&self) -> &T {
        debug_assert!(self.on, "Tried to access the value of an uninitialized optional");
        self.value.assume_init_ref()
    }

    pub unsafe fn get_mut(&mut self) -> &mut T {
        debug_assert!(self.on, "Tried to access the value of an uninitialized optional");
        self.value.assume_init_mut()
    }

    pub fn get_ptr(&self) -> *const T {
        match self.on {
            true => self.value.as_ptr(),
            false => std::ptr::null()
        }
    }

    pub fn get_ptr_mut(&mut self) -> *mut T {
        match self.on {
            true => self.value.as_mut_ptr(),
            false => std::ptr::null_mut()
        }
    }
}

impl<T> Drop for OptionalBase<T> {
    fn drop(&mut self) {
        self.destroy();
    }
}
