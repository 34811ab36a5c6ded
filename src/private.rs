//! The public parts of this private module are used to create traits
//! that cannot be implemented outside of our own crate.  This way we
//! can feel free to extend those traits without worrying about it
//! being a breaking change for other implementations.

/// If this type is pub but not publicly reachable, third parties
/// can't name it and can't implement traits using it.
pub struct PrivateMarker;

// The dimension-list traits are implemented on type-level values that are
// never instantiated, so the sealing item is an associated function rather
// than a method.
macro_rules! private_decl {
    () => {
        /// This trait is private to implement; this function exists to make it
        /// impossible to implement outside the crate.
        #[doc(hidden)]
        fn __private__() -> crate::private::PrivateMarker;
    };
}

macro_rules! private_impl {
    () => {
        fn __private__() -> crate::private::PrivateMarker {
            crate::private::PrivateMarker
        }
    };
}
