//! HostEnv trait: abstract host runtime accessors
//!
//! Defines the slice of the host's native interface the shim needs. The FFI
//! crate implements it over `JNIEnv`; tests implement it over an in-memory
//! heap. Handles are associated types and are only ever passed back to the
//! host, never inspected.

use crate::error::HostResult;

/// Abstract host runtime for the benchmark entry points.
///
/// Class, object and array handles are owned by the host and valid for the
/// duration of one native call. Field identifiers outlive the call and may be
/// cached for as long as the owning class stays loaded.
pub trait HostEnv {
    /// Class reference
    type Class;
    /// Object reference
    type Object;
    /// `long[]` reference
    type LongArray;
    /// Resolved instance field identifier
    type FieldId: Copy + Send + Sync + 'static;
    /// Resolved static field identifier
    type StaticFieldId: Copy;

    // ========================================================================
    // Lookups
    // ========================================================================

    /// Find a class by binary name (`a/b/C`)
    fn find_class(&mut self, name: &str) -> HostResult<Self::Class>;

    /// Resolve an instance field by name and type descriptor
    fn field_id(
        &mut self,
        class: &Self::Class,
        name: &str,
        descriptor: &str,
    ) -> HostResult<Self::FieldId>;

    /// Resolve a static field by name and type descriptor
    fn static_field_id(
        &mut self,
        class: &Self::Class,
        name: &str,
        descriptor: &str,
    ) -> HostResult<Self::StaticFieldId>;

    // ========================================================================
    // Field writes
    // ========================================================================

    /// Write a `long` instance field
    fn set_long_field(
        &mut self,
        object: &Self::Object,
        field: Self::FieldId,
        value: i64,
    ) -> HostResult<()>;

    /// Write a `long` static field
    fn set_static_long_field(
        &mut self,
        class: &Self::Class,
        field: Self::StaticFieldId,
        value: i64,
    ) -> HostResult<()>;

    // ========================================================================
    // Array regions
    // ========================================================================

    /// Number of elements in `array`
    fn long_array_length(&mut self, array: &Self::LongArray) -> HostResult<usize>;

    /// Copy `buf.len()` elements starting at `start` out of `array`
    fn get_long_array_region(
        &mut self,
        array: &Self::LongArray,
        start: usize,
        buf: &mut [i64],
    ) -> HostResult<()>;

    /// Copy `buf` into `array` starting at `start`
    fn set_long_array_region(
        &mut self,
        array: &Self::LongArray,
        start: usize,
        buf: &[i64],
    ) -> HostResult<()>;
}
