//! Lookup helper for the benchmark class
//!
//! Resolves fields of `CallOverheadTestcases` and writes `long` values into
//! them. Instance field identifiers go through the memo table; static ones
//! are resolved on every call.

use crate::cache::{FieldCache, FieldKey};
use crate::error::HostResult;
use crate::host::HostEnv;

/// Binary name of the managed benchmark class.
pub const CALL_OVERHEAD_CLASS: &str = "net/adoptopenjdk/bumblebench/jni/CallOverheadTestcases";

/// Type descriptor of a `long` field.
pub const LONG_DESCRIPTOR: &str = "J";

/// Instance field written by `testSetLongField`.
pub const LONG_FIELD: &str = "longField";

/// Static field written by `testSetLongFieldStatic`.
pub const LONG_FIELD_STATIC: &str = "longFieldStatic";

/// Field lookup and mutation for the benchmark class.
pub struct CallOverheadPortal<F> {
    fields: FieldCache<F>,
}

impl<F: Copy + Send + Sync + 'static> CallOverheadPortal<F> {
    /// Create a portal with an empty memo table.
    pub fn new() -> Self {
        Self {
            fields: FieldCache::new(),
        }
    }

    /// The memo table
    pub fn fields(&self) -> &FieldCache<F> {
        &self.fields
    }

    /// Resolve (or reuse) the identifier of an instance field.
    ///
    /// A cache hit makes no host calls and no heap allocations.
    pub fn field_id<H>(
        &self,
        host: &mut H,
        name: &'static str,
        descriptor: &'static str,
    ) -> HostResult<F>
    where
        H: HostEnv<FieldId = F>,
    {
        let key = FieldKey::new(CALL_OVERHEAD_CLASS, name, descriptor);
        self.fields.get_or_try_insert_with(&key, || {
            let class = host.find_class(CALL_OVERHEAD_CLASS)?;
            host.field_id(&class, name, descriptor)
        })
    }

    /// Write `value` into the `long` instance field `name` of `object`.
    pub fn set_long_handle<H>(
        &self,
        host: &mut H,
        object: &H::Object,
        value: i64,
        name: &'static str,
    ) -> HostResult<()>
    where
        H: HostEnv<FieldId = F>,
    {
        let field = self.field_id(host, name, LONG_DESCRIPTOR)?;
        host.set_long_field(object, field, value)
    }

    /// Write `value` into the `long` static field `name` of `class`.
    pub fn set_static_long_handle<H>(
        &self,
        host: &mut H,
        class: &H::Class,
        value: i64,
        name: &str,
    ) -> HostResult<()>
    where
        H: HostEnv<FieldId = F>,
    {
        let field = host.static_field_id(class, name, LONG_DESCRIPTOR)?;
        host.set_static_long_field(class, field, value)
    }
}

impl<F: Copy + Send + Sync + 'static> Default for CallOverheadPortal<F> {
    fn default() -> Self {
        Self::new()
    }
}
