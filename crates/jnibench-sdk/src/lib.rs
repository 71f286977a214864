//! jnibench SDK - host-agnostic core of the JNI call-overhead shim
//!
//! Everything the benchmark entry points do, written against the [`HostEnv`]
//! trait instead of a concrete JVM so it can be exercised without one.
//!
//! # Example
//!
//! ```ignore
//! use jnibench_sdk::{settle, CallOverheadPortal, LONG_FIELD};
//!
//! static PORTAL: Lazy<CallOverheadPortal<JFieldID>> = Lazy::new(CallOverheadPortal::new);
//!
//! let mut host = JniHost::new(env);
//! settle(PORTAL.set_long_handle(&mut host, &this, 42, LONG_FIELD));
//! ```

#![warn(missing_docs)]

pub mod cache;
pub mod error;
pub mod host;
pub mod overhead;
pub mod portal;

#[cfg(test)]
mod testing;

pub use cache::{FieldCache, FieldKey};
pub use error::{fatal, settle, HostError, HostResult};
pub use host::HostEnv;
pub use overhead::{add_scalar, array_read_write_region, conditional_sum, param_no_ret};
pub use portal::{
    CallOverheadPortal, CALL_OVERHEAD_CLASS, LONG_DESCRIPTOR, LONG_FIELD, LONG_FIELD_STATIC,
};
