//! `HostEnv` over a live `JNIEnv`

use jni::objects::{JClass, JFieldID, JLongArray, JObject, JStaticFieldID, JValue};
use jni::sys::jsize;
use jni::JNIEnv;
use jnibench_sdk::{HostEnv, HostError, HostResult};

/// The JVM as seen from one native call.
pub struct JniHost<'local> {
    env: JNIEnv<'local>,
}

impl<'local> JniHost<'local> {
    /// Wrap the environment handed to an entry point.
    pub fn new(env: JNIEnv<'local>) -> Self {
        Self { env }
    }

    /// The wrapped environment
    pub fn env(&mut self) -> &mut JNIEnv<'local> {
        &mut self.env
    }

    /// Raise `ArrayIndexOutOfBoundsException` in the calling thread.
    pub fn throw_index_out_of_bounds(&mut self, message: &str) {
        let _ = self
            .env
            .throw_new("java/lang/ArrayIndexOutOfBoundsException", message);
    }

    /// Print the pending exception, if any, before the process goes down.
    fn describe_pending(&mut self) {
        if self.env.exception_check().unwrap_or(false) {
            let _ = self.env.exception_describe();
        }
    }
}

fn region_start(start: usize) -> HostResult<jsize> {
    jsize::try_from(start).map_err(|_| HostError::Accessor(format!("region start {start} out of range")))
}

// Field lookups only ever run against the benchmark class: the instance path
// through the portal and the static path from that class's own native method.
impl<'local> HostEnv for JniHost<'local> {
    type Class = JClass<'local>;
    type Object = JObject<'local>;
    type LongArray = JLongArray<'local>;
    type FieldId = JFieldID;
    type StaticFieldId = JStaticFieldID;

    fn find_class(&mut self, name: &str) -> HostResult<JClass<'local>> {
        match self.env.find_class(name) {
            Ok(class) => Ok(class),
            Err(err) => {
                self.describe_pending();
                tracing::error!(target: "jnibench", class = name, error = %err, "FindClass failed");
                Err(HostError::ClassNotFound {
                    class: name.to_string(),
                })
            }
        }
    }

    fn field_id(
        &mut self,
        class: &JClass<'local>,
        name: &str,
        descriptor: &str,
    ) -> HostResult<JFieldID> {
        match self.env.get_field_id(class, name, descriptor) {
            Ok(id) => Ok(id),
            Err(err) => {
                self.describe_pending();
                tracing::error!(target: "jnibench", field = name, descriptor, error = %err, "GetFieldID failed");
                Err(HostError::FieldNotFound {
                    class: jnibench_sdk::CALL_OVERHEAD_CLASS.to_string(),
                    name: name.to_string(),
                    descriptor: descriptor.to_string(),
                })
            }
        }
    }

    fn static_field_id(
        &mut self,
        class: &JClass<'local>,
        name: &str,
        descriptor: &str,
    ) -> HostResult<JStaticFieldID> {
        match self.env.get_static_field_id(class, name, descriptor) {
            Ok(id) => Ok(id),
            Err(err) => {
                self.describe_pending();
                tracing::error!(target: "jnibench", field = name, descriptor, error = %err, "GetStaticFieldID failed");
                Err(HostError::StaticFieldNotFound {
                    class: jnibench_sdk::CALL_OVERHEAD_CLASS.to_string(),
                    name: name.to_string(),
                    descriptor: descriptor.to_string(),
                })
            }
        }
    }

    fn set_long_field(
        &mut self,
        object: &JObject<'local>,
        field: JFieldID,
        value: i64,
    ) -> HostResult<()> {
        // SAFETY: `field` was resolved with descriptor "J" against the class
        // `object` is an instance of.
        unsafe { self.env.set_field_unchecked(object, field, JValue::Long(value)) }
            .map_err(|err| HostError::Accessor(err.to_string()))
    }

    fn set_static_long_field(
        &mut self,
        class: &JClass<'local>,
        field: JStaticFieldID,
        value: i64,
    ) -> HostResult<()> {
        self.env
            .set_static_field(class, field, JValue::Long(value))
            .map_err(|err| HostError::Accessor(err.to_string()))
    }

    fn long_array_length(&mut self, array: &JLongArray<'local>) -> HostResult<usize> {
        let len = self
            .env
            .get_array_length(array)
            .map_err(|err| HostError::Accessor(err.to_string()))?;
        usize::try_from(len).map_err(|_| HostError::Accessor(format!("array length {len} below zero")))
    }

    fn get_long_array_region(
        &mut self,
        array: &JLongArray<'local>,
        start: usize,
        buf: &mut [i64],
    ) -> HostResult<()> {
        let start = region_start(start)?;
        self.env
            .get_long_array_region(array, start, buf)
            .map_err(|err| HostError::Accessor(err.to_string()))
    }

    fn set_long_array_region(
        &mut self,
        array: &JLongArray<'local>,
        start: usize,
        buf: &[i64],
    ) -> HostResult<()> {
        let start = region_start(start)?;
        self.env
            .set_long_array_region(array, start, buf)
            .map_err(|err| HostError::Accessor(err.to_string()))
    }
}
