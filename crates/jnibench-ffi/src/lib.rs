//! JNI entry points for the call-overhead benchmarks
//!
//! Built as `libjnibench` and loaded by the benchmark harness with
//! `System.loadLibrary("jnibench")`. Each export backs one `native` method of
//! `net.adoptopenjdk.bumblebench.jni.CallOverheadTestcases`; the symbol names
//! and signatures must match those declarations exactly.
//!
//! Unresolved class or field handles abort the process. Accessor failures
//! return straight to Java with the JVM's exception pending.

#![allow(non_snake_case)]

pub mod host;
pub mod logging;

use std::ffi::c_void;

use jni::objects::{JClass, JFieldID, JLongArray, JObject};
use jni::sys::{jboolean, jbyte, jchar, jdouble, jfloat, jint, jlong, jshort, JNI_VERSION_1_8};
use jni::JNIEnv;
use jnibench_sdk::{
    array_read_write_region, conditional_sum, param_no_ret, settle, CallOverheadPortal, HostError,
    LONG_FIELD, LONG_FIELD_STATIC,
};
use once_cell::sync::Lazy;

pub use host::JniHost;

/// Field-id memo table shared by every call into the library.
static PORTAL: Lazy<CallOverheadPortal<JFieldID>> = Lazy::new(CallOverheadPortal::new);

// ============================================================================
// Library lifecycle
// ============================================================================

/// Called by the JVM when the library is loaded.
#[no_mangle]
pub extern "system" fn JNI_OnLoad(_vm: *mut jni::sys::JavaVM, _reserved: *mut c_void) -> jint {
    logging::init_logging(&logging::LogOptions::from_env());
    tracing::debug!(target: "jnibench", version = env!("CARGO_PKG_VERSION"), "library loaded");
    JNI_VERSION_1_8
}

// ============================================================================
// Parameter passing
// ============================================================================

/// `void testNoParamNoRet()`
#[no_mangle]
pub extern "system" fn Java_net_adoptopenjdk_bumblebench_jni_CallOverheadTestcases_testNoParamNoRet<
    'local,
>(
    _env: JNIEnv<'local>,
    _this: JObject<'local>,
) {
}

/// `void testParamNoRet(long)`
#[no_mangle]
pub extern "system" fn Java_net_adoptopenjdk_bumblebench_jni_CallOverheadTestcases_testParamNoRet<
    'local,
>(
    _env: JNIEnv<'local>,
    _this: JObject<'local>,
    val: jlong,
) {
    param_no_ret(val);
}

/// `double testParamAndRet(long, int, boolean, byte, char, short, float x5, double x3)`
#[no_mangle]
#[allow(clippy::too_many_arguments)]
pub extern "system" fn Java_net_adoptopenjdk_bumblebench_jni_CallOverheadTestcases_testParamAndRet<
    'local,
>(
    _env: JNIEnv<'local>,
    _this: JObject<'local>,
    jl: jlong,
    ji: jint,
    _jbool: jboolean,
    _jb: jbyte,
    _jc: jchar,
    _js: jshort,
    jf1: jfloat,
    jf2: jfloat,
    _jf3: jfloat,
    _jf4: jfloat,
    jf5: jfloat,
    jd1: jdouble,
    jd2: jdouble,
    _jd3: jdouble,
) -> jdouble {
    conditional_sum(jl, ji, jf1, jf2, jf5, jd1, jd2)
}

// ============================================================================
// Field writes
// ============================================================================

/// `void testSetLongField(long)` writes `this.longField`
#[no_mangle]
pub extern "system" fn Java_net_adoptopenjdk_bumblebench_jni_CallOverheadTestcases_testSetLongField<
    'local,
>(
    env: JNIEnv<'local>,
    this: JObject<'local>,
    val: jlong,
) {
    let mut host = JniHost::new(env);
    settle(PORTAL.set_long_handle(&mut host, &this, val, LONG_FIELD));
}

/// `static void testSetLongFieldStatic(long)` writes `longFieldStatic`
#[no_mangle]
pub extern "system" fn Java_net_adoptopenjdk_bumblebench_jni_CallOverheadTestcases_testSetLongFieldStatic<
    'local,
>(
    env: JNIEnv<'local>,
    class: JClass<'local>,
    val: jlong,
) {
    let mut host = JniHost::new(env);
    settle(PORTAL.set_static_long_handle(&mut host, &class, val, LONG_FIELD_STATIC));
}

// ============================================================================
// Array regions
// ============================================================================

/// `void testArrayReadWriteRegion(long[] array, long j, long[] result, int len)`
#[no_mangle]
pub extern "system" fn Java_net_adoptopenjdk_bumblebench_jni_CallOverheadTestcases_testArrayReadWriteRegion<
    'local,
>(
    env: JNIEnv<'local>,
    _this: JObject<'local>,
    input: JLongArray<'local>,
    val: jlong,
    output: JLongArray<'local>,
    len: jint,
) {
    let mut host = JniHost::new(env);
    match array_read_write_region(&mut host, &input, val, &output, len) {
        Err(err @ (HostError::NegativeLength(_) | HostError::RegionOutOfBounds { .. })) => {
            host.throw_index_out_of_bounds(&err.to_string());
        }
        result => {
            settle(result);
        }
    }
}
