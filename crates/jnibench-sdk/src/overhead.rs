//! Call-overhead kernels
//!
//! The bodies behind the benchmark entry points that do not touch fields.
//! They are deliberately tiny so the measured cost is the call itself.

use crate::error::{HostError, HostResult};
use crate::host::HostEnv;

/// Amount added to the local copy in the single-parameter call.
pub const PARAM_INCREMENT: i64 = 22;

/// Amount added to the `int` argument before the comparison.
pub const INT_INCREMENT: i32 = 2;

/// Body of the single-parameter call: bump the local copy and drop it.
#[inline]
pub fn param_no_ret(value: i64) {
    let _value = value.wrapping_add(PARAM_INCREMENT);
}

/// Body of the many-parameter call.
///
/// Compares the integer sum against the float sum the way C would, with the
/// `long` sum converted to `float`. Ties and anything `>=` return `d1 + d2`;
/// otherwise (including a NaN float sum) `d2` alone.
#[inline]
pub fn conditional_sum(l: i64, i: i32, f1: f32, f2: f32, f5: f32, d1: f64, d2: f64) -> f64 {
    let int_sum = (i.wrapping_add(INT_INCREMENT) as i64).wrapping_add(l);
    if int_sum as f32 >= f1 + f2 + f5 {
        d1 + d2
    } else {
        d2
    }
}

/// `output[i] = input[i] + value` with Java `long` wrap-around.
///
/// Only the common prefix of the two slices is written.
#[inline]
pub fn add_scalar(input: &[i64], value: i64, output: &mut [i64]) {
    for (out, &x) in output.iter_mut().zip(input) {
        *out = x.wrapping_add(value);
    }
}

/// Read `len` elements of `input`, add `value`, write them to `output`.
///
/// A zero length makes no host calls. The length is checked against both
/// arrays before any buffer is allocated.
pub fn array_read_write_region<H: HostEnv>(
    host: &mut H,
    input: &H::LongArray,
    value: i64,
    output: &H::LongArray,
    len: i32,
) -> HostResult<()> {
    let len = usize::try_from(len).map_err(|_| HostError::NegativeLength(len))?;
    if len == 0 {
        return Ok(());
    }

    let available = host
        .long_array_length(input)?
        .min(host.long_array_length(output)?);
    if len > available {
        return Err(HostError::RegionOutOfBounds { len, available });
    }

    let mut input_region = vec![0i64; len];
    let mut output_region = vec![0i64; len];

    host.get_long_array_region(input, 0, &mut input_region)?;
    add_scalar(&input_region, value, &mut output_region);
    host.set_long_array_region(output, 0, &output_region)
}
