//! Geometric transform kernels

use super::parallel::for_each_chunk;

/// Rotate points `(x, y)` counter-clockwise by `angle` radians
///
/// ```text
/// out_x = x * cos(angle) - y * sin(angle)
/// out_y = x * sin(angle) + y * cos(angle)
/// ```
///
/// `sin` and `cos` are evaluated once per call, outside the index loop.
///
/// # Safety
/// - all four pointers must be valid for `len` elements
/// - `out_x` may equal `in_x` and `out_y` may equal `in_y`
/// - `out_x` must not overlap `in_y`, and `out_y` must not overlap `in_x`
#[inline]
pub unsafe fn rotate_2d_kernel(
    in_x: *const f64,
    in_y: *const f64,
    out_x: *mut f64,
    out_y: *mut f64,
    len: usize,
    angle: f64,
    chunk: usize,
) {
    let (s, c) = angle.sin_cos();

    let in_x_addr = in_x as usize;
    let in_y_addr = in_y as usize;
    let out_x_addr = out_x as usize;
    let out_y_addr = out_y as usize;

    for_each_chunk(len, chunk, |start, end| unsafe {
        let in_x = in_x_addr as *const f64;
        let in_y = in_y_addr as *const f64;
        let out_x = out_x_addr as *mut f64;
        let out_y = out_y_addr as *mut f64;
        for i in start..end {
            let x = *in_x.add(i);
            let y = *in_y.add(i);
            *out_x.add(i) = x * c - y * s;
            *out_y.add(i) = x * s + y * c;
        }
    });
}
