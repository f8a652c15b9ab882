use crate::models::complex::Complex;

/// Escape time of the Mandelbrot orbit starting at `c`.
///
/// Returns the 0-based index of the iteration at which the orbit's
/// magnitude was first found above 2, or 255 when it stays bounded for
/// the whole budget. The divergence check runs against the current z
/// *before* it is squared, and a bounded orbit reports 255 rather than
/// `max_iterations`; the grayscale mapping downstream (`255 - n`)
/// relies on both. Callers keep `max_iterations` within 1..=255.
pub fn escape_time(c: Complex, max_iterations: u32) -> u8 {
    let mut z = c;
    for iteration in 0..max_iterations {
        if z.arg_sq() > 4.0 {
            return iteration as u8;
        }
        z = z * z + c;
    }
    255
}
