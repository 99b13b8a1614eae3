/// Initial stream state; xorshift never leaves the all-zero state
pub(super) const DEFAULT_SEED: u32 = 12345;

#[inline]
pub(super) fn xorshift32(state: &mut u32) -> u32 {
    let mut x = *state;
    x ^= x << 13;
    x ^= x >> 17;
    x ^= x << 5;
    *state = x;
    x
}

/// Uniform integer in `[ceil(min), floor(max)]`
pub(super) fn bounded_int(state: &mut u32, min: f32, max: f32) -> i32 {
    let lo = min.ceil() as i32;
    let hi = max.floor() as i32;
    if hi <= lo {
        return lo;
    }
    let span = (hi - lo) as u32 + 1;
    lo + (xorshift32(state) % span) as i32
}
