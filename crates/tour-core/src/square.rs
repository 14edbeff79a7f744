/// Square an integer, wrapping on overflow. Usable in constant contexts.
pub const fn square(n: i32) -> i32 {
    n.wrapping_mul(n)
}
