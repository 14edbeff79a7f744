//! Constants shared across the project, grouped by area.

pub mod utils {
    /// Pi, to ten decimal places.
    #[allow(clippy::approx_constant)]
    pub const PI: f64 = 3.141_592_653_5;
}
