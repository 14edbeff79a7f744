pub mod demo;
pub mod error;
pub mod fold;
pub mod project;
pub mod random;
pub mod square;
pub mod transform;

pub use demo::{run_demo, Config, Step};
pub use error::{Error, Result};
pub use fold::{sum_variadic, Number};
pub use random::{FixedRandom, Random, SeededRandom};
pub use square::square;
pub use transform::{transform_value, Transform};
