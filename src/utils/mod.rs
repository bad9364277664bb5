//! Various unsorted utilities.

pub use self::lexicographic::{lexicographic_key, sort_lexicographic};

pub mod hashmap;
mod lexicographic;
