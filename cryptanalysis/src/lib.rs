//! Kasiski examination of Vigenère ciphertext.
//!
//! The estimator works on the letters of the ciphertext only:
//!
//! 1. [`normalize`] keeps the ASCII letters, upper-cased
//! 2. [`find_repetitions`] lists every fragment that occurs more than once, longest first
//! 3. [`build_distance_table`] turns the occurrences into distances between repeats
//! 4. [`reduce`] narrows the divisors of the first distance with the GCD of every other one
//!
//! [`kasiski_key_length`] runs the whole pipeline, [`analyze`] returns the intermediate
//! tables as well.

mod error;
pub use error::*;

mod normalize;
pub use normalize::*;

mod divisors;
pub use divisors::*;

mod repetition;
pub use repetition::*;

mod distance;
pub use distance::*;

mod reducer;
pub use reducer::*;

mod kasiski;
pub use kasiski::*;

pub mod trial;
