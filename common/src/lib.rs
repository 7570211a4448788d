#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod alphabet;
pub use alphabet::*;

mod key;
pub use key::*;

mod error;
pub use error::*;

mod algorithm;
pub use algorithm::*;

mod vigenere;
pub use vigenere::*;
