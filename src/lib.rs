#![doc = include_str!("../README.md")]

mod parse;

pub mod error;
pub mod pssm;
pub mod scan;

pub use error::Error;
pub use pssm::KLambda;
pub use pssm::Pssm;
pub use pssm::RelativeWeight;
pub use pssm::AMINO_ACIDS;
pub use scan::Hit;
pub use scan::Scanner;
