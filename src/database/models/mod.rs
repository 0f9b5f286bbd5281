pub mod raffle;

pub use raffle::*;
