extern crate rand;

pub mod encode;
pub mod quantile;
