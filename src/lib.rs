#[cfg(test)]
#[macro_use]
extern crate assert_float_eq;

pub mod astro_math;
pub mod catalog;
pub mod config;
pub mod projection;
pub mod render;
pub mod util;
pub mod view;
