#![doc = include_str!("../README.md")]

mod config;
mod error;
mod field;
mod generator;
mod processor;

pub use crate::config::*;
pub use crate::error::*;
pub use crate::field::*;
pub use crate::generator::*;
pub use crate::processor::*;
