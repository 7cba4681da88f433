#![no_std]

pub use biglimb::*;
