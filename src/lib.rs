//! Debouncing for up to 8 switches sharing one GPIO port.
//!
//! The caller polls the raw port at a fixed rate and feeds each read to a
//! [`Debouncer`]; the debouncer reports the stable level of every line plus
//! press and release edges, with pull-up and pull-down lines mixed freely on
//! the same port. No pins, timers, or interrupts are touched here, so the
//! crate runs on any target. One instance handles one port; use one instance
//! per port for more than 8 switches.

#![no_std]

pub mod debounce;

pub use debounce::Debouncer;
