//! Branchless integer arithmetic and cheap approximations of elementary float functions.
//!
//! Every function is a pure function of its arguments. Exact operations are bit-identical to the
//! direct arithmetic they replace; approximations trade accuracy for fewer instructions and are
//! only meaningful inside the domain documented on each function. Nothing here validates its
//! input: out-of-domain arguments silently produce meaningless results.
//!
//! None of this is guaranteed to beat `std` on a given target. Benchmark first.

pub mod bits;
pub mod int;
pub mod power;
pub mod trig;
