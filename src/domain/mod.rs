//! Domain layer: validation, amount rendering, installment math and the
//! OTP challenge, plus the ports the application layer depends on.

pub mod application;
pub mod emi;
pub mod handoff;
pub mod otp;
pub mod ports;
pub mod validators;
pub mod words;
