use crate::domain::otp::{CODE_MAX, CODE_MIN, OtpCode};
use crate::domain::ports::CodeSource;
use crate::error::Result;
use rand::Rng;

/// Uniform random codes in `1000..=9999`.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomCodeSource;

impl CodeSource for RandomCodeSource {
    fn next_code(&self) -> Result<OtpCode> {
        let value = rand::thread_rng().gen_range(CODE_MIN..=CODE_MAX);
        OtpCode::from_number(value)
    }
}

/// Always returns the same code. For demos and tests.
#[derive(Debug, Clone)]
pub struct FixedCodeSource(OtpCode);

impl FixedCodeSource {
    pub fn new(code: OtpCode) -> Self {
        Self(code)
    }
}

impl CodeSource for FixedCodeSource {
    fn next_code(&self) -> Result<OtpCode> {
        Ok(self.0.clone())
    }
}
