//! Simulated one-time-password verification.
//!
//! The code is never delivered anywhere; it is exposed for demo and testing
//! only. This is not a secure OTP.

use crate::error::{LoanError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Default number of well-formed guesses allowed per challenge.
pub const MAX_ATTEMPTS: u8 = 3;

pub const CODE_MIN: u16 = 1000;
pub const CODE_MAX: u16 = 9999;

/// A four-digit verification code.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct OtpCode(String);

impl OtpCode {
    /// Accepts exactly four ASCII digits.
    pub fn parse(s: &str) -> Result<Self> {
        if s.len() == 4 && s.bytes().all(|b| b.is_ascii_digit()) {
            Ok(Self(s.to_string()))
        } else {
            Err(LoanError::MalformedCode)
        }
    }

    /// Builds a code from a generated value in `CODE_MIN..=CODE_MAX`.
    pub fn from_number(value: u16) -> Result<Self> {
        if (CODE_MIN..=CODE_MAX).contains(&value) {
            Ok(Self(value.to_string()))
        } else {
            Err(LoanError::MalformedCode)
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for OtpCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl TryFrom<String> for OtpCode {
    type Error = LoanError;

    fn try_from(value: String) -> Result<Self> {
        Self::parse(&value)
    }
}

impl From<OtpCode> for String {
    fn from(code: OtpCode) -> Self {
        code.0
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChallengeState {
    Active { attempts_used: u8 },
    Succeeded,
    Failed,
}

/// Result of a well-formed guess against an active challenge.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    Verified,
    Retry { remaining: u8 },
    Exhausted,
}

#[derive(Debug, Clone)]
pub struct OtpChallenge {
    code: OtpCode,
    max_attempts: u8,
    state: ChallengeState,
}

impl OtpChallenge {
    /// Starts in `Active { attempts_used: 0 }`. A budget of zero is raised to one.
    pub fn new(code: OtpCode, max_attempts: u8) -> Self {
        Self {
            code,
            max_attempts: max_attempts.max(1),
            state: ChallengeState::Active { attempts_used: 0 },
        }
    }

    pub fn state(&self) -> ChallengeState {
        self.state
    }

    /// The expected code. Exposed for the demo only.
    pub fn code(&self) -> &OtpCode {
        &self.code
    }

    pub fn max_attempts(&self) -> u8 {
        self.max_attempts
    }

    pub fn remaining_attempts(&self) -> u8 {
        match self.state {
            ChallengeState::Active { attempts_used } => self.max_attempts - attempts_used,
            ChallengeState::Succeeded | ChallengeState::Failed => 0,
        }
    }

    pub fn is_terminal(&self) -> bool {
        !matches!(self.state, ChallengeState::Active { .. })
    }

    /// Checks a guess. Malformed guesses are rejected without consuming an attempt.
    pub fn submit(&mut self, guess: &str) -> Result<SubmitOutcome> {
        let ChallengeState::Active { attempts_used } = self.state else {
            return Err(LoanError::ChallengeClosed);
        };
        let guess = OtpCode::parse(guess)?;

        if guess == self.code {
            self.state = ChallengeState::Succeeded;
            return Ok(SubmitOutcome::Verified);
        }

        let attempts_used = attempts_used + 1;
        if attempts_used >= self.max_attempts {
            self.state = ChallengeState::Failed;
            Ok(SubmitOutcome::Exhausted)
        } else {
            self.state = ChallengeState::Active { attempts_used };
            Ok(SubmitOutcome::Retry {
                remaining: self.max_attempts - attempts_used,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn challenge() -> OtpChallenge {
        OtpChallenge::new(OtpCode::parse("4821").unwrap(), MAX_ATTEMPTS)
    }

    #[test]
    fn test_code_parse() {
        assert!(OtpCode::parse("0042").is_ok());
        assert!(matches!(OtpCode::parse("123"), Err(LoanError::MalformedCode)));
        assert!(matches!(OtpCode::parse("12345"), Err(LoanError::MalformedCode)));
        assert!(matches!(OtpCode::parse("12a4"), Err(LoanError::MalformedCode)));
        assert!(matches!(OtpCode::parse(""), Err(LoanError::MalformedCode)));
    }

    #[test]
    fn test_code_from_number_range() {
        assert_eq!(OtpCode::from_number(1000).unwrap().as_str(), "1000");
        assert_eq!(OtpCode::from_number(9999).unwrap().as_str(), "9999");
        assert!(OtpCode::from_number(999).is_err());
        assert!(OtpCode::from_number(10000).is_err());
    }

    #[test]
    fn test_three_wrong_guesses_fail() {
        let mut c = challenge();
        assert_eq!(c.state(), ChallengeState::Active { attempts_used: 0 });
        assert_eq!(c.submit("1111").unwrap(), SubmitOutcome::Retry { remaining: 2 });
        assert_eq!(c.state(), ChallengeState::Active { attempts_used: 1 });
        assert_eq!(c.submit("2222").unwrap(), SubmitOutcome::Retry { remaining: 1 });
        assert_eq!(c.state(), ChallengeState::Active { attempts_used: 2 });
        assert_eq!(c.submit("3333").unwrap(), SubmitOutcome::Exhausted);
        assert_eq!(c.state(), ChallengeState::Failed);
        assert!(c.is_terminal());
    }

    #[test]
    fn test_correct_guess_succeeds_from_any_active_state() {
        for wrong in 0..MAX_ATTEMPTS {
            let mut c = challenge();
            for _ in 0..wrong {
                c.submit("0000").unwrap();
            }
            assert_eq!(c.submit("4821").unwrap(), SubmitOutcome::Verified);
            assert_eq!(c.state(), ChallengeState::Succeeded);
        }
    }

    #[test]
    fn test_malformed_guess_keeps_attempts() {
        let mut c = challenge();
        c.submit("0000").unwrap();
        assert!(matches!(c.submit("12"), Err(LoanError::MalformedCode)));
        assert!(matches!(c.submit("abcd"), Err(LoanError::MalformedCode)));
        assert_eq!(c.state(), ChallengeState::Active { attempts_used: 1 });
        assert_eq!(c.remaining_attempts(), 2);
    }

    #[test]
    fn test_terminal_challenge_rejects_guesses() {
        let mut c = challenge();
        c.submit("4821").unwrap();
        assert!(matches!(c.submit("4821"), Err(LoanError::ChallengeClosed)));
        assert_eq!(c.remaining_attempts(), 0);
    }

    #[test]
    fn test_code_serde_rejects_malformed() {
        let code: OtpCode = serde_json::from_str("\"1234\"").unwrap();
        assert_eq!(code.as_str(), "1234");
        assert!(serde_json::from_str::<OtpCode>("\"12\"").is_err());
    }
}
