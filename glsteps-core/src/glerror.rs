//! Translation of `glGetError` codes.

use std::fmt;

pub const NO_ERROR: u32 = 0;
pub const INVALID_ENUM: u32 = 0x0500;
pub const INVALID_VALUE: u32 = 0x0501;
pub const INVALID_OPERATION: u32 = 0x0502;
pub const STACK_OVERFLOW: u32 = 0x0503;
pub const STACK_UNDERFLOW: u32 = 0x0504;
pub const OUT_OF_MEMORY: u32 = 0x0505;
pub const INVALID_FRAMEBUFFER_OPERATION: u32 = 0x0506;

/// Upper bound on errors drained in one go. A lost context can report
/// errors forever.
pub const MAX_DRAINED_ERRORS: usize = 64;

/// An error reported by the driver.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlError {
    InvalidEnum,
    InvalidValue,
    InvalidOperation,
    StackOverflow,
    StackUnderflow,
    OutOfMemory,
    InvalidFramebufferOperation,
    Unknown(u32),
}

impl GlError {
    /// Maps a raw error code. Returns `None` for `GL_NO_ERROR`.
    pub fn from_code(code: u32) -> Option<Self> {
        Some(match code {
            NO_ERROR => return None,
            INVALID_ENUM => Self::InvalidEnum,
            INVALID_VALUE => Self::InvalidValue,
            INVALID_OPERATION => Self::InvalidOperation,
            STACK_OVERFLOW => Self::StackOverflow,
            STACK_UNDERFLOW => Self::StackUnderflow,
            OUT_OF_MEMORY => Self::OutOfMemory,
            INVALID_FRAMEBUFFER_OPERATION => Self::InvalidFramebufferOperation,
            other => Self::Unknown(other),
        })
    }
}

impl fmt::Display for GlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidEnum => write!(f, "Invalid enum"),
            Self::InvalidValue => write!(f, "Invalid value"),
            Self::InvalidOperation => write!(f, "Invalid operation"),
            Self::StackOverflow => write!(f, "Stack overflow"),
            Self::StackUnderflow => write!(f, "Stack underflow"),
            Self::OutOfMemory => write!(f, "Out of memory"),
            Self::InvalidFramebufferOperation => write!(f, "Invalid framebuffer operation"),
            Self::Unknown(code) => write!(f, "Unknown error (0x{:04X})", code),
        }
    }
}

/// Pulls codes from `next_code` until it reports no error, translating each.
pub fn drain_errors(mut next_code: impl FnMut() -> u32) -> Vec<GlError> {
    let mut errors = Vec::new();
    while errors.len() < MAX_DRAINED_ERRORS {
        match GlError::from_code(next_code()) {
            Some(error) => errors.push(error),
            None => break,
        }
    }
    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_translate_to_text() {
        assert_eq!(GlError::from_code(NO_ERROR), None);
        assert_eq!(
            GlError::from_code(INVALID_ENUM).unwrap().to_string(),
            "Invalid enum"
        );
        assert_eq!(
            GlError::from_code(OUT_OF_MEMORY).unwrap().to_string(),
            "Out of memory"
        );
        assert_eq!(GlError::from_code(0x1234), Some(GlError::Unknown(0x1234)));
        assert!(GlError::Unknown(0x1234).to_string().starts_with("Unknown error"));
    }

    #[test]
    fn drain_stops_at_no_error() {
        let mut queue = vec![INVALID_VALUE, INVALID_OPERATION, NO_ERROR, INVALID_ENUM].into_iter();
        let errors = drain_errors(|| queue.next().unwrap_or(NO_ERROR));
        assert_eq!(
            errors,
            vec![GlError::InvalidValue, GlError::InvalidOperation]
        );
        // What is left behind the first GL_NO_ERROR stays queued.
        assert_eq!(queue.next(), Some(INVALID_ENUM));
    }

    #[test]
    fn drain_is_bounded() {
        let errors = drain_errors(|| INVALID_OPERATION);
        assert_eq!(errors.len(), MAX_DRAINED_ERRORS);
    }
}
