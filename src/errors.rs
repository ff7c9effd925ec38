use std::{io, str::Utf8Error};
use thiserror::Error;

/// Failure of a single query attempt. None of these are retried internally.
#[derive(Debug, Error)]
pub enum ProtocolError {
    #[error("reply does not start with the FF FF FF FF prefix (found {found:02x?})")]
    BadMagic { found: Vec<u8> },
    #[error("unexpected reply header 0x{header:02x}, expected 0x{expected:02x} or a challenge")]
    UnexpectedHeader { header: u8, expected: u8 },
    #[error("server kept issuing challenges after {limit} retries")]
    ChallengeLoopExceeded { limit: usize },
    #[error("buffer underrun at offset {offset}: needed {needed} bytes, {available} available")]
    BufferUnderrun {
        offset: usize,
        needed: usize,
        available: usize,
    },
    #[error("string starting at offset {offset} is not null-terminated")]
    UnterminatedString { offset: usize },
    #[error("string starting at offset {offset} is not valid UTF-8")]
    InvalidUtf8 {
        offset: usize,
        #[source]
        source: Utf8Error,
    },
    #[error("player list truncated at offset {offset}: {declared} declared, {decoded} decoded")]
    TruncatedPlayerList {
        declared: usize,
        decoded: usize,
        offset: usize,
    },
    #[error("player list has data past offset {offset}: {declared} declared, {decoded} found")]
    PlayerCountMismatch {
        declared: usize,
        decoded: usize,
        offset: usize,
    },
    #[error("invalid player count {count}")]
    InvalidPlayerCount { count: i16 },
    #[error("transport error")]
    Transport(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, ProtocolError>;
