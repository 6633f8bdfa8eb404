//! Concrete [`TranscodeProvider`](super::TranscodeProvider) implementations.

pub mod zencoder;
