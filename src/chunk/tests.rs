//! Unit tests for the chunk codec.

mod chunker_tests;
mod roundtrip_tests;
