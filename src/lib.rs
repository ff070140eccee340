pub mod convert;
pub mod engine;
pub mod error;
pub mod interop;
pub mod step;
pub mod tour;
pub mod writer;
