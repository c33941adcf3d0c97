pub mod appcast;
pub mod asset;
pub mod commands;
pub mod error;
pub mod http;
pub mod runtime;
pub mod source;
