//! Binance futures TWAP algo order client library.
//!
//! Provides typed request/response models and async functions for placing,
//! listing, and cancelling TWAP (time-weighted average price) orders through
//! the signed `/sapi/v1/algo/futures` REST endpoints.

pub mod auth;
pub mod config;
pub mod credentials;
pub mod error;
pub mod models;
pub mod rest;

pub use error::{Result, TwapError};
