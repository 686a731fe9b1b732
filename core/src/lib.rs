//! Thumbnail pipeline for catalog products.
//!
//! Fetches a product's source image over HTTP, decodes it, resizes it to a
//! fixed square, encodes it as JPEG, and publishes the result to blob
//! storage. Failures are contained: a broken image never blocks the product
//! creation that triggered the run.

pub mod config;
pub mod decoder;
pub mod encode;
pub mod error;
pub mod fetch;
pub mod format;
pub mod pipeline;
pub mod product;
pub mod publish;
pub mod resize;
pub mod storage;
