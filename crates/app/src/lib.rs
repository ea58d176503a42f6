//! Marketplace listings: realtime view synchronization for the product pages.

pub mod channels;
pub mod domain;
pub mod memory;
pub mod paths;
pub mod sync;
pub mod views;

mod keys;
