//! Implementation blocks for account types.

pub mod account;
pub mod account_service;
