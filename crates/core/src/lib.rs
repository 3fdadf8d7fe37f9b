//! Core business logic for the currency catalog.
//!
//! This crate contains pure business logic with ZERO web dependencies.
//! Domain types, validation rules, storage and the transport boundary live
//! here.
//!
//! # Modules
//!
//! - `currency` - Currencies and the countries that use them

pub mod currency;
