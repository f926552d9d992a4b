#[cfg(feature = "server")]
pub mod config;

pub mod api;

#[cfg(feature = "server")]
pub mod contact;

#[cfg(feature = "server")]
pub mod rest;

#[cfg(feature = "server")]
pub mod openapi;

#[cfg(feature = "server")]
pub mod error_convert;

#[cfg(feature = "server")]
pub mod telemetry;

#[cfg(feature = "server")]
pub mod health;

#[cfg(feature = "server")]
pub mod mailgun;

#[cfg(feature = "server")]
pub mod rate_limit;
