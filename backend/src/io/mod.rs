//! IO layer: HTTP interface exposing the domain services.

pub mod rest;
