//! shelfdb - a file-backed product store
//!
//! A single JSON file holds an ordered array of product records. The
//! [`store`] module provides create, read, update and delete over that file;
//! [`http_server`] exposes the read operations over HTTP and [`cli`] exposes
//! all of them on the command line.

pub mod cli;
pub mod http_server;
pub mod observability;
pub mod store;
