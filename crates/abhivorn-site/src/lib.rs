//! Server-rendered marketing site for Abhivorn Technologies.

pub mod catalog;
pub mod config;
pub mod email;
pub mod error;
pub mod forms;
pub mod pages;
pub mod routing;
pub mod shell;
pub mod site;
pub mod telemetry;

pub use site::{RenderedPage, Site};
