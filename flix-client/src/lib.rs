//! Platform independent core of the Platzi Flix catalog client.
//!
//! Everything here is shared by `flix-site`, running in the browser, and `flix-server`, rendering
//! page metadata: the data access through [`CatalogClient`], the view state of a fetched resource
//! ([`state`]), the page controllers ([`controller`]) and the presentation rules ([`format`],
//! [`youtube`]). The HTTP implementation is left to the caller through [`Transport`].

mod client;
pub mod controller;
mod error;
pub mod format;
pub mod state;
mod transport;
pub mod youtube;

#[cfg(test)]
mod testing;

pub use client::{CatalogClient, DEFAULT_ORIGIN, Resource};
pub use error::FetchError;
pub use state::{FetchAction, FetchState, FetchStore, Ticket, TicketCounter};
pub use transport::{RawResponse, Transport};
