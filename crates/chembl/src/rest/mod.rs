//! Record lookup against the ChEMBL web services.
//!
//! Cross-reference accessors on the entity types take any [`Resolver`].
//! [`ChemblClient`] is the standard resolver: it fetches payloads through a
//! [`Transport`] and parses them with the format dispatcher.
//!
//! # Example
//!
//! ```no_run
//! use chembl::rest::{ChemblClient, Resolver};
//! use chembl::ChemblId;
//!
//! let client = ChemblClient::new().unwrap();
//! let target = client.find_target(&ChemblId::target("CHEMBL240").unwrap()).unwrap();
//!
//! for activity in target.bioactivities(&client).unwrap() {
//!     println!("{} {} {}", activity.bioactivity_type(), activity.value(), activity.units());
//! }
//! ```

mod client;
mod mock;
mod resolver;
mod transport;

pub use client::{ChemblClient, ClientConfig, DEFAULT_BASE_URL};
pub use mock::MockTransport;
pub use resolver::Resolver;
pub use transport::{HttpTransport, Transport};
