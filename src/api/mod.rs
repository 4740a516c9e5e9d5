//! Static Resource API
//!
//! Fetchers for the deployment-served JSON resources: locale catalogues,
//! imprint data and the version manifest.

mod client;

pub use client::{
    fetch_imprint, fetch_translations, fetch_version, Address, Company, Contact, Disclaimer,
    ImprintData, Registration, VersionInfo,
};
