//! Core logic for the masterclass registration flow.
//!
//! Everything the landing page does beyond markup lives here: the form
//! state and its submit lifecycle, pincode-to-city resolution against the
//! public postal API, the local area-name suggestion filter, and the
//! insert into the hosted registration table.

pub mod autocomplete;
pub mod error;
pub mod form;
pub mod lookup;
pub mod store;
