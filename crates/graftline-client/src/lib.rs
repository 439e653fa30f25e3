//! graftline-client
//!
//! The HTTP boundary of the Graftline portal: fetch a facility's IVR history,
//! fetch dashboard statistics, and submit leads and IVR requests. Each call is
//! a single synchronous request/response; the triggering view owns the
//! loading/success/error lifecycle via [`state::FetchState`]. No automatic
//! retry — failures surface to the user with a manual retry action.

pub mod client;
pub mod error;
pub mod state;

pub use client::PortalClient;
pub use error::ClientError;
pub use state::FetchState;
