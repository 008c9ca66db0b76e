//! Client-side data access for the inventory dashboard.
//!
//! Every widget goes through [`InventoryApi`]. It either answers from an
//! in-memory [`inventory_core::MockStore`] or calls the backend through a
//! [`CandidateChain`] of base addresses tried in order.

pub mod candidates;
pub mod config;
pub mod dto;
pub mod error;
pub mod facade;
pub mod session;
pub mod token;
pub mod transport;
pub mod widgets;

pub use candidates::CandidateChain;
pub use config::ClientConfig;
pub use error::{ApiError, AttemptError, FailureKind};
pub use facade::{DataSource, InventoryApi};
pub use session::{Location, Session, SessionStore};
pub use token::{IdToken, NoAuth, TokenSource};
pub use transport::{ApiRequest, HttpTransport, RawResponse, Transport};
pub use widgets::{DashboardSnapshot, WidgetState};
