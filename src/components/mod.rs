//! UI Components
//!
//! Reusable Leptos components for the clinic records UI.

pub mod client_detail;
pub mod client_list;
pub mod loading;
pub mod nav;
pub mod new_client_modal;
pub mod toast;

pub use client_detail::{ClientDetail, ClientSummary};
pub use client_list::ClientList;
pub use loading::{ListSkeleton, Loading};
pub use nav::Nav;
pub use new_client_modal::NewClientModal;
pub use toast::Toast;
