//! Messaging glue between the page-context scraper and the privileged
//! download dispatcher.
//!
//! Mirrors the host platform's two-component split: a page-context piece
//! that can see the document but cannot download, and a privileged piece
//! that can download but cannot see the document. They exchange the JSON
//! messages defined in [`messages`]; [`handler`] implements both ends.

pub mod error;
pub mod handler;
pub mod messages;

pub use crate::handler::{handle_message, handle_request, on_trigger};
pub use crate::messages::{Request, Response, Trigger};
