//! Shared vocabulary of the casual HTTP gateway.
//!
//! Everything in this crate is transport agnostic: typed buffers and their
//! HTTP content types, the XATMI return/error states, call flags and the
//! request/reply messages exchanged with in-process services.

pub mod buffer;
pub mod content_type;
pub mod message;
pub mod utils;
pub mod xatmi;

pub use buffer::{BufferError, BufferType, CasualBuffer, ServiceBuffer, UnsupportedTypeError};
pub use content_type::{CasualContentType, to_buffer_type, to_content_type};
pub use message::{ServiceCallReplyMessage, ServiceCallRequestMessage};
pub use xatmi::{AtmiFlags, ErrorState, ServiceReturnState, Xid};
