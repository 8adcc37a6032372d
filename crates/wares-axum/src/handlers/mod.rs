//! Request handlers, one submodule per API area.
//!
//! A handler decodes the request, calls into `AppCore`, and maps the
//! outcome onto a response; no catalog logic lives at this layer.

pub mod items;
pub mod stats;
