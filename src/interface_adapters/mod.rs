// Interface adapters: the HTTP client, token storage, and the page model the
// controller renders into.

pub mod clients;
pub mod controller;
pub mod document;
pub mod render;
pub mod session_store;
