// Interface adapters: auth clients, wire protocol and HTTP handling.

pub mod clients;
pub mod handlers;
pub mod protocol;
pub mod routes;
pub mod state;
