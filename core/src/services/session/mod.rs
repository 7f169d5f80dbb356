//! Session lifecycle service: login, refresh and logout flows.

mod service;


pub use service::SessionService;
