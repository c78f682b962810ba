// src/core/mod.rs

pub mod coerce;
pub mod facts;
pub mod net;

pub use coerce::safe_int;
pub use facts::shortest_fact;
pub use net::fetch_json;
