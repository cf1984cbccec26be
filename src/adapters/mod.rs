// Adapters layer: getting records and requests in from files.

pub mod loader;
