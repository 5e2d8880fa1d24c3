pub mod config;
pub mod logging;

pub mod error;
pub mod exchange;
pub mod extract;
pub mod fetch;
pub mod har;
pub mod pipeline;
pub mod urlset;
