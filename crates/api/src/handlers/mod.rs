pub mod fallback;
pub mod products;
