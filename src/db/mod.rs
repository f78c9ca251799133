pub mod pool;
pub mod sales;

pub use sales::SalesLookup;
