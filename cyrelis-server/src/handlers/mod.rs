pub mod export;
pub mod page;
