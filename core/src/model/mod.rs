// vitrina/src/model/mod.rs

//! Data structures owned or consumed by the storefront core.

pub mod cart_line;
pub mod price;
pub mod product;
pub mod stock;

pub use cart_line::{CartLine, LineId};
pub use price::format_price;
pub use product::Product;
pub use stock::StockStatus;
