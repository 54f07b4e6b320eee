pub mod auth_gateway;
pub mod cart_gateway;
pub mod client;
mod dto;
pub mod history_gateway;
pub mod product_catalog;
pub mod store_gateway;

#[cfg(test)]
mod test_server;
