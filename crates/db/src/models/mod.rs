pub mod favorite;
pub mod fund;
pub mod stock;
pub mod timeline;
pub mod user;
