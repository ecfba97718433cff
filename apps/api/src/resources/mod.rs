pub mod companies;
pub mod contacts;
