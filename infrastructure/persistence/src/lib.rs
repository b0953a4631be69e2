pub mod db;
pub mod seed;
pub mod product {
    pub mod entity;
    pub mod memory;
    pub mod repository;
}
