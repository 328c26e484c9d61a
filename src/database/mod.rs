pub mod db;

pub use db::init_pool;
