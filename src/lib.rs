pub mod db;
pub mod fake;
pub mod models;
pub mod schema;
pub mod seed;
pub mod serializers;
