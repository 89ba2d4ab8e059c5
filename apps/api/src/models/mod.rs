pub mod profile;
pub mod roadmap;
