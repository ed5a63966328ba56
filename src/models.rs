pub mod error;
pub mod mod_dto;
pub mod paths;
pub mod report;
pub mod variant;
