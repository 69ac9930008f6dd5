pub mod application_dto;
pub mod extract;
pub mod search_dto;
