pub mod negotiation;
pub mod portfolio;
pub mod reference;
pub mod remote;
pub mod resume;
pub mod token;
pub mod vacancy;
