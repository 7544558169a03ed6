pub mod archetype;
pub mod item;
pub mod profile;
pub mod report;
pub mod response;
pub mod scores;
pub mod session;
pub mod trial;
pub mod validation;
