pub mod matches;
pub mod standing;
