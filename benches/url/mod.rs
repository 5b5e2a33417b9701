pub mod compose;
pub mod percent;
