pub mod doctor;
pub mod fetch;
pub mod format;
pub mod grain;
pub mod range;
pub mod size;
pub mod vars;
