pub mod ballistics;
pub mod map;
pub mod plot;
pub mod report;
pub mod scenario;
pub mod window;
