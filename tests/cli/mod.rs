pub mod commit;
pub mod logging;
pub mod misc;
pub mod settings;
pub mod support;
