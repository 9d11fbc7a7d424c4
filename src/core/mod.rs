pub mod draft;
pub mod export;
pub mod form;
pub mod format;
pub mod history;
pub mod log;
pub mod session;
pub mod submit;
