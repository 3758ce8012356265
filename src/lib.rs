pub mod audio;
pub mod config;
pub mod error;
pub mod event;
pub mod http;
pub mod library;
pub mod playlist;
pub mod session;
pub mod storage;
pub mod ui;
pub mod util;
