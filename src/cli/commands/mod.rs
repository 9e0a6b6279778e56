pub mod add;
pub mod config;
pub mod del;
pub mod history;
pub mod init;
pub mod list;
pub mod show;
pub mod watch;
