pub mod init_config;
pub mod list;
pub mod probe;
pub mod run;
