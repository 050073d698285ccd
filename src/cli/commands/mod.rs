pub mod backup;
pub mod export;
pub mod init;
pub mod serve;
