pub mod filter;
pub mod init_fleet;
pub mod plot;
