pub mod export;
pub mod import;
pub mod init;
pub mod player_list;
pub mod player_show;
pub mod profile;
pub mod sessions;
