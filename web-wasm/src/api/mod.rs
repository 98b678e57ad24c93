//! サーバー通信

pub mod upload;
