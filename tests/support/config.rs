use std::fs;
use std::path::PathBuf;

use tempfile::TempDir;

pub const USDT: &str = "0x55d398326f99059fF775485246999027B3197955";
pub const GLF: &str = "0x1111111111111111111111111111111111111111";
pub const PRESALE: &str = "0x2222222222222222222222222222222222222222";

/// Minimal valid configuration with `extra` TOML appended.
pub fn config_toml(extra: &str) -> String {
    format!(
        "[network]\n\
         rpc_url = \"http://127.0.0.1:8545\"\n\
         chain_id = 31337\n\
         \n\
         [contracts]\n\
         payment_token = \"{USDT}\"\n\
         sale_token = \"{GLF}\"\n\
         presale = \"{PRESALE}\"\n\
         \n\
         {extra}"
    )
}

/// Write `contents` to `config.toml` inside a fresh temp dir.
pub fn write_config(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().expect("create temp dir");
    let path = dir.path().join("config.toml");
    fs::write(&path, contents).expect("write temp config");
    (dir, path)
}
