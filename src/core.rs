pub mod assembly;
pub mod catalog;
pub mod install_root;
pub mod merge;
pub mod mod_fs;
pub mod resolver;
