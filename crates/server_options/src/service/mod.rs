pub mod access;
pub mod resolver;
pub mod workspace;

pub use access::{AccessDecision, FsAccess};
pub use resolver::{OptionsResolver, default_client_dir, resolve_server_options};
pub use workspace::{search_for_package_root, search_for_workspace_root};
