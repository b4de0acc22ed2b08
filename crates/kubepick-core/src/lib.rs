pub mod details;
pub mod error;
pub mod kubeconfig;
pub mod path;
pub mod pipeline;
pub mod selector;
pub mod store;
pub mod switcher;

#[cfg(test)]
mod test_support;

pub use details::{describe_contexts, ContextDetails};
pub use error::SwitchError;
pub use kubeconfig::{KubeConfig, NamedCluster, NamedContext, NamedUser};
pub use path::{HomeEnv, Platform};
pub use pipeline::{Stage, StageError, SwitchOptions, Switched};
pub use selector::{compute_highlight, matches, ContextChoice, ContextPicker, ACTIVE_MARKER};
pub use switcher::switch_context;
