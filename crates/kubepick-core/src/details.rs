use crate::kubeconfig::KubeConfig;

/// Summary of one context for the picker's details pane.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContextDetails {
    pub name: String,
    pub cluster: Option<String>,
    pub user: Option<String>,
    pub namespace: Option<String>,
    pub server: Option<String>,
}

impl ContextDetails {
    pub fn rows(&self) -> Vec<(&'static str, &str)> {
        vec![
            ("Name", self.name.as_str()),
            ("Cluster", self.cluster.as_deref().unwrap_or("-")),
            ("User", self.user.as_deref().unwrap_or("-")),
            ("Namespace", self.namespace.as_deref().unwrap_or("default")),
            ("Server", self.server.as_deref().unwrap_or("-")),
        ]
    }
}

pub fn describe_contexts(config: &KubeConfig) -> Vec<ContextDetails> {
    config
        .contexts
        .iter()
        .map(|ctx| {
            let cluster = ctx.field("cluster").map(str::to_string);
            let server =
                cluster.as_deref().and_then(|c| config.find_cluster(c)).and_then(|c| c.server()).map(str::to_string);
            ContextDetails {
                name: ctx.name.clone(),
                cluster,
                user: ctx.field("user").map(str::to_string),
                namespace: ctx.field("namespace").map(str::to_string),
                server,
            }
        })
        .collect()
}
