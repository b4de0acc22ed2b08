use serde::{Deserialize, Deserializer, Serialize};
use serde_yaml::Mapping;

/// In-memory kubeconfig. Only `current_context` is ever mutated; everything
/// else, including keys this struct does not name, is carried through as-is.
#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct KubeConfig {
    #[serde(rename = "apiVersion", default, deserialize_with = "null_as_default")]
    pub api_version: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub clusters: Vec<NamedCluster>,
    #[serde(default, deserialize_with = "null_as_default")]
    pub contexts: Vec<NamedContext>,
    #[serde(rename = "current-context", default, deserialize_with = "null_as_default")]
    pub current_context: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub kind: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub preferences: Mapping,
    #[serde(default, deserialize_with = "null_as_default")]
    pub users: Vec<NamedUser>,
    #[serde(flatten)]
    pub extra: Mapping,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct NamedCluster {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cluster: Option<Mapping>,
    #[serde(flatten)]
    pub extra: Mapping,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct NamedContext {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub context: Option<Mapping>,
    #[serde(flatten)]
    pub extra: Mapping,
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize, Serialize)]
pub struct NamedUser {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<Mapping>,
    #[serde(flatten)]
    pub extra: Mapping,
}

/// kubectl writes `clusters: null` and friends for empty sections.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl KubeConfig {
    pub fn from_slice(bytes: &[u8]) -> Result<Self, serde_yaml::Error> {
        serde_yaml::from_slice(bytes)
    }

    pub fn to_yaml(&self) -> Result<String, serde_yaml::Error> {
        serde_yaml::to_string(self)
    }

    pub fn find_context(&self, name: &str) -> Option<&NamedContext> {
        self.contexts.iter().find(|c| c.name == name)
    }

    pub fn find_cluster(&self, name: &str) -> Option<&NamedCluster> {
        self.clusters.iter().find(|c| c.name == name)
    }
}

impl NamedContext {
    pub fn new(name: impl Into<String>, cluster: &str, user: &str) -> Self {
        let mut context = Mapping::new();
        context.insert("cluster".into(), cluster.into());
        context.insert("user".into(), user.into());
        Self { name: name.into(), context: Some(context), extra: Mapping::new() }
    }

    /// String value of a key inside the `context` block, if present.
    pub fn field(&self, key: &str) -> Option<&str> {
        self.context.as_ref()?.get(key)?.as_str()
    }
}

impl NamedCluster {
    pub fn server(&self) -> Option<&str> {
        self.cluster.as_ref()?.get("server")?.as_str()
    }
}

#[cfg(test)]
mod tests;
