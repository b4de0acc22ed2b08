use super::*;

const SAMPLE: &str = r#"
apiVersion: v1
kind: Config
preferences:
  colors: true
clusters:
- name: dev-cluster
  cluster:
    server: https://dev.example.com:6443
    certificate-authority-data: Zm9v
- name: prod-cluster
  cluster:
    server: https://prod.example.com:6443
contexts:
- name: dev
  context:
    cluster: dev-cluster
    user: dev-admin
- name: prod
  context:
    cluster: prod-cluster
    user: prod-admin
    namespace: payments
current-context: dev
users:
- name: dev-admin
  user:
    token: abc
- name: prod-admin
  user:
    exec:
      command: aws
      args: ["eks", "get-token"]
extensions:
- name: vendor
  extension:
    enabled: true
"#;

#[test]
fn parses_all_sections() {
    let config = KubeConfig::from_slice(SAMPLE.as_bytes()).unwrap();
    assert_eq!(config.api_version, "v1");
    assert_eq!(config.kind, "Config");
    assert_eq!(config.current_context, "dev");
    assert_eq!(config.clusters.len(), 2);
    assert_eq!(config.users.len(), 2);
    let names: Vec<&str> = config.contexts.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, ["dev", "prod"]);
    assert!(config.preferences.contains_key("colors"));
}

#[test]
fn unknown_top_level_keys_are_kept() {
    let config = KubeConfig::from_slice(SAMPLE.as_bytes()).unwrap();
    assert!(config.extra.contains_key("extensions"));
}

#[test]
fn encode_then_decode_is_lossless() {
    let config = KubeConfig::from_slice(SAMPLE.as_bytes()).unwrap();
    let encoded = config.to_yaml().unwrap();
    let decoded = KubeConfig::from_slice(encoded.as_bytes()).unwrap();
    assert_eq!(decoded, config);
}

#[test]
fn encoded_output_uses_kubeconfig_field_names() {
    let config = KubeConfig::from_slice(SAMPLE.as_bytes()).unwrap();
    let encoded = config.to_yaml().unwrap();
    assert!(encoded.contains("apiVersion: v1"));
    assert!(encoded.contains("current-context: dev"));
    assert!(encoded.contains("certificate-authority-data: Zm9v"));
    assert!(!encoded.contains("current_context"));
}

#[test]
fn null_sections_decode_as_empty() {
    let raw = "apiVersion: v1\nkind: Config\nclusters: null\ncontexts: null\nusers: null\ncurrent-context: \"\"\npreferences: {}\n";
    let config = KubeConfig::from_slice(raw.as_bytes()).unwrap();
    assert!(config.clusters.is_empty());
    assert!(config.contexts.is_empty());
    assert!(config.users.is_empty());
    assert_eq!(config.current_context, "");
}

#[test]
fn missing_current_context_defaults_to_empty() {
    let raw = "apiVersion: v1\ncontexts:\n- name: a\n  context:\n    cluster: c\n    user: u\n";
    let config = KubeConfig::from_slice(raw.as_bytes()).unwrap();
    assert_eq!(config.current_context, "");
}

#[test]
fn malformed_yaml_is_rejected() {
    assert!(KubeConfig::from_slice(b"contexts: [unclosed").is_err());
}

#[test]
fn context_fields_and_cluster_server() {
    let config = KubeConfig::from_slice(SAMPLE.as_bytes()).unwrap();
    let prod = config.find_context("prod").unwrap();
    assert_eq!(prod.field("cluster"), Some("prod-cluster"));
    assert_eq!(prod.field("namespace"), Some("payments"));
    assert_eq!(config.find_context("dev").unwrap().field("namespace"), None);
    assert_eq!(config.find_cluster("prod-cluster").unwrap().server(), Some("https://prod.example.com:6443"));
    assert!(config.find_cluster("nope").is_none());
}

#[test]
fn new_context_carries_cluster_and_user() {
    let ctx = NamedContext::new("staging", "staging-cluster", "staging-admin");
    assert_eq!(ctx.field("cluster"), Some("staging-cluster"));
    assert_eq!(ctx.field("user"), Some("staging-admin"));
}

// Null entry blocks are dropped and missing scalar sections come back as
// empty values; the decoded record is what stays stable.
#[test]
fn encode_normalizes_null_blocks_and_missing_sections() {
    let raw = "clusters:\n- name: a\n  cluster: null\ncontexts:\n- name: a\n  context: null\n";
    let config = KubeConfig::from_slice(raw.as_bytes()).unwrap();
    assert_eq!(config.clusters[0].cluster, None);

    let encoded = config.to_yaml().unwrap();
    let value: serde_yaml::Value = serde_yaml::from_str(&encoded).unwrap();
    let bare: serde_yaml::Value = serde_yaml::from_str("name: a").unwrap();
    assert_eq!(value["clusters"][0], bare);
    assert_eq!(value["contexts"][0], bare);
    assert_eq!(value["kind"], serde_yaml::Value::String(String::new()));
    assert_eq!(value["current-context"], serde_yaml::Value::String(String::new()));
    assert_eq!(value["preferences"], serde_yaml::Value::Mapping(Mapping::new()));

    assert_eq!(KubeConfig::from_slice(encoded.as_bytes()).unwrap(), config);
}
