use chrono::Utc;
use uuid::Uuid;

/// Session-unique id of the form `<prefix>-<unix millis>-<8 hex chars>`.
pub fn generate_id(prefix: &str) -> String {
    let millis = Utc::now().timestamp_millis();
    let suffix = Uuid::new_v4().simple().to_string();
    format!("{prefix}-{millis}-{}", &suffix[..8])
}

#[test]
fn ids_are_unique() {
    let ids: std::collections::HashSet<_> = (0..1000).map(|_| generate_id("wp")).collect();
    assert_eq!(ids.len(), 1000);
}

#[test]
fn ids_carry_prefix() {
    let id = generate_id("route");
    assert!(id.starts_with("route-"));
    assert_eq!(id.rsplit('-').next().map(str::len), Some(8));
}
