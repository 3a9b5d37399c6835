use super::test_utils::fixture;
use confview::complete::{complete_argv, expand_candidates, expand_into, expand_into_spec, LegacyBuffer};
use confview::error::ShowError;
use confview::types::{VarValue, VariableSet};

#[test]
fn test_candidates_per_instance() {
    let (_, ctx) = fixture();
    let vars = VariableSet::new();
    let running = expand_candidates(&ctx, "running", "/interfaces/interface/name", &vars).unwrap();
    assert_eq!(running.values(), &["eth0", "eth1"]);

    let candidate =
        expand_candidates(&ctx, "candidate", "/interfaces/interface/name", &vars).unwrap();
    assert_eq!(candidate.values(), &["eth0", "eth1", "eth2"]);

    let startup = expand_candidates(&ctx, "startup", "/interfaces/interface/name", &vars).unwrap();
    assert!(startup.is_empty());
}

#[test]
fn test_values_deduplicated_across_entries() {
    let (_, ctx) = fixture();
    let list = expand_candidates(&ctx, "candidate", "/interfaces/interface/mtu", &VariableSet::new())
        .unwrap();
    assert_eq!(list.values(), &["1500", "9000"]);
}

#[test]
fn test_live_variable_narrows_candidates() {
    let (_, ctx) = fixture();
    let vars = VariableSet::new().with("ifname", VarValue::Str("eth1".into()));
    let list = expand_candidates(&ctx, "running", "/interfaces/interface[name=%s]/mtu", &vars)
        .unwrap();
    assert_eq!(list.values(), &["9000"]);
}

#[test]
fn test_every_entry_point_rejects_unknown_instance() {
    let (store, ctx) = fixture();
    let vars = VariableSet::new();
    let mut buffer = LegacyBuffer::new();

    for name in ["", "RUNNING", "running ", "intended"] {
        assert!(matches!(
            expand_candidates(&ctx, name, "/interfaces/interface/name", &vars),
            Err(ShowError::InvalidInstance(_))
        ));
        assert!(matches!(
            expand_into(&ctx, name, "/interfaces/interface/name", &vars, &mut buffer),
            Err(ShowError::InvalidInstance(_))
        ));
    }
    assert!(matches!(
        complete_argv(&ctx, &["intended", "/interfaces/interface/name"], &vars),
        Err(ShowError::InvalidInstance(_))
    ));
    assert_eq!(store.fetch_count(), 0);
    assert!(buffer.is_empty());
}

#[test]
fn test_legacy_and_modern_forms_agree() {
    let (_, ctx) = fixture();
    let vars = VariableSet::new();
    let modern = complete_argv(&ctx, &["candidate", "/interfaces/interface/mtu"], &vars).unwrap();

    let mut buffer = LegacyBuffer::new();
    expand_into_spec(&ctx, "running /interfaces/interface/name", &vars, &mut buffer).unwrap();
    expand_into_spec(&ctx, "candidate /interfaces/interface/mtu", &vars, &mut buffer).unwrap();

    assert_eq!(buffer.entries(), &["eth0", "eth1", "1500", "9000"]);
    assert_eq!(buffer.last_start(), 2);
    assert_eq!(buffer.last_run(), modern.values());
}
