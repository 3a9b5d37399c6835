use super::test_utils::fixture;
use confview::config::CliConfig;
use confview::context::ShowContext;
use confview::error::ShowError;
use confview::fetch::ShowArgs;
use confview::render::{RenderOptions, NETCONF_FOOTER, NETCONF_HEADER};
use confview::show::show_config;
use confview::store::MemoryStore;
use confview::tree::{ConfigSubtree, Node};
use confview::types::{ConfigInstance, Format, VarValue, VariableSet};
use std::sync::Arc;

fn show(
    ctx: &ShowContext,
    format: Format,
    args: &ShowArgs,
    vars: &VariableSet,
    options: &RenderOptions<'_>,
) -> Result<String, ShowError> {
    let mut out = Vec::new();
    show_config(ctx, format, args, vars, options, &mut out)?;
    Ok(String::from_utf8(out).unwrap())
}

#[test]
fn test_netconf_wraps_selected_interface() {
    let (_, ctx) = fixture();
    let vars = VariableSet::new().with("ifname", VarValue::Str("eth0".into()));
    let args = ShowArgs::new("running", "/interfaces/interface[name=%s]", Some("ifname".into()));
    let output = show(&ctx, Format::Netconf, &args, &vars, &RenderOptions::default()).unwrap();

    let expected = format!(
        "{}      <interfaces>\n         <interface>\n            <name>eth0</name>\n            <mtu>1500</mtu>\n         </interface>\n      </interfaces>\n{}",
        NETCONF_HEADER, NETCONF_FOOTER
    );
    assert_eq!(output, expected);
}

#[test]
fn test_integer_variable_is_stringified() {
    let (_, ctx) = fixture();
    let vars = VariableSet::new().with("mtu", VarValue::Int(9000));
    let args = ShowArgs::new("running", "/interfaces/interface[mtu=%s]/name", Some("mtu".into()));
    let output = show(&ctx, Format::Text, &args, &vars, &RenderOptions::default()).unwrap();
    assert_eq!(output, "interfaces {\n   interface {\n      name eth1;\n   }\n}\n");
}

#[test]
fn test_zero_padded_variable_matches_key() {
    let root = Node::element("config").with_child(
        Node::element("vlans")
            .with_child(
                Node::element("vlan")
                    .with_child(Node::leaf("id", "007"))
                    .with_child(Node::leaf("name", "mgmt")),
            )
            .with_child(
                Node::element("vlan")
                    .with_child(Node::leaf("id", "7"))
                    .with_child(Node::leaf("name", "users")),
            ),
    );
    let store = Arc::new(
        MemoryStore::new().with_instance(ConfigInstance::Running, ConfigSubtree::new(root)),
    );
    let ctx = ShowContext::new(store);
    let vars = VariableSet::from_assignments(&["vid=007"]).unwrap();
    let args = ShowArgs::new("running", "/vlans/vlan[id=%s]", Some("vid".into()));
    let output = show(&ctx, Format::Text, &args, &vars, &RenderOptions::default()).unwrap();
    assert_eq!(
        output,
        "vlans {\n   vlan {\n      id 007;\n      name mgmt;\n   }\n}\n"
    );
}

#[test]
fn test_json_of_whole_instance() {
    let (_, ctx) = fixture();
    let args = ShowArgs::new("running", "/", None);
    let output = show(&ctx, Format::Json, &args, &VariableSet::new(), &RenderOptions::default())
        .unwrap();
    let value: serde_json::Value = serde_json::from_str(&output).unwrap();
    assert_eq!(
        value,
        serde_json::json!({
            "interfaces": {"interface": [
                {"name": "eth0", "mtu": "1500"},
                {"name": "eth1", "mtu": "9000"}
            ]},
            "system": {"hostname": "r1"}
        })
    );
}

#[test]
fn test_cli_styles() {
    let (_, ctx) = fixture();
    let args = ShowArgs::new("running", "/system", None);
    let vars = VariableSet::new();
    let options = RenderOptions {
        fields: None,
        prefix: Some("set "),
    };

    let output = show(&ctx, Format::Cli, &args, &vars, &options).unwrap();
    assert_eq!(output, "set system hostname r1\n");

    let none = ctx.clone().with_settings(CliConfig {
        genmodel_type: "none".to_string(),
        ..CliConfig::default()
    });
    let output = show(&none, Format::Cli, &args, &vars, &options).unwrap();
    assert_eq!(output, "set system r1\n");

    let all = ctx.with_settings(CliConfig {
        genmodel_type: "all".to_string(),
        ..CliConfig::default()
    });
    let args = ShowArgs::new("running", "/interfaces", None);
    let output = show(&all, Format::Cli, &args, &vars, &RenderOptions::default()).unwrap();
    assert_eq!(
        output,
        "interfaces interface name eth0 mtu 1500\ninterfaces interface name eth1 mtu 9000\n"
    );
}

#[test]
fn test_csv_over_selected_rows() {
    let (_, ctx) = fixture();
    let fields = vec!["mtu".to_string(), "speed".to_string()];
    let options = RenderOptions {
        fields: Some(&fields),
        prefix: None,
    };
    let args = ShowArgs::new("running", "/system", None);
    let output = show(&ctx, Format::Csv, &args, &VariableSet::new(), &options).unwrap();
    assert_eq!(output, "system;;\n");
}

#[test]
fn test_arity_error_reports_count() {
    let (store, ctx) = fixture();
    let vars = VariableSet::new().with("ifname", VarValue::Str("eth0".into()));
    let args = ShowArgs::new("running", "/interfaces/interface", Some("ifname".into()));
    match show(&ctx, Format::Xml, &args, &vars, &RenderOptions::default()) {
        Err(ShowError::TemplateArity { found, .. }) => assert_eq!(found, 0),
        other => panic!("expected arity error, got {:?}", other),
    }
    assert_eq!(store.fetch_count(), 0);
}

#[test]
fn test_store_failure_surfaces_as_store_error() {
    let (store, ctx) = fixture();
    store.fail_with("connection reset");
    let args = ShowArgs::new("running", "/", None);
    let result = show(&ctx, Format::Xml, &args, &VariableSet::new(), &RenderOptions::default());
    match result {
        Err(e @ ShowError::StoreError(_)) => assert!(e.to_string().contains("connection reset")),
        other => panic!("expected store error, got {:?}", other),
    }
}
