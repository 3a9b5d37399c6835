//! End-to-end tests through the confview binary.

use std::fs;
use std::path::Path;
use std::process::{Command, Output};
use tempfile::TempDir;

fn confview(workspace: &Path, args: &[&str]) -> Output {
    let bin = env!("CARGO_BIN_EXE_confview");
    Command::new(bin)
        .env("HOME", workspace.join("home"))
        .env_remove("CONFVIEW_LOG")
        .arg("--workspace")
        .arg(workspace)
        .arg("--store")
        .arg(workspace.join("store"))
        .args(args)
        .output()
        .unwrap()
}

fn stdout(output: &Output) -> String {
    assert!(
        output.status.success(),
        "confview should succeed: stderr={:?}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8(output.stdout.clone()).unwrap()
}

fn seeded_workspace() -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let doc = temp_dir.path().join("running.json");
    fs::write(
        &doc,
        r#"{
            "interfaces": {"interface": [
                {"name": "eth0", "mtu": 1500},
                {"name": "eth1", "mtu": 9000}
            ]},
            "system": {"hostname": "r1"}
        }"#,
    )
    .unwrap();
    let output = confview(temp_dir.path(), &["import", "running", doc.to_str().unwrap()]);
    assert!(stdout(&output).starts_with("Imported"));
    temp_dir
}

#[test]
fn test_show_netconf_envelope() {
    let ws = seeded_workspace();
    let output = confview(ws.path(), &["show", "netconf", "running", "/system"]);
    assert_eq!(
        stdout(&output),
        "<rpc><edit-config><target><candidate/></target><config>\n\
         \x20     <system>\n\
         \x20        <hostname>r1</hostname>\n\
         \x20     </system>\n\
         </config></edit-config></rpc>]]>]]>\n"
    );
}

#[test]
fn test_show_cli_with_variable() {
    let ws = seeded_workspace();
    let output = confview(
        ws.path(),
        &[
            "--var",
            "ifname=eth1",
            "show",
            "cli",
            "running",
            "/interfaces/interface[name=%s]",
            "ifname",
            "--prefix",
            "set ",
        ],
    );
    assert_eq!(stdout(&output), "set interfaces interface eth1 mtu 9000\n");
}

#[test]
fn test_complete_lists_candidates() {
    let ws = seeded_workspace();
    let output = confview(ws.path(), &["complete", "running", "/interfaces/interface/name"]);
    assert_eq!(stdout(&output), "eth0\neth1\n");

    let output = confview(
        ws.path(),
        &["complete", "running", "/interfaces/interface/name", "--format", "json"],
    );
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["candidates"], serde_json::json!(["eth0", "eth1"]));
}

#[test]
fn test_invalid_instance_fails() {
    let ws = seeded_workspace();
    let output = confview(ws.path(), &["show", "xml", "intended", "/"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
    assert!(String::from_utf8_lossy(&output.stderr).contains("No such db name: intended"));
}

#[test]
fn test_csv_without_fields_fails() {
    let ws = seeded_workspace();
    let output = confview(ws.path(), &["show", "csv", "running", "/system"]);
    assert!(!output.status.success());
    assert!(output.stdout.is_empty());
}

#[test]
fn test_export_round_trips_import() {
    let ws = seeded_workspace();
    let output = confview(ws.path(), &["export", "running"]);
    let value: serde_json::Value = serde_json::from_str(&stdout(&output)).unwrap();
    assert_eq!(value["system"]["hostname"], "r1");
    assert_eq!(value["interfaces"]["interface"][1]["mtu"], "9000");
}
