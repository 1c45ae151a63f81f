use pnet::util::MacAddr;
use tablegen_common::config::MalformedPolicy;
use tablegen_common::vendors::VendorRepository;
use tablegen_core::oui::{self, OuiIndex};
use tempfile::tempdir;

use crate::util;

const OUI_DAT: &str = "\
# prefix vendor
FCFFAA IEEE REGISTRATION AUTHORITY
00000C Cisco Systems, Inc
00:00:0D Fibronics Ltd.
";

#[test]
fn oui_generates_lowercase_keys() {
    let dir = tempdir().unwrap();
    let input = util::write(dir.path(), "oui.dat", OUI_DAT);
    let output = dir.path().join("oui.go");

    let summary = oui::generate(&input, &output, None, &util::default_cfg()).unwrap();
    assert_eq!(summary.tables, vec![("oui", 3)]);

    let source = util::read(&output);
    assert!(source.contains(
        "var oui = map[string]string{\n\t\"00000c\": \"Cisco Systems, Inc\",\n\t\"00000d\": \"Fibronics Ltd.\",\n\t\"fcffaa\": \"IEEE REGISTRATION AUTHORITY\",\n}\n"
    ));
    assert!(source.contains("func OuiLookup(mac string) string {"));
}

#[test]
fn oui_empty_input_renders_empty_map() {
    let dir = tempdir().unwrap();
    let input = util::write(dir.path(), "oui.dat", "");
    let output = dir.path().join("oui.go");

    let summary = oui::generate(&input, &output, None, &util::default_cfg()).unwrap();
    assert_eq!(summary.total_entries(), 0);
    assert!(util::read(&output).contains("var oui = map[string]string{\n}\n"));
}

#[test]
fn oui_missing_input_is_an_error() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("oui.go");

    let err = oui::generate(&dir.path().join("nope.dat"), &output, None, &util::default_cfg())
        .unwrap_err();
    assert!(err.to_string().contains("nope.dat"));
    assert!(!output.exists());
}

#[test]
fn oui_index_lookup() {
    let dir = tempdir().unwrap();
    let input = util::write(dir.path(), "oui.dat", OUI_DAT);
    let index = OuiIndex::load(&input, MalformedPolicy::Abort).unwrap();

    assert_eq!(
        index.get_vendor(MacAddr(0xfc, 0xff, 0xaa, 0x01, 0x02, 0x03)),
        Some("IEEE REGISTRATION AUTHORITY".to_string())
    );
    assert_eq!(index.get_vendor(MacAddr(0x02, 0, 0, 0, 0, 0)), None);
}
