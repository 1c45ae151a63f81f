use pnet::util::MacAddr;
use pretty_assertions::assert_eq;
use tablegen_common::config::MalformedPolicy;
use tablegen_common::vendors::VendorRepository;
use tablegen_core::manuf_csv::{self, RegistryIndex};
use tempfile::tempdir;

use crate::util;

const HEADER: &str = "Registry,Assignment,Organization Name,Organization Address\n";

fn registries(dir: &std::path::Path) -> Vec<std::path::PathBuf> {
    let ma_l = format!(
        "{HEADER}MA-L,70B3D5,IEEE Registration Authority,\"445 Hoes Lane Piscataway NJ US 08554 \"\nMA-L,00000C,\"Cisco Systems, Inc\",\"170 WEST TASMAN DRIVE SAN JOSE CA US 95134 \"\n"
    );
    let ma_m = format!("{HEADER}MA-M,70B3D51,\"Example \"\"Quoted\"\" Ltd\",Somewhere\n");
    let ma_s = format!("{HEADER}MA-S,70B3D5F2A,Example Sensors,\"1 Main St, Springfield\"\n");

    vec![
        util::write(dir, "oui.csv", &ma_l),
        util::write(dir, "mam.csv", &ma_m),
        util::write(dir, "oui36.csv", &ma_s),
    ]
}

#[test]
fn manuf_csv_merges_all_registries() {
    let dir = tempdir().unwrap();
    let inputs = registries(dir.path());
    let output = dir.path().join("manuf.go");

    let summary = manuf_csv::generate(&inputs, &output, None, &util::default_cfg()).unwrap();
    assert_eq!(summary.total_entries(), 4);

    let source = util::read(&output);
    let body: String = source
        .lines()
        .filter(|line| line.starts_with("\t\""))
        .map(|line| format!("{line}\n"))
        .collect();
    assert_eq!(
        body,
        "\t\"00000C\": \"Cisco Systems, Inc\",\n\
         \t\"70B3D5\": \"IEEE Registration Authority\",\n\
         \t\"70B3D51\": \"Example \\\"Quoted\\\" Ltd\",\n\
         \t\"70B3D5F2A\": \"Example Sensors\",\n"
    );
}

#[test]
fn manuf_csv_later_file_wins_on_duplicates() {
    let dir = tempdir().unwrap();
    let first = util::write(dir.path(), "a.csv", &format!("{HEADER}MA-L,00000C,Old Name,\n"));
    let second = util::write(dir.path(), "b.csv", &format!("{HEADER}MA-L,00000c,New Name,\n"));

    let index = RegistryIndex::load(&[first, second], MalformedPolicy::Abort).unwrap();
    assert_eq!(index.len(), 1);
    assert_eq!(
        index.get_vendor(MacAddr(0, 0, 0x0c, 0, 0, 0)),
        Some("New Name".to_string())
    );
}

#[test]
fn manuf_csv_lookup_prefers_smallest_block() {
    let dir = tempdir().unwrap();
    let index = RegistryIndex::load(&registries(dir.path()), MalformedPolicy::Abort).unwrap();

    assert_eq!(
        index.get_vendor(MacAddr(0x70, 0xb3, 0xd5, 0xf2, 0xa1, 0x23)),
        Some("Example Sensors".to_string())
    );
    assert_eq!(
        index.get_vendor(MacAddr(0x70, 0xb3, 0xd5, 0x1f, 0xff, 0xff)),
        Some("Example \"Quoted\" Ltd".to_string())
    );
    assert_eq!(
        index.get_vendor(MacAddr(0x70, 0xb3, 0xd5, 0x20, 0x00, 0x00)),
        Some("IEEE Registration Authority".to_string())
    );
}

#[test]
fn manuf_csv_requires_inputs() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("manuf.go");
    assert!(manuf_csv::generate(&[], &output, None, &util::default_cfg()).is_err());
}
