use pnet::util::MacAddr;
use pretty_assertions::assert_eq;
use tablegen_common::config::{MalformedPolicy, Order};
use tablegen_common::vendors::VendorRepository;
use tablegen_core::manuf::{self, ManufIndex};
use tempfile::tempdir;

use crate::util;

const MANUF: &str = "\
# This file was generated by running ./tools/make-manuf.py.
00:00:0D\tFibronic\tFibronics Ltd.
00:00:0C\tCisco\tCisco Systems, Inc
00:1B:C5:00:00:00/36\tConvergi\tConverging Systems Inc.
00:00:01\tXerox                  # XEROX CORPORATION
";

#[test]
fn manuf_generates_sorted_go_source() {
    let dir = tempdir().unwrap();
    let input = util::write(dir.path(), "manuf", MANUF);
    let output = dir.path().join("network/manuf.go");

    let summary = manuf::generate(&input, &output, None, &util::default_cfg()).unwrap();
    assert_eq!(summary.total_entries(), 4);
    assert_eq!(summary.output, output);

    let source = util::read(&output);
    assert!(source.contains("func ManufLookup(mac string) string {"));

    let body: Vec<&str> = source
        .lines()
        .filter(|line| line.starts_with('\t') && line.contains("\": \""))
        .collect();
    let sub_allocation: String =
        format!("\t\"12.{}\": \"Converging Systems Inc.\",", 0x001BC5000000u64 >> 12);
    assert_eq!(
        body,
        vec![
            sub_allocation.as_str(),
            "\t\"24.1\": \"Xerox\",",
            "\t\"24.12\": \"Cisco Systems, Inc\",",
            "\t\"24.13\": \"Fibronics Ltd.\",",
        ]
    );
}

#[test]
fn manuf_output_is_identical_across_input_orders() {
    let dir = tempdir().unwrap();
    let mut reversed: Vec<&str> = MANUF.lines().collect();
    reversed.reverse();

    let forward = util::write(dir.path(), "forward", MANUF);
    let backward = util::write(dir.path(), "backward", &reversed.join("\n"));
    let out_a = dir.path().join("a.go");
    let out_b = dir.path().join("b.go");

    manuf::generate(&forward, &out_a, None, &util::default_cfg()).unwrap();
    manuf::generate(&backward, &out_b, None, &util::default_cfg()).unwrap();

    assert_eq!(util::read(&out_a), util::read(&out_b));
}

#[test]
fn manuf_malformed_line_aborts_without_output() {
    let dir = tempdir().unwrap();
    let input = util::write(dir.path(), "manuf", &format!("{MANUF}00:00:0E\n"));
    let output = dir.path().join("manuf.go");

    let err = manuf::generate(&input, &output, None, &util::default_cfg()).unwrap_err();
    assert!(err.to_string().contains("line 6"), "unexpected error: {err}");
    assert!(!output.exists());
}

#[test]
fn manuf_skip_malformed_keeps_good_lines() {
    let dir = tempdir().unwrap();
    let input = util::write(dir.path(), "manuf", &format!("00:00:0E\n{MANUF}"));
    let output = dir.path().join("manuf.go");
    let cfg = util::cfg(Order::Insertion, MalformedPolicy::Skip);

    let summary = manuf::generate(&input, &output, None, &cfg).unwrap();
    assert_eq!(summary.total_entries(), 4);

    // insertion order follows the file
    let source = util::read(&output);
    let fibronic = source.find("Fibronics Ltd.").unwrap();
    let cisco = source.find("Cisco Systems, Inc").unwrap();
    assert!(fibronic < cisco);
}

#[test]
fn manuf_custom_template() {
    let dir = tempdir().unwrap();
    let input = util::write(dir.path(), "manuf", "00:00:0C\tCisco\tCisco Systems, Inc\n");
    let template = util::write(dir.path(), "manuf.tmpl", "package vendors\n\nvar table = map[string]string{\n#MAP#}\n");
    let output = dir.path().join("manuf.go");

    manuf::generate(&input, &output, Some(&template), &util::default_cfg()).unwrap();
    assert_eq!(
        util::read(&output),
        "package vendors\n\nvar table = map[string]string{\n\t\"24.12\": \"Cisco Systems, Inc\",\n}\n"
    );
}

#[test]
fn manuf_template_without_placeholder_fails() {
    let dir = tempdir().unwrap();
    let input = util::write(dir.path(), "manuf", "00:00:0C\tCisco\tCisco Systems, Inc\n");
    let template = util::write(dir.path(), "manuf.tmpl", "package vendors\n");
    let output = dir.path().join("manuf.go");

    assert!(manuf::generate(&input, &output, Some(&template), &util::default_cfg()).is_err());
    assert!(!output.exists());
}

#[test]
fn manuf_index_resolves_like_generated_lookup() {
    let dir = tempdir().unwrap();
    let input = util::write(dir.path(), "manuf", MANUF);
    let index = ManufIndex::load(&input, MalformedPolicy::Abort).unwrap();

    assert_eq!(
        index.get_vendor(MacAddr(0x00, 0x1b, 0xc5, 0x00, 0x0a, 0xbc)),
        Some("Converging Systems Inc.".to_string())
    );
    assert_eq!(
        index.get_vendor(MacAddr(0x00, 0x00, 0x01, 0xaa, 0xbb, 0xcc)),
        Some("Xerox".to_string())
    );
    assert_eq!(index.get_vendor(MacAddr(0x00, 0x1b, 0xc5, 0x10, 0x00, 0x00)), None);
}
