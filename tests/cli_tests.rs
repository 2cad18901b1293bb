//! End-to-end tests of the odgi-report command line.

use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;

fn report_text(length: u32, link_node_space: &str, distance_node_space: &str) -> String {
    format!(
        "length\tnodes\tedges\tpaths\n\
         {length}\t168\t243\t35\n\
         #mean_links_length\n\
         path\tin_node_space\tin_nucleotide_space\tnum_links_considered\n\
         all_paths\t{link_node_space}\t497.321\t942\n\
         #sum_of_path_node_distances\n\
         path\tin_node_space\tin_nucleotide_space\tnodes\tnucleotides\tnum_penalties\tnum_penalties_different_orientation\n\
         all_paths\t{distance_node_space}\t19.5609\t977\t51365\t90\t0\n"
    )
}

fn write_pipeline_reports(dir: &Path) {
    std::fs::write(
        dir.join("chr8.fa.seqwish.og.stats"),
        report_text(8778, "9.75053", "20.0686"),
    )
    .unwrap();
    std::fs::write(
        dir.join("chr8.fa.smooth.og.stats"),
        report_text(8000, "5.5", "10.25"),
    )
    .unwrap();
    std::fs::write(
        dir.join("chr8.fa.consensus@10.og.stats"),
        report_text(700, "2.5", "4.75"),
    )
    .unwrap();
    std::fs::write(dir.join("README.txt"), "not a report").unwrap();
}

fn odgi_report() -> Command {
    Command::cargo_bin("odgi-report").unwrap()
}

#[test]
fn test_report_writes_output_directory() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_pipeline_reports(input.path());

    odgi_report()
        .arg("report")
        .arg(input.path())
        .arg("--outdir")
        .arg(output.path())
        .assert()
        .success();

    let general_stats =
        std::fs::read_to_string(output.path().join("multiqc_general_stats.txt")).unwrap();
    let lines: Vec<&str> = general_stats.lines().collect();
    assert_eq!(lines[0], "Sample\tLength\tNodes\tEdges\tPaths");
    assert!(lines.contains(&"seqwish\t8778\t168\t243\t35"));
    assert!(lines.contains(&"smooth\t8000\t168\t243\t35"));
    assert!(lines.contains(&"consensus@10\t700\t168\t243\t35"));

    let section: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(output.path().join("odgi-stats.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(section["module"]["name"], "Odgi");
    assert_eq!(section["section"]["name"], "Odgi metrics");
    let plot = &section["section"]["plot"];
    assert_eq!(plot["config"]["title"], "Odgi: Odgi metrics");
    assert_eq!(plot["data"]["in_node_space_mean"]["seqwish"], 9.75053);
    assert_eq!(plot["data"]["in_node_space_sum"]["consensus@10"], 4.75);

    let data: serde_json::Value = serde_json::from_str(
        &std::fs::read_to_string(output.path().join("multiqc_odgi_stats.json")).unwrap(),
    )
    .unwrap();
    assert_eq!(data.as_object().unwrap().len(), 3);
    assert_eq!(
        data["chr8.fa.smooth.og.stats"]["general_stats"]["length"],
        8000.0
    );

    let sources = std::fs::read_to_string(output.path().join("multiqc_sources.txt")).unwrap();
    assert_eq!(sources.lines().count(), 4);
    assert!(!sources.contains("README.txt"));
}

#[test]
fn test_report_fails_on_malformed_input() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_pipeline_reports(input.path());
    std::fs::write(
        input.path().join("broken.smooth.og.stats"),
        "length\tnodes\tedges\tpaths\n1\t2\t3\t4\n",
    )
    .unwrap();

    odgi_report()
        .arg("report")
        .arg(input.path())
        .arg("-o")
        .arg(output.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("Malformed odgi stats report"))
        .stderr(predicate::str::contains("broken.smooth.og.stats"));

    assert!(!output.path().join("odgi-stats.json").exists());
    assert!(!output.path().join("multiqc_odgi_stats.json").exists());
}

#[test]
fn test_report_with_unknown_file_name_exits_with_error() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    let report = input.path().join("random_name.tsv");
    std::fs::write(&report, report_text(1, "1", "1")).unwrap();

    odgi_report()
        .arg("report")
        .arg(&report)
        .arg("-o")
        .arg(output.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Unknown file name"));

    assert!(!output.path().join("multiqc_general_stats.txt").exists());
}

#[test]
fn test_report_without_matches_is_not_an_error() {
    let input = tempfile::tempdir().unwrap();
    let output = tempfile::tempdir().unwrap();
    write_pipeline_reports(input.path());

    odgi_report()
        .arg("report")
        .arg(input.path())
        .arg("-o")
        .arg(output.path())
        .arg("--pattern")
        .arg("*.yaml")
        .assert()
        .success()
        .stderr(predicate::str::contains("No odgi stats reports found"));

    assert!(!output.path().join("odgi-stats.json").exists());
}

#[test]
fn test_show_tsv() {
    let input = tempfile::tempdir().unwrap();
    write_pipeline_reports(input.path());

    let assert = odgi_report()
        .args(["show", "--format", "tsv"])
        .arg(input.path())
        .assert()
        .success();

    let stdout = String::from_utf8(assert.get_output().stdout.clone()).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(
        lines[0],
        "sample\tLength\tNodes\tEdges\tPaths\tin_node_space_mean\tin_nucleotide_space_mean\tin_node_space_sum\tin_nucleotide_space_sum"
    );
    assert!(lines.contains(&"seqwish\t8778\t168\t243\t35\t9.75053\t497.321\t20.0686\t19.5609"));
    assert_eq!(lines.len(), 4);
}

#[test]
fn test_show_json() {
    let input = tempfile::tempdir().unwrap();
    write_pipeline_reports(input.path());

    let assert = odgi_report()
        .args(["show", "--format", "json"])
        .arg(input.path())
        .assert()
        .success();

    let output: serde_json::Value = serde_json::from_slice(&assert.get_output().stdout).unwrap();
    assert_eq!(output["general_stats"]["rows"]["smooth"]["length"], 8000.0);
    assert_eq!(output["general_stats"]["headers"][0]["scale"], "BuPu");

    // Two largest file names first: seqwish, smooth, then consensus
    let order: Vec<&str> = output["metrics"]["data"]["in_node_space_mean"]
        .as_object()
        .unwrap()
        .keys()
        .map(String::as_str)
        .collect();
    assert_eq!(order, vec!["seqwish", "smooth", "consensus@10"]);
}

#[test]
fn test_group_id() {
    odgi_report()
        .args([
            "group-id",
            "sample.seqwish.og.tsv",
            "sample.smooth.fa.tsv",
            "x.consensus@1.tsv",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("sample.seqwish.og.tsv: seqwish"))
        .stdout(predicate::str::contains("sample.smooth.fa.tsv: smooth"))
        .stdout(predicate::str::contains("x.consensus@1.tsv: consensus@1"));
}

#[test]
fn test_group_id_unknown_convention() {
    odgi_report()
        .args(["group-id", "sample.seqwish.og.tsv", "random_name.tsv"])
        .assert()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains(
            "File name must either contain seqwish, smooth or consensus@",
        ));
}
