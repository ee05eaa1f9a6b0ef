use fourier_core::from_json_slice;
use fourier_series::{sweep_preset, SweepReport};
use fourier_sim::{write_report, RunConfig};

#[test]
fn sweep_artifacts_are_written() {
    let mut config = RunConfig::default();
    config.interval.samples = 32;
    config.sweep.orders = vec![1, 5];

    let domain = config.domain().expect("domain");
    let report = sweep_preset(&config.preset, &config.sweep, &domain).expect("sweep");

    let dir = tempfile::tempdir().expect("tempdir");
    let artifacts = write_report(dir.path(), &report).expect("write");

    let bytes = std::fs::read(&artifacts.json).expect("json exists");
    let restored: SweepReport = from_json_slice(&bytes).expect("decode");
    assert_eq!(restored.report_hash, report.report_hash);
    assert_eq!(restored.orders.len(), 2);

    let csv = std::fs::read_to_string(&artifacts.csv).expect("csv exists");
    let mut lines = csv.lines();
    assert_eq!(lines.next(), Some("t,target,n1,n5"));
    assert_eq!(lines.count(), 32);
}
