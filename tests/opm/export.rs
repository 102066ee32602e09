extern crate pretty_env_logger as pel;

use super::*;
use std::env::temp_dir;
use std::fs;

#[rstest]
fn to_kvn_file(iss: Opm) {
    let _ = pel::try_init();

    let path = temp_dir().join("nyx-odm-iss.opm");
    let written = iss.to_kvn_file(&path, KvnCfg::default()).unwrap();
    assert_eq!(written, path);

    let contents = fs::read_to_string(&written).unwrap();
    assert_eq!(contents, format!("{iss}"));
    assert!(contents.starts_with("CCSDS_OPM_VERS = 2.0\n"));
    assert!(contents.ends_with("Z_DOT   = 0.000000\n"));

    fs::remove_file(written).unwrap();
}

#[rstest]
fn timestamped_file_name(iss: Opm) {
    let path = temp_dir().join("nyx-odm-timestamped.opm");
    let written = iss.to_kvn_file(&path, KvnCfg::timestamped()).unwrap();

    let file_name = written.file_name().unwrap().to_str().unwrap().to_string();
    assert_ne!(written, path);
    assert!(file_name.starts_with("nyx-odm-timestamped-20"), "{file_name}");
    assert!(file_name.ends_with(".opm"), "{file_name}");
    assert!(written.exists());

    fs::remove_file(written).unwrap();
}

#[rstest]
fn invalid_message_creates_no_file(mut iss: Opm) {
    let path = temp_dir().join("nyx-odm-invalid.opm");
    let _ = fs::remove_file(&path);

    iss.data.state_vector = None;
    assert!(iss.to_kvn_file(&path, KvnCfg::default()).is_err());
    assert!(!path.exists());
}

#[rstest]
fn configuration_from_file(iss: Opm) {
    let cfg_path = temp_dir().join("nyx-odm-kvn-cfg.yaml");
    fs::write(&cfg_path, "precision: 2\nshow_units: true\n").unwrap();
    let cfg = KvnCfg::load(&cfg_path).unwrap();
    fs::remove_file(&cfg_path).unwrap();

    assert_eq!(cfg.precision, 2);
    assert!(cfg.show_units);
    assert!(!cfg.timestamp);

    let path = temp_dir().join("nyx-odm-units.opm");
    let written = iss.to_kvn_file(&path, cfg).unwrap();
    let contents = fs::read_to_string(&written).unwrap();
    assert!(contents.contains("\nY_DOT   = 7.60 [km/s]\n"), "{contents}");
    fs::remove_file(written).unwrap();

    assert!(KvnCfg::load(temp_dir().join("nyx-odm-does-not-exist.yaml")).is_err());
}
