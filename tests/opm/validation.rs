use super::*;
use nyx_odm::linalg::Vector3;
use nyx_odm::opm::COVARIANCE_KEYWORDS;

/// Writes the message to memory, returning the error and what was written.
fn try_write(opm: &Opm) -> (Result<(), OdmError>, Vec<u8>) {
    let mut sink = Vec::new();
    let rslt = opm.write(&mut sink, &KvnCfg::default());
    (rslt, sink)
}

#[rstest]
fn keplerian_anomalies() {
    let kep = |nu: Option<f64>, m: Option<f64>| {
        KeplerianElements::new(6794.0, 0.0003, 51.64, 247.46, 130.53, nu, m, 398600.4415)
    };

    assert!(kep(Some(325.03), None).is_ok());
    assert!(kep(None, Some(325.0)).is_ok());
    for (nu, m) in [(Some(325.03), Some(325.0)), (None, None)] {
        match kep(nu, m) {
            Err(OdmError::MutuallyExclusiveViolation { group }) => {
                assert_eq!(group, "TRUE_ANOMALY, MEAN_ANOMALY")
            }
            other => panic!("expected an exclusive violation, got {other:?}"),
        }
    }

    // Changing the anomaly after the fact is checked too
    let mut elements = kep(Some(325.03), None).unwrap();
    assert!(elements.set_mean_anomaly(325.0).is_err());
    assert_eq!(elements.true_anomaly, Some(325.03));
}

#[rstest]
fn both_anomalies_are_never_written(mut iss: Opm) {
    let mut kep =
        KeplerianElements::new(6794.0, 0.0, 51.6, 0.0, 0.0, Some(0.0), None, 398600.4415).unwrap();
    kep.mean_anomaly = Some(1.0);
    iss.data.push(kep).unwrap();

    let (rslt, sink) = try_write(&iss);
    assert!(matches!(
        rslt,
        Err(OdmError::MutuallyExclusiveViolation { .. })
    ));
    assert!(sink.is_empty());
}

#[rstest]
fn invalid_enum_values() {
    match "GALACTIC".parse::<RefFrame>() {
        Err(OdmError::InvalidEnumValue { kind, value }) => {
            assert_eq!(kind, "reference frame");
            assert_eq!(value, "GALACTIC");
        }
        other => panic!("expected an invalid frame, got {other:?}"),
    }
    assert!(matches!(
        "BDT".parse::<TimeSystem>(),
        Err(OdmError::InvalidEnumValue { .. })
    ));
}

#[rstest]
fn missing_state_vector(mut iss: Opm) {
    iss.data.state_vector = None;

    let (rslt, sink) = try_write(&iss);
    match rslt {
        Err(e) => {
            assert!(matches!(e, OdmError::MissingRequiredKeyword { .. }));
            assert_eq!(e.keyword(), Some("EPOCH"));
        }
        Ok(_) => panic!("an OPM without a state vector was written"),
    }
    assert!(sink.is_empty());
}

#[rstest]
fn covariance_terms() {
    let mut terms: Vec<(&str, f64)> = COVARIANCE_KEYWORDS.iter().map(|k| (*k, 1e-3)).collect();
    assert!(CovarianceMatrix::from_elements(terms.clone()).is_ok());

    terms.pop();
    match CovarianceMatrix::from_elements(terms.clone()) {
        Err(OdmError::InvalidFieldCombination { details }) => {
            assert!(details.contains("CZ_DOT_Z_DOT"), "{details}")
        }
        other => panic!("expected a missing term, got {other:?}"),
    }

    terms.push(("cx_x", 2e-3));
    assert!(matches!(
        CovarianceMatrix::from_elements(terms),
        Err(OdmError::InvalidFieldCombination { .. })
    ));
}

#[rstest]
fn maneuver_requires_spacecraft(mut iss: Opm) {
    iss.data
        .push(ManeuverParameters::from_delta_v(
            iss_epoch() + 1 * Unit::Hour,
            Duration::ZERO,
            0.0,
            RefFrame::RTN,
            Vector3::new(0.0, 0.0, 0.01),
        ))
        .unwrap();

    let (rslt, sink) = try_write(&iss);
    assert!(matches!(
        rslt,
        Err(OdmError::InvalidFieldCombination { .. })
    ));
    assert!(sink.is_empty());

    iss.data
        .push(SpacecraftParameters::builder().mass(420_000).build())
        .unwrap();
    let (rslt, sink) = try_write(&iss);
    assert!(rslt.is_ok());
    assert!(!sink.is_empty());
}

#[rstest]
fn blank_required_text(mut iss: Opm) {
    assert!(matches!(
        Header::new(" "),
        Err(OdmError::EmptyRequiredField { .. })
    ));

    iss.header.originator = "  ".to_string();
    let (rslt, sink) = try_write(&iss);
    match rslt {
        Err(e) => {
            assert!(matches!(e, OdmError::EmptyRequiredField { .. }));
            assert_eq!(e.keyword(), Some("ORIGINATOR"));
        }
        Ok(_) => panic!("an OPM without an originator was written"),
    }
    assert!(sink.is_empty());
}

#[rstest]
fn object_designator(metadata: Metadata) {
    for object_id in ["98-067A", "1998-67A", "1998-067", "1998-067ABCD"] {
        let mut meta = metadata.clone();
        meta.object_id = object_id.to_string();
        assert!(
            matches!(meta.validate(), Err(OdmError::InvalidFieldFormat { .. })),
            "{object_id} accepted"
        );
    }
}

#[rstest]
fn non_finite_values_are_rejected(mut iss: Opm) {
    if let Some(sv) = iss.data.state_vector.as_mut() {
        sv.z_dot = f64::NAN;
    }

    let (rslt, sink) = try_write(&iss);
    match rslt {
        Err(e) => {
            assert!(matches!(e, OdmError::InvalidFieldFormat { .. }));
            assert_eq!(e.keyword(), Some("Z_DOT"));
        }
        Ok(_) => panic!("a NaN was written"),
    }
    assert!(sink.is_empty());
    assert!(iss.render(&KvnCfg::default()).is_err());
}

#[rstest]
fn user_defined_values_are_required(iss: Opm) {
    let mut params = UserDefined::new();
    match params.insert("antenna", "") {
        Err(e) => {
            assert!(matches!(e, OdmError::EmptyRequiredField { .. }));
            assert_eq!(e.keyword(), Some("USER_DEFINED_ANTENNA"));
        }
        Ok(_) => panic!("a blank user defined parameter was accepted"),
    }
    assert!(matches!(
        params.insert("USER_DEFINED_", 1.0),
        Err(OdmError::InvalidFieldFormat { .. })
    ));

    params.insert("antenna", "HGA").unwrap();
    let opm = iss.with_user_defined(params);
    let lines = opm.render(&KvnCfg::default()).unwrap();
    assert_eq!(lines.last().unwrap(), "USER_DEFINED_ANTENNA = HGA");
}
