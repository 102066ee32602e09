use nyx_odm::prelude::*;
use rstest::*;

mod export;
mod output;
mod validation;

/// Epoch of the ISS example
pub fn iss_epoch() -> Epoch {
    Epoch::from_gregorian_utc_hms(2014, 11, 7, 15, 30, 23)
}

#[fixture]
pub fn state_vector() -> StateVector {
    StateVector::builder()
        .epoch(iss_epoch())
        .x(6794)
        .y(0)
        .z(0)
        .x_dot(0)
        .y_dot(7.6)
        .z_dot(0)
        .build()
}

#[fixture]
pub fn metadata() -> Metadata {
    Metadata::new(
        "International Space Station",
        "1998-067A",
        "Earth",
        "EME2000".parse().unwrap(),
        "UTC".parse().unwrap(),
    )
    .unwrap()
}

#[fixture]
pub fn iss(state_vector: StateVector, metadata: Metadata) -> Opm {
    Opm::new(Header::new("NASA").unwrap(), metadata, Data::new(state_vector))
}
