//! isotime - integration test support.
//!
//! Sample inputs shared between the integration test files.

/// `1900-12-31T00:10:20Z` in every accepted layout and separator.
pub const ZULU_SAMPLES: [&str; 12] = [
    "1900-12-31T00:10:20Z",
    "1900-12-31T001020Z",
    "19001231T00:10:20Z",
    "19001231T001020Z",
    "1900-12-31t00:10:20Z",
    "1900-12-31t001020Z",
    "19001231t00:10:20Z",
    "19001231t001020Z",
    "1900-12-31 00:10:20Z",
    "1900-12-31 001020Z",
    "19001231 00:10:20Z",
    "19001231 001020Z",
];

/// Timestamps with fractional seconds and non-zero offsets.
pub const OFFSET_SAMPLES: [&str; 3] = [
    "2020-02-17T11:39:27.658731+00:00",
    "2020-02-17T11:39:27.658731Z",
    "2020-02-17T11:39:27.658731-02:30",
];
