//! Run-profile helpers shared by local and CI test runs.

pub mod property_test_profile;
