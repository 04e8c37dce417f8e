//! Synthesized Dockerfiles keep a fixed instruction order.

use deploykit::domain::services::{image_reference, Dockerfile, ImageSpec};
use deploykit::Version;
use proptest::prelude::*;

fn spec(setup: Vec<String>, extra: Vec<String>) -> ImageSpec {
    ImageSpec {
        app_name: "App".to_string(),
        version: Version::parse("v1").unwrap(),
        base_image: "python:3.9-slim".to_string(),
        workdir: "/app".to_string(),
        setup,
        extra,
    }
}

proptest! {
    #[test]
    fn extras_follow_the_version_stamp_verbatim(
        setup in prop::collection::vec("RUN [a-z ]{1,12}", 0..3),
        extra in prop::collection::vec("[A-Z]{3,6} [a-z0-9 ]{1,12}", 0..4),
    ) {
        let dockerfile = Dockerfile::synthesize(&spec(setup.clone(), extra.clone()));
        let lines = dockerfile.lines();

        prop_assert_eq!(lines.len(), 5 + setup.len() + extra.len());
        prop_assert_eq!(&lines[0], "FROM python:3.9-slim");
        prop_assert_eq!(&lines[1], "WORKDIR /app");
        prop_assert_eq!(&lines[2..2 + setup.len()], setup.as_slice());
        prop_assert_eq!(&lines[lines.len() - extra.len()..], extra.as_slice());
        prop_assert!(dockerfile.render().ends_with('\n'));
    }

    #[test]
    fn image_reference_is_lowercase(name in "[A-Za-z][A-Za-z0-9_-]{0,15}") {
        let reference = image_reference(&name, &Version::parse("v1").unwrap());
        prop_assert_eq!(reference, format!("{}:v1", name.to_lowercase()));
    }
}
