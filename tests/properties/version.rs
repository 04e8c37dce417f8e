//! Version labels are safe to embed in file names.

use deploykit::domain::entities::{artifact_file_name, ArtifactKind};
use deploykit::Version;
use proptest::prelude::*;

proptest! {
    #[test]
    fn accepted_versions_never_escape_the_output_dir(raw in "\\PC{1,24}") {
        if let Ok(version) = Version::parse(&raw) {
            let name = artifact_file_name("app", &version, ArtifactKind::Tarball);
            prop_assert!(!name.contains('/'));
            prop_assert!(!name.contains('\\'));
            prop_assert!(name.starts_with("app-"));
            prop_assert!(name.ends_with(".tar.gz"));
        }
    }

    #[test]
    fn plain_labels_round_trip(raw in "[A-Za-z0-9][A-Za-z0-9._-]{0,20}") {
        let version = Version::parse(&raw).unwrap();
        prop_assert_eq!(version.as_str(), raw.as_str());
        prop_assert_eq!(version.to_string(), raw);
    }

    #[test]
    fn labels_with_separators_are_rejected(
        head in "[a-z0-9]{1,8}",
        sep in prop::sample::select(vec!['/', '\\', ' ', '\t']),
        tail in "[a-z0-9]{1,8}",
    ) {
        let raw = format!("{head}{sep}{tail}");
        prop_assert!(Version::parse(&raw).is_err());
    }
}
