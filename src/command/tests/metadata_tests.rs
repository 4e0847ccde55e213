//! Unit tests for command-metadata validation.

use rstest::rstest;

use crate::command::domain::{CommandMetadata, MetadataError};

#[rstest]
fn a_name_at_the_length_limit_is_accepted() {
    let metadata = CommandMetadata::new("a".repeat(32), "described");

    assert_eq!(metadata.validate(), Ok(()));
}

#[rstest]
fn an_overlong_name_reports_its_character_count() {
    let metadata = CommandMetadata::new("a".repeat(33), "described");

    assert_eq!(
        metadata.validate(),
        Err(MetadataError::NameTooLong {
            name: "a".repeat(33),
            length: 33,
        })
    );
}

#[rstest]
fn a_multibyte_name_is_rejected_for_its_characters_not_its_bytes() {
    // Thirteen three-byte characters: over the limit in bytes, under it in
    // characters. The charset violation must win.
    let metadata = CommandMetadata::new("ピングピングピングピンググ", "described");

    assert_eq!(
        metadata.validate(),
        Err(MetadataError::InvalidNameCharacter {
            name: "ピングピングピングピンググ".to_owned(),
            character: 'ピ',
        })
    );
}
