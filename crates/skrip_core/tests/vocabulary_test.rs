use skrip_core::{Category, ContentType, PlatformFormat};
use strum::IntoEnumIterator;

#[test]
fn labels_match_product_strings() {
    let categories: Vec<String> = Category::iter().map(|c| c.to_string()).collect();
    assert_eq!(categories, ["Edukasi", "Produktifitas", "Umum"]);

    let content_types: Vec<String> = ContentType::iter().map(|c| c.to_string()).collect();
    assert_eq!(
        content_types,
        [
            "Tips & Trik",
            "Edukasi Mendalam",
            "Cerita Inspiratif",
            "Review",
            "Mitos vs Fakta"
        ]
    );

    assert_eq!(
        PlatformFormat::Short.to_string(),
        "Video Pendek (TikTok, Reels)"
    );
    assert_eq!(PlatformFormat::Long.to_string(), "Video Panjang (YouTube)");
}

#[test]
fn identifiers_round_trip_through_from_str() {
    for category in Category::iter() {
        assert_eq!(category.id().parse::<Category>().unwrap(), category);
    }
    for content_type in ContentType::iter() {
        assert_eq!(
            content_type.id().parse::<ContentType>().unwrap(),
            content_type
        );
    }
    for platform in PlatformFormat::iter() {
        assert_eq!(platform.id().parse::<PlatformFormat>().unwrap(), platform);
    }
}

#[test]
fn serde_uses_identifiers_not_labels() -> anyhow::Result<()> {
    assert_eq!(
        serde_json::to_string(&ContentType::InspirationalStory)?,
        "\"inspirational_story\""
    );
    let platform: PlatformFormat = serde_json::from_str("\"long\"")?;
    assert_eq!(platform, PlatformFormat::Long);
    assert!(serde_json::from_str::<Category>("\"Edukasi\"").is_err());
    Ok(())
}

#[test]
fn unknown_identifier_is_rejected() {
    assert!("sports".parse::<Category>().is_err());
    assert!("medium".parse::<PlatformFormat>().is_err());
}

#[test]
fn defaults_are_first_variants() {
    assert_eq!(Category::default(), Category::iter().next().unwrap());
    assert_eq!(ContentType::default(), ContentType::iter().next().unwrap());
    assert_eq!(PlatformFormat::default(), PlatformFormat::Short);
}
