//! GeminiClient against a local mock of the REST API.

use mockito::{Matcher, Server};
use serde_json::json;
use skrip_core::{
    ApiKey, Category, ContentType, GeminiSettings, GenerationRequest, ImageSettings,
    PlatformFormat,
};
use skrip_error::{
    GENERATION_FAILURE_MESSAGE, GenerationErrorKind, IMAGE_FAILURE_MESSAGE,
    ImageGenerationErrorKind, PARSE_FAILURE_MESSAGE,
};
use skrip_interface::ContentGenerator;
use skrip_models::GeminiClient;

const SCRIPTS_PATH: &str = "/v1beta/models/gemini-test:generateContent";
const IMAGE_PATH: &str = "/v1beta/models/imagen-test:predict";

fn client(base_url: String) -> anyhow::Result<GeminiClient> {
    let settings = GeminiSettings {
        base_url,
        model: "gemini-test".to_string(),
        ..GeminiSettings::default()
    };
    let image = ImageSettings {
        model: "imagen-test".to_string(),
        ..ImageSettings::default()
    };
    Ok(GeminiClient::new(ApiKey::new("test-key")?, settings, image))
}

fn request(count: u32) -> anyhow::Result<GenerationRequest> {
    Ok(GenerationRequest::new(
        Category::Productivity,
        ContentType::Tips,
        PlatformFormat::Short,
        count,
    )?)
}

/// Wrap model output text in a generateContent envelope.
fn envelope(text: &str) -> String {
    json!({
        "candidates": [{
            "content": { "role": "model", "parts": [{ "text": text }] },
            "finishReason": "STOP"
        }]
    })
    .to_string()
}

fn two_scripts() -> String {
    json!({
        "scripts": [
            {
                "judulKonten": "Pagi Produktif",
                "durasi": "30 detik",
                "deskripsiKarakter": "Narator",
                "scenes": [
                    { "namaScene": "Pembuka", "visual": "stickman bangun tidur", "audio": "VO: Bangun!" }
                ],
                "hashtags": "#pagi #produktif"
            },
            {
                "judulKonten": "Fokus 25 Menit",
                "durasi": "45 detik",
                "deskripsiKarakter": "Stickman pelajar",
                "scenes": [
                    { "namaScene": "Masalah", "visual": "stickman terdistraksi", "audio": "SFX: notifikasi" },
                    { "namaScene": "Solusi", "visual": "stickman dengan timer", "audio": "VO: Coba pomodoro." }
                ],
                "hashtags": "#fokus"
            }
        ]
    })
    .to_string()
}

#[tokio::test]
async fn scripts_come_back_in_backend_order() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", SCRIPTS_PATH)
        .match_header("x-goog-api-key", "test-key")
        .match_body(Matcher::PartialJson(json!({
            "generationConfig": {
                "temperature": 1.0,
                "topP": 0.95,
                "responseMimeType": "application/json"
            }
        })))
        .with_status(200)
        .with_header("content-type", "application/json")
        .with_body(envelope(&two_scripts()))
        .create_async()
        .await;

    let scripts = client(server.url())?.generate_scripts(&request(2)?).await?;

    mock.assert_async().await;
    assert_eq!(scripts.len(), 2);
    assert_eq!(scripts[0].title, "Pagi Produktif");
    assert_eq!(scripts[1].title, "Fokus 25 Menit");
    assert_eq!(scripts[1].scenes[1].name, "Solusi");
    Ok(())
}

#[tokio::test]
async fn prompt_carries_the_response_schema() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", SCRIPTS_PATH)
        .match_body(Matcher::PartialJson(json!({
            "generationConfig": {
                "responseSchema": { "type": "OBJECT", "required": ["scripts"] }
            }
        })))
        .with_status(200)
        .with_body(envelope(&two_scripts()))
        .create_async()
        .await;

    client(server.url())?.generate_scripts(&request(2)?).await?;
    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn empty_script_list_is_not_an_error() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    server
        .mock("POST", SCRIPTS_PATH)
        .with_status(200)
        .with_body(envelope(r#"{"scripts": []}"#))
        .create_async()
        .await;

    let scripts = client(server.url())?.generate_scripts(&request(1)?).await?;
    assert!(scripts.is_empty());
    Ok(())
}

#[tokio::test]
async fn unparseable_output_is_a_parse_failure() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    server
        .mock("POST", SCRIPTS_PATH)
        .with_status(200)
        .with_body(envelope("Maaf, saya tidak bisa membantu."))
        .create_async()
        .await;

    let err = client(server.url())?
        .generate_scripts(&request(1)?)
        .await
        .expect_err("non-JSON output must fail");
    assert!(err.is_parse_failure());
    assert_eq!(err.user_message(), PARSE_FAILURE_MESSAGE);
    Ok(())
}

#[tokio::test]
async fn scene_without_visual_is_rejected() -> anyhow::Result<()> {
    let text = json!({
        "scripts": [{
            "judulKonten": "Tanpa Visual",
            "durasi": "30 detik",
            "deskripsiKarakter": "Narator",
            "scenes": [{ "namaScene": "Pembuka", "visual": "  ", "audio": "VO: halo" }],
            "hashtags": "#a"
        }]
    })
    .to_string();
    let mut server = Server::new_async().await;
    server
        .mock("POST", SCRIPTS_PATH)
        .with_status(200)
        .with_body(envelope(&text))
        .create_async()
        .await;

    let err = client(server.url())?
        .generate_scripts(&request(1)?)
        .await
        .expect_err("blank visual must fail validation");
    assert!(matches!(err.kind, GenerationErrorKind::InvalidScript(_)));
    assert_eq!(err.user_message(), PARSE_FAILURE_MESSAGE);
    Ok(())
}

#[tokio::test]
async fn server_error_maps_to_generic_message() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    server
        .mock("POST", SCRIPTS_PATH)
        .with_status(500)
        .with_body(r#"{"error": {"code": 500, "message": "Internal error"}}"#)
        .create_async()
        .await;

    let err = client(server.url())?
        .generate_scripts(&request(1)?)
        .await
        .expect_err("500 must fail");
    match &err.kind {
        GenerationErrorKind::Api {
            status_code,
            message,
        } => {
            assert_eq!(*status_code, 500);
            assert_eq!(message, "Internal error");
        }
        other => panic!("unexpected kind: {other:?}"),
    }
    assert!(!err.is_parse_failure());
    assert_eq!(err.user_message(), GENERATION_FAILURE_MESSAGE);
    Ok(())
}

#[tokio::test]
async fn blocked_prompt_is_no_content() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    server
        .mock("POST", SCRIPTS_PATH)
        .with_status(200)
        .with_body(r#"{"promptFeedback": {"blockReason": "SAFETY"}}"#)
        .create_async()
        .await;

    let err = client(server.url())?
        .generate_scripts(&request(1)?)
        .await
        .expect_err("blocked prompt must fail");
    match &err.kind {
        GenerationErrorKind::NoContent(reason) => assert!(reason.contains("SAFETY")),
        other => panic!("unexpected kind: {other:?}"),
    }
    Ok(())
}

#[tokio::test]
async fn short_format_images_are_portrait() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", IMAGE_PATH)
        .match_header("x-goog-api-key", "test-key")
        .match_body(Matcher::PartialJson(json!({
            "instances": [{ "prompt": "stickman melambai" }],
            "parameters": { "sampleCount": 1, "aspectRatio": "9:16" }
        })))
        .with_status(200)
        .with_body(r#"{"predictions": [{"bytesBase64Encoded": "aGVsbG8=", "mimeType": "image/png"}]}"#)
        .create_async()
        .await;

    let image = client(server.url())?
        .generate_image("stickman melambai", PlatformFormat::Short)
        .await?;

    mock.assert_async().await;
    assert_eq!(image.data_uri(), "data:image/png;base64,aGVsbG8=");
    assert_eq!(image.decode()?, b"hello");
    Ok(())
}

#[tokio::test]
async fn long_format_images_are_landscape() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", IMAGE_PATH)
        .match_body(Matcher::PartialJson(json!({
            "parameters": { "aspectRatio": "16:9", "outputOptions": { "mimeType": "image/png" } }
        })))
        .with_status(200)
        .with_body(r#"{"predictions": [{"bytesBase64Encoded": "aGVsbG8="}]}"#)
        .create_async()
        .await;

    let image = client(server.url())?
        .generate_image("stickman presentasi", PlatformFormat::Long)
        .await?;

    mock.assert_async().await;
    assert_eq!(image.mime_type(), "image/png");
    Ok(())
}

#[tokio::test]
async fn filtered_image_surfaces_backend_reason() -> anyhow::Result<()> {
    let reason = "Gambar diblokir oleh filter keamanan.";
    let mut server = Server::new_async().await;
    server
        .mock("POST", IMAGE_PATH)
        .with_status(200)
        .with_body(json!({ "predictions": [{ "raiFilteredReason": reason }] }).to_string())
        .create_async()
        .await;

    let err = client(server.url())?
        .generate_image("stickman", PlatformFormat::Short)
        .await
        .expect_err("filtered image must fail");
    assert!(matches!(err.kind, ImageGenerationErrorKind::NoImage(Some(_))));
    assert_eq!(err.user_message(), reason);
    Ok(())
}

#[tokio::test]
async fn empty_predictions_use_generic_message() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    server
        .mock("POST", IMAGE_PATH)
        .with_status(200)
        .with_body("{}")
        .create_async()
        .await;

    let err = client(server.url())?
        .generate_image("stickman", PlatformFormat::Short)
        .await
        .expect_err("no predictions must fail");
    assert!(matches!(err.kind, ImageGenerationErrorKind::NoImage(None)));
    assert_eq!(err.user_message(), IMAGE_FAILURE_MESSAGE);
    Ok(())
}

#[tokio::test]
async fn invalid_image_payload_is_rejected() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    server
        .mock("POST", IMAGE_PATH)
        .with_status(200)
        .with_body(r#"{"predictions": [{"bytesBase64Encoded": "not base64!!"}]}"#)
        .create_async()
        .await;

    let err = client(server.url())?
        .generate_image("stickman", PlatformFormat::Short)
        .await
        .expect_err("bad base64 must fail");
    assert!(matches!(err.kind, ImageGenerationErrorKind::InvalidImage(_)));
    Ok(())
}

#[tokio::test]
async fn image_api_error_message_is_shown_verbatim() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    server
        .mock("POST", IMAGE_PATH)
        .with_status(400)
        .with_body(r#"{"error": {"code": 400, "message": "Prompt melanggar kebijakan."}}"#)
        .create_async()
        .await;

    let err = client(server.url())?
        .generate_image("stickman", PlatformFormat::Short)
        .await
        .expect_err("400 must fail");
    assert_eq!(err.user_message(), "Prompt melanggar kebijakan.");
    Ok(())
}

#[tokio::test]
async fn identical_image_prompts_are_not_cached() -> anyhow::Result<()> {
    let mut server = Server::new_async().await;
    let mock = server
        .mock("POST", IMAGE_PATH)
        .with_status(200)
        .with_body(r#"{"predictions": [{"bytesBase64Encoded": "aGVsbG8="}]}"#)
        .expect(2)
        .create_async()
        .await;

    let client = client(server.url())?;
    client.generate_image("stickman", PlatformFormat::Short).await?;
    client.generate_image("stickman", PlatformFormat::Short).await?;

    mock.assert_async().await;
    Ok(())
}

#[tokio::test]
async fn reports_provider_and_models() -> anyhow::Result<()> {
    let client = client("http://localhost".to_string())?;
    assert_eq!(client.provider_name(), "gemini");
    assert_eq!(client.model_name(), "gemini-test");
    assert_eq!(client.image_model_name(), "imagen-test");
    Ok(())
}
