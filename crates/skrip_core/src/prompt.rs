//! Request builder: selection in, instruction and schema out.

use crate::{GenerationRequest, PlatformFormat, script_response_schema};
use serde_json::{Value, json};
use tracing::instrument;

/// Illustration style every visual prompt must follow.
pub const VISUAL_STYLE: &str = "stickman hitam putih, minimalis, di atas latar belakang putih polos";

/// Structural guidance for the chosen platform format.
pub fn platform_guidance(platform: PlatformFormat) -> &'static str {
    match platform {
        PlatformFormat::Short => {
            "Skrip untuk VIDEO PENDEK (TikTok/Reels) dengan target durasi 15-60 detik.\n\
             - Adegan pertama WAJIB berisi hook yang sangat kuat.\n\
             - Setiap adegan singkat dan dinamis.\n\
             - Bahasa sangat santai dan mengikuti tren."
        }
        PlatformFormat::Long => {
            "Skrip untuk VIDEO PANJANG (YouTube) dengan target durasi 5-10 menit.\n\
             - Struktur jelas: Intro (adegan pembuka), Isi (beberapa adegan mendetail), \
             dan Outro (adegan penutup).\n\
             - Isi konten lebih mendalam dan komprehensif.\n\
             - Bahasa lebih terstruktur namun tetap menarik."
        }
    }
}

/// Instruction text plus the structured-output schema for one request.
///
/// Built fresh from the four selections every time; nothing carries over
/// between requests.
///
/// # Examples
///
/// ```
/// use skrip_core::{GenerationRequest, ScriptPrompt, VISUAL_STYLE};
///
/// let prompt = ScriptPrompt::build(&GenerationRequest::default());
/// assert!(prompt.instruction().contains(VISUAL_STYLE));
/// assert_eq!(prompt.schema()["required"][0], "scripts");
/// ```
#[derive(Debug, Clone, PartialEq, derive_getters::Getters)]
pub struct ScriptPrompt {
    /// Natural-language instruction for the model
    instruction: String,
    /// `responseSchema` the answer must follow
    schema: Value,
}

impl ScriptPrompt {
    /// Compose the instruction and schema for `request`.
    #[instrument(skip_all, fields(
        category = request.category().id(),
        content_type = request.content_type().id(),
        platform = request.platform_format().id(),
        count = *request.count()
    ))]
    pub fn build(request: &GenerationRequest) -> Self {
        let count = *request.count();
        let example_scene = json!({
            "namaScene": "Bangun Pagi Tanpa Drama",
            "visual": format!(
                "{VISUAL_STYLE}, seorang stickman meregangkan tangan di samping jam weker, \
                 teks besar di atas kepala bertuliskan 'Bangun 5 Menit Lebih Awal!'"
            ),
            "audio": "Host (bersemangat): 'Coba trik ini besok pagi!' (SFX: alarm berdering)"
        });

        let instruction = format!(
            "Anda adalah penulis skrip video profesional sekaligus ahli menyusun prompt untuk AI image generator.\n\
             Buatlah {count} ide skrip video yang unik. Setiap skrip harus berbeda satu sama lain, \
             baik dari segi ide maupun eksekusinya.\n\
             \n\
             KRITERIA:\n\
             1. Kategori utama: {category}\n\
             2. Jenis konten: {content_type}\n\
             3. Format platform: {platform}\n\
             \n\
             PANDUAN FORMAT:\n\
             {guidance}\n\
             \n\
             STRUKTUR SKRIP (WAJIB DIIKUTI):\n\
             1. judulKonten: judul yang menarik.\n\
             2. durasi: estimasi durasi (target {duration}).\n\
             3. deskripsiKarakter: gambaran singkat pembicara atau karakter.\n\
             4. scenes: daftar adegan berurutan, minimal satu adegan. Setiap adegan WAJIB memiliki:\n\
             \x20  - namaScene: judul adegan (misal \"Pembuka\", \"Inti Masalah\", \"Solusi\", \"Penutup\").\n\
             \x20  - visual: PROMPT GAMBAR untuk adegan ini, WAJIB bergaya '{VISUAL_STYLE}'. \
             Jelaskan aksi karakter, latar belakang, dan teks yang tampil di layar.\n\
             \x20  - audio: apa yang TERDENGAR, termasuk dialog, Voice Over (V.O.), musik, dan efek suara (SFX).\n\
             5. hashtags: hashtag relevan dipisahkan spasi.\n\
             \n\
             CONTOH SATU ADEGAN:\n\
             {example_scene:#}\n\
             \n\
             Pastikan {count} skrip yang dihasilkan benar-benar berbeda satu sama lain dalam ide dan eksekusi. \
             Gunakan bahasa Indonesia yang natural dan menarik.",
            category = request.category(),
            content_type = request.content_type(),
            platform = request.platform_format(),
            guidance = platform_guidance(*request.platform_format()),
            duration = request.platform_format().target_duration(),
        );

        Self {
            instruction,
            schema: script_response_schema(),
        }
    }
}
