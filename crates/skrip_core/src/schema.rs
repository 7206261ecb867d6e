//! Structured-output schema sent with every script request.
//!
//! Written in the Gemini `responseSchema` dialect (upper-case type names,
//! `propertyOrdering`). Conformance is only suggested to the backend, so
//! [`crate::ScriptBatch::parse`] re-checks what matters.

use crate::VISUAL_STYLE;
use serde_json::{Value, json};

/// Required fields of a script object, in display order.
pub const SCRIPT_FIELDS: [&str; 5] = [
    "judulKonten",
    "durasi",
    "deskripsiKarakter",
    "scenes",
    "hashtags",
];

/// Required fields of a scene object, in display order.
pub const SCENE_FIELDS: [&str; 3] = ["namaScene", "visual", "audio"];

/// Build the response schema: an object holding a `scripts` array.
pub fn script_response_schema() -> Value {
    let scene = json!({
        "type": "OBJECT",
        "properties": {
            "namaScene": {
                "type": "STRING",
                "description": "Nama atau judul adegan (contoh: Adegan Pembuka, Tips 1, Penutup)."
            },
            "visual": {
                "type": "STRING",
                "description": format!(
                    "PROMPT untuk menghasilkan gambar adegan. WAJIB bergaya '{VISUAL_STYLE}'. \
                     Jelaskan aksi karakter, latar belakang, dan teks yang mungkin tampil."
                )
            },
            "audio": {
                "type": "STRING",
                "description": "Apa yang terdengar: dialog, Voice Over (V.O.), musik, dan efek suara (SFX)."
            }
        },
        "required": SCENE_FIELDS,
        "propertyOrdering": SCENE_FIELDS
    });

    let script = json!({
        "type": "OBJECT",
        "properties": {
            "judulKonten": {
                "type": "STRING",
                "description": "Judul video yang menarik."
            },
            "durasi": {
                "type": "STRING",
                "description": "Estimasi durasi video (misal: 30-60 detik atau 5-10 menit)."
            },
            "deskripsiKarakter": {
                "type": "STRING",
                "description": "Deskripsi singkat karakter atau pembicara dalam video."
            },
            "scenes": {
                "type": "ARRAY",
                "description": "Rangkaian adegan berurutan yang membentuk skrip.",
                "minItems": 1,
                "items": scene
            },
            "hashtags": {
                "type": "STRING",
                "description": "Hashtag relevan dipisahkan spasi (contoh: #tips #produktifitas)."
            }
        },
        "required": SCRIPT_FIELDS,
        "propertyOrdering": SCRIPT_FIELDS
    });

    json!({
        "type": "OBJECT",
        "properties": {
            "scripts": {
                "type": "ARRAY",
                "description": "Daftar ide skrip konten.",
                "items": script
            }
        },
        "required": ["scripts"]
    })
}
