use serde::Deserialize;

/// Speech synthesis request
#[derive(Debug, Deserialize)]
pub struct SpeechRequest {
    /// Text to synthesize into speech
    #[serde(alias = "text")]
    pub input: String,
    /// Voice identifier (e.g. "Rachel"); the provider default is used
    /// when absent
    pub voice: Option<String>,
}

/// Raw audio response from a TTS provider
pub struct SpeechResponse {
    /// Raw audio bytes
    pub audio: Vec<u8>,
    /// Content type of the audio (e.g. "audio/mpeg")
    pub content_type: String,
}

impl SpeechResponse {
    /// Convert the speech response into an axum HTTP response
    ///
    /// Sets an accurate `Content-Length` since the audio is fully
    /// buffered in memory
    pub fn into_response(self) -> axum::response::Response {
        axum::response::Response::builder()
            .header(http::header::CONTENT_TYPE, self.content_type)
            .header(http::header::CONTENT_LENGTH, self.audio.len())
            .body(axum::body::Body::from(self.audio))
            .unwrap_or_else(|_| {
                axum::response::Response::builder()
                    .status(http::StatusCode::INTERNAL_SERVER_ERROR)
                    .body(axum::body::Body::empty())
                    .unwrap()
            })
    }
}
