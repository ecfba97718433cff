// Cross-cutting prompt fragments. Each service that needs LLM calls defines
// its own prompts.rs alongside it; this file holds only shared pieces.

/// Prompt for transcribing an image résumé. The one input type whose text
/// extraction is itself a remote inference call.
pub const IMAGE_TRANSCRIPTION_PROMPT: &str = "Extract all text from this CV image. \
    Return only the raw text content, no formatting or analysis.";
