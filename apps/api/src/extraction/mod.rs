// CV extraction pipeline: input normalization, LLM structuring, post-processing.
// All LLM calls go through llm_client — no direct API calls here.

pub mod normalize;
pub mod prompts;
pub mod rules;
pub mod structured;

pub use normalize::FileKind;
