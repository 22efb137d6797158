// Story generation pipeline: prompt assembly, LLM call, schema coercion.
// All LLM calls go through llm_client — no direct Anthropic calls here.

pub mod generator;
pub mod handlers;
pub mod prompts;
