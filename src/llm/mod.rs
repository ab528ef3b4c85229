//! LLM client abstraction
//!
//! The ranking and narrative agents talk to a language model only through
//! [`LLMClient`]. Concrete providers live outside this crate; anything that
//! can turn a prompt into text can be plugged in.
//!
//! # Example
//!
//! ```ignore
//! use taskflow::agents::AgentSummarizer;
//!
//! let client: Arc<dyn LLMClient> = Arc::new(my_provider_client());
//! let summarizer = AgentSummarizer::new(client);
//! let commentary = summarizer.summarize(&schedule).await?;
//! ```

/// Core LLM client trait.
pub mod client;

pub use client::LLMClient;
