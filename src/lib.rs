//! tcl2skill - Translate TCL scripts into Cadence SKILL
//!
//! Builds a translation prompt from a TCL-to-SKILL syntax reference, the
//! documentation of every catalogued API the input mentions, and worked
//! examples, then hands it to an LLM provider (Gemini, Anthropic, OpenAI or
//! an OpenAI-compatible server).

pub mod catalog;
pub mod cli;
pub mod config;
pub mod detector;
pub mod error;
pub mod llm;
pub mod pipeline;
pub mod util;
