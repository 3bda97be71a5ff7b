//! Meta-prompt assembly.
//!
//! Selections are rendered into two parts: a fixed system instruction that
//! tells the model to write a prompt (never to perform the task), and a
//! request block listing every resolved parameter in a fixed order.

mod assembler;
mod assets;

pub use assembler::{MetaPrompt, PromptFields, assemble_meta_prompt, execution_prompt};
