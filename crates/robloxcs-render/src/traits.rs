//! Traits for source writers.

use robloxcs_ast::Chunk;

/// A writer emits a syntax tree as source code in a target language.
pub trait Writer: Send + Sync {
    /// Language identifier (e.g., "luau").
    fn language(&self) -> &'static str;

    /// File extension for output (e.g., "luau").
    fn extension(&self) -> &'static str;

    /// Emit the chunk as source code.
    fn write(&self, chunk: &Chunk) -> String;
}
