// Outline generator trait — swap-ready abstraction.
//
// Like the SearchProvider trait, this keeps the wire client out of the
// pipeline's type signature: tests substitute a canned generator, and a
// different text-generation backend can slot in unchanged.

use anyhow::Result;
use async_trait::async_trait;

use super::prompt::OutlineBrief;

/// Trait for turning an analysis brief into an article outline.
#[async_trait]
pub trait OutlineGenerator {
    /// Produce the outline as markdown-ish free text.
    async fn generate(&self, brief: &OutlineBrief) -> Result<String>;
}
