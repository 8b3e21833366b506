use crate::models::RenderConfig;
use crate::types::{Label, Weight};
use crate::Error;

/// Turns weighted labels into a visual artifact in which heavier labels are drawn larger.
///
/// Callers never pass an empty `weights` slice; what an implementation does with one
/// is up to it.
pub trait Renderer {
    type Artifact;

    fn render(
        &self,
        weights: &[(Label, Weight)],
        config: &RenderConfig,
    ) -> Result<Self::Artifact, Error>;
}
