// Placement scoring pipeline.
// The classifier is the only external collaborator; everything else is pure and request-local.

pub mod classifier;
pub mod handlers;
pub mod normalize;
pub mod pipeline;
pub mod probability;
pub mod profile_score;
pub mod salary;
pub mod suggestions;
