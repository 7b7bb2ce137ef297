//! Sunday prep timeline state

use crate::domain::{self, PrepStep};
use crate::progress::Progress;

/// Flip `completed` on the step with `id`; unknown ids change nothing
pub fn toggle_step(steps: &[PrepStep], id: &str) -> Vec<PrepStep> {
    domain::toggle(steps, id)
}

pub fn progress(steps: &[PrepStep]) -> Progress {
    Progress::of(steps)
}
