mod execute;
mod plan;

pub use execute::{run, RunError, RunReport};
pub use plan::{build_update_plan, PlanError, PlannedUpdate, UpdatePlan};
