mod coordinator;

pub use coordinator::{Coordinator, DEFAULT_STEP_DELAY_SEC};
