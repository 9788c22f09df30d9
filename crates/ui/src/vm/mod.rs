mod feedback_vm;
mod mapping_vm;
mod quiz_vm;
mod results_vm;

pub use feedback_vm::FeedbackVm;
pub use mapping_vm::{MappingPairVm, MappingRowVm, map_mapping_rows};
pub use quiz_vm::{InFlightHandle, Notice, QuestionVm, QuizVm, Screen, SubmitOutcome};
pub use results_vm::ResultsVm;
