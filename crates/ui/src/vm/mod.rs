mod result_vm;

pub use result_vm::{ProgramVm, ResultVm, map_result};
