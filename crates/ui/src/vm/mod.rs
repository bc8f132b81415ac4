mod histogram_vm;
mod record_vm;

pub use histogram_vm::{HistogramBarVm, HistogramVm, map_histogram};
pub use record_vm::{RecordRowVm, map_record_rows};
