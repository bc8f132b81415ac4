mod credit_form;
mod report_panel;

pub use credit_form::CreditForm;
pub use report_panel::ReportPanel;
