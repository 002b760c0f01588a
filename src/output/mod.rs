mod gantt;
mod report;

pub use gantt::write_gantt;
pub use report::{render_json, render_text, summary_line};
