//! update-info - refresh README.md from student info
//!
//! One-shot tool for the homework docker environment: loads the `[info]`
//! section of a student config file, injects a build timestamp and the
//! docker activation tag, and renders the README template into `README.md`.
//!
//! # Example
//!
//! ```ignore
//! use update_info::{PersonalInfo, RuntimeFields, Template};
//!
//! let mut info = PersonalInfo::load("student_info.ini", update_info::INFO_SECTION)?;
//! info.enrich(&RuntimeFields::capture());
//! let rendered = Template::load("./res/tmpl_readme.md")?.safe_substitute(&info);
//! std::fs::write("README.md", rendered)?;
//! ```

pub mod cli;
pub mod info;
pub mod render;

pub use info::{PersonalInfo, RuntimeFields};
pub use render::Template;

/// Config section holding the student fields
pub const INFO_SECTION: &str = "info";

/// Template consumed by the renderer
pub const TEMPLATE_PATH: &str = "./res/tmpl_readme.md";

/// Rendered output, overwritten on every non-guarded run
pub const OUTPUT_PATH: &str = "README.md";
