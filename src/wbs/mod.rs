//! Work breakdown and team model
//!
//! The plan is a strict tree: a [`Project`] owns activities, tasks own their
//! deliverables. The team is a second, independent tree whose roles point into
//! the plan through [`Path`] values. Both are walked with [`Traversal`].

pub mod activity;
pub mod blueprint;
pub mod path;
pub mod team;
pub mod visitor;

pub use activity::{Activity, Bounds, Deliverable, Milestone, Package, Project, Task};
pub use blueprint::Blueprint;
pub use path::Path;
pub use team::{Partner, Person, Role, RoleKind, Team};
pub use visitor::{walk, walk_project, Traversal, Visitor};
