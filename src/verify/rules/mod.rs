//! Consistency rules
//!
//! Each rule is a [`Visitor`] that records issues while a blueprint is walked.
//! Rules share nothing but the report they end up in.

mod team;
mod workplan;

pub use team::{
    ActivityWithoutContributor, ActivityWithoutLeader, DuplicateLeader, EmptyTeam, IdlePerson,
};
pub use workplan::{
    DeliverableOutsideTask, DiscontinuousWorkPackage, EmptyProject, EmptyWorkPackage,
    MilestoneOutsideProject, SingleActivityWorkPackage, TaskWithoutDeliverable,
};

use super::report::Issue;
use crate::wbs::Visitor;

pub trait Rule<'a>: Visitor<'a> {
    /// Short name used in logs
    fn name(&self) -> &'static str;

    /// Hand over the issues collected so far, leaving the rule empty
    fn take_issues(&mut self) -> Vec<Issue>;
}
