//! Observers notified while a check or repair pass runs.
//!
//! The engines never log directly. They report progress to a
//! [`PassObserver`] supplied by the caller; [`LogObserver`] forwards those
//! events to the `log` facade.
//!
//! # Example
//!
//! ```
//! use paperfmt::engine::{check_with_observer, Pass, PassObserver};
//! use paperfmt::{Document, RuleCatalog};
//!
//! #[derive(Default)]
//! struct Counter {
//!     passes: usize,
//! }
//!
//! impl PassObserver for Counter {
//!     fn pass_finished(&mut self, _pass: Pass, _issue_count: usize) {
//!         self.passes += 1;
//!     }
//! }
//!
//! let mut counter = Counter::default();
//! check_with_observer(&Document::new(), &RuleCatalog::standard(), &mut counter);
//! assert_eq!(counter.passes, 1);
//! ```

use super::Role;
use crate::issue::{Issue, Location};
use std::fmt;

/// Which engine is running.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Pass {
    /// Read-only checklist pass
    Check,
    /// Mutating repair pass
    Repair,
}

impl fmt::Display for Pass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Pass::Check => f.write_str("check"),
            Pass::Repair => f.write_str("repair"),
        }
    }
}

/// Receives events from a running pass. All methods default to no-ops.
pub trait PassObserver {
    /// Called once before any traversal.
    fn pass_started(&mut self, pass: Pass) {
        let _ = pass;
    }

    /// Called for each non-blank top-level paragraph once its role is known.
    fn paragraph_classified(&mut self, location: Location, role: Role) {
        let _ = (location, role);
    }

    /// Called for every issue, in emission order.
    fn issue_recorded(&mut self, pass: Pass, issue: &Issue) {
        let _ = (pass, issue);
    }

    /// Called when a stored numeric attribute cannot be parsed.
    fn value_unreadable(&mut self, location: Location, attribute: &str, raw: &str) {
        let _ = (location, attribute, raw);
    }

    /// Called once after traversal with the number of issues emitted.
    fn pass_finished(&mut self, pass: Pass, issue_count: usize) {
        let _ = (pass, issue_count);
    }
}

/// Observer that ignores every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NullObserver;

impl PassObserver for NullObserver {}

/// Observer that forwards events to the `log` facade.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogObserver;

impl PassObserver for LogObserver {
    fn pass_started(&mut self, pass: Pass) {
        log::info!("Starting {} pass", pass);
    }

    fn paragraph_classified(&mut self, location: Location, role: Role) {
        log::debug!("{}: {:?}", location, role);
    }

    fn issue_recorded(&mut self, pass: Pass, issue: &Issue) {
        log::debug!("{} issue: {}", pass, issue);
    }

    fn value_unreadable(&mut self, location: Location, attribute: &str, raw: &str) {
        log::warn!("{}: cannot parse {} value {:?}", location, attribute, raw);
    }

    fn pass_finished(&mut self, pass: Pass, issue_count: usize) {
        log::info!("Finished {} pass with {} issues", pass, issue_count);
    }
}

/// Observer that forwards every event to several observers in order.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Box<dyn PassObserver>>,
}

impl CompositeObserver {
    /// Create an empty composite observer.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an observer to the chain.
    pub fn with_observer<O: PassObserver + 'static>(mut self, observer: O) -> Self {
        self.observers.push(Box::new(observer));
        self
    }
}

impl PassObserver for CompositeObserver {
    fn pass_started(&mut self, pass: Pass) {
        for o in &mut self.observers {
            o.pass_started(pass);
        }
    }

    fn paragraph_classified(&mut self, location: Location, role: Role) {
        for o in &mut self.observers {
            o.paragraph_classified(location, role);
        }
    }

    fn issue_recorded(&mut self, pass: Pass, issue: &Issue) {
        for o in &mut self.observers {
            o.issue_recorded(pass, issue);
        }
    }

    fn value_unreadable(&mut self, location: Location, attribute: &str, raw: &str) {
        for o in &mut self.observers {
            o.value_unreadable(location, attribute, raw);
        }
    }

    fn pass_finished(&mut self, pass: Pass, issue_count: usize) {
        for o in &mut self.observers {
            o.pass_finished(pass, issue_count);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::IssueCategory;
    use std::cell::RefCell;
    use std::rc::Rc;

    struct Recorder(Rc<RefCell<Vec<String>>>);

    impl PassObserver for Recorder {
        fn pass_started(&mut self, pass: Pass) {
            self.0.borrow_mut().push(format!("start {}", pass));
        }

        fn issue_recorded(&mut self, _pass: Pass, issue: &Issue) {
            self.0.borrow_mut().push(issue.description().to_string());
        }
    }

    #[test]
    fn test_composite_fans_out_in_order() {
        let events = Rc::new(RefCell::new(Vec::new()));
        let mut composite = CompositeObserver::new()
            .with_observer(Recorder(events.clone()))
            .with_observer(NullObserver)
            .with_observer(Recorder(events.clone()));

        composite.pass_started(Pass::Check);
        let issue = Issue::new(
            IssueCategory::PageNumber,
            Location::Document,
            "未设置页码",
            "在页面底部居中添加页码",
        );
        composite.issue_recorded(Pass::Check, &issue);

        assert_eq!(
            *events.borrow(),
            vec!["start check", "start check", "未设置页码", "未设置页码"]
        );
    }
}
