use std::fmt;
use std::sync::Arc;
use std::time::Duration;

use crate::types::{ProductId, UserId};

/// The sections of a report, in output order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ReportSection {
    AllUsers,
    OlderUsers,
    TopProducts,
    PurchaseCheck,
    SpentPerUser,
    TopBuyer,
    MostExpensive,
}

impl ReportSection {
    /// All sections in output order.
    pub const ALL: [ReportSection; 7] = [
        ReportSection::AllUsers,
        ReportSection::OlderUsers,
        ReportSection::TopProducts,
        ReportSection::PurchaseCheck,
        ReportSection::SpentPerUser,
        ReportSection::TopBuyer,
        ReportSection::MostExpensive,
    ];
}

/// Events emitted while a report is built and rendered.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReportEvent {
    RunStarted,
    SectionStarted { section: ReportSection },
    /// `items` is the number of lines the section produced.
    SectionFinished { section: ReportSection, items: usize },
    /// A purchase points at a product that does not exist; it contributes 0 to the totals.
    UnresolvedProduct { user_id: UserId, product_id: ProductId },
    RunFinished { elapsed: Duration },
}

/// Observer hook for report events.
pub trait ReportObserver: Send + Sync {
    fn on_event(&self, event: &ReportEvent);
}

/// Logs report events to stderr.
#[derive(Debug, Default)]
pub struct StdErrObserver;

impl ReportObserver for StdErrObserver {
    fn on_event(&self, event: &ReportEvent) {
        match event {
            ReportEvent::UnresolvedProduct {
                user_id,
                product_id,
            } => eprintln!(
                "[report][warn] unresolved product user_id={user_id} product_id={product_id}"
            ),
            other => eprintln!("[report] {other:?}"),
        }
    }
}

/// An observer that fans out events to a list of observers.
#[derive(Default)]
pub struct CompositeObserver {
    observers: Vec<Arc<dyn ReportObserver>>,
}

impl CompositeObserver {
    /// Create a new composite observer from a list of observers.
    pub fn new(observers: Vec<Arc<dyn ReportObserver>>) -> Self {
        Self { observers }
    }
}

impl fmt::Debug for CompositeObserver {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CompositeObserver")
            .field("observers_len", &self.observers.len())
            .finish()
    }
}

impl ReportObserver for CompositeObserver {
    fn on_event(&self, event: &ReportEvent) {
        for o in &self.observers {
            o.on_event(event);
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::{CompositeObserver, ReportEvent, ReportObserver};

    #[derive(Default)]
    struct Recording(Mutex<Vec<ReportEvent>>);

    impl ReportObserver for Recording {
        fn on_event(&self, event: &ReportEvent) {
            self.0.lock().unwrap().push(event.clone());
        }
    }

    #[test]
    fn composite_fans_out_to_every_observer() {
        let a = Arc::new(Recording::default());
        let b = Arc::new(Recording::default());
        let composite =
            CompositeObserver::new(vec![a.clone() as Arc<dyn ReportObserver>, b.clone()]);

        composite.on_event(&ReportEvent::RunStarted);

        assert_eq!(*a.0.lock().unwrap(), vec![ReportEvent::RunStarted]);
        assert_eq!(*b.0.lock().unwrap(), vec![ReportEvent::RunStarted]);
        assert_eq!(format!("{composite:?}"), "CompositeObserver { observers_len: 2 }");
    }
}
