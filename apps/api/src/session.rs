//! The single editing session: the current résumé plus the busy flags that keep
//! AI fill and export from running twice at once.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::RwLock;

use crate::models::resume::Resume;

#[derive(Clone, Default)]
pub struct Session {
    resume: Arc<RwLock<Resume>>,
    pub fill_busy: BusyFlag,
    pub export_busy: BusyFlag,
}

impl Session {
    pub fn new(resume: Resume) -> Self {
        Self {
            resume: Arc::new(RwLock::new(resume)),
            fill_busy: BusyFlag::default(),
            export_busy: BusyFlag::default(),
        }
    }

    /// A copy of the current résumé.
    pub async fn snapshot(&self) -> Resume {
        self.resume.read().await.clone()
    }

    /// Applies `edit` to the current value and commits the result under one write lock.
    pub async fn apply<F>(&self, edit: F) -> Resume
    where
        F: FnOnce(&Resume) -> Resume,
    {
        let mut guard = self.resume.write().await;
        let next = edit(&*guard);
        *guard = next.clone();
        next
    }

    /// Replaces the whole résumé (preset load, AI fill, client upload).
    pub async fn replace(&self, resume: Resume) {
        *self.resume.write().await = resume;
    }
}

/// Marks a suspending operation as in flight.
#[derive(Clone, Default)]
pub struct BusyFlag(Arc<AtomicBool>);

impl BusyFlag {
    /// Sets the flag if it is clear. The returned guard clears it again on drop.
    pub fn try_acquire(&self) -> Option<BusyGuard> {
        self.0
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()
            .map(|_| BusyGuard(self.0.clone()))
    }

    #[cfg(test)]
    pub fn is_busy(&self) -> bool {
        self.0.load(Ordering::Acquire)
    }
}

pub struct BusyGuard(Arc<AtomicBool>);

impl Drop for BusyGuard {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}
