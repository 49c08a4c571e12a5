//! Outside-interaction dismissal.
//!
//! While a dropdown is mounted it holds one capture-phase subscription on the
//! pointer stream. Any pointer event whose target is not inside the
//! dropdown's last rendered root closes the list.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, RwLock};

use siftdom::{Element, PointerStream, Subscription, contains};

/// Shared slot holding the most recently rendered root element.
pub type RootRef = Arc<RwLock<Option<Element>>>;

/// Closes an open dropdown on pointer events outside its root.
///
/// Unsubscribes when dropped.
#[derive(Debug)]
pub struct OutsideWatcher {
    subscription: Subscription,
}

impl OutsideWatcher {
    /// Subscribe to `stream` on behalf of the dropdown `owner`.
    pub fn attach(
        stream: &PointerStream,
        owner: String,
        opened: Arc<AtomicBool>,
        dirty: Arc<AtomicBool>,
        root: RootRef,
    ) -> Self {
        let subscription = stream.subscribe(move |event| {
            if !opened.load(Ordering::SeqCst) {
                return;
            }

            let inside = match root.read() {
                Ok(guard) => match guard.as_ref() {
                    Some(root) => event.target().is_some_and(|target| contains(root, target)),
                    // Nothing rendered yet
                    None => return,
                },
                Err(_) => return,
            };

            if inside {
                return;
            }

            if opened.swap(false, Ordering::SeqCst) {
                dirty.store(true, Ordering::SeqCst);
                log::debug!(
                    "[{owner}] pointer outside (target={:?}), closing",
                    event.target()
                );
            }
        });

        log::debug!("[watcher] subscribed #{}", subscription.id());
        Self { subscription }
    }

    /// Whether the subscription is still registered.
    pub fn is_active(&self) -> bool {
        self.subscription.is_active()
    }
}
