//! Dropdown widget state.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use siftdom::{Element, Event, FocusState, PointerStream};

use crate::autofocus::AutofocusManager;
use crate::config::DropdownConfig;
use crate::error::SiftError;
use crate::filter::FilteredItems;
use crate::item::Item;
use crate::watcher::{OutsideWatcher, RootRef};

use super::render::{self, ElementIds, RenderSnapshot};

/// Unique identifier for a Dropdown widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct DropdownId(usize);

impl DropdownId {
    fn new() -> Self {
        static COUNTER: AtomicUsize = AtomicUsize::new(0);
        Self(COUNTER.fetch_add(1, Ordering::SeqCst))
    }
}

impl std::fmt::Display for DropdownId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "__dropdown_{}", self.0)
    }
}

/// State that only exists between mount and unmount.
#[derive(Debug)]
struct MountState {
    /// Currently selected item
    active: Option<Item>,
    /// Search text and filtered items
    filter: FilteredItems,
    /// Outside-click subscription, released with this state
    watcher: OutsideWatcher,
    autofocus: AutofocusManager,
    /// `on_did_mount` has not fired yet for this mount
    pending_did_mount: bool,
}

#[derive(Debug)]
struct DropdownInner {
    config: DropdownConfig,
    mount: Option<MountState>,
    /// Element the host should focus next
    focus_request: Option<String>,
}

/// A searchable single-select dropdown.
///
/// The closed control shows the active item. Clicking it opens a panel with
/// a search input and the filtered item list; clicking a row selects it and
/// closes the panel. Pointer events outside the control close it too.
///
/// The active item can also be driven from outside through
/// [`set_active_item`](Self::set_active_item); it is replaced only when the
/// new item's `name_key` value differs from the current one.
///
/// Cloning shares state, like the other widgets.
///
/// # Example
///
/// ```
/// use sift::prelude::*;
///
/// let stream = PointerStream::new();
/// let dropdown = Dropdown::new(
///     DropdownConfig::new().with_items(vec![Item::named("Apple"), Item::named("Banana")]),
/// );
///
/// dropdown.mount(&stream).unwrap();
/// assert_eq!(dropdown.active(), Some(Item::named("Apple")));
///
/// dropdown.toggle_open();
/// dropdown.set_search_text("ban");
/// dropdown.select_row(0, &Event::click_nowhere()).unwrap();
/// assert_eq!(dropdown.active().and_then(|i| i.label("name")).as_deref(), Some("Banana"));
/// assert!(!dropdown.is_opened());
/// ```
#[derive(Debug, Clone)]
pub struct Dropdown {
    /// Unique identifier for this dropdown instance
    id: DropdownId,
    /// Configuration and mounted state
    inner: Arc<RwLock<DropdownInner>>,
    /// Whether the list is open, shared with the outside watcher
    opened: Arc<AtomicBool>,
    /// Dirty flag for re-render
    dirty: Arc<AtomicBool>,
    /// Last rendered tree, shared with the outside watcher
    root: RootRef,
}

impl Dropdown {
    /// Create an unmounted dropdown.
    pub fn new(config: DropdownConfig) -> Self {
        Self {
            id: DropdownId::new(),
            inner: Arc::new(RwLock::new(DropdownInner {
                config,
                mount: None,
                focus_request: None,
            })),
            opened: Arc::new(AtomicBool::new(false)),
            dirty: Arc::new(AtomicBool::new(false)),
            root: Arc::new(RwLock::new(None)),
        }
    }

    /// Get the unique ID for this dropdown.
    pub fn id(&self) -> DropdownId {
        self.id
    }

    /// Get the ID as a string. This is also the root element's ID.
    pub fn id_string(&self) -> String {
        self.id.to_string()
    }

    pub(crate) fn element_ids(&self) -> ElementIds {
        ElementIds::new(&self.id_string())
    }

    /// ID of the clickable closed-state label.
    pub fn label_id(&self) -> String {
        self.element_ids().label
    }

    /// ID of the search input (present only while open).
    pub fn search_input_id(&self) -> String {
        self.element_ids().search
    }

    /// ID of the row at `index` in the filtered list.
    pub fn row_id(&self, index: usize) -> String {
        self.element_ids().row(index)
    }

    // Poisoning is recovered; callbacks never run under these locks.
    fn read(&self) -> RwLockReadGuard<'_, DropdownInner> {
        self.inner.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, DropdownInner> {
        self.inner.write().unwrap_or_else(PoisonError::into_inner)
    }

    fn not_mounted(&self) -> SiftError {
        SiftError::NotMounted {
            id: self.id_string(),
        }
    }

    // -------------------------------------------------------------------------
    // Lifecycle
    // -------------------------------------------------------------------------

    /// Mount the dropdown: create its state, subscribe to `stream` for
    /// outside clicks, render, and fire `on_did_mount`.
    ///
    /// The active item starts as the configured `active_item`, else the
    /// first item, else none.
    pub fn mount(&self, stream: &PointerStream) -> Result<Element, SiftError> {
        {
            let mut guard = self.write();
            if guard.mount.is_some() {
                return Err(SiftError::AlreadyMounted {
                    id: self.id_string(),
                });
            }

            let config = &guard.config;
            let active = config
                .active_item
                .clone()
                .or_else(|| config.items.first().cloned());
            let filter = FilteredItems::new(
                Arc::clone(&config.filter),
                config.items.clone(),
                config.name_key.clone(),
            );

            self.opened.store(false, Ordering::SeqCst);
            let watcher = OutsideWatcher::attach(
                stream,
                self.id_string(),
                Arc::clone(&self.opened),
                Arc::clone(&self.dirty),
                Arc::clone(&self.root),
            );

            guard.mount = Some(MountState {
                active,
                filter,
                watcher,
                autofocus: AutofocusManager::new(),
                pending_did_mount: true,
            });
            guard.focus_request = None;
        }

        log::debug!("[{}] mounted", self.id);
        self.dirty.store(true, Ordering::SeqCst);
        self.render()
    }

    /// Unmount: release the outside-click subscription and discard state.
    pub fn unmount(&self) -> Result<(), SiftError> {
        let mount = {
            let mut guard = self.write();
            guard.focus_request = None;
            guard.mount.take()
        };
        let Some(mount) = mount else {
            return Err(self.not_mounted());
        };
        drop(mount);

        self.opened.store(false, Ordering::SeqCst);
        *self.root.write().unwrap_or_else(PoisonError::into_inner) = None;
        self.dirty.store(true, Ordering::SeqCst);
        log::debug!("[{}] unmounted", self.id);
        Ok(())
    }

    /// Check if the dropdown is mounted.
    pub fn is_mounted(&self) -> bool {
        self.read().mount.is_some()
    }

    /// Whether the outside-click subscription is live.
    pub fn is_watching(&self) -> bool {
        self.read()
            .mount
            .as_ref()
            .is_some_and(|mount| mount.watcher.is_active())
    }

    // -------------------------------------------------------------------------
    // Rendering
    // -------------------------------------------------------------------------

    /// Build the element tree for the current state.
    ///
    /// The first render after mount fires `on_did_mount`. The first render
    /// after the list was opened raises a focus request for the search input
    /// when autofocus is on.
    pub fn render(&self) -> Result<Element, SiftError> {
        let ids = self.element_ids();

        let snapshot = {
            let guard = self.read();
            let mount = guard.mount.as_ref().ok_or_else(|| self.not_mounted())?;
            RenderSnapshot {
                opened: self.opened.load(Ordering::SeqCst),
                active: mount.active.clone(),
                filtered: mount.filter.filtered_items().to_vec(),
                search_text: mount.filter.search_text().to_string(),
                name_key: guard.config.name_key.clone(),
                placeholder: guard.config.placeholder.clone(),
                class_name: guard.config.class_name.clone(),
                disabled: guard.config.disabled,
                has_error: guard.config.has_error,
                renderer: guard.config.effective_renderer(),
            }
        };

        let tree = render::build(&ids, &snapshot);
        *self.root.write().unwrap_or_else(PoisonError::into_inner) = Some(tree.clone());

        let did_mount = {
            let mut guard = self.write();
            let inner = &mut *guard;
            let mount = inner.mount.as_mut().ok_or_else(|| self.not_mounted())?;

            if let Some(request) =
                mount
                    .autofocus
                    .observe(snapshot.opened, inner.config.autofocus, &tree, &ids.search)
            {
                inner.focus_request = Some(request);
            }

            if std::mem::take(&mut mount.pending_did_mount) {
                inner
                    .config
                    .on_did_mount
                    .clone()
                    .map(|handler| (handler, mount.active.clone()))
            } else {
                None
            }
        };

        if let Some((handler, active)) = did_mount {
            log::debug!("[{}] did mount", self.id);
            handler(active.as_ref());
        }

        Ok(tree)
    }

    /// The most recently rendered tree, if mounted.
    pub fn root(&self) -> Option<Element> {
        self.root
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    pub(crate) fn root_ref(&self) -> &RootRef {
        &self.root
    }

    // -------------------------------------------------------------------------
    // Open/close state
    // -------------------------------------------------------------------------

    /// Check if the list is open.
    pub fn is_opened(&self) -> bool {
        self.opened.load(Ordering::SeqCst)
    }

    /// Flip open/closed. Does nothing while disabled or unmounted.
    pub fn toggle_open(&self) {
        let was_open = {
            let mut guard = self.write();
            if guard.config.disabled {
                log::debug!("[{}] toggle ignored: disabled", self.id);
                return;
            }
            let Some(mount) = guard.mount.as_mut() else {
                log::debug!("[{}] toggle ignored: not mounted", self.id);
                return;
            };

            let was_open = self.opened.fetch_xor(true, Ordering::SeqCst);
            if !was_open {
                mount.autofocus.note_opened();
            }
            was_open
        };

        self.dirty.store(true, Ordering::SeqCst);
        log::debug!(
            "[{}] {}",
            self.id,
            if was_open { "closed" } else { "opened" }
        );
    }

    // -------------------------------------------------------------------------
    // Selection
    // -------------------------------------------------------------------------

    /// Make `item` active, close the list and call `on_select` once.
    ///
    /// Does nothing while disabled or unmounted. The callback runs after the
    /// state change, outside any lock; a panic inside it propagates to the
    /// caller.
    pub fn select(&self, item: Item, event: &Event) {
        let (handler, name_key) = {
            let mut guard = self.write();
            if guard.config.disabled {
                log::debug!("[{}] select ignored: disabled", self.id);
                return;
            }
            let handler = guard.config.on_select.clone();
            let name_key = guard.config.name_key.clone();
            let Some(mount) = guard.mount.as_mut() else {
                log::debug!("[{}] select ignored: not mounted", self.id);
                return;
            };
            mount.active = Some(item.clone());
            (handler, name_key)
        };

        self.opened.store(false, Ordering::SeqCst);
        self.dirty.store(true, Ordering::SeqCst);
        log::debug!("[{}] selected {:?}", self.id, item.label(&name_key));

        if let Some(handler) = handler {
            handler(&item, event);
        }
    }

    /// Select the item at `index` in the filtered list.
    pub fn select_row(&self, index: usize, event: &Event) -> Result<(), SiftError> {
        let item = {
            let guard = self.read();
            let mount = guard.mount.as_ref().ok_or_else(|| self.not_mounted())?;
            let filtered = mount.filter.filtered_items();
            filtered
                .get(index)
                .cloned()
                .ok_or(SiftError::RowOutOfRange {
                    index,
                    len: filtered.len(),
                })?
        };

        self.select(item, event);
        Ok(())
    }

    /// Get the active item.
    pub fn active(&self) -> Option<Item> {
        self.read()
            .mount
            .as_ref()
            .and_then(|mount| mount.active.clone())
    }

    /// Notify the dropdown that the controlled `active_item` input changed.
    ///
    /// While mounted, the active item is replaced only if `item` is present
    /// and its `name_key` value differs from the current active item's. An
    /// equal value from a different instance is not a change. With no active
    /// item at all, any present `item` is taken.
    pub fn set_active_item(&self, item: Option<Item>) {
        let mut guard = self.write();
        let inner = &mut *guard;
        inner.config.active_item = item.clone();

        let (Some(item), Some(mount)) = (item, inner.mount.as_mut()) else {
            return;
        };

        let name_key = &inner.config.name_key;
        let replace = match &mount.active {
            Some(current) => !current.same_key(&item, name_key),
            None => true,
        };

        if replace {
            log::debug!(
                "[{}] controlled active item -> {:?}",
                self.id,
                item.label(name_key)
            );
            mount.active = Some(item);
            self.dirty.store(true, Ordering::SeqCst);
        } else {
            log::trace!("[{}] controlled active item unchanged", self.id);
        }
    }

    // -------------------------------------------------------------------------
    // Filtering
    // -------------------------------------------------------------------------

    /// Get the current search text (empty when unmounted).
    pub fn search_text(&self) -> String {
        self.read()
            .mount
            .as_ref()
            .map(|mount| mount.filter.search_text().to_string())
            .unwrap_or_default()
    }

    /// Set the search text and re-filter. Ignored when unmounted.
    ///
    /// Closing the list does not reset it.
    pub fn set_search_text(&self, text: impl Into<String>) {
        let mut guard = self.write();
        if let Some(mount) = guard.mount.as_mut() {
            mount.filter.set_search_text(text);
            self.dirty.store(true, Ordering::SeqCst);
        }
    }

    /// Get the filtered items (empty when unmounted).
    pub fn filtered_items(&self) -> Vec<Item> {
        self.read()
            .mount
            .as_ref()
            .map(|mount| mount.filter.filtered_items().to_vec())
            .unwrap_or_default()
    }

    // -------------------------------------------------------------------------
    // Configuration
    // -------------------------------------------------------------------------

    /// Get the configured items.
    pub fn items(&self) -> Vec<Item> {
        self.read().config.items.clone()
    }

    /// Replace the items. The active item is left alone.
    pub fn set_items(&self, items: Vec<Item>) {
        let mut guard = self.write();
        guard.config.items = items.clone();
        if let Some(mount) = guard.mount.as_mut() {
            mount.filter.set_items(items);
        }
        self.dirty.store(true, Ordering::SeqCst);
    }

    pub fn name_key(&self) -> String {
        self.read().config.name_key.clone()
    }

    pub fn is_disabled(&self) -> bool {
        self.read().config.disabled
    }

    pub fn set_disabled(&self, disabled: bool) {
        self.write().config.disabled = disabled;
        self.dirty.store(true, Ordering::SeqCst);
    }

    pub fn has_error(&self) -> bool {
        self.read().config.has_error
    }

    pub fn set_has_error(&self, has_error: bool) {
        self.write().config.has_error = has_error;
        self.dirty.store(true, Ordering::SeqCst);
    }

    pub fn set_autofocus(&self, autofocus: bool) {
        self.write().config.autofocus = autofocus;
    }

    pub fn placeholder(&self) -> String {
        self.read().config.placeholder.clone()
    }

    pub fn set_placeholder(&self, placeholder: impl Into<String>) {
        self.write().config.placeholder = placeholder.into();
        self.dirty.store(true, Ordering::SeqCst);
    }

    pub fn set_class_name(&self, class_name: impl Into<String>) {
        self.write().config.class_name = class_name.into();
        self.dirty.store(true, Ordering::SeqCst);
    }

    /// Replace the selection callback.
    pub fn set_on_select<F>(&self, handler: F)
    where
        F: Fn(&Item, &Event) + Send + Sync + 'static,
    {
        self.write().config.on_select = Some(Arc::new(handler));
    }

    // -------------------------------------------------------------------------
    // Focus control
    // -------------------------------------------------------------------------

    /// Check and clear the focus request (called by the host after render).
    pub fn take_focus_request(&self) -> Option<String> {
        self.write().focus_request.take()
    }

    /// Take the focus request and apply it to `focus`.
    /// Returns true if focus changed.
    pub fn apply_focus_request(&self, focus: &mut FocusState) -> bool {
        let Some(id) = self.take_focus_request() else {
            return false;
        };
        match self.root() {
            Some(root) => focus.focus_in(&root, &id),
            None => false,
        }
    }

    // -------------------------------------------------------------------------
    // Dirty tracking
    // -------------------------------------------------------------------------

    /// Check if the dropdown state has changed since the last clear.
    pub fn is_dirty(&self) -> bool {
        self.dirty.load(Ordering::SeqCst)
    }

    /// Clear the dirty flag.
    pub fn clear_dirty(&self) {
        self.dirty.store(false, Ordering::SeqCst);
    }
}
