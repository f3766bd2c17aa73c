//! Event routing between the host page and mounted widgets.
//!
//! The [`Document`] plays the role of the host page: widgets subscribe
//! listeners to it (or to their own panel) and events are only delivered
//! through a live subscription. Releasing a handle is the only way a
//! widget stops hearing events, so leaked handles show up in
//! [`ListenerRegistry::len`].

use std::collections::{BTreeMap, HashMap};

use crate::input::{KeyEvent, PointerEvent, UiEvent};
use crate::widget::{CalculatorWidget, WidgetId};

/// Where an event is aimed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventTarget {
    /// The whole page.
    Document,
    /// A widget's pop-up panel. Events aimed here bubble to the document.
    Panel(WidgetId),
}

/// Kind of event a listener waits for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventKind {
    KeyDown,
    PointerDown,
    PointerMove,
    PointerUp,
}

impl EventKind {
    /// Kind of `event`, or `None` for events nobody listens to.
    pub fn of(event: &UiEvent) -> Option<Self> {
        match event {
            UiEvent::Key(KeyEvent::Pressed(_)) => Some(EventKind::KeyDown),
            UiEvent::Key(KeyEvent::Released(_)) => None,
            UiEvent::Pointer(PointerEvent::Down { .. }) => Some(EventKind::PointerDown),
            UiEvent::Pointer(PointerEvent::Move { .. }) => Some(EventKind::PointerMove),
            UiEvent::Pointer(PointerEvent::Up { .. }) => Some(EventKind::PointerUp),
        }
    }
}

/// Handle returned when a listener is added; needed to remove it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ListenerHandle(u64);

#[derive(Debug, Clone, Copy)]
struct Subscription {
    target: EventTarget,
    kind: EventKind,
    owner: WidgetId,
}

/// Table of live listener subscriptions.
#[derive(Debug, Clone, Default)]
pub struct ListenerRegistry {
    next_id: u64,
    listeners: BTreeMap<ListenerHandle, Subscription>,
}

impl ListenerRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Subscribe `owner` to `kind` events on `target`.
    pub fn add(
        &mut self,
        target: EventTarget,
        kind: EventKind,
        owner: WidgetId,
    ) -> ListenerHandle {
        let handle = ListenerHandle(self.next_id);
        self.next_id += 1;
        self.listeners.insert(handle, Subscription { target, kind, owner });
        log::trace!("Listener {:?} added: {:?} on {:?} for {}", handle, kind, target, owner);
        handle
    }

    /// Remove a subscription. Returns false if it was already gone.
    pub fn remove(&mut self, handle: ListenerHandle) -> bool {
        let removed = self.listeners.remove(&handle).is_some();
        if !removed {
            log::warn!("Listener {:?} was already removed", handle);
        }
        removed
    }

    pub fn contains(&self, handle: ListenerHandle) -> bool {
        self.listeners.contains_key(&handle)
    }

    /// Number of live subscriptions.
    pub fn len(&self) -> usize {
        self.listeners.len()
    }

    pub fn is_empty(&self) -> bool {
        self.listeners.is_empty()
    }

    /// Number of live subscriptions held by `owner`.
    pub fn count_for(&self, owner: WidgetId) -> usize {
        self.listeners.values().filter(|s| s.owner == owner).count()
    }

    /// Owners that should receive a `kind` event aimed at `target`, in
    /// subscription order. Panel events also reach document listeners.
    pub fn recipients(&self, target: EventTarget, kind: EventKind) -> Vec<WidgetId> {
        let mut owners = Vec::new();
        for subscription in self.listeners.values() {
            if subscription.kind != kind {
                continue;
            }
            let hit = subscription.target == target
                || subscription.target == EventTarget::Document;
            if hit && !owners.contains(&subscription.owner) {
                owners.push(subscription.owner);
            }
        }
        owners
    }
}

/// The host page: mounted widgets plus their listener table.
#[derive(Debug, Default)]
pub struct Document {
    listeners: ListenerRegistry,
    widgets: HashMap<WidgetId, CalculatorWidget>,
    /// Mount order, for stable iteration.
    order: Vec<WidgetId>,
}

impl Document {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mount a widget and return its id.
    pub fn mount(&mut self, mut widget: CalculatorWidget) -> WidgetId {
        let id = widget.id();
        widget.mount(&mut self.listeners);
        self.widgets.insert(id, widget);
        self.order.push(id);
        id
    }

    /// Tear a widget down, releasing all of its listeners.
    pub fn unmount(&mut self, id: WidgetId) -> Option<CalculatorWidget> {
        let mut widget = self.widgets.remove(&id)?;
        widget.unmount(&mut self.listeners);
        self.order.retain(|other| *other != id);
        Some(widget)
    }

    /// Tear every widget down.
    pub fn unmount_all(&mut self) {
        for id in self.order.clone() {
            self.unmount(id);
        }
    }

    pub fn widget(&self, id: WidgetId) -> Option<&CalculatorWidget> {
        self.widgets.get(&id)
    }

    pub fn widget_mut(&mut self, id: WidgetId) -> Option<&mut CalculatorWidget> {
        self.widgets.get_mut(&id)
    }

    /// Mounted widget ids in mount order.
    pub fn widget_ids(&self) -> &[WidgetId] {
        &self.order
    }

    /// Show or hide a widget's pop-up.
    pub fn toggle_dropdown(&mut self, id: WidgetId) {
        if let Some(widget) = self.widgets.get_mut(&id) {
            widget.toggle_dropdown(&mut self.listeners);
        }
    }

    /// Call once a rendering pass has completed.
    pub fn after_render(&mut self) {
        for id in &self.order {
            if let Some(widget) = self.widgets.get_mut(id) {
                widget.after_render(&mut self.listeners);
            }
        }
    }

    /// Deliver `event` aimed at `target`. Returns how many widgets received it.
    pub fn dispatch(&mut self, target: EventTarget, event: &UiEvent) -> usize {
        let Some(kind) = EventKind::of(event) else {
            return 0;
        };
        let recipients = self.listeners.recipients(target, kind);
        let mut delivered = 0;
        for owner in recipients {
            if let Some(widget) = self.widgets.get_mut(&owner) {
                widget.handle_event(target, event);
                delivered += 1;
            }
        }
        delivered
    }

    /// Number of live listener subscriptions.
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn listeners(&self) -> &ListenerRegistry {
        &self.listeners
    }
}
