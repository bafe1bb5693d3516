//! Scoped subscriptions to the browser viewport.
//!
//! The window's scroll offset and width are process-wide mutable state. This
//! module confines them behind the [`Viewport`] seam: each observer owns one
//! listener, acquired on mount and released exactly once on teardown, and
//! exposes only a derived value as a signal.

use leptos::{ev, prelude::*};

use crate::state::{ViewportClass, is_scrolled};

/// Snapshot of the values read from the viewport.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ViewportMetrics {
    pub scroll_y: f64,
    pub inner_width: f64,
}

/// The viewport events observers can subscribe to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ViewportEvent {
    Scroll,
    Resize,
}

pub type ViewportHandler = Box<dyn Fn(ViewportMetrics) + Send + Sync + 'static>;

/// A registered listener. `remove` consumes it, so it can only run once.
pub trait ViewportListener: Send + Sync + 'static {
    fn remove(self);
}

pub trait Viewport {
    type Listener: ViewportListener;

    fn metrics(&self) -> ViewportMetrics;

    fn listen(&self, event: ViewportEvent, handler: ViewportHandler) -> Self::Listener;
}

/// The real browser window.
///
/// On the server `window_event_listener` registers nothing and handlers never
/// run, so [`Viewport::metrics`] is only reached on the client.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserViewport;

impl Viewport for BrowserViewport {
    type Listener = WindowListenerHandle;

    fn metrics(&self) -> ViewportMetrics {
        let window = window();
        ViewportMetrics {
            scroll_y: window.scroll_y().unwrap_or_default(),
            inner_width: window
                .inner_width()
                .ok()
                .and_then(|width| width.as_f64())
                .unwrap_or_default(),
        }
    }

    fn listen(&self, event: ViewportEvent, handler: ViewportHandler) -> Self::Listener {
        match event {
            ViewportEvent::Scroll => {
                window_event_listener(ev::scroll, move |_| handler(Self.metrics()))
            }
            ViewportEvent::Resize => {
                window_event_listener(ev::resize, move |_| handler(Self.metrics()))
            }
        }
    }
}

impl ViewportListener for WindowListenerHandle {
    fn remove(self) {
        WindowListenerHandle::remove(self);
    }
}

/// Owns one listener for as long as it lives.
pub struct Subscription<L: ViewportListener> {
    listener: Option<L>,
}

impl<L: ViewportListener> Subscription<L> {
    pub fn new<V>(viewport: &V, event: ViewportEvent, handler: ViewportHandler) -> Self
    where
        V: Viewport<Listener = L>,
    {
        Self {
            listener: Some(viewport.listen(event, handler)),
        }
    }

    pub fn is_active(&self) -> bool {
        self.listener.is_some()
    }

    /// Deregisters the listener. Returns `false` if it was already released.
    pub fn release(&mut self) -> bool {
        match self.listener.take() {
            Some(listener) => {
                listener.remove();
                true
            }
            None => false,
        }
    }
}

impl<L: ViewportListener> Drop for Subscription<L> {
    fn drop(&mut self) {
        self.release();
    }
}

/// Subscribes to scroll events, reporting whether the threshold is passed.
pub fn observe_scroll<V: Viewport>(
    viewport: &V,
    on_change: impl Fn(bool) + Send + Sync + 'static,
) -> Subscription<V::Listener> {
    Subscription::new(
        viewport,
        ViewportEvent::Scroll,
        Box::new(move |metrics| on_change(is_scrolled(metrics.scroll_y))),
    )
}

/// Subscribes to resize events, reporting the viewport class.
pub fn observe_viewport_class<V: Viewport>(
    viewport: &V,
    on_change: impl Fn(ViewportClass) + Send + Sync + 'static,
) -> Subscription<V::Listener> {
    Subscription::new(
        viewport,
        ViewportEvent::Resize,
        Box::new(move |metrics| on_change(ViewportClass::from_width(metrics.inner_width))),
    )
}

/// Scroll flag bound to the current reactive owner: the listener is dropped
/// when the owner is cleaned up.
pub fn use_scrolled_with<V: Viewport>(viewport: &V) -> ReadSignal<bool> {
    let (scrolled, set_scrolled) = signal(false);
    let subscription = observe_scroll(viewport, move |flag| {
        if scrolled.get_untracked() != flag {
            set_scrolled.set(flag);
        }
    });
    on_cleanup(move || drop(subscription));
    scrolled
}

/// Classifies the viewport from its current width.
pub fn current_viewport_class<V: Viewport>(viewport: &V) -> ViewportClass {
    ViewportClass::from_width(viewport.metrics().inner_width)
}

/// Viewport class bound to the current reactive owner. The initial class is
/// read once the view is mounted, since the server cannot know it.
pub fn use_viewport_class_with<V>(viewport: V) -> ReadSignal<ViewportClass>
where
    V: Viewport + 'static,
{
    let (class, set_class) = signal(ViewportClass::default());
    let update = move |next: ViewportClass| {
        if class.get_untracked() != next {
            tracing::debug!(?next, "viewport class changed");
            set_class.set(next);
        }
    };
    let subscription = observe_viewport_class(&viewport, update);
    on_cleanup(move || drop(subscription));
    Effect::new(move |_| update(current_viewport_class(&viewport)));
    class
}


#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use super::{testing::FakeViewport, *};

    #[test]
    fn scroll_observer_reports_threshold_crossings() {
        let viewport = FakeViewport::default();
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let _subscription = observe_scroll(&viewport, move |flag| sink.lock().unwrap().push(flag));

        for offset in [10.0, 50.0, 51.0, 300.0, 50.0] {
            viewport.scroll_to(offset);
        }

        assert_eq!(*seen.lock().unwrap(), [false, false, true, true, false]);
    }

    #[test]
    fn dropping_subscription_releases_once() {
        let viewport = FakeViewport::default();
        let mut subscription = observe_scroll(&viewport, |_| {});
        assert!(subscription.is_active());
        assert_eq!(viewport.live(), 1);

        assert!(subscription.release());
        assert!(!subscription.release());
        drop(subscription);

        assert_eq!(viewport.registered(), 1);
        assert_eq!(viewport.removed(), 1);
        assert_eq!(viewport.live(), 0);
    }

    #[test]
    fn hook_releases_listener_on_owner_cleanup() {
        let viewport = FakeViewport::default();
        let owner = Owner::new();
        let scrolled = owner.with(|| use_scrolled_with(&viewport));

        viewport.scroll_to(120.0);
        assert!(scrolled.get_untracked());
        viewport.scroll_to(50.0);
        assert!(!scrolled.get_untracked());

        owner.cleanup();
        assert_eq!(viewport.registered(), 1);
        assert_eq!(viewport.removed(), 1);
        assert_eq!(viewport.live(), 0);
    }

    #[test]
    fn remounting_never_accumulates_listeners() {
        let viewport = FakeViewport::default();
        for cycle in 1..=5 {
            let owner = Owner::new();
            owner.with(|| use_scrolled_with(&viewport));
            assert_eq!(viewport.live(), 1, "cycle {cycle}");
            owner.cleanup();
            assert_eq!(viewport.live(), 0, "cycle {cycle}");
            assert_eq!(viewport.registered(), cycle);
            assert_eq!(viewport.removed(), cycle);
        }
    }

    #[test]
    fn viewport_class_follows_resizes() {
        let viewport = FakeViewport::default();
        let owner = Owner::new();
        let class = owner.with(|| use_viewport_class_with(viewport.clone()));

        viewport.resize_to(390.0);
        assert_eq!(class.get_untracked(), ViewportClass::Mobile);
        viewport.resize_to(1280.0);
        assert_eq!(class.get_untracked(), ViewportClass::Desktop);

        owner.cleanup();
        assert_eq!(viewport.live(), 0);
    }

    #[test]
    fn initial_class_is_read_from_current_width() {
        let viewport = FakeViewport::default();
        viewport.resize_to(390.0);
        assert_eq!(current_viewport_class(&viewport), ViewportClass::Mobile);

        viewport.resize_to(1024.0);
        assert_eq!(current_viewport_class(&viewport), ViewportClass::Desktop);

        // BrowserViewport reports a failed width read as zero.
        assert_eq!(current_viewport_class(&FakeViewport::default()), ViewportClass::Mobile);
    }
}
