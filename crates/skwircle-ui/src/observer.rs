//! Frame-coalesced dimension observation.
//!
//! The host layout engine reports raw box sizes through
//! [`ObserverService::notify`] whenever it likes; [`ObserverService::flush_frame`]
//! runs once per animation frame and publishes at most one size per element,
//! dropping changes of [`SIGNIFICANT_CHANGE`] or less on both axes.
//!
//! Registrations are reference counted through [`ObserverHandle`]: cloning a
//! handle adds a reference, dropping one removes it, and the registration (and
//! any pending notification) disappears with the last handle.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use skwircle_engine::coords::{Dimensions, SIGNIFICANT_CHANGE};

/// Identifies one observed element for the lifetime of its registration.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, PartialOrd, Ord)]
pub struct ElementId(u64);

impl ElementId {
    #[inline]
    pub fn raw(self) -> u64 {
        self.0
    }
}

/// A published size change delivered by [`ObserverHandle::poll`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct DimensionUpdate {
    pub dimensions: Dimensions,
    /// `true` for the first update this handle ever receives.
    pub first_measurement: bool,
}

#[derive(Debug, Default)]
struct Registration {
    refs: usize,
    pending: Option<Dimensions>,
    published: Option<Dimensions>,
    /// Bumped on every publication; handles compare against it.
    generation: u64,
}

#[derive(Debug, Default)]
struct Registry {
    next_id: u64,
    entries: HashMap<ElementId, Registration>,
}

/// Injectable dimension observer shared by every shape in a scene.
///
/// Cheap to clone; clones share the same registry. Not `Send`: all
/// observation happens on the UI thread.
#[derive(Debug, Clone, Default)]
pub struct ObserverService {
    inner: Rc<RefCell<Registry>>,
}

impl ObserverService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a new element and returns its first handle.
    pub fn observe(&self) -> ObserverHandle {
        self.register(None)
    }

    /// Registers a new element whose size is already known.
    ///
    /// `initial` counts as the published size: the first real measurement is
    /// only delivered if it differs significantly from it, and is never
    /// flagged as a first measurement.
    pub fn observe_with(&self, initial: Dimensions) -> ObserverHandle {
        self.register(Some(initial))
    }

    fn register(&self, initial: Option<Dimensions>) -> ObserverHandle {
        let mut reg = self.inner.borrow_mut();
        let id = ElementId(reg.next_id);
        reg.next_id += 1;
        reg.entries.insert(
            id,
            Registration {
                refs: 1,
                published: initial,
                ..Registration::default()
            },
        );
        log::debug!("observer attach #{} (initial={initial:?})", id.0);

        ObserverHandle {
            id,
            service: self.clone(),
            seen_generation: 0,
            delivered_any: initial.is_some(),
        }
    }

    /// Records a raw size report for `id`, replacing any earlier report this frame.
    ///
    /// Unknown (detached) elements and non-finite sizes are ignored.
    pub fn notify(&self, id: ElementId, width: f32, height: f32) {
        if !width.is_finite() || !height.is_finite() {
            log::trace!("observer #{}: ignoring non-finite size {width}x{height}", id.0);
            return;
        }
        let mut reg = self.inner.borrow_mut();
        match reg.entries.get_mut(&id) {
            Some(entry) => entry.pending = Some(Dimensions::new(width, height)),
            None => log::trace!("observer #{}: notification after detach", id.0),
        }
    }

    /// Publishes pending reports. Call once per animation frame.
    ///
    /// Returns the number of elements whose published size changed.
    pub fn flush_frame(&self) -> usize {
        let mut reg = self.inner.borrow_mut();
        let mut published = 0;
        for (id, entry) in reg.entries.iter_mut() {
            let Some(next) = entry.pending.take() else {
                continue;
            };
            let significant = match entry.published {
                None => true,
                Some(prev) => prev.differs_significantly(next),
            };
            if significant {
                log::trace!("observer #{}: publish {}x{}", id.0, next.width, next.height);
                entry.published = Some(next);
                entry.generation += 1;
                published += 1;
            } else {
                log::trace!(
                    "observer #{}: change to {}x{} within {SIGNIFICANT_CHANGE}px, dropped",
                    id.0,
                    next.width,
                    next.height
                );
            }
        }
        published
    }

    #[inline]
    pub fn is_registered(&self, id: ElementId) -> bool {
        self.inner.borrow().entries.contains_key(&id)
    }

    /// Number of live registrations.
    #[inline]
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Last published size of `id`.
    pub fn published(&self, id: ElementId) -> Option<Dimensions> {
        self.inner.borrow().entries.get(&id).and_then(|e| e.published)
    }
}

/// One reference to an element registration.
#[derive(Debug)]
pub struct ObserverHandle {
    id: ElementId,
    service: ObserverService,
    seen_generation: u64,
    delivered_any: bool,
}

impl ObserverHandle {
    #[inline]
    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Reports a raw size for this element.
    #[inline]
    pub fn notify(&self, dimensions: Dimensions) {
        self.service.notify(self.id, dimensions.width, dimensions.height);
    }

    /// Returns the latest published size if it changed since the last poll.
    pub fn poll(&mut self) -> Option<DimensionUpdate> {
        let reg = self.service.inner.borrow();
        let entry = reg.entries.get(&self.id)?;
        if entry.generation == self.seen_generation {
            return None;
        }
        let dimensions = entry.published?;
        self.seen_generation = entry.generation;

        // An empty box is not a measurement yet; the flag waits for real geometry.
        let first_measurement = !self.delivered_any && !dimensions.is_empty();
        if first_measurement {
            self.delivered_any = true;
        }
        Some(DimensionUpdate { dimensions, first_measurement })
    }
}

impl Clone for ObserverHandle {
    fn clone(&self) -> Self {
        if let Some(entry) = self.service.inner.borrow_mut().entries.get_mut(&self.id) {
            entry.refs += 1;
        }
        Self {
            id: self.id,
            service: self.service.clone(),
            seen_generation: self.seen_generation,
            delivered_any: self.delivered_any,
        }
    }
}

impl Drop for ObserverHandle {
    fn drop(&mut self) {
        let mut reg = self.service.inner.borrow_mut();
        let Some(entry) = reg.entries.get_mut(&self.id) else {
            return;
        };
        entry.refs -= 1;
        if entry.refs == 0 {
            reg.entries.remove(&self.id);
            log::debug!("observer detach #{}", self.id.0);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(service: &ObserverService, handle: &mut ObserverHandle, w: f32, h: f32) -> Option<DimensionUpdate> {
        handle.notify(Dimensions::new(w, h));
        service.flush_frame();
        handle.poll()
    }

    // ── publication ──

    #[test]
    fn first_measurement_is_flagged_once() {
        let service = ObserverService::new();
        let mut handle = service.observe();
        assert_eq!(handle.poll(), None);

        let first = frame(&service, &mut handle, 100.0, 50.0).unwrap();
        assert!(first.first_measurement);
        assert_eq!(first.dimensions, Dimensions::new(100.0, 50.0));

        let second = frame(&service, &mut handle, 200.0, 50.0).unwrap();
        assert!(!second.first_measurement);
        assert_eq!(handle.poll(), None);
    }

    #[test]
    fn empty_report_is_not_the_first_measurement() {
        let service = ObserverService::new();
        let mut handle = service.observe();

        let empty = frame(&service, &mut handle, 0.0, 0.0).unwrap();
        assert!(!empty.first_measurement);
        assert!(empty.dimensions.is_empty());

        let real = frame(&service, &mut handle, 120.0, 60.0).unwrap();
        assert!(real.first_measurement);
        assert_eq!(real.dimensions, Dimensions::new(120.0, 60.0));
    }

    #[test]
    fn sub_pixel_changes_are_dropped() {
        let service = ObserverService::new();
        let mut handle = service.observe();
        frame(&service, &mut handle, 100.0, 50.0).unwrap();

        assert_eq!(frame(&service, &mut handle, 100.4, 50.2), None);
        assert_eq!(frame(&service, &mut handle, 101.0, 51.0), None);

        let update = frame(&service, &mut handle, 102.0, 50.0).unwrap();
        assert_eq!(update.dimensions, Dimensions::new(102.0, 50.0));
    }

    #[test]
    fn reports_coalesce_to_last_per_frame() {
        let service = ObserverService::new();
        let mut handle = service.observe();
        for w in [10.0, 20.0, 30.0] {
            handle.notify(Dimensions::new(w, 10.0));
        }
        assert_eq!(service.flush_frame(), 1);
        assert_eq!(handle.poll().unwrap().dimensions.width, 30.0);
        assert_eq!(service.flush_frame(), 0);
    }

    #[test]
    fn initial_dimensions_suppress_matching_measurement() {
        let service = ObserverService::new();
        let mut handle = service.observe_with(Dimensions::new(48.0, 48.0));
        assert_eq!(frame(&service, &mut handle, 48.5, 48.0), None);
        let update = frame(&service, &mut handle, 64.0, 64.0).unwrap();
        assert!(!update.first_measurement);
    }

    #[test]
    fn non_finite_reports_are_ignored() {
        let service = ObserverService::new();
        let mut handle = service.observe();
        service.notify(handle.id(), f32::NAN, 10.0);
        assert_eq!(service.flush_frame(), 0);
        assert_eq!(handle.poll(), None);
    }

    // ── lifetime ──

    #[test]
    fn clones_keep_registration_alive() {
        let service = ObserverService::new();
        let handle = service.observe();
        let id = handle.id();
        let clone = handle.clone();
        drop(handle);
        assert!(service.is_registered(id));
        drop(clone);
        assert!(!service.is_registered(id));
        assert!(service.is_empty());
    }

    #[test]
    fn pending_notification_dies_with_registration() {
        let service = ObserverService::new();
        let handle = service.observe();
        let id = handle.id();
        handle.notify(Dimensions::new(10.0, 10.0));
        drop(handle);

        service.notify(id, 20.0, 20.0);
        assert_eq!(service.flush_frame(), 0);
        assert_eq!(service.published(id), None);
    }

    #[test]
    fn ids_are_not_reused() {
        let service = ObserverService::new();
        let a = service.observe().id();
        let b = service.observe().id();
        assert_ne!(a, b);
    }
}
