use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_LISTENER_ID: AtomicU64 = AtomicU64::new(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ListenerKind {
    OutsideClick,
    Keydown,
}

/// Proof of a live registration. Not `Clone`, so a registration can only be
/// detached once.
#[derive(Debug, PartialEq, Eq)]
pub struct ListenerHandle {
    id: u64,
    kind: ListenerKind,
}

impl ListenerHandle {
    pub fn kind(&self) -> ListenerKind {
        self.kind
    }
}

/// Document-level listener table. The app subscription only forwards an event
/// kind while a registration for it is live.
#[derive(Debug, Default)]
pub struct EventListeners {
    active: Vec<(u64, ListenerKind)>,
    total_attached: usize,
    total_detached: usize,
}

impl EventListeners {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn attach(&mut self, kind: ListenerKind) -> ListenerHandle {
        let id = NEXT_LISTENER_ID.fetch_add(1, Ordering::Relaxed);
        self.active.push((id, kind));
        self.total_attached += 1;
        log::debug!("[POPUP] Attached {:?} listener #{}", kind, id);
        ListenerHandle { id, kind }
    }

    pub fn detach(&mut self, handle: ListenerHandle) -> bool {
        let before = self.active.len();
        self.active.retain(|(id, _)| *id != handle.id);
        let removed = self.active.len() < before;
        if removed {
            self.total_detached += 1;
            log::debug!("[POPUP] Detached {:?} listener #{}", handle.kind, handle.id);
        } else {
            log::warn!(
                "[POPUP] Listener #{} ({:?}) was not registered",
                handle.id,
                handle.kind
            );
        }
        removed
    }

    pub fn active_count(&self, kind: ListenerKind) -> usize {
        self.active.iter().filter(|(_, k)| *k == kind).count()
    }

    pub fn is_active(&self, kind: ListenerKind) -> bool {
        self.active_count(kind) > 0
    }

    pub fn total_attached(&self) -> usize {
        self.total_attached
    }

    pub fn total_detached(&self) -> usize {
        self.total_detached
    }
}
