use iced::window::{self, Id};
use iced::{Size, Task};

use crate::core::orchestrators::PopupHost;
use crate::global_constants;

/// Mounts the picker root as its own window, detached from the composer layout.
///
/// `window::open`/`window::close` only describe work, so the tasks are queued here
/// and drained by the orchestrator after each update.
#[derive(Default)]
pub struct PopupWindowHost {
    pending: Vec<Task<Id>>,
}

impl PopupWindowHost {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn pending_len(&self) -> usize {
        self.pending.len()
    }

    pub fn take_tasks(&mut self) -> Task<Id> {
        Task::batch(std::mem::take(&mut self.pending))
    }
}

impl PopupHost for PopupWindowHost {
    type Root = Id;

    fn mount_root(&mut self) -> Id {
        let (id, task) = window::open(window::Settings {
            size: Size::new(560.0, 520.0),
            position: window::Position::Centered,
            resizable: true,
            ..Default::default()
        });
        log::debug!(
            "[POPUP] Opening {} window {:?}",
            global_constants::PICKER_WINDOW_TITLE,
            id
        );
        self.pending.push(task);
        id
    }

    fn unmount_root(&mut self, root: Id) {
        log::debug!("[POPUP] Closing window {:?}", root);
        self.pending.push(window::close(root));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mount_and_unmount_queue_window_tasks() {
        let mut host = PopupWindowHost::new();

        let first = host.mount_root();
        let second = host.mount_root();
        host.unmount_root(first);

        assert_ne!(first, second);
        assert_eq!(host.pending_len(), 3);

        let _ = host.take_tasks();
        assert_eq!(host.pending_len(), 0);
    }
}
