//! Single-consumer task queue marshaling work onto the UI thread.
//!
//! The renderer service delivers transport events on its own network thread,
//! but view and engine mutations are only safe on the UI thread. Producers
//! post boxed closures from any thread; the UI loop drains them in FIFO
//! order. There is no cancellation: a posted task always runs, or is dropped
//! unexecuted when the queue itself is dropped.

use crossbeam_channel::{Receiver, Sender, unbounded};

type UiTask = Box<dyn FnOnce() + Send>;

/// Producer half, cheap to clone and share across relay threads.
#[derive(Clone)]
pub struct UiHandle {
    tx: Sender<UiTask>,
}

impl UiHandle {
    /// Queue `task` for execution on the UI thread. Posting never blocks;
    /// tasks posted from one thread run in the order they were posted.
    pub fn post(&self, task: impl FnOnce() + Send + 'static) {
        // Un envoi vers une file détruite signifie que l'UI est partie :
        // la tâche est simplement abandonnée.
        let _ = self.tx.send(Box::new(task));
    }
}

/// Consumer half, owned by the UI thread.
pub struct UiQueue {
    rx: Receiver<UiTask>,
}

impl UiQueue {
    pub fn new() -> (UiHandle, UiQueue) {
        let (tx, rx) = unbounded::<UiTask>();
        (UiHandle { tx }, UiQueue { rx })
    }

    /// Exécute toutes les tâches en attente, sans bloquer. Retourne le nombre
    /// de tâches exécutées.
    pub fn process_pending(&self) -> usize {
        let mut count = 0;
        while let Ok(task) = self.rx.try_recv() {
            task();
            count += 1;
        }
        count
    }

    /// Boucle jusqu'à ce que tous les producteurs aient disparu.
    pub fn run(&self) {
        while let Ok(task) = self.rx.recv() {
            task();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::{Arc, Mutex};

    #[test]
    fn tasks_run_in_fifo_order() {
        let (handle, queue) = UiQueue::new();
        let seen = Arc::new(Mutex::new(Vec::new()));

        for i in 0..5 {
            let seen = seen.clone();
            handle.post(move || seen.lock().unwrap().push(i));
        }

        assert_eq!(queue.process_pending(), 5);
        assert_eq!(*seen.lock().unwrap(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn posting_after_queue_drop_is_a_no_op() {
        let (handle, queue) = UiQueue::new();
        drop(queue);
        handle.post(|| panic!("must never run"));
    }
}
