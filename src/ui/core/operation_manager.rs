use super::actions::Action;
use std::collections::HashMap;
use std::future::Future;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;

pub type OperationId = u64;

#[derive(Debug)]
pub struct BackgroundOperation {
    pub id: OperationId,
    pub handle: JoinHandle<()>,
    pub description: String,
    pub started_at: std::time::Instant,
}

/// Runs to-do operations off the event loop.
///
/// An operation may sit in a dialog for as long as the user likes, so it
/// cannot run inline with input handling. Finished operations trigger a
/// repaint and are reaped on the next tick.
pub struct OperationManager {
    operations: HashMap<OperationId, BackgroundOperation>,
    next_operation_id: OperationId,
    action_sender: mpsc::UnboundedSender<Action>,
}

impl OperationManager {
    pub fn new() -> (Self, mpsc::UnboundedReceiver<Action>) {
        let (tx, rx) = mpsc::unbounded_channel();

        (
            Self {
                operations: HashMap::new(),
                next_operation_id: 1,
                action_sender: tx,
            },
            rx,
        )
    }

    /// Sender for components that request repaints on their own
    pub fn action_sender(&self) -> mpsc::UnboundedSender<Action> {
        self.action_sender.clone()
    }

    /// Spawn an operation on the runtime
    pub fn spawn_operation<Fut>(&mut self, operation: Fut, description: String) -> OperationId
    where
        Fut: Future<Output = ()> + Send + 'static,
    {
        let operation_id = self.next_operation_id;
        self.next_operation_id += 1;

        let action_sender = self.action_sender.clone();
        let desc_for_task = description.clone();
        log::debug!("Spawning operation #{}: {}", operation_id, description);

        let handle = tokio::spawn(async move {
            operation.await;
            log::debug!("Operation #{} finished: {}", operation_id, desc_for_task);
            let _ = action_sender.send(Action::Render);
        });

        let operation = BackgroundOperation {
            id: operation_id,
            handle,
            description,
            started_at: std::time::Instant::now(),
        };

        self.operations.insert(operation_id, operation);
        operation_id
    }

    /// Drop handles of finished operations, returning their ids
    pub fn cleanup_finished_operations(&mut self) -> Vec<OperationId> {
        let finished: Vec<OperationId> = self
            .operations
            .iter()
            .filter(|(_, operation)| operation.handle.is_finished())
            .map(|(id, _)| *id)
            .collect();

        for id in &finished {
            self.operations.remove(id);
        }

        finished
    }

    /// Abort every running operation
    pub fn cancel_all_operations(&mut self) {
        for (_, operation) in self.operations.drain() {
            log::debug!(
                "Aborting operation #{} after {:?}: {}",
                operation.id,
                operation.started_at.elapsed(),
                operation.description
            );
            operation.handle.abort();
        }
    }

    /// Get the number of active operations
    pub fn operation_count(&self) -> usize {
        self.operations.len()
    }
}

impl Drop for OperationManager {
    fn drop(&mut self) {
        self.cancel_all_operations();
    }
}
