/// A coupled sender/receiver pair for one room's inbound intent queue.
/// Keeping both ends bundled means a room's handle and its task always
/// agree on the channel they're speaking over.
#[derive(Debug)]
pub struct Channel<T> {
    tx: tokio::sync::mpsc::UnboundedSender<T>,
    rx: tokio::sync::mpsc::UnboundedReceiver<T>,
}

impl<T> Default for Channel<T> {
    fn default() -> Self {
        let (tx, rx) = tokio::sync::mpsc::unbounded_channel();
        Self { tx, rx }
    }
}

impl<T> Channel<T> {
    pub fn sender(&self) -> tokio::sync::mpsc::UnboundedSender<T> {
        self.tx.clone()
    }
    pub fn receiver(&mut self) -> &mut tokio::sync::mpsc::UnboundedReceiver<T> {
        &mut self.rx
    }
}
