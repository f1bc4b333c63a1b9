use crate::{Error, ScriptContainer};
use std::{
    collections::HashMap,
    sync::{
        atomic::{AtomicU64, Ordering},
        Mutex, MutexGuard, OnceLock, PoisonError,
    },
};

// Handle 0 is never issued and handles are never reused.
#[derive(Debug)]
pub struct HandleTable {
    next: AtomicU64,
    containers: Mutex<HashMap<u64, ScriptContainer>>,
}

impl HandleTable {
    pub fn new() -> Self {
        Self {
            next: AtomicU64::new(1),
            containers: Mutex::new(HashMap::new()),
        }
    }

    pub fn global() -> &'static HandleTable {
        static TABLE: OnceLock<HandleTable> = OnceLock::new();
        TABLE.get_or_init(HandleTable::new)
    }

    fn lock(&self) -> MutexGuard<'_, HashMap<u64, ScriptContainer>> {
        self.containers.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn missing(&self, handle: u64) -> Error {
        if handle != 0 && handle < self.next.load(Ordering::SeqCst) {
            Error::invalid_state(format!("Handle {} has been disposed", handle))
        } else {
            Error::invalid_state(format!("Unknown handle {}", handle))
        }
    }

    pub fn create(&self) -> u64 {
        let handle = self.next.fetch_add(1, Ordering::SeqCst);
        self.lock().insert(handle, ScriptContainer::new());
        handle
    }

    pub fn append(&self, handle: u64, amount: i64, script: &[u8]) -> Result<(), Error> {
        let mut containers = self.lock();
        let container = containers.get_mut(&handle).ok_or_else(|| self.missing(handle))?;
        container.append(amount, script)
    }

    pub fn with<T>(&self, handle: u64, f: impl FnOnce(&ScriptContainer) -> T) -> Result<T, Error> {
        let containers = self.lock();
        let container = containers.get(&handle).ok_or_else(|| self.missing(handle))?;
        Ok(f(container))
    }

    pub fn dispose(&self, handle: u64) {
        let container = self.lock().remove(&handle);
        if let Some(container) = container {
            container.dispose();
        }
    }

    pub fn live(&self) -> usize {
        self.lock().len()
    }
}

impl Default for HandleTable {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::HandleTable;
    use crate::ErrorKind;
    use std::{sync::Arc, thread};

    #[test]
    fn lifecycle() {
        let table = HandleTable::new();
        let handle = table.create();
        assert_ne!(handle, 0);
        table.append(handle, 1000, &[0x51]).unwrap();
        table.append(handle, 2500, &[0x52]).unwrap();
        assert_eq!(table.with(handle, |container| container.len()), Ok(Ok(2)));

        table.dispose(handle);
        assert_eq!(table.live(), 0);
        let error = table.append(handle, 1, &[0x00]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidState);
        assert_eq!(error.message(), format!("Handle {} has been disposed", handle));

        table.dispose(handle);
        table.dispose(0);
    }

    #[test]
    fn handles_are_distinct() {
        let table = HandleTable::new();
        let a = table.create();
        let b = table.create();
        assert_ne!(a, b);
        table.append(a, 1, &[]).unwrap();
        assert_eq!(table.with(a, |container| container.len()), Ok(Ok(1)));
        assert_eq!(table.with(b, |container| container.len()), Ok(Ok(0)));
        table.dispose(a);
        assert_eq!(table.live(), 1);
        table.append(b, 2, &[]).unwrap();
    }

    #[test]
    fn unknown_handle() {
        let table = HandleTable::new();
        let error = table.append(42, 1, &[]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidState);
        assert_eq!(error.message(), "Unknown handle 42");
        assert!(table.with(0, |_| ()).is_err());
    }

    #[test]
    fn negative_amount() {
        let table = HandleTable::new();
        let handle = table.create();
        let error = table.append(handle, -1, &[]).unwrap_err();
        assert_eq!(error.kind(), ErrorKind::InvalidArgument);
        assert_eq!(table.with(handle, |container| container.len()), Ok(Ok(0)));
    }

    #[test]
    fn concurrent_dispose() {
        let table = Arc::new(HandleTable::new());
        let handle = table.create();
        table.append(handle, 1000, &[0x51]).unwrap();
        let threads: Vec<_> = (0..8)
            .map(|_| {
                let table = table.clone();
                thread::spawn(move || table.dispose(handle))
            })
            .collect();
        for thread in threads {
            thread.join().unwrap();
        }
        assert_eq!(table.live(), 0);
    }
}
