/// Single-owner value with change notification.
///
/// Only the owner can change the value; listeners are called synchronously after
/// every change, on the same thread. Setting an equal value is not a change.
pub struct Observable<T> {
    value: T,
    listeners: Vec<Box<dyn FnMut(&T)>>,
}

impl<T: PartialEq> Observable<T> {
    pub fn new(value: T) -> Self {
        Self {
            value,
            listeners: Vec::new(),
        }
    }

    pub fn get(&self) -> &T {
        &self.value
    }

    pub fn subscribe<F>(&mut self, listener: F)
    where
        F: FnMut(&T) + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Returns whether the value changed
    pub fn set(&mut self, value: T) -> bool {
        if value == self.value {
            return false;
        }

        self.value = value;
        for listener in &mut self.listeners {
            listener(&self.value);
        }
        true
    }
}

impl<T: std::fmt::Debug> std::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
