use std::fmt::Debug;

/// Slab of elements addressed by index. Erased slots are recycled by later
/// inserts so a tree that subdivides and collapses every frame keeps reusing
/// the same storage.
#[derive(Clone, Debug)]
pub(crate) struct List<T> {
    data: Vec<Option<T>>,
    elements: usize,
    vacant: Vec<usize>,
}

impl<T> List<T> {
    pub fn new() -> Self {
        Self::with_capacity(128)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            data: Vec::with_capacity(capacity),
            elements: 0,
            vacant: Vec::new(),
        }
    }

    /// Number of occupied slots.
    pub fn size(&self) -> usize {
        self.elements
    }

    pub fn get(&self, index: usize) -> &T {
        self.data[index].as_ref().expect("read from a vacant slot")
    }

    pub fn get_mut(&mut self, index: usize) -> &mut T {
        self.data[index].as_mut().expect("write to a vacant slot")
    }

    pub fn clear(&mut self) {
        self.data.clear();
        self.elements = 0;
        self.vacant.clear();
    }

    pub fn insert(&mut self, element: T) -> usize {
        self.elements += 1;
        if let Some(index) = self.vacant.pop() {
            self.data[index] = Some(element);
            return index;
        }
        self.data.push(Some(element));
        self.data.len() - 1
    }

    /// Frees the slot and hands back what it held.
    pub fn erase(&mut self, index: usize) -> T {
        let element = self.data[index].take().expect("erase of a vacant slot");
        self.elements -= 1;
        self.vacant.push(index);
        element
    }
}

impl<T> Default for List<T> {
    fn default() -> Self {
        Self::new()
    }
}
