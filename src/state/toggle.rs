//! Boolean toggle state

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Toggle {
    value: bool,
}

impl Toggle {
    pub fn new(initial: bool) -> Self {
        Self { value: initial }
    }

    pub fn value(&self) -> bool {
        self.value
    }

    pub fn toggle(&mut self) {
        self.value = !self.value;
    }

    pub fn set(&mut self, value: bool) {
        self.value = value;
    }
}
