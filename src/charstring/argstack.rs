use super::{CharStringError, MAX_ARGUMENTS_STACK_LEN};

/// Storage for the operand stack while interpreting CharStrings.
///
/// A fresh stack is created per top-level glyph invocation and shared with
/// any subroutines that glyph calls.
#[derive(Clone)]
pub struct ArgumentsStack {
    data: [f32; MAX_ARGUMENTS_STACK_LEN],
    len: usize,
}

impl ArgumentsStack {
    pub fn new() -> ArgumentsStack {
        ArgumentsStack {
            data: [0.0; MAX_ARGUMENTS_STACK_LEN],
            len: 0,
        }
    }

    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub fn push(&mut self, n: f32) -> Result<(), CharStringError> {
        if self.len == MAX_ARGUMENTS_STACK_LEN {
            Err(CharStringError::StackLimitReached)
        } else {
            self.data[self.len] = n;
            self.len += 1;
            Ok(())
        }
    }

    pub fn at(&self, index: usize) -> f32 {
        self.data[index]
    }

    pub fn pop(&mut self) -> f32 {
        debug_assert!(!self.is_empty());
        self.len -= 1;
        self.data[self.len]
    }

    pub fn all(&self) -> &[f32] {
        &self.data[..self.len]
    }

    pub fn all_mut(&mut self) -> &mut [f32] {
        &mut self.data[..self.len]
    }

    pub fn reverse(&mut self) {
        // Reverse only the actual data and not the whole stack.
        self.all_mut().reverse();
    }

    pub fn clear(&mut self) {
        self.len = 0;
    }
}

impl Default for ArgumentsStack {
    fn default() -> Self {
        ArgumentsStack::new()
    }
}

impl std::fmt::Debug for ArgumentsStack {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.all()).finish()
    }
}
