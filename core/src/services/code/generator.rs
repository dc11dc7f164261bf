use rand::distributions::Alphanumeric;
use rand::Rng;

/// Length of generated codes unless configured otherwise
pub const DEFAULT_CODE_LENGTH: usize = 6;

/// Source of candidate short codes
pub trait CodeGenerator: Send + Sync {
    /// Draw a new candidate code
    fn generate(&self) -> String;
}

/// Uniform random codes over the alphanumeric alphabet
///
/// Uses the thread-local RNG; codes are identifiers, not secrets.
#[derive(Debug, Clone)]
pub struct RandomCodeGenerator {
    length: usize,
}

impl RandomCodeGenerator {
    pub fn new(length: usize) -> Self {
        Self { length }
    }

    pub fn length(&self) -> usize {
        self.length
    }
}

impl Default for RandomCodeGenerator {
    fn default() -> Self {
        Self::new(DEFAULT_CODE_LENGTH)
    }
}

impl CodeGenerator for RandomCodeGenerator {
    fn generate(&self) -> String {
        rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(self.length)
            .map(char::from)
            .collect()
    }
}

/// Replays a fixed list of codes, repeating the last one forever
#[cfg(test)]
pub(crate) struct SequenceCodeGenerator {
    codes: Vec<String>,
    next: std::sync::Mutex<usize>,
}

#[cfg(test)]
impl SequenceCodeGenerator {
    pub(crate) fn new(codes: &[&str]) -> Self {
        Self {
            codes: codes.iter().map(|c| c.to_string()).collect(),
            next: std::sync::Mutex::new(0),
        }
    }

    pub(crate) fn draws(&self) -> usize {
        *self.next.lock().unwrap()
    }
}

#[cfg(test)]
impl CodeGenerator for SequenceCodeGenerator {
    fn generate(&self) -> String {
        let mut next = self.next.lock().unwrap();
        let index = (*next).min(self.codes.len() - 1);
        *next += 1;
        self.codes[index].clone()
    }
}
