use std::cell::RefCell;
use std::io::Read;

use super::Source;
use crate::error::LoadError;

/// Session document piped on standard input.
///
/// Stdin can only be drained once, so later cycles in watch mode reuse the
/// document read on the first one.
#[derive(Default)]
pub(crate) struct StdinSource {
    content: RefCell<Option<String>>,
}

impl Source for StdinSource {
    fn display_name(&self) -> String {
        "stdin".to_string()
    }

    fn fetch(&self) -> Result<String, LoadError> {
        if let Some(content) = self.content.borrow().as_ref() {
            return Ok(content.clone());
        }
        let mut content = String::new();
        std::io::stdin()
            .read_to_string(&mut content)
            .map_err(|e| self.unavailable(e))?;
        *self.content.borrow_mut() = Some(content.clone());
        Ok(content)
    }
}
