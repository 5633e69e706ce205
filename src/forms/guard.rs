use std::cell::Cell;
use std::rc::Rc;

/// Evita envíos duplicados mientras hay una petición en vuelo
#[derive(Clone, Debug, Default)]
pub struct SubmitGuard {
    in_flight: Rc<Cell<bool>>,
}

/// Mientras exista el ticket el formulario cuenta como "enviando"
#[derive(Debug)]
pub struct SubmitTicket {
    in_flight: Rc<Cell<bool>>,
}

impl SubmitGuard {
    pub fn new() -> Self {
        Self::default()
    }

    /// `None` si ya hay un envío pendiente
    pub fn try_begin(&self) -> Option<SubmitTicket> {
        if self.in_flight.replace(true) {
            return None;
        }
        Some(SubmitTicket {
            in_flight: self.in_flight.clone(),
        })
    }

    pub fn is_submitting(&self) -> bool {
        self.in_flight.get()
    }
}

impl PartialEq for SubmitGuard {
    fn eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.in_flight, &other.in_flight)
    }
}

impl Drop for SubmitTicket {
    fn drop(&mut self) {
        self.in_flight.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_submit_is_rejected_while_first_is_pending() {
        let guard = SubmitGuard::new();
        let first = guard.try_begin();
        assert!(first.is_some());
        assert!(guard.is_submitting());
        assert!(guard.try_begin().is_none());

        drop(first);
        assert!(!guard.is_submitting());
        assert!(guard.try_begin().is_some());
    }

    #[test]
    fn clones_share_the_same_flag() {
        let guard = SubmitGuard::new();
        let clone = guard.clone();
        let _ticket = guard.try_begin().unwrap();
        assert!(clone.is_submitting());
        assert_eq!(guard, clone);
        assert_ne!(guard, SubmitGuard::new());
    }
}
