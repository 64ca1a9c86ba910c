// Bookkeeping for the simulation session across page hide/show. Kept free of
// web-sys so it can be exercised on the host.

/// Holds the live session, if any, between `pagehide` and `pageshow`.
pub struct SessionSlot<S> {
    session: Option<S>,
}

impl<S> SessionSlot<S> {
    pub fn new(session: S) -> Self {
        Self {
            session: Some(session),
        }
    }

    pub fn is_live(&self) -> bool {
        self.session.is_some()
    }

    /// End the live session. Returns `false` if it was already ended.
    pub fn hide(&mut self, teardown: impl FnOnce(S)) -> bool {
        match self.session.take() {
            Some(s) => {
                teardown(s);
                true
            }
            None => false,
        }
    }

    /// A page restored from the back/forward cache (`persisted`) gets a fresh
    /// session; a normal first show already has one.
    pub fn show(&mut self, persisted: bool, start: impl FnOnce() -> S) -> bool {
        if !persisted || self.session.is_some() {
            return false;
        }
        self.session = Some(start());
        true
    }
}
